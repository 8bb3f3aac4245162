use crate::{ModelError, UploadPayloadBuilder};

/// **VALUE**: Verifies that builder validation rejects a missing file name.
///
/// **WHY THIS MATTERS**: The service stores uploads under their multipart file name.
/// A nameless part is rejected by the service with an unhelpful 400.
///
/// **BUG THIS CATCHES**: Would catch if required field validation is removed.
#[test]
fn given_missing_file_name_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a file name
    let builder = UploadPayloadBuilder::default().with_bytes(b"hello".to_vec());

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "File name is required");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn given_blank_file_name_when_building_then_returns_validation_error() {
    let result = UploadPayloadBuilder::default()
        .with_file_name("   ")
        .with_bytes(Vec::new())
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "File name cannot be empty");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that the file name is a bare name, not a path.
///
/// **BUG THIS CATCHES**: Would catch if callers leak local directory structure into the
/// multipart file name.
#[test]
fn given_path_as_file_name_when_building_then_returns_validation_error() {
    // GIVEN: A file name containing a directory
    let result = UploadPayloadBuilder::default()
        .with_file_name("/home/user/report.pdf")
        .with_bytes(b"%PDF".to_vec())
        .build();

    // THEN: Rejected
    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

#[test]
fn given_missing_bytes_when_building_then_returns_validation_error() {
    let result = UploadPayloadBuilder::default()
        .with_file_name("report.pdf")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "File contents are required");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies MIME type inference from the file extension.
///
/// **WHY THIS MATTERS**: The multipart part carries this content type; the service's
/// document processors pick a parser from it.
///
/// **BUG THIS CATCHES**: Would catch if the guess is dropped and every upload is sent as
/// an opaque octet stream.
#[test]
fn given_known_extension_when_building_then_guesses_mime_type() {
    // GIVEN: A PDF without explicit MIME type
    let payload = UploadPayloadBuilder::default()
        .with_file_name("a.pdf")
        .with_bytes(b"%PDF".to_vec())
        .build()
        .unwrap();

    // THEN: MIME type guessed
    assert_eq!(payload.mime_type, "application/pdf");
    assert_eq!(payload.extension().as_deref(), Some("pdf"));
    assert_eq!(payload.len(), 4);
}

#[test]
fn given_unknown_extension_when_building_then_falls_back_to_octet_stream() {
    let payload = UploadPayloadBuilder::default()
        .with_file_name("blob")
        .with_bytes(vec![1, 2, 3])
        .build()
        .unwrap();

    assert_eq!(payload.mime_type, "application/octet-stream");
    assert_eq!(payload.extension(), None);
}

#[test]
fn given_explicit_mime_type_when_building_then_it_wins() {
    let payload = UploadPayloadBuilder::default()
        .with_file_name("notes.txt")
        .with_mime_type("text/markdown")
        .with_bytes(b"# notes".to_vec())
        .build()
        .unwrap();

    assert_eq!(payload.mime_type, "text/markdown");
}
