use crate::upload::policy::MAX_FILE_SIZE_BYTES;
use crate::{ModelError, UploadPayload, UploadPayloadBuilder, UploadPolicy};

fn payload(file_name: &str, size: usize) -> UploadPayload {
    UploadPayloadBuilder::default()
        .with_file_name(file_name)
        .with_bytes(vec![0u8; size])
        .build()
        .unwrap()
}

/// **VALUE**: Verifies that every extension the service accepts passes the local check.
///
/// **BUG THIS CATCHES**: Would catch if the allow-list drifts from the service's list and
/// the CLI starts refusing files the service would accept.
#[test]
fn given_allowed_extensions_when_checked_then_accepted() {
    // GIVEN: Default policy
    let policy = UploadPolicy::default();

    // WHEN/THEN: Every allowed extension passes, in any case
    for name in ["a.xls", "a.xlsx", "a.pdf", "a.docx", "a.doc", "a.txt", "A.PDF"] {
        assert!(policy.check(&payload(name, 10)).is_ok(), "{name} should pass");
    }
}

#[test]
fn given_disallowed_extension_when_checked_then_rejected() {
    let policy = UploadPolicy::default();

    for name in ["a.exe", "pdf", "a.", "archive.pdf.zip"] {
        let result = policy.check(&payload(name, 10));
        assert!(
            matches!(result, Err(ModelError::Validation { .. })),
            "{name} should be rejected"
        );
    }
}

/// **VALUE**: Verifies the size limit boundary.
///
/// **WHY THIS MATTERS**: The service rejects anything strictly larger than 2 MiB. An
/// off-by-one here either blocks valid files or lets oversize ones through to a 400.
#[test]
fn given_size_at_and_over_limit_when_checked_then_only_limit_passes() {
    // GIVEN: Default policy
    let policy = UploadPolicy::default();

    // WHEN: Checking exactly the limit and one byte more
    let at_limit = policy.check(&payload("a.pdf", MAX_FILE_SIZE_BYTES));
    let over_limit = policy.check(&payload("a.pdf", MAX_FILE_SIZE_BYTES + 1));

    // THEN: Limit passes, limit + 1 is rejected
    assert!(at_limit.is_ok());
    match over_limit.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.contains("File too large"), "{message}");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
