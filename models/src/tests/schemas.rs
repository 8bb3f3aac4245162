use crate::{DetectionResult, DocumentId, DocumentRecord, ModelError, ServiceMessage, decode};

use serde_json::json;

/// **VALUE**: Verifies that a listing entry as produced by the service decodes.
///
/// **WHY THIS MATTERS**: The CLI renders the document list from these records. A field
/// rename on either side would make the list view fail for every user.
///
/// **BUG THIS CATCHES**: Would catch if required fields drift from the service's shape.
#[test]
fn given_service_listing_when_decoded_then_records_are_populated() {
    // GIVEN: A listing as returned by GET /documents
    let value = json!([{
        "filename": "3f2a_report.pdf",
        "file_url": "https://bucket.s3.amazonaws.com/documents/3f2a_report.pdf",
        "metadata": {
            "original_name": "report.pdf",
            "filesize": "1024",
            "upload_time": "2024-01-01T00:00:00",
            "key": "3f2a_report.pdf",
            "category": "invoice"
        },
        "size": 1024,
        "last_modified": "2024-01-01T00:00:00+00:00"
    }]);

    // WHEN: Decoding
    let records: Vec<DocumentRecord> = decode(value).unwrap();

    // THEN: Fields are populated
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].size, 1024);
    assert_eq!(records[0].display_name(), "report.pdf");
    assert_eq!(records[0].metadata.category.as_deref(), Some("invoice"));
}

/// **VALUE**: Verifies that metadata lookup failures reported inline still decode.
///
/// **BUG THIS CATCHES**: Would catch if metadata fields become required, which would make
/// one broken object break the whole listing.
#[test]
fn given_metadata_error_when_decoded_then_falls_back_to_filename() {
    // GIVEN: A record whose metadata is an inline error
    let value = json!({
        "filename": "3f2a_report.pdf",
        "file_url": "https://bucket.s3.amazonaws.com/documents/3f2a_report.pdf",
        "metadata": { "error": "Access Denied" },
        "size": 10,
        "last_modified": "2024-01-01T00:00:00+00:00"
    });

    // WHEN: Decoding
    let record: DocumentRecord = decode(value).unwrap();

    // THEN: Display name falls back to the stored filename
    assert_eq!(record.metadata.error.as_deref(), Some("Access Denied"));
    assert_eq!(record.display_name(), "3f2a_report.pdf");
}

#[test]
fn given_detection_reply_when_decoded_then_category_is_read() {
    let value = json!({ "document_id": "abc", "detected_category": "contract" });

    let result: DetectionResult = decode(value).unwrap();

    assert_eq!(result.document_id, DocumentId::from("abc"));
    assert_eq!(result.detected_category, "contract");
}

/// **VALUE**: Verifies that a detection reply for a numeric id decodes.
///
/// **WHY THIS MATTERS**: The service echoes `document_id` exactly as it received it, and
/// numeric ids are sent as JSON numbers.
///
/// **BUG THIS CATCHES**: Would catch if `document_id` is typed as a string again, which
/// makes every reply for a numeric id fail to decode.
#[test]
fn given_numeric_document_id_when_detection_reply_decoded_then_id_keeps_number_type() {
    // GIVEN: The reply to analyzing document 7
    let value = json!({ "document_id": 7, "detected_category": "invoice" });

    // WHEN: Decoding
    let result: DetectionResult = decode(value).unwrap();

    // THEN: The id is numeric
    assert_eq!(result.document_id, DocumentId::Number(7));
    assert_eq!(result.detected_category, "invoice");
}

#[test]
fn given_error_body_when_decoded_as_message_then_error_is_set() {
    let value = json!({ "error": "Document not found" });

    let message: ServiceMessage = decode(value).unwrap();

    assert_eq!(message.message, None);
    assert_eq!(message.error.as_deref(), Some("Document not found"));
}

/// **VALUE**: Verifies that shape mismatches surface as decode errors.
///
/// **BUG THIS CATCHES**: Would catch if decoding panics or silently defaults.
#[test]
fn given_wrong_shape_when_decoded_then_returns_decode_error() {
    // GIVEN: An object where a list is expected
    let value = json!({ "id": 1, "name": "a.pdf" });

    // WHEN: Decoding as a listing
    let result: Result<Vec<DocumentRecord>, ModelError> = decode(value);

    // THEN: Decode error
    assert!(matches!(result, Err(ModelError::Decode { .. })));
}
