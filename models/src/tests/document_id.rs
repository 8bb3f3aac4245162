use crate::DocumentId;

use serde_json::json;

/// **VALUE**: Verifies that numeric ids keep their JSON type on the wire.
///
/// **WHY THIS MATTERS**: `POST /detect` must receive `{"document_id": id}` exactly as the
/// caller gave it. Quoting a numeric id would send a different document reference.
///
/// **BUG THIS CATCHES**: Would catch if the untagged representation is replaced by a
/// string-only newtype.
#[test]
fn given_numeric_id_when_serialized_then_stays_a_number() {
    // GIVEN: A numeric document id
    let id = DocumentId::from(99);

    // WHEN: Serializing inside a request body
    let body = json!({ "document_id": id });

    // THEN: The id is a JSON number
    assert_eq!(body, json!({ "document_id": 99 }));
}

#[test]
fn given_text_id_when_serialized_then_stays_a_string() {
    let id = DocumentId::from("0b6c_report.pdf");

    let body = json!({ "document_id": id });

    assert_eq!(body, json!({ "document_id": "0b6c_report.pdf" }));
}

/// **VALUE**: Verifies how command-line ids are interpreted.
///
/// **BUG THIS CATCHES**: Would catch if numeric-looking ids stop being sent as numbers, or
/// if names with digits get truncated into numbers.
#[test]
fn given_cli_text_when_parsed_then_unsigned_integers_become_numbers() {
    // GIVEN/WHEN: Parsing several inputs
    let numeric: DocumentId = "42".parse().unwrap();
    let mixed: DocumentId = "42_invoice.pdf".parse().unwrap();
    let negative: DocumentId = "-1".parse().unwrap();

    // THEN: Only the pure unsigned integer becomes a number
    assert_eq!(numeric, DocumentId::Number(42));
    assert_eq!(mixed, DocumentId::Text(String::from("42_invoice.pdf")));
    assert_eq!(negative, DocumentId::Text(String::from("-1")));
}

#[test]
fn given_any_id_when_displayed_then_renders_plain_text() {
    assert_eq!(DocumentId::from(7).to_string(), "7");
    assert_eq!(DocumentId::from("abc").to_string(), "abc");
}
