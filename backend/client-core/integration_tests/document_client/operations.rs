use super::helpers::{client_for, pdf_payload};

use models::DocumentId;

use serde_json::json;
use wiremock::matchers::{body_json, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for DocumentClient against a mock document service
// ============================================================================

/// **VALUE**: Verifies the upload contract end to end.
///
/// **WHY THIS MATTERS**: The service only reads the `file` field of a multipart body.
/// Any other encoding is rejected with "No file part in the request".
///
/// **BUG THIS CATCHES**: Would catch if the request stops being multipart, the field is
/// renamed, the file name is dropped, or the reply is altered before it is returned.
#[tokio::test]
async fn given_mock_upload_endpoint_when_uploading_then_returns_reply_unmodified() {
    // GIVEN: A service answering the upload
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "a.pdf"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Uploading a file
    let reply = client.upload_document(pdf_payload("a.pdf")).await.unwrap();

    // THEN: Exact reply, and one multipart request carrying the file
    assert_eq!(reply, json!({"id": 1, "name": "a.pdf"}));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "Should issue exactly one request");
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(body.contains("name=\"file\""), "Should use the 'file' field");
    assert!(body.contains("filename=\"a.pdf\""), "Should carry the file name");
    assert!(
        body.to_ascii_lowercase().contains("content-type: application/pdf"),
        "Should carry the MIME type"
    );
    assert!(body.contains("%PDF-1.4 test"), "Should carry the file bytes");
}

/// **VALUE**: Verifies that an empty listing comes back as an empty list.
///
/// **BUG THIS CATCHES**: Would catch if an empty reply is turned into `null` or a default.
#[tokio::test]
async fn given_empty_listing_when_getting_documents_then_returns_empty_list() {
    // GIVEN: No documents stored
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Listing
    let reply = client_for(&server).get_documents().await.unwrap();

    // THEN: Empty list, request had no body
    assert_eq!(reply, json!([]));
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty(), "GET should have no body");
}

#[tokio::test]
async fn given_stored_documents_when_getting_documents_then_returns_records_unmodified() {
    let listing = json!([
        {
            "filename": "3f2a_report.pdf",
            "file_url": "https://bucket.s3.amazonaws.com/documents/3f2a_report.pdf",
            "metadata": { "original_name": "report.pdf", "category": "none" },
            "size": 13,
            "last_modified": "2024-01-01T00:00:00+00:00"
        }
    ]);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing.clone()))
        .mount(&server)
        .await;

    let reply = client_for(&server).get_documents().await.unwrap();

    assert_eq!(reply, listing);
}

/// **VALUE**: Verifies the detect request body for both id shapes.
///
/// **WHY THIS MATTERS**: The service looks the document up by `document_id` exactly as
/// sent. A renamed key or a re-typed id is answered with "Missing document_id" or 404.
///
/// **BUG THIS CATCHES**: Would catch if the body key changes or ids get stringified.
#[tokio::test]
async fn given_ids_when_analyzing_then_sends_document_id_body_and_returns_reply() {
    // GIVEN: A service expecting each body exactly once
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/detect"))
        .and(body_json(json!({"document_id": "3f2a_report.pdf"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"document_id": "3f2a_report.pdf", "detected_category": "invoice"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/detect"))
        .and(body_json(json!({"document_id": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"category": "other"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Analyzing a text id and a numeric id
    let text_reply = client
        .analyze_document(&DocumentId::from("3f2a_report.pdf"))
        .await
        .unwrap();
    let number_reply = client.analyze_document(&DocumentId::from(7)).await.unwrap();

    // THEN: Replies returned unmodified
    assert_eq!(
        text_reply,
        json!({"document_id": "3f2a_report.pdf", "detected_category": "invoice"})
    );
    assert_eq!(number_reply, json!({"category": "other"}));
}

/// **VALUE**: Verifies the delete contract: DELETE, id in the path, no body.
///
/// **BUG THIS CATCHES**: Would catch if the id is sent in a body or query string, or the
/// verb changes.
#[tokio::test]
async fn given_id_when_deleting_then_issues_delete_with_id_in_path_and_no_body() {
    // GIVEN: A service accepting the delete
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Document deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Deleting
    let reply = client_for(&server)
        .delete_document(&DocumentId::from(42))
        .await
        .unwrap();

    // THEN: Reply returned, request had no body
    assert_eq!(reply, json!({"message": "Document deleted"}));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "DELETE");
    assert!(requests[0].body.is_empty(), "DELETE should have no body");
}

/// **VALUE**: Verifies that a base URL path prefix is honoured on the wire.
///
/// **BUG THIS CATCHES**: Would catch if requests go to `/documents` instead of
/// `/api/documents` when the service is mounted under a prefix.
#[tokio::test]
async fn given_base_url_with_prefix_when_listing_then_requests_prefixed_path() {
    // GIVEN: A service mounted under /api
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client =
        client_core::DocumentClient::from_base_url(&format!("{}/api", server.uri())).unwrap();

    // WHEN: Listing
    let reply = client.get_documents().await.unwrap();

    // THEN: Prefixed path used
    assert_eq!(reply, json!([]));
}

#[tokio::test]
async fn given_empty_success_body_when_deleting_then_returns_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .delete_document(&DocumentId::from("abc"))
        .await
        .unwrap();

    assert!(reply.is_null());
}
