use super::helpers::{UNREACHABLE_BASE_URL, client_for, pdf_payload};

use client_core::DocumentClient;
use client_core::error::DocumentClientError;

use common::HttpStatusCode;
use models::DocumentId;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Failure propagation: every operation must surface errors, never defaults
// ============================================================================

/// Run all four operations against one client.
async fn run_all(client: &DocumentClient) -> Vec<Result<Value, DocumentClientError>> {
    vec![
        client.upload_document(pdf_payload("a.pdf")).await,
        client.get_documents().await,
        client.analyze_document(&DocumentId::from(1)).await,
        client.delete_document(&DocumentId::from(1)).await,
    ]
}

/// **VALUE**: Verifies the end-to-end 404 case for delete.
///
/// **WHY THIS MATTERS**: Callers re-list after a delete. If a 404 resolved successfully,
/// the UI would report a deletion that never happened.
///
/// **BUG THIS CATCHES**: Would catch if non-success statuses are decoded as data.
#[tokio::test]
async fn given_404_from_delete_when_deleting_then_returns_server_error() {
    // GIVEN: A service that does not know document 99
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Document not found"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Deleting it
    let result = client_for(&server)
        .delete_document(&DocumentId::from(99))
        .await;

    // THEN: Server error carrying status and body
    match result {
        Err(DocumentClientError::Server {
            status_code,
            message,
            ..
        }) => {
            assert_eq!(status_code, HttpStatusCode(404));
            assert!(message.contains("Document not found"), "{message}");
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that a 500 from the service fails every operation.
///
/// **BUG THIS CATCHES**: Would catch if any single operation skips the status check.
#[tokio::test]
async fn given_500_from_every_endpoint_when_calling_each_operation_then_all_fail() {
    // GIVEN: A service that fails everything
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Internal server error"})))
        .expect(4)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Calling each operation
    let results = run_all(&client).await;

    // THEN: Every one reports status 500
    for result in results {
        let err = result.expect_err("Operation should fail on HTTP 500");
        assert_eq!(err.status_code(), Some(HttpStatusCode(500)), "{err}");
    }
}

/// **VALUE**: Verifies that transport failures propagate from every operation.
///
/// **WHY THIS MATTERS**: A down service must be visible to the caller. Swallowing the
/// connection error and returning an empty list would look like "no documents".
///
/// **BUG THIS CATCHES**: Would catch if connection errors are mapped to defaults.
#[tokio::test]
async fn given_unreachable_service_when_calling_each_operation_then_all_return_http_error() {
    // GIVEN: A client pointed at a closed port
    let client = DocumentClient::from_base_url(UNREACHABLE_BASE_URL).unwrap();

    // WHEN: Calling each operation
    let results = run_all(&client).await;

    // THEN: Every one is a transport error with the reqwest source intact
    for result in results {
        match result {
            Err(DocumentClientError::Http { source, .. }) => {
                assert!(source.is_connect() || source.is_request(), "{source}");
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn given_non_json_success_body_when_listing_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_documents().await;

    assert!(matches!(result, Err(DocumentClientError::Json { .. })));
}
