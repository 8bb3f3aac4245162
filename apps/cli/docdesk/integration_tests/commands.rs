use client_core::DocumentClient;

use docdesk::cli::Commands;
use docdesk::commands::execute;
use docdesk::error::DocdeskError;
use docdesk::router::RouteTable;

use common::HttpStatusCode;
use models::DocumentId;

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for command handlers + client-core against a mock service
// ============================================================================

fn client_for(server: &MockServer) -> DocumentClient {
    DocumentClient::from_base_url(&server.uri()).expect("Failed to build client")
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// **VALUE**: Tests the full upload path: file on disk, policy check, multipart request,
/// printed reply.
///
/// **BUG THIS CATCHES**: Would catch type mismatches between the CLI's payload reading
/// and the client's upload call, or the reply being altered before printing.
#[tokio::test]
async fn given_pdf_on_disk_when_running_upload_then_prints_service_reply() {
    // GIVEN: A file and a service accepting uploads
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "a.pdf", b"%PDF-1.4");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "a.pdf"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Running the upload command
    let command = Commands::Upload {
        path: file,
        no_check: false,
    };
    let output = execute(&command, &client_for(&server), &RouteTable::default(), false)
        .await
        .unwrap();

    // THEN: Printed reply is the service's JSON
    let printed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed, json!({"id": 1, "name": "a.pdf"}));
}

/// **VALUE**: Tests that the local policy stops a disallowed file before any request.
///
/// **BUG THIS CATCHES**: Would catch if the check runs after the upload, or not at all.
#[tokio::test]
async fn given_disallowed_file_when_running_upload_then_fails_without_request() {
    // GIVEN: An executable and a service that must not be called
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "tool.exe", b"MZ");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Running the upload command
    let command = Commands::Upload {
        path: file,
        no_check: false,
    };
    let result = execute(&command, &client_for(&server), &RouteTable::default(), false).await;

    // THEN: Model error, no request issued
    assert!(matches!(result, Err(DocdeskError::Model { .. })));
}

#[tokio::test]
async fn given_no_check_flag_when_running_upload_then_sends_disallowed_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "tool.exe", b"MZ");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Selected document not allowed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let command = Commands::Upload {
        path: file,
        no_check: true,
    };
    let result = execute(&command, &client_for(&server), &RouteTable::default(), false).await;

    match result {
        Err(DocdeskError::Client { status_code, .. }) => {
            assert_eq!(status_code, Some(HttpStatusCode(400)));
        }
        other => panic!("Expected Client error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_file_when_running_upload_then_returns_docdesk_error() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start().await;

    let command = Commands::Upload {
        path: dir.path().join("missing.pdf"),
        no_check: false,
    };
    let result = execute(&command, &client_for(&server), &RouteTable::default(), false).await;

    assert!(matches!(result, Err(DocdeskError::Docdesk { .. })));
}

/// **VALUE**: Tests the end-to-end 404 on delete through the command layer.
///
/// **BUG THIS CATCHES**: Would catch if the status code is lost on the way to the CLI.
#[tokio::test]
async fn given_unknown_id_when_running_delete_then_returns_client_error_with_404() {
    // GIVEN: A service that answers 404 for document 99
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Document not found"})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Deleting it
    let command = Commands::Delete {
        id: DocumentId::from(99),
    };
    let result = execute(&command, &client_for(&server), &RouteTable::default(), false).await;

    // THEN: Client error with the status
    match result {
        Err(DocdeskError::Client { status_code, .. }) => {
            assert_eq!(status_code, Some(HttpStatusCode(404)));
        }
        other => panic!("Expected Client error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_id_when_running_analyze_then_prints_detection_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/detect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"document_id": "abc", "detected_category": "invoice"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let command = Commands::Analyze {
        id: DocumentId::from("abc"),
    };
    let output = execute(&command, &client_for(&server), &RouteTable::default(), false)
        .await
        .unwrap();

    assert!(output.contains("\"detected_category\": \"invoice\""), "{output}");
}

/// **VALUE**: Tests that `open /` resolves through the route table and renders the list.
///
/// **BUG THIS CATCHES**: Would catch if the route table and the list view drift apart.
#[tokio::test]
async fn given_root_path_when_running_open_then_renders_document_list() {
    // GIVEN: An empty listing
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Opening the root view
    let command = Commands::Open {
        path: String::from("/"),
    };
    let output = execute(&command, &client_for(&server), &RouteTable::default(), false)
        .await
        .unwrap();

    // THEN: Empty list message
    assert_eq!(output, "No documents uploaded yet.");
}

#[tokio::test]
async fn given_unknown_path_when_running_open_then_returns_no_route_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let command = Commands::Open {
        path: String::from("/settings"),
    };
    let result = execute(&command, &client_for(&server), &RouteTable::default(), false).await;

    match result {
        Err(DocdeskError::NoRoute { path, .. }) => assert_eq!(path, "/settings"),
        other => panic!("Expected NoRoute error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_json_flag_when_running_open_then_prints_raw_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let command = Commands::Open {
        path: String::from("/"),
    };
    let output = execute(&command, &client_for(&server), &RouteTable::default(), true)
        .await
        .unwrap();

    assert_eq!(output, "[]");
}
