//! Test helpers for document client integration tests.

use client_core::DocumentClient;

use models::{UploadPayload, UploadPayloadBuilder};

use wiremock::MockServer;

/// Address nothing listens on; connecting fails immediately.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

/// Test helper: Client pointed at a running mock server.
pub fn client_for(server: &MockServer) -> DocumentClient {
    DocumentClient::from_base_url(&server.uri()).expect("Failed to build client")
}

/// Test helper: Small PDF payload.
pub fn pdf_payload(file_name: &str) -> UploadPayload {
    UploadPayloadBuilder::default()
        .with_file_name(file_name)
        .with_bytes(b"%PDF-1.4 test".to_vec())
        .build()
        .expect("Failed to build payload")
}
