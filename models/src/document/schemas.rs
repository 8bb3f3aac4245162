//! Typed views of the document service's replies.
//!
//! The client hands back raw `serde_json::Value`s; callers that want
//! structure decode them with [`decode`].

use crate::document::DocumentId;
use crate::error::model_error::ModelError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `GET /documents` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub filename: String,
    pub file_url: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
    pub size: u64,
    pub last_modified: String,
}

impl DocumentRecord {
    /// Name shown to users: the uploaded name if the service kept it.
    pub fn display_name(&self) -> &str {
        self.metadata
            .original_name
            .as_deref()
            .unwrap_or(&self.filename)
    }
}

/// Object metadata stored next to each document.
///
/// The service reports a failed metadata lookup inline as `{"error": ...}`,
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub filesize: Option<String>,
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply of `POST /detect`. The service echoes the id back with the JSON
/// type it was sent with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub document_id: DocumentId,
    pub detected_category: String,
}

/// `{"message": ...}` / `{"error": ...}` replies (upload, delete, and error bodies).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decode a raw service reply into one of the typed views.
#[track_caller]
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ModelError> {
    Ok(serde_json::from_value(value)?)
}
