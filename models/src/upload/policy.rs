use crate::error::model_error::ModelError;
use crate::upload::UploadPayload;

use common::ErrorLocation;

use std::panic::Location;

pub const ALLOWED_EXTENSIONS: &[&str] = &["xls", "xlsx", "pdf", "docx", "doc", "txt"];
pub const MAX_FILE_SIZE_BYTES: usize = 2 * 1024 * 1024;

/// File types and size the document service is meant to accept.
///
/// Checking locally is optional and the service's own checks are looser, so
/// a payload refused here may still be accepted by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub allowed_extensions: Vec<String>,
    pub max_size_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_size_bytes: MAX_FILE_SIZE_BYTES,
        }
    }
}

impl UploadPolicy {
    #[track_caller]
    pub fn check(&self, payload: &UploadPayload) -> Result<(), ModelError> {
        let allowed = payload
            .extension()
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| *a == ext));

        if !allowed {
            return Err(ModelError::Validation {
                message: format!(
                    "File type not allowed: {} (allowed: {})",
                    payload.file_name,
                    self.allowed_extensions.join(", ")
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if payload.len() > self.max_size_bytes {
            return Err(ModelError::Validation {
                message: format!(
                    "File too large: {} bytes (maximum {} bytes)",
                    payload.len(),
                    self.max_size_bytes
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
