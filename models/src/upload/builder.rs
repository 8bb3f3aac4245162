use crate::error::model_error::ModelError;
use crate::upload::UploadPayload;

use common::ErrorLocation;

use std::panic::Location;

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Builder for creating validated UploadPayload instances.
///
/// The MIME type is guessed from the file name when not given explicitly.
#[derive(Debug, Default)]
pub struct UploadPayloadBuilder {
    file_name: Option<String>,
    mime_type: Option<String>,
    bytes: Option<Vec<u8>>,
}

impl UploadPayloadBuilder {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bytes = Some(bytes.into());
        self
    }

    /// Build the UploadPayload with validation.
    #[track_caller]
    pub fn build(self) -> Result<UploadPayload, ModelError> {
        let file_name = self.file_name.ok_or_else(|| ModelError::Validation {
            message: String::from("File name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if file_name.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("File name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if file_name.contains(['/', '\\']) {
            return Err(ModelError::Validation {
                message: format!("File name must not contain a path: {file_name}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = self.bytes.ok_or_else(|| ModelError::Validation {
            message: String::from("File contents are required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mime_type = match self.mime_type {
            Some(mime_type) if mime_type.is_empty() => {
                return Err(ModelError::Validation {
                    message: String::from("MIME type cannot be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Some(mime_type) => mime_type,
            None => mime_guess::from_path(&file_name)
                .first_raw()
                .unwrap_or(FALLBACK_MIME_TYPE)
                .to_string(),
        };

        Ok(UploadPayload {
            file_name,
            mime_type,
            bytes,
        })
    }
}
