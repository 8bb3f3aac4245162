use client_core::error::{ConfigError, DocumentClientError};

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by docdesk commands.
///
/// Printed as text by default, or serialized with `--json`; both keep the
/// structured fields and location.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DocdeskError {
    /// Error from this App
    #[error("Docdesk Error: {message} {location}")]
    Docdesk {
        message: String,
        location: ErrorLocation,
    },

    /// Request to the document service failed
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    /// Base URL could not be resolved or config file is invalid
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Upload payload or service reply failed validation
    #[error("Model Error: {message} {location}")]
    Model {
        message: String,
        location: ErrorLocation,
    },

    /// No view registered for the requested path
    #[error("No Route Error: no view registered for '{path}' {location}")]
    NoRoute {
        path: String,
        location: ErrorLocation,
    },
}

impl DocdeskError {
    #[track_caller]
    pub fn docdesk(message: impl Into<String>) -> Self {
        DocdeskError::Docdesk {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DocumentClientError> for DocdeskError {
    #[track_caller]
    fn from(error: DocumentClientError) -> Self {
        DocdeskError::Client {
            status_code: error.status_code(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for DocdeskError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        DocdeskError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for DocdeskError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        DocdeskError::Model {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
