use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DocumentClientError {
    /// Transport failure from the underlying HTTP client, kept as the source.
    #[error("HTTP Error: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Base URL Error: {message} {location}")]
    InvalidBaseUrl {
        message: String,
        location: ErrorLocation,
    },

    /// A path segment the URL parser would resolve away (`.` or `..`).
    #[error("Invalid Path Segment Error: {segment:?} {location}")]
    InvalidPathSegment {
        segment: String,
        location: ErrorLocation,
    },

    /// The service answered with a non-success status.
    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Server {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl DocumentClientError {
    /// Status code of a non-success reply, if the service answered at all.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            DocumentClientError::Server { status_code, .. } => Some(*status_code),
            DocumentClientError::Http { source, .. } => {
                source.status().map(|s| HttpStatusCode(s.as_u16()))
            }
            _ => None,
        }
    }
}

impl From<url::ParseError> for DocumentClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        DocumentClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for DocumentClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        DocumentClientError::Http {
            source: error,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DocumentClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        DocumentClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
