pub mod schemas;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque reference to a document held by the service.
///
/// Keeps the JSON type it was created with, so a numeric id is sent as
/// `{"document_id": 99}` and a textual one as `{"document_id": "99"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(u64),
    Text(String),
}

impl Display for DocumentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            DocumentId::Number(n) => write!(formatter, "{n}"),
            DocumentId::Text(s) => formatter.write_str(s),
        }
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        DocumentId::Number(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::Text(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Text(id.to_string())
    }
}

impl FromStr for DocumentId {
    type Err = std::convert::Infallible;

    /// Unsigned integers become [`DocumentId::Number`], anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => DocumentId::Number(n),
            Err(_) => DocumentId::Text(s.to_string()),
        })
    }
}
