//! Client for the document service's REST API.
//!
//! Four calls, one request each: upload, list, detect and delete. Replies are
//! returned as raw JSON; failures propagate to the caller untouched. There is
//! no retry, no timeout and no caching.

use crate::config::ClientConfig;
use crate::error::document_client::DocumentClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::{DocumentId, UploadPayload};

use std::panic::Location;

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use url::Url;

const UPLOAD_ENDPOINT: &str = "upload";
const DOCUMENTS_ENDPOINT: &str = "documents";
const DETECT_ENDPOINT: &str = "detect";
const DELETE_ENDPOINT: &str = "delete";
const UPLOAD_FIELD_NAME: &str = "file";

#[derive(Serialize)]
struct DetectRequest<'a> {
    document_id: &'a DocumentId,
}

#[derive(Debug, Clone)]
pub struct DocumentClient {
    base_url: Url,
    client: Client,
}

impl DocumentClient {
    pub fn new(config: &ClientConfig) -> Result<Self, DocumentClientError> {
        Self::from_base_url(&config.base_url)
    }

    pub fn from_base_url(base_url_str: &str) -> Result<Self, DocumentClientError> {
        let base_url = Url::parse(base_url_str)?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(DocumentClientError::InvalidBaseUrl {
                message: format!("{base_url_str} is not an http(s) base URL"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let client = Client::builder().build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, keeping any path prefix it has.
    ///
    /// Each segment is percent-encoded on its own, so an id containing `/`
    /// or spaces stays a single segment. `.` and `..` are refused: the URL
    /// parser drops them even when percent-encoded.
    #[track_caller]
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, DocumentClientError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(DocumentClientError::InvalidPathSegment {
                segment: segment.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DocumentClientError::InvalidBaseUrl {
                message: format!("{} cannot be a base", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one multipart POST to `/upload` with the payload in the `file` field.
    pub async fn upload_document(
        &self,
        payload: UploadPayload,
    ) -> Result<Value, DocumentClientError> {
        let url = self.endpoint(&[UPLOAD_ENDPOINT])?;

        debug!(
            "POST {url} ({}, {} bytes, {})",
            payload.file_name,
            payload.len(),
            payload.mime_type
        );

        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name)
            .mime_str(&payload.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.client.post(url).multipart(form).send().await?;

        read_json(response).await
    }

    /// GET `/documents`. The service answers with a list of document records.
    pub async fn get_documents(&self) -> Result<Value, DocumentClientError> {
        let url = self.endpoint(&[DOCUMENTS_ENDPOINT])?;

        debug!("GET {url}");

        let response = self.client.get(url).send().await?;

        read_json(response).await
    }

    /// POST `{"document_id": id}` to `/detect`.
    pub async fn analyze_document(
        &self,
        document_id: &DocumentId,
    ) -> Result<Value, DocumentClientError> {
        let url = self.endpoint(&[DETECT_ENDPOINT])?;

        debug!("POST {url} (document_id={document_id})");

        let response = self
            .client
            .post(url)
            .json(&DetectRequest { document_id })
            .send()
            .await?;

        read_json(response).await
    }

    /// DELETE `/delete/{id}` with no body.
    pub async fn delete_document(
        &self,
        document_id: &DocumentId,
    ) -> Result<Value, DocumentClientError> {
        let id = document_id.to_string();
        let url = self.endpoint(&[DELETE_ENDPOINT, &id])?;

        debug!("DELETE {url}");

        let response = self.client.delete(url).send().await?;

        read_json(response).await
    }
}

/// Turn a reply into JSON, or into [`DocumentClientError::Server`] when the
/// status is not a success. An empty success body decodes to `null`.
async fn read_json(response: Response) -> Result<Value, DocumentClientError> {
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{url} answered HTTP {}: {body}", status.as_u16());
        return Err(DocumentClientError::Server {
            status_code: HttpStatusCode(status.as_u16()),
            message: body,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    let json: Value = serde_json::from_slice(&bytes)?;
    Ok(json)
}
