//! Domain models for docdesk.
//!
//! Pure data exchanged with the document service: identifiers, upload
//! payloads and the typed views of the service's JSON replies. Models carry
//! validation but no I/O.

pub mod document;
pub mod error;
pub mod upload;

#[cfg(test)]
mod tests;

pub use document::schemas::{
    DetectionResult, DocumentMetadata, DocumentRecord, ServiceMessage, decode,
};
pub use document::DocumentId;
pub use error::model_error::ModelError;
pub use upload::builder::UploadPayloadBuilder;
pub use upload::policy::UploadPolicy;
pub use upload::UploadPayload;
