//! Shared building blocks for docdesk.
//!
//! Every error type in the workspace records where it was raised through
//! [`ErrorLocation`], and HTTP failures carry an [`HttpStatusCode`].
//!
//! ## Architecture
//!
//! - **common** (this crate): Location tracking and status helpers
//! - **models**: Pure data structures exchanged with the document service
//! - **client-core**: The document service client and its configuration
//! - **docdesk**: Application wiring everything together

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
