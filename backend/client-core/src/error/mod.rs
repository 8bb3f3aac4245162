pub mod config;
pub mod document_client;

pub use config::ConfigError;
pub use document_client::DocumentClientError;
