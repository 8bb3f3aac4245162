pub mod config;
pub mod document_client;
pub mod error;


pub use config::{AppConfig, ClientConfig};
pub use document_client::DocumentClient;

pub const DOCDESK_APP_DIR_NAME: &str = "docdesk";
pub const DOCDESK_BASE_URL_ENV_VAR: &str = "DOCDESK_BASE_URL";
