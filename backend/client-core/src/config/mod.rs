use crate::error::config::ConfigError;
use crate::{DOCDESK_APP_DIR_NAME, DOCDESK_BASE_URL_ENV_VAR};

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Persisted settings in `{config_dir}/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
        }
    }
}

/// Settings the document client is built from.
///
/// Passed explicitly to [`crate::DocumentClient::new`]; nothing in the
/// client reads configuration on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// `{platform config dir}/docdesk`, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(DOCDESK_APP_DIR_NAME))
}

#[track_caller]
fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: "base_url cannot be empty string".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid URL format: {}", url),
        });
    }

    Ok(())
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Read `config.json` from `config_dir`. A missing file yields defaults.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source,
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Config at {} is not valid JSON: {e}", path.display());
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        config.validate()?;

        debug!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Write `config.json` into `config_dir` through a temp file and rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        let path = config_dir.join(CONFIG_FILE_NAME);
        let staged = path.with_extension("json.tmp");
        let write_error = |path: &Path, source: std::io::Error| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(|e| write_error(config_dir, e))?;
        std::fs::write(&staged, json).map_err(|e| write_error(staged.as_path(), e))?;
        std::fs::rename(&staged, &path).map_err(|e| write_error(path.as_path(), e))?;

        info!("Config saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if let Some(ref url) = self.server.base_url {
            validate_base_url(url)?;
        }

        Ok(())
    }
}

impl ClientConfig {
    #[track_caller]
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;
        Ok(Self { base_url })
    }

    /// Resolve the base URL from, in order: the explicit override, the
    /// `DOCDESK_BASE_URL` environment variable (after loading `.env`), and
    /// the config file in `config_dir`.
    pub fn resolve(
        base_url_override: Option<&str>,
        config_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if base_url_override.is_none() {
            try_load_dotenv();
        }

        let env_value = env::var(DOCDESK_BASE_URL_ENV_VAR).ok();
        Self::resolve_from(base_url_override, env_value.as_deref(), config_dir)
    }

    /// Same as [`ClientConfig::resolve`] with the environment value passed in.
    pub fn resolve_from(
        base_url_override: Option<&str>,
        env_value: Option<&str>,
        config_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = base_url_override {
            debug!("Using base URL from command line");
            return Self::new(url);
        }

        if let Some(url) = env_value.filter(|v| !v.trim().is_empty()) {
            debug!("Using base URL from {DOCDESK_BASE_URL_ENV_VAR}");
            return Self::new(url.trim());
        }

        if let Some(dir) = config_dir
            && let Some(url) = AppConfig::load(dir)?.server.base_url
        {
            debug!("Using base URL from config file in {}", dir.display());
            return Self::new(url);
        }

        Err(ConfigError::MissingBaseUrl {
            location: ErrorLocation::from(Location::caller()),
            env_var: DOCDESK_BASE_URL_ENV_VAR,
        })
    }
}

/// Load `.env` from the working directory. A missing file is not an error.
fn try_load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }
}
