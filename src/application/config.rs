/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_FILES_BUCKET, DEFAULT_UPLOAD_CHUNK_SIZE};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the marketplace API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session token persistence
    pub session: SessionConfig,
    /// File endpoint defaults
    pub files: FilesConfig,
    /// Upload channel tuning
    pub upload: UploadConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every relative request path is resolved against
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Configuration for session token persistence
pub struct SessionConfig {
    /// JSON file holding the token. `None` keeps the token in memory.
    pub store_path: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Defaults for the file endpoints
pub struct FilesConfig {
    /// Bucket used when a call does not name one
    pub default_bucket: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for multipart uploads
pub struct UploadConfig {
    /// Bytes streamed between two progress reports
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment (and `.env`, if present)
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `MARKETPLACE_BACKEND_URL` | `http://localhost:8001` |
    /// | `MARKETPLACE_SESSION_FILE` | unset (in-memory token) |
    /// | `MARKETPLACE_FILES_BUCKET` | `marketplace-files` |
    /// | `MARKETPLACE_UPLOAD_CHUNK_SIZE` | `65536` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url: Option<String> = get_env_or_none("MARKETPLACE_BACKEND_URL");
        if base_url.is_none() {
            warn!(
                "MARKETPLACE_BACKEND_URL not found in environment variables or .env file, using {}",
                DEFAULT_BACKEND_URL
            );
        }

        let mut chunk_size = get_env_or_default("MARKETPLACE_UPLOAD_CHUNK_SIZE", DEFAULT_UPLOAD_CHUNK_SIZE);
        if chunk_size == 0 {
            warn!("MARKETPLACE_UPLOAD_CHUNK_SIZE must be positive, using default");
            chunk_size = DEFAULT_UPLOAD_CHUNK_SIZE;
        }

        Config {
            rest_api: RestApiConfig {
                base_url: base_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            },
            session: SessionConfig {
                store_path: get_env_or_none("MARKETPLACE_SESSION_FILE"),
            },
            files: FilesConfig {
                default_bucket: get_env_or_default(
                    "MARKETPLACE_FILES_BUCKET",
                    String::from(DEFAULT_FILES_BUCKET),
                ),
            },
            upload: UploadConfig { chunk_size },
        }
    }

    /// Builds a configuration pointing at `base_url` with every other setting at its default
    ///
    /// Nothing is read from the environment, which makes this the constructor
    /// of choice for tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
            files: FilesConfig {
                default_bucket: DEFAULT_FILES_BUCKET.to_string(),
            },
            upload: UploadConfig {
                chunk_size: DEFAULT_UPLOAD_CHUNK_SIZE,
            },
        }
    }

    /// Resolves a request path against the base URL
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
