//! # Process Configuration
//!
//! Environment-driven settings. `PROJECT` selects the target database
//! project identifier; leaving it unset means the backend's ambient
//! default applies.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Load `.env` file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// DOCAPI_PORT was set but is not a valid port number
    #[error("Invalid DOCAPI_PORT: {0}")]
    InvalidPort(String),
}

/// Process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target database project identifier (`PROJECT`), if any
    pub project_id: Option<String>,

    /// HTTP listener settings (`DOCAPI_HOST`, `DOCAPI_PORT`)
    pub http: HttpServerConfig,
}

impl AppConfig {
    /// Build config from environment variables (call [`load_dotenv`] first).
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut http = HttpServerConfig::default();
        if let Some(host) = env_opt("DOCAPI_HOST") {
            http.host = host;
        }
        if let Some(raw) = env_opt("DOCAPI_PORT") {
            http.port = raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        Ok(Self {
            project_id: env_opt("PROJECT"),
            http,
        })
    }
}
