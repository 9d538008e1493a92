//! Configuration file
//!
//! A JSON object; every key is optional:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 5000,
//!   "cors_origins": [],
//!   "data_file": "./subscriptions.json"
//! }
//! ```
//!
//! Without `data_file` the embedded dataset is served.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::store::StoreSource;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP settings (host, port, cors_origins), flattened into the top level
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// JSON file holding the records (optional, default: embedded dataset)
    #[serde(default)]
    pub data_file: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_optional(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if let Some(data_file) = &self.data_file {
            if data_file.trim().is_empty() {
                return Err(CliError::config_error("data_file must not be empty"));
            }
        }

        for origin in &self.http.cors_origins {
            if origin.parse::<axum::http::HeaderValue>().is_err() {
                return Err(CliError::config_error(format!(
                    "Invalid CORS origin: '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Where the record store is loaded from
    pub fn store_source(&self) -> StoreSource {
        StoreSource::from_optional_path(self.data_file.as_deref().map(Path::new))
    }
}
