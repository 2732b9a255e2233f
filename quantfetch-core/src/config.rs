//! Fetch configuration: endpoint, timeout, client identity, adjustment default.
//!
//! Loadable from TOML; every field is optional and falls back to its default.

use crate::data::DataError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Legacy Yahoo Finance CSV table endpoint.
pub const DEFAULT_BASE_URL: &str = "http://ichart.finance.yahoo.com/table.csv";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("quantfetch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// CSV endpoint queried with the `s, a..f` symbol/date parameters.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Whether requests built from this config scale OHLC onto adjusted close.
    pub adjusted: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            adjusted: true,
        }
    }
}

impl FetchConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DataError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DataError> {
        toml::from_str(content).map_err(|e| DataError::Config(format!("parse fetch TOML: {e}")))
    }

    pub fn to_toml(&self) -> Result<String, DataError> {
        toml::to_string_pretty(self).map_err(|e| DataError::Config(format!("serialize: {e}")))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
