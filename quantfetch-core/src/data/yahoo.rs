//! Yahoo Finance CSV table endpoint and the blocking HTTP transport.
//!
//! The legacy table endpoint addresses a download by symbol plus year / month /
//! day for both ends of the range, with months counted from zero. Any endpoint
//! speaking the same query contract can be substituted through `base_url`.

use super::provider::{CsvTransport, DataError, HistoryRequest};
use crate::config::FetchConfig;
use chrono::Datelike;
use reqwest::Url;

/// Builds request URLs for the CSV table endpoint.
#[derive(Debug, Clone)]
pub struct YahooCsvEndpoint {
    base_url: Url,
}

impl YahooCsvEndpoint {
    pub fn new(base_url: &str) -> Result<Self, DataError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DataError::Config(format!("invalid base_url '{base_url}': {e}")))?;
        Ok(Self { base_url })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self, DataError> {
        Self::new(&config.base_url)
    }

    /// URL for a request: `s` symbol, `a/b/c` start month0/day/year, `d/e/f` end.
    pub fn request_url(&self, request: &HistoryRequest) -> Url {
        let start = request.range.start();
        let end = request.range.end();
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("s", &request.symbol)
            .append_pair("a", &request.range.start_month0().to_string())
            .append_pair("b", &start.day().to_string())
            .append_pair("c", &start.year().to_string())
            .append_pair("d", &request.range.end_month0().to_string())
            .append_pair("e", &end.day().to_string())
            .append_pair("f", &end.year().to_string());
        url
    }
}

/// Blocking reqwest transport. Holds one pooled client for its lifetime.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &FetchConfig) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DataError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl CsvTransport for HttpTransport {
    fn get(&self, symbol: &str, url: &Url) -> Result<String, DataError> {
        let network_failure = |e: reqwest::Error| DataError::NetworkFailure {
            symbol: symbol.to_string(),
            reason: e.to_string(),
        };

        let resp = self.client.get(url.clone()).send().map_err(network_failure)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(network_failure)
    }
}
