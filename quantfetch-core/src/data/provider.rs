//! History request, transport trait, and structured error types.
//!
//! The CsvTransport trait abstracts over how raw CSV text is retrieved so the
//! HTTP client can be swapped for canned or failing transports in tests.

use crate::config::FetchConfig;
use crate::domain::{ymd, DateRange};
use chrono::NaiveDate;
use reqwest::Url;
use thiserror::Error;

/// First date requested when the caller does not name one.
pub const DEFAULT_START: (i32, u32, u32) = (2000, 1, 1);

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not download data for {symbol}: {reason}")]
    NetworkFailure { symbol: String, reason: String },

    #[error("HTTP {status} for {symbol}")]
    HttpStatus { symbol: String, status: u16 },

    #[error("parse failure on line {line}: {reason}")]
    ParseFailure { line: u64, reason: String },

    #[error("cannot adjust bar {date}: {reason}")]
    Adjustment { date: NaiveDate, reason: String },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("symbol must not be empty")]
    InvalidSymbol,

    #[error("config error: {0}")]
    Config(String),

    #[error("http client error: {0}")]
    Client(String),

    #[error("dataframe error: {0}")]
    Frame(String),
}

/// Parameters for one history download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: String,
    pub range: DateRange,
    pub adjusted: bool,
}

impl HistoryRequest {
    /// Request `symbol` over `range`, adjusted by default.
    pub fn new(symbol: impl Into<String>, range: DateRange) -> Result<Self, DataError> {
        let symbol = symbol.into().trim().to_string();
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol);
        }
        Ok(Self {
            symbol,
            range,
            adjusted: true,
        })
    }

    /// Request `symbol` from `start` through today. Today is resolved now,
    /// when the request is built.
    pub fn since(symbol: impl Into<String>, start: NaiveDate) -> Result<Self, DataError> {
        Self::new(symbol, DateRange::through_today(start)?)
    }

    /// Request the full default history (2000-01-01 through today).
    pub fn for_symbol(symbol: impl Into<String>) -> Result<Self, DataError> {
        Self::since(symbol, ymd(DEFAULT_START)?)
    }

    /// Take the adjustment default from a loaded config.
    pub fn with_config(mut self, config: &FetchConfig) -> Self {
        self.adjusted = config.adjusted;
        self
    }

    pub fn adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }
}

/// Retrieves the raw CSV body behind a URL.
///
/// `symbol` is carried only for error reporting.
pub trait CsvTransport: Send + Sync {
    fn get(&self, symbol: &str, url: &Url) -> Result<String, DataError>;
}
