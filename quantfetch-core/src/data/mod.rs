//! Data retrieval: request building, transport, CSV parsing, adjustment

pub mod adjust;
pub mod fetcher;
pub mod parse;
pub mod provider;
pub mod yahoo;

pub use adjust::{adjust_bar, adjust_series};
pub use fetcher::HistoricalSeriesFetcher;
pub use parse::parse_history_csv;
pub use provider::{CsvTransport, DataError, HistoryRequest, DEFAULT_START};
pub use yahoo::{HttpTransport, YahooCsvEndpoint};
pub use reqwest::Url;
