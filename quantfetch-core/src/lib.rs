//! QuantFetch Core: historical daily price retrieval.
//!
//! This crate contains:
//! - Domain types (daily bars, date ranges, date-ordered time series)
//! - Fetch configuration loaded from TOML
//! - Request construction for the CSV table endpoint
//! - A blocking HTTP transport behind a swappable trait
//! - CSV parsing into typed bars, with optional adjusted-close scaling

pub mod config;
pub mod data;
pub mod domain;

pub use config::FetchConfig;
pub use data::{DataError, HistoricalSeriesFetcher, HistoryRequest};
pub use domain::{DailyBar, DateRange, TimeSeries};
