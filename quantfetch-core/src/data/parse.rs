//! CSV body → TimeSeries.
//!
//! The first line is a header and is skipped unread. Every other line must be
//! `date,open,high,low,close,volume,adj_close`; any bad line fails the whole
//! parse, so a partially parsed series is never returned.

use super::provider::DataError;
use crate::domain::{DailyBar, TimeSeries};
use chrono::NaiveDate;
use serde::Deserialize;

/// Fields per data line.
pub const EXPECTED_COLUMNS: usize = 7;

/// One data line, deserialized by position.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    adj_close: f64,
}

impl CsvRow {
    fn into_bar(self) -> Result<DailyBar, String> {
        Ok(DailyBar {
            date: self.date,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: volume_from_f64(self.volume)?,
            adj_close: self.adj_close,
        })
    }
}

/// Volume arrives as a float; it must still be a whole, non-negative count
/// that fits in a `u64`.
fn volume_from_f64(volume: f64) -> Result<u64, String> {
    if !volume.is_finite()
        || volume < 0.0
        || volume.fract() != 0.0
        || volume >= u64::MAX as f64
    {
        return Err(format!("invalid volume {volume}"));
    }
    Ok(volume as u64)
}

/// Parse a CSV history body into a date-ascending series for `symbol`.
///
/// Empty bodies and header-only bodies yield an empty series.
pub fn parse_history_csv(symbol: &str, body: &str) -> Result<TimeSeries, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut bars = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| DataError::ParseFailure {
            line: e.position().map_or(0, |p| p.line()),
            reason: e.to_string(),
        })?;
        // Whitespace-only lines trim down to a single empty field.
        if record.len() == 1 && record.get(0) == Some("") {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != EXPECTED_COLUMNS {
            return Err(DataError::ParseFailure {
                line,
                reason: format!(
                    "expected {EXPECTED_COLUMNS} fields, found {}",
                    record.len()
                ),
            });
        }

        let row: CsvRow = record
            .deserialize(None)
            .map_err(|e| DataError::ParseFailure {
                line,
                reason: e.to_string(),
            })?;
        let bar = row
            .into_bar()
            .map_err(|reason| DataError::ParseFailure { line, reason })?;
        bars.push(bar);
    }

    log::debug!("parsed {} rows for {symbol}", bars.len());
    Ok(TimeSeries::new(symbol, bars))
}
