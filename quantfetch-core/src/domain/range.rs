//! Inclusive calendar date range for a history request.

use crate::data::DataError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Inclusive `[start, end]` range of calendar dates. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DataError> {
        if start > end {
            return Err(DataError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from `(year, month, day)` triples with 1-based months.
    pub fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Result<Self, DataError> {
        Self::new(ymd(start)?, ymd(end)?)
    }

    /// Range from `start` through today, with today read from the local clock
    /// at the moment of the call.
    pub fn through_today(start: NaiveDate) -> Result<Self, DataError> {
        Self::new(start, chrono::Local::now().date_naive())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Zero-based month of the start date, as the legacy CSV endpoint expects.
    pub(crate) fn start_month0(&self) -> u32 {
        self.start.month0()
    }

    pub(crate) fn end_month0(&self) -> u32 {
        self.end.month0()
    }
}

/// Convert a `(year, month, day)` triple into a date.
pub fn ymd((year, month, day): (i32, u32, u32)) -> Result<NaiveDate, DataError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DataError::InvalidDate { year, month, day })
}
