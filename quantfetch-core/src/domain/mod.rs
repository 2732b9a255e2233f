//! Domain types for historical daily data

pub mod bar;
pub mod range;
pub mod series;

pub use bar::DailyBar;
pub use range::{ymd, DateRange};
pub use series::TimeSeries;
