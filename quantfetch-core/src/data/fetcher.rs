//! HistoricalSeriesFetcher: request → CSV body → parsed, sorted, adjusted series.

use super::adjust::adjust_series;
use super::parse::parse_history_csv;
use super::provider::{CsvTransport, DataError, HistoryRequest};
use super::yahoo::{HttpTransport, YahooCsvEndpoint};
use crate::config::FetchConfig;
use crate::domain::{ymd, DateRange, TimeSeries};

/// Downloads daily history for one symbol per call.
///
/// Stateless between calls; the transport may pool connections.
pub struct HistoricalSeriesFetcher {
    endpoint: YahooCsvEndpoint,
    transport: Box<dyn CsvTransport>,
}

impl HistoricalSeriesFetcher {
    /// Fetcher talking HTTP to the configured endpoint.
    pub fn new(config: &FetchConfig) -> Result<Self, DataError> {
        Ok(Self::with_transport(
            YahooCsvEndpoint::from_config(config)?,
            HttpTransport::new(config)?,
        ))
    }

    pub fn with_transport(
        endpoint: YahooCsvEndpoint,
        transport: impl CsvTransport + 'static,
    ) -> Self {
        Self {
            endpoint,
            transport: Box::new(transport),
        }
    }

    /// Fetch the series for a request.
    ///
    /// Any retrieval failure aborts the call before parsing. With
    /// `request.adjusted` set, OHLC columns are scaled onto adjusted close.
    pub fn fetch(&self, request: &HistoryRequest) -> Result<TimeSeries, DataError> {
        let url = self.endpoint.request_url(request);
        log::debug!("fetching {} from {url}", request.symbol);

        let body = self
            .transport
            .get(&request.symbol, &url)
            .map_err(|e| {
                log::warn!("{e}");
                e
            })?;

        let series = parse_history_csv(&request.symbol, &body)?;
        if request.adjusted {
            adjust_series(series)
        } else {
            Ok(series)
        }
    }

    /// Fetch using `(year, month, day)` triples; `end` of `None` means today.
    pub fn fetch_ymd(
        &self,
        symbol: &str,
        start: (i32, u32, u32),
        end: Option<(i32, u32, u32)>,
        adjusted: bool,
    ) -> Result<TimeSeries, DataError> {
        let start = ymd(start)?;
        let range = match end {
            Some(end) => DateRange::new(start, ymd(end)?)?,
            None => DateRange::through_today(start)?,
        };
        let request = HistoryRequest::new(symbol, range)?.adjusted(adjusted);
        self.fetch(&request)
    }
}
