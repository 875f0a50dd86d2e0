//! Validated aggregation request parameters.

use candela_types::{DateRange, Interval, ValidationError};
use chrono::NaiveDate;

/// Default chunk size for splitting a date range, in calendar months.
///
/// Sized so one chunk of daily candles stays well inside the kline
/// endpoint's per-request row limit.
pub const DEFAULT_CHUNK_MONTHS: u32 = 3;

/// Parameters for one history aggregation run.
///
/// Construction validates the symbol and date strings up front; a request
/// that constructs successfully will never fail validation later, only
/// fetching can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    symbol: String,
    range: DateRange,
    interval: Interval,
    chunk_months: u32,
    datetime_timestamps: bool,
}

impl HistoryRequest {
    /// Creates a request from a symbol, `YYYY-MM-DD` date strings, and a
    /// sampling interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty, either date string does not
    /// parse, or the start date is after the end date.
    pub fn new(
        symbol: &str,
        start: &str,
        end: &str,
        interval: Interval,
    ) -> Result<Self, ValidationError> {
        if symbol.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        let range = DateRange::new(parse_date(start)?, parse_date(end)?)?;
        Ok(Self {
            symbol: symbol.to_string(),
            range,
            interval,
            chunk_months: DEFAULT_CHUNK_MONTHS,
            datetime_timestamps: false,
        })
    }

    /// Overrides the chunk size in calendar months.
    ///
    /// # Errors
    ///
    /// Returns an error if `months` is zero.
    pub fn with_chunk_months(mut self, months: u32) -> Result<Self, ValidationError> {
        if months == 0 {
            return Err(ValidationError::ZeroChunkMonths);
        }
        self.chunk_months = months;
        Ok(self)
    }

    /// Requests UTC datetime timestamps on the aggregated series instead of
    /// raw epoch milliseconds.
    #[must_use]
    pub const fn with_datetime_timestamps(mut self, convert: bool) -> Self {
        self.datetime_timestamps = convert;
        self
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the requested date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the sampling interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the chunk size in calendar months.
    #[must_use]
    pub const fn chunk_months(&self) -> u32 {
        self.chunk_months
    }

    /// Returns true if the series timestamps are converted to datetimes.
    #[must_use]
    pub const fn datetime_timestamps(&self) -> bool {
        self.datetime_timestamps
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::Date(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_construction() {
        let request =
            HistoryRequest::new("BTCUSD", "2020-01-01", "2024-01-01", Interval::Day).unwrap();

        assert_eq!(request.symbol(), "BTCUSD");
        assert_eq!(request.interval(), Interval::Day);
        assert_eq!(request.chunk_months(), DEFAULT_CHUNK_MONTHS);
        assert!(!request.datetime_timestamps());
        assert_eq!(request.range().total_days(), 1462);
    }

    #[test]
    fn test_malformed_date_rejected_at_construction() {
        let result = HistoryRequest::new("BTCUSD", "01-01-2020", "2024-01-01", Interval::Day);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::Date("01-01-2020".to_string())
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = HistoryRequest::new("BTCUSD", "2024-01-01", "2020-01-01", Interval::Day);
        assert!(matches!(result, Err(ValidationError::Range { .. })));
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let result = HistoryRequest::new("", "2020-01-01", "2024-01-01", Interval::Day);
        assert_eq!(result.unwrap_err(), ValidationError::EmptySymbol);
    }

    #[test]
    fn test_zero_chunk_months_rejected() {
        let request =
            HistoryRequest::new("BTCUSD", "2020-01-01", "2024-01-01", Interval::Day).unwrap();
        assert_eq!(
            request.with_chunk_months(0).unwrap_err(),
            ValidationError::ZeroChunkMonths
        );
    }

    #[test]
    fn test_chunk_months_override() {
        let request = HistoryRequest::new("BTCUSD", "2020-01-01", "2024-01-01", Interval::Day)
            .unwrap()
            .with_chunk_months(6)
            .unwrap();
        assert_eq!(request.chunk_months(), 6);
    }
}
