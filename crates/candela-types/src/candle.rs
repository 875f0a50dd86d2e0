//! Candle (OHLCV) data representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bar open time, in one of two mutually exclusive representations.
///
/// A series carries either raw epoch milliseconds (the transport encoding)
/// or converted UTC datetimes, selected once per aggregation run. The two
/// representations are never mixed within one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch, as delivered by the transport.
    Millis(i64),
    /// Converted UTC calendar datetime.
    Utc(DateTime<Utc>),
}

impl Timestamp {
    /// Returns the timestamp as epoch milliseconds.
    #[must_use]
    pub fn millis(&self) -> i64 {
        match self {
            Self::Millis(ms) => *ms,
            Self::Utc(dt) => dt.timestamp_millis(),
        }
    }

    /// Converts a raw millisecond timestamp into its UTC datetime form.
    ///
    /// Already-converted timestamps pass through unchanged, as do
    /// millisecond values outside the representable datetime range.
    #[must_use]
    pub fn into_datetime(self) -> Self {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(ms).map_or(self, Self::Utc),
            Self::Utc(_) => self,
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Millis(ms) => write!(f, "{ms}"),
            Self::Utc(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// A single OHLCV bar (candlestick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open time.
    pub start: Timestamp,
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume over the period.
    pub volume: f64,
    /// Traded turnover (quote volume) over the period.
    pub turnover: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        start: Timestamp,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        turnover: f64,
    ) -> Self {
        Self {
            start,
            open,
            high,
            low,
            close,
            volume,
            turnover,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// An ordered series of candles for a single instrument.
///
/// Built incrementally by appending each chunk's candles in request order;
/// owned exclusively by the caller once aggregation returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    /// Instrument symbol the candles belong to.
    pub symbol: String,
    /// Candles in non-decreasing timestamp order.
    pub candles: Vec<Candle>,
}

impl CandleSeries {
    /// Creates an empty series for the given symbol.
    #[must_use]
    pub const fn new(symbol: String) -> Self {
        Self {
            symbol,
            candles: Vec::new(),
        }
    }

    /// Creates a series from existing candles.
    #[must_use]
    pub const fn with_candles(symbol: String, candles: Vec<Candle>) -> Self {
        Self { symbol, candles }
    }

    /// Returns the number of candles in the series.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.candles.len()
    }

    /// Returns true if the series holds no candles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Converts every candle's leading timestamp from epoch milliseconds to
    /// a UTC datetime. All other fields pass through unchanged.
    #[must_use]
    pub fn into_datetime_timestamps(mut self) -> Self {
        for candle in &mut self.candles {
            candle.start = candle.start.into_datetime();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_candle(start_ms: i64) -> Candle {
        Candle::new(
            Timestamp::Millis(start_ms),
            16500.0,
            16750.5,
            16400.0,
            16700.0,
            1200.0,
            19_800_000.0,
        )
    }

    #[test]
    fn test_timestamp_millis_round_trip() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ms = dt.timestamp_millis();

        let converted = Timestamp::Millis(ms).into_datetime();
        assert_eq!(converted, Timestamp::Utc(dt));
        assert_eq!(converted.millis(), ms);
    }

    #[test]
    fn test_timestamp_conversion_is_idempotent() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        let converted = Timestamp::Utc(dt).into_datetime();
        assert_eq!(converted, Timestamp::Utc(dt));
    }

    #[test]
    fn test_timestamp_display() {
        let raw = Timestamp::Millis(1_577_836_800_000);
        assert_eq!(raw.to_string(), "1577836800000");
        assert_eq!(raw.into_datetime().to_string(), "2020-01-01 00:00:00");
    }

    #[test]
    fn test_timestamp_serializes_untagged() {
        let raw = serde_json::to_string(&Timestamp::Millis(1_577_836_800_000)).unwrap();
        assert_eq!(raw, "1577836800000");
    }

    #[test]
    fn test_candle_shape() {
        let candle = create_test_candle(1_577_836_800_000);
        assert!((candle.range() - 350.5).abs() < 1e-10);
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_series_datetime_conversion_touches_only_timestamps() {
        let series = CandleSeries::with_candles(
            "BTCUSD".to_string(),
            vec![
                create_test_candle(1_577_836_800_000),
                create_test_candle(1_577_923_200_000),
            ],
        );
        let converted = series.clone().into_datetime_timestamps();

        assert_eq!(converted.len(), 2);
        for (before, after) in series.candles.iter().zip(&converted.candles) {
            assert_eq!(after.start, before.start.into_datetime());
            assert_eq!(after.open, before.open);
            assert_eq!(after.close, before.close);
            assert_eq!(after.turnover, before.turnover);
        }
    }

    #[test]
    fn test_empty_series() {
        let series = CandleSeries::new("BTCUSD".to_string());
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
