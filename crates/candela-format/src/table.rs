//! Fixed-column tabular view of a candle series.

use candela_types::{CandleSeries, ValidationError};

/// Column order of the exported table.
pub const COLUMNS: [&str; 8] = [
    "startTime",
    "openPrice",
    "highPrice",
    "lowPrice",
    "closePrice",
    "volume",
    "turnover",
    "symbol",
];

/// Tabular view of a candle series, one row per candle.
///
/// The symbol is repeated into the last column of every row, matching the
/// exported CSV shape. A zero-candle series converts to a zero-row table
/// that still carries the header and symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleTable {
    symbol: String,
    rows: Vec<[String; 8]>,
}

impl CandleTable {
    /// Converts a candle series into a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the series is structurally malformed (empty
    /// symbol).
    pub fn from_series(series: &CandleSeries) -> Result<Self, ValidationError> {
        if series.symbol.is_empty() {
            return Err(ValidationError::MalformedSeries(
                "series has no symbol".to_string(),
            ));
        }

        let rows = series
            .candles
            .iter()
            .map(|candle| {
                [
                    candle.start.to_string(),
                    candle.open.to_string(),
                    candle.high.to_string(),
                    candle.low.to_string(),
                    candle.close.to_string(),
                    candle.volume.to_string(),
                    candle.turnover.to_string(),
                    series.symbol.clone(),
                ]
            })
            .collect();

        Ok(Self {
            symbol: series.symbol.clone(),
            rows,
        })
    }

    /// Returns the column header, in export order.
    #[must_use]
    pub const fn header() -> &'static [&'static str; 8] {
        &COLUMNS
    }

    /// Returns the instrument symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the table rows.
    #[must_use]
    pub fn rows(&self) -> &[[String; 8]] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candela_types::{Candle, Timestamp};

    fn series_with_one_candle() -> CandleSeries {
        CandleSeries::with_candles(
            "BTCUSD".to_string(),
            vec![Candle::new(
                Timestamp::Millis(1_577_836_800_000),
                16500.0,
                16750.5,
                16400.0,
                16700.0,
                1200.0,
                19_800_000.0,
            )],
        )
    }

    #[test]
    fn test_header_order() {
        assert_eq!(
            CandleTable::header(),
            &[
                "startTime",
                "openPrice",
                "highPrice",
                "lowPrice",
                "closePrice",
                "volume",
                "turnover",
                "symbol"
            ]
        );
    }

    #[test]
    fn test_empty_series_gives_zero_row_table() {
        let series = CandleSeries::new("BTCUSD".to_string());
        let table = CandleTable::from_series(&series).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.symbol(), "BTCUSD");
    }

    #[test]
    fn test_rows_carry_the_symbol_column() {
        let table = CandleTable::from_series(&series_with_one_candle()).unwrap();

        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row[0], "1577836800000");
        assert_eq!(row[1], "16500");
        assert_eq!(row[2], "16750.5");
        assert_eq!(row[7], "BTCUSD");
    }

    #[test]
    fn test_missing_symbol_is_rejected() {
        let series = CandleSeries::new(String::new());
        assert!(matches!(
            CandleTable::from_series(&series),
            Err(ValidationError::MalformedSeries(_))
        ));
    }

    #[test]
    fn test_datetime_timestamps_render_as_datetimes() {
        let series = series_with_one_candle().into_datetime_timestamps();
        let table = CandleTable::from_series(&series).unwrap();
        assert_eq!(table.rows()[0][0], "2020-01-01 00:00:00");
    }
}
