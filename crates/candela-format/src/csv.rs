//! CSV output format.

use std::io::Write;

use crate::{CandleTable, FormatError, Formatter, COLUMNS};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_table<W: Write + Send>(
        &self,
        table: &CandleTable,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter.to_string();

        if self.include_header {
            writeln!(writer, "{}", COLUMNS.join(d.as_str()))?;
        }

        for row in table.rows() {
            writeln!(writer, "{}", row.join(d.as_str()))?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candela_types::{Candle, CandleSeries, Timestamp};
    use std::io::Cursor;

    fn create_test_table() -> CandleTable {
        let series = CandleSeries::with_candles(
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
        );
        CandleTable::from_series(&series).unwrap()
    }

    #[test]
    fn test_csv_output() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_table(&create_test_table(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(
            lines[0],
            "startTime,openPrice,highPrice,lowPrice,closePrice,volume,turnover,symbol"
        );
        assert_eq!(lines[1], "1577836800000,16500,16750.5,16400,16700,1200,19800000,BTCUSD");
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter.write_table(&create_test_table(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("startTime"));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_csv_empty_table_is_header_only() {
        let formatter = CsvFormatter::new();
        let series = CandleSeries::new("BTCUSD".to_string());
        let table = CandleTable::from_series(&series).unwrap();
        let mut output = Cursor::new(Vec::new());

        formatter.write_table(&table, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.lines().count(), 1);
        assert!(result.starts_with("startTime,"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter.write_table(&create_test_table(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("startTime\topenPrice\thighPrice"));
    }
}
