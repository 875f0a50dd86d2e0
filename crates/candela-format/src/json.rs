//! JSON output format.

use serde_json::{Map, Value};
use std::io::Write;

use crate::{CandleTable, FormatError, Formatter, COLUMNS};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Maps a table row to a JSON object keyed by column name.
fn row_object(row: &[String; 8]) -> Value {
    let mut object = Map::with_capacity(COLUMNS.len());
    for (column, value) in COLUMNS.iter().zip(row) {
        object.insert((*column).to_string(), Value::String(value.clone()));
    }
    Value::Object(object)
}

impl Formatter for JsonFormatter {
    fn write_table<W: Write + Send>(
        &self,
        table: &CandleTable,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                let objects: Vec<Value> = table.rows().iter().map(row_object).collect();
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &objects)?;
                } else {
                    serde_json::to_writer(&mut writer, &objects)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for row in table.rows() {
                    serde_json::to_writer(&mut writer, &row_object(row))?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
