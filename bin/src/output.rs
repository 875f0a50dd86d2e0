//! Output helpers for the candela CLI.

use anyhow::Result;
use candela_lib::prelude::*;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write a candle table to a file in the specified format.
pub(crate) fn write_table(table: &CandleTable, output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_table(table, writer)?,
        Format::Tsv => CsvFormatter::tsv().write_table(table, writer)?,
        Format::Json => JsonFormatter::new().write_table(table, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_table(table, writer)?,
    }

    Ok(())
}
