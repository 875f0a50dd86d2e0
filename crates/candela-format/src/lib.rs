//! Tabular conversion and output formatters for the candela candlestick
//! history downloader.
//!
//! This crate turns an aggregated candle series into an exportable table:
//!
//! - [`CandleTable`] - Fixed-column tabular view of a series
//! - [`CsvFormatter`] - CSV/TSV output
//! - [`JsonFormatter`] - JSON array or NDJSON output

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-data/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod table;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use table::{CandleTable, COLUMNS};
