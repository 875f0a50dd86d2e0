//! Chunked history aggregation for the candela candlestick history
//! downloader.
//!
//! This crate drives the download of a full date range:
//!
//! - [`HistoryRequest`] - Validated aggregation parameters
//! - [`fetch_history`] - Chunked, sequential fetch into one [`CandleSeries`]
//!
//! [`CandleSeries`]: candela_types::CandleSeries

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-data/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod request;

pub use aggregator::{date_start_millis, fetch_history, fetch_history_with_progress};
pub use request::{HistoryRequest, DEFAULT_CHUNK_MONTHS};
