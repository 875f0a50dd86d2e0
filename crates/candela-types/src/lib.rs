//! Core types for the candela candlestick history downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! candela:
//!
//! - [`Candle`] - A single OHLCV bar with timestamp, prices, volume, turnover
//! - [`CandleSeries`] - An ordered series of candles for one instrument
//! - [`DateRange`] - Inclusive date range with calendar-month chunking
//! - [`Interval`] - Kline sampling interval
//! - [`CandleSource`] - Capability trait for upstream candle providers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-data/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod date_range;
mod error;
mod interval;
mod source;

pub use candle::{Candle, CandleSeries, Timestamp};
pub use date_range::{ChunkIter, DateRange};
pub use error::{FetchError, ValidationError};
pub use interval::{Interval, IntervalParseError};
pub use source::CandleSource;
