//! Rust library for downloading Bybit candlestick history over long date
//! ranges.
//!
//! This is a facade crate that re-exports functionality from the candela
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use candela_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KlineClient::with_defaults()?;
//!     let request = HistoryRequest::new("BTCUSD", "2020-01-01", "2024-01-01", Interval::Day)?
//!         .with_datetime_timestamps(true);
//!
//!     let series = fetch_history(&client, &request).await?;
//!     println!("Fetched {} candles", series.len());
//!
//!     let table = CandleTable::from_series(&series)?;
//!     let file = std::fs::File::create("bitcoin_price_history.csv")?;
//!     CsvFormatter::new().write_table(&table, std::io::BufWriter::new(file))?;
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/candela-data/candela/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use candela_types::*;

// Re-export the kline client
#[cfg(feature = "fetch")]
pub use candela_fetch::{ClientConfig, KlineClient, MarketCategory, MAINNET_URL, TESTNET_URL};

// Re-export history aggregation
#[cfg(feature = "history")]
pub use candela_history::{
    fetch_history, fetch_history_with_progress, HistoryRequest, DEFAULT_CHUNK_MONTHS,
};

// Re-export table conversion and formatters
#[cfg(feature = "format")]
pub use candela_format::{
    CandleTable, CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, COLUMNS,
};

/// Prelude module for convenient imports.
///
/// ```
/// use candela_lib::prelude::*;
/// ```
pub mod prelude {
    pub use candela_types::{
        Candle, CandleSeries, CandleSource, DateRange, FetchError, Interval, Timestamp,
        ValidationError,
    };

    #[cfg(feature = "fetch")]
    pub use candela_fetch::{ClientConfig, KlineClient, MarketCategory};

    #[cfg(feature = "history")]
    pub use candela_history::{
        fetch_history, fetch_history_with_progress, HistoryRequest, DEFAULT_CHUNK_MONTHS,
    };

    #[cfg(feature = "format")]
    pub use candela_format::{
        CandleTable, CsvFormatter, Formatter, JsonFormatter, OutputFormat,
    };
}
