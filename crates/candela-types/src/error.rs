//! Error types for candela.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while validating caller input, before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Date string did not parse as `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Date(String),

    /// Start date is after end date.
    #[error("invalid date range: {start} > {end}")]
    Range {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Instrument symbol is empty.
    #[error("instrument symbol must not be empty")]
    EmptySymbol,

    /// Chunk size of zero months.
    #[error("chunk size must be at least one month")]
    ZeroChunkMonths,

    /// Series cannot be converted to a table.
    #[error("malformed candle series: {0}")]
    MalformedSeries(String),
}

/// Errors raised while fetching candle data from an upstream source.
///
/// Any variant aborts the aggregation as a whole; no partial data is
/// returned to the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The exchange answered with a non-zero return code.
    #[error("exchange error {code}: {message}")]
    Exchange {
        /// Exchange return code.
        code: i64,
        /// Exchange return message.
        message: String,
    },

    /// The response payload did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),
}
