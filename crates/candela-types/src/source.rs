//! Upstream candle provider capability.

use async_trait::async_trait;

use crate::{Candle, FetchError, Interval};

/// Capability trait for fetching candles from an upstream exchange.
///
/// One call covers one bounded request window. Authentication, rate
/// limiting, and retry behavior of the underlying transport are entirely
/// the implementor's responsibility.
#[async_trait]
pub trait CandleSource {
    /// Fetches the candles for `symbol` at `interval` within the window
    /// `[start_ms, end_ms]` (epoch milliseconds, inclusive).
    ///
    /// Candles are returned in the order the upstream delivers them, with
    /// raw millisecond timestamps.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, an exchange-level
    /// error response, or a malformed payload.
    async fn candles(
        &self,
        symbol: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Candle>, FetchError>;
}
