//! HTTP client for the Bybit v5 market-kline endpoint.

use async_trait::async_trait;
use candela_types::{Candle, CandleSource, FetchError, Interval};
use reqwest::Client;
use std::time::Duration;

use crate::payload::KlineResponse;

/// Base URL of the production API.
pub const MAINNET_URL: &str = "https://api.bybit.com";

/// Base URL of the testnet API.
pub const TESTNET_URL: &str = "https://api-testnet.bybit.com";

/// Maximum number of rows the kline endpoint returns per request.
const PAGE_LIMIT: u32 = 1000;

/// Market category served by the kline endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketCategory {
    /// Inverse contracts (coin-margined).
    #[default]
    Inverse,
    /// Linear contracts (USDT/USDC-margined).
    Linear,
    /// Spot market.
    Spot,
}

impl MarketCategory {
    /// Returns the wire token for the `category` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inverse => "inverse",
            Self::Linear => "linear",
            Self::Spot => "spot",
        }
    }
}

/// Configuration for the kline client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Market category to request candles from.
    pub category: MarketCategory,
    /// Whether to talk to the testnet host instead of production.
    pub testnet: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("candela/{}", env!("CARGO_PKG_VERSION")),
            category: MarketCategory::Inverse,
            testnet: true,
        }
    }
}

/// HTTP client for the kline endpoint, with connection pooling.
///
/// Each call issues a single best-effort request; there is no retry or
/// backoff layer. A failed request surfaces as a [`FetchError`] and the
/// caller decides what to do with it.
#[derive(Debug, Clone)]
pub struct KlineClient {
    client: Client,
    config: ClientConfig,
}

impl KlineClient {
    /// Creates a new kline client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL the client talks to.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        if self.config.testnet {
            TESTNET_URL
        } else {
            MAINNET_URL
        }
    }

    /// Fetches one window of candles from the kline endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, a non-zero exchange
    /// return code, or a malformed payload.
    pub async fn get_kline(
        &self,
        symbol: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = format!("{}/v5/market/kline", self.base_url());
        let start = start_ms.to_string();
        let end = end_ms.to_string();
        let limit = PAGE_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("category", self.config.category.as_str()),
                ("symbol", symbol),
                ("interval", interval.as_str()),
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let payload: KlineResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))?;

        payload.into_candles()
    }
}

#[async_trait]
impl CandleSource for KlineClient {
    async fn candles(
        &self,
        symbol: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Candle>, FetchError> {
        self.get_kline(symbol, interval, start_ms, end_ms).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.category, MarketCategory::Inverse);
        assert!(config.testnet);
    }

    #[test]
    fn test_category_tokens() {
        assert_eq!(MarketCategory::Inverse.as_str(), "inverse");
        assert_eq!(MarketCategory::Linear.as_str(), "linear");
        assert_eq!(MarketCategory::Spot.as_str(), "spot");
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = KlineClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_follows_testnet_flag() {
        let testnet = KlineClient::with_defaults().unwrap();
        assert_eq!(testnet.base_url(), TESTNET_URL);

        let mainnet = KlineClient::new(ClientConfig {
            testnet: false,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(mainnet.base_url(), MAINNET_URL);
    }
}
