//! Kline sampling interval definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kline sampling interval.
///
/// Wire tokens follow the Bybit v5 kline API: minutes are encoded as bare
/// numbers (`1`..`720`), daily/weekly/monthly as `D`/`W`/`M`. The token is
/// passed through to the data source unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1-minute candles.
    #[serde(rename = "1")]
    Minute1,
    /// 3-minute candles.
    #[serde(rename = "3")]
    Minute3,
    /// 5-minute candles.
    #[serde(rename = "5")]
    Minute5,
    /// 15-minute candles.
    #[serde(rename = "15")]
    Minute15,
    /// 30-minute candles.
    #[serde(rename = "30")]
    Minute30,
    /// 1-hour candles.
    #[serde(rename = "60")]
    Hour1,
    /// 2-hour candles.
    #[serde(rename = "120")]
    Hour2,
    /// 4-hour candles.
    #[serde(rename = "240")]
    Hour4,
    /// 6-hour candles.
    #[serde(rename = "360")]
    Hour6,
    /// 12-hour candles.
    #[serde(rename = "720")]
    Hour12,
    /// Daily candles.
    #[default]
    #[serde(rename = "D")]
    Day,
    /// Weekly candles.
    #[serde(rename = "W")]
    Week,
    /// Monthly candles.
    #[serde(rename = "M")]
    Month,
}

impl Interval {
    /// Returns the wire token expected by the kline API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1",
            Self::Minute3 => "3",
            Self::Minute5 => "5",
            Self::Minute15 => "15",
            Self::Minute30 => "30",
            Self::Hour1 => "60",
            Self::Hour2 => "120",
            Self::Hour4 => "240",
            Self::Hour6 => "360",
            Self::Hour12 => "720",
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute3,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Hour1,
            Self::Hour2,
            Self::Hour4,
            Self::Hour6,
            Self::Hour12,
            Self::Day,
            Self::Week,
            Self::Month,
        ]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = IntervalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "1m" | "m1" => Ok(Self::Minute1),
            "3" | "3m" | "m3" => Ok(Self::Minute3),
            "5" | "5m" | "m5" => Ok(Self::Minute5),
            "15" | "15m" | "m15" => Ok(Self::Minute15),
            "30" | "30m" | "m30" => Ok(Self::Minute30),
            "60" | "1h" | "h1" => Ok(Self::Hour1),
            "120" | "2h" | "h2" => Ok(Self::Hour2),
            "240" | "4h" | "h4" => Ok(Self::Hour4),
            "360" | "6h" | "h6" => Ok(Self::Hour6),
            "720" | "12h" | "h12" => Ok(Self::Hour12),
            "d" | "1d" | "d1" | "day" | "daily" => Ok(Self::Day),
            "w" | "1w" | "w1" | "week" | "weekly" => Ok(Self::Week),
            "m" | "1mo" | "month" | "monthly" => Ok(Self::Month),
            _ => Err(IntervalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid interval string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalParseError(String);

impl std::fmt::Display for IntervalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid interval '{}', expected one of: 1, 3, 5, 15, 30, 60, 120, 240, 360, 720, D, W, M",
            self.0
        )
    }
}

impl std::error::Error for IntervalParseError {}
