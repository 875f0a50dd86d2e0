//! Typed Bybit kline response payload.
//!
//! The wire format nests candle rows as arrays of strings under
//! `result.list`. Rows are validated and converted into typed [`Candle`]s
//! here, at the boundary, so malformed payloads are rejected before they
//! reach aggregation logic.

use candela_types::{Candle, FetchError, Timestamp};
use serde::Deserialize;

/// Minimum number of fields per kline row:
/// startTime, open, high, low, close, volume, turnover.
pub const ROW_FIELDS: usize = 7;

/// Top-level kline response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineResponse {
    /// Exchange return code; zero on success.
    #[serde(rename = "retCode")]
    pub ret_code: i64,
    /// Exchange return message.
    #[serde(rename = "retMsg", default)]
    pub ret_msg: String,
    /// Result body.
    #[serde(default)]
    pub result: KlineResult,
}

/// Result body of a kline response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KlineResult {
    /// Instrument symbol the rows belong to.
    #[serde(default)]
    pub symbol: String,
    /// Market category the request was served from.
    #[serde(default)]
    pub category: String,
    /// Candle rows, each an array of stringified numbers.
    #[serde(default)]
    pub list: Vec<Vec<String>>,
}

impl KlineResponse {
    /// Validates the envelope and converts the rows into typed candles,
    /// preserving the order the exchange delivered them in.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Exchange`] for a non-zero return code and
    /// [`FetchError::Payload`] for rows that are short or fail numeric
    /// parsing.
    pub fn into_candles(self) -> Result<Vec<Candle>, FetchError> {
        if self.ret_code != 0 {
            return Err(FetchError::Exchange {
                code: self.ret_code,
                message: self.ret_msg,
            });
        }

        self.result
            .list
            .into_iter()
            .enumerate()
            .map(|(index, row)| parse_row(index, &row))
            .collect()
    }
}

/// Parses a single kline row into a candle.
fn parse_row(index: usize, row: &[String]) -> Result<Candle, FetchError> {
    if row.len() < ROW_FIELDS {
        return Err(FetchError::Payload(format!(
            "row {index} has {} fields, expected at least {ROW_FIELDS}",
            row.len()
        )));
    }

    let start_ms = parse_field::<i64>(index, "startTime", &row[0])?;
    Ok(Candle::new(
        Timestamp::Millis(start_ms),
        parse_field(index, "openPrice", &row[1])?,
        parse_field(index, "highPrice", &row[2])?,
        parse_field(index, "lowPrice", &row[3])?,
        parse_field(index, "closePrice", &row[4])?,
        parse_field(index, "volume", &row[5])?,
        parse_field(index, "turnover", &row[6])?,
    ))
}

fn parse_field<T: std::str::FromStr>(
    index: usize,
    name: &str,
    value: &str,
) -> Result<T, FetchError> {
    value
        .parse()
        .map_err(|_| FetchError::Payload(format!("row {index}: unparsable {name} '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_from(json: &str) -> KlineResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_kline_response() {
        let response = response_from(
            r#"{
                "retCode": 0,
                "retMsg": "OK",
                "result": {
                    "symbol": "BTCUSD",
                    "category": "inverse",
                    "list": [
                        ["1672185600000", "16791.5", "16795.0", "16785.5", "16790.0", "49337", "2.938"],
                        ["1672099200000", "16552.5", "16792.0", "16550.0", "16791.5", "41955", "2.501"]
                    ]
                }
            }"#,
        );

        let candles = response.into_candles().unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].start, Timestamp::Millis(1_672_185_600_000));
        assert!((candles[0].open - 16791.5).abs() < 1e-10);
        assert!((candles[1].turnover - 2.501).abs() < 1e-10);
    }

    #[test]
    fn test_empty_list_yields_no_candles() {
        let response = response_from(
            r#"{"retCode": 0, "retMsg": "OK", "result": {"symbol": "BTCUSD", "list": []}}"#,
        );
        assert!(response.into_candles().unwrap().is_empty());
    }

    #[test]
    fn test_nonzero_ret_code_is_exchange_error() {
        let response = response_from(r#"{"retCode": 10001, "retMsg": "params error"}"#);
        let err = response.into_candles().unwrap_err();
        assert!(matches!(
            err,
            FetchError::Exchange { code: 10001, .. }
        ));
    }

    #[test]
    fn test_short_row_is_payload_error() {
        let response = response_from(
            r#"{"retCode": 0, "retMsg": "OK", "result": {"list": [["1672185600000", "16791.5"]]}}"#,
        );
        assert!(matches!(
            response.into_candles().unwrap_err(),
            FetchError::Payload(_)
        ));
    }

    #[test]
    fn test_unparsable_field_is_payload_error() {
        let response = response_from(
            r#"{"retCode": 0, "retMsg": "OK", "result": {"list": [
                ["1672185600000", "not-a-number", "1", "1", "1", "1", "1"]
            ]}}"#,
        );
        assert!(matches!(
            response.into_candles().unwrap_err(),
            FetchError::Payload(_)
        ));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let response = response_from(
            r#"{"retCode": 0, "retMsg": "OK", "result": {"list": [
                ["1672185600000", "1", "2", "0.5", "1.5", "10", "15", "extra"]
            ]}}"#,
        );
        assert_eq!(response.into_candles().unwrap().len(), 1);
    }
}
