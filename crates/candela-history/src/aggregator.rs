//! Sequential chunk-by-chunk history aggregation.

use candela_types::{CandleSeries, CandleSource, DateRange, FetchError};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::HistoryRequest;

/// Converts a calendar date to epoch milliseconds at UTC midnight, the
/// timestamp encoding the kline transport expects.
#[must_use]
pub fn date_start_millis(date: NaiveDate) -> i64 {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .timestamp_millis()
}

/// Fetches the full requested history as one chronological series.
///
/// The request's date range is split into calendar-month chunks and the
/// source is called once per chunk, in order, one request at a time. Chunk
/// results are concatenated in request order, which is chronological by
/// construction.
///
/// A range that splits into zero chunks (`start == end`) returns an empty
/// series without contacting the source.
///
/// # Errors
///
/// Returns the first [`FetchError`] encountered. A failed chunk aborts the
/// whole aggregation; no partial series is ever returned.
pub async fn fetch_history<S>(
    source: &S,
    request: &HistoryRequest,
) -> Result<CandleSeries, FetchError>
where
    S: CandleSource + ?Sized,
{
    fetch_history_with_progress(source, request, |_| {}).await
}

/// Same as [`fetch_history`], invoking `on_chunk` after each chunk completes.
///
/// The callback drives progress reporting; it receives the chunk's date
/// range.
///
/// # Errors
///
/// Returns the first [`FetchError`] encountered; no partial series is ever
/// returned.
pub async fn fetch_history_with_progress<S, F>(
    source: &S,
    request: &HistoryRequest,
    mut on_chunk: F,
) -> Result<CandleSeries, FetchError>
where
    S: CandleSource + ?Sized,
    F: FnMut(&DateRange),
{
    let mut series = CandleSeries::new(request.symbol().to_string());

    for chunk in request.range().chunks(request.chunk_months()) {
        let candles = source
            .candles(
                request.symbol(),
                request.interval(),
                date_start_millis(chunk.start),
                date_start_millis(chunk.end),
            )
            .await?;
        series.candles.extend(candles);
        on_chunk(&chunk);
    }

    if request.datetime_timestamps() {
        series = series.into_datetime_timestamps();
    }
    Ok(series)
}
