//! Date range and calendar-month chunking.

use chrono::{Months, NaiveDate};

use crate::ValidationError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::Range { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Splits the range into contiguous sub-ranges of at most `months`
    /// calendar months each.
    ///
    /// Sub-ranges are emitted in chronological order, do not overlap, and
    /// together cover `[start, end]` exactly: each sub-range starts one day
    /// after the previous one ends, and the last sub-range ends on `end`.
    /// When a chunk boundary lands one day short of `end`, the final
    /// sub-range is a single day.
    ///
    /// A range where `start == end` yields no sub-ranges at all. Splitting
    /// is keyed on the strict `start < end` condition, so a single-day range
    /// produces an empty split rather than one one-day chunk.
    ///
    /// `months` must be greater than zero.
    #[must_use]
    pub fn chunks(&self, months: u32) -> ChunkIter {
        debug_assert!(months > 0, "chunk size must be at least one month");
        ChunkIter::new(self.start, self.end, months)
    }

    /// Returns the total number of days in the range.
    #[must_use]
    pub fn total_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Returns true if the range contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over the calendar-month sub-ranges of a date range.
#[derive(Debug, Clone)]
pub struct ChunkIter {
    /// Start of the next chunk; `None` once the range is covered.
    current: Option<NaiveDate>,
    end: NaiveDate,
    months: u32,
}

impl ChunkIter {
    fn new(start: NaiveDate, end: NaiveDate, months: u32) -> Self {
        Self {
            current: (start < end).then_some(start),
            end,
            months,
        }
    }
}

impl Iterator for ChunkIter {
    type Item = DateRange;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        // Candidate end is `months` calendar months ahead, inclusive of the
        // chunk start day. Saturates to the range end on calendar overflow.
        let candidate = current
            .checked_add_months(Months::new(self.months))
            .and_then(|date| date.pred_opt())
            .unwrap_or(self.end);
        let chunk_end = candidate.min(self.end);

        self.current = (chunk_end < self.end)
            .then(|| chunk_end.succ_opt())
            .flatten();

        Some(DateRange {
            start: current,
            end: chunk_end,
        })
    }
}
