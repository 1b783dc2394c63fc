//! Review rows (raw and validated) and the date range filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Sentiment, Topic};

/// A labeled review that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review date, no time-of-day.
    pub review_time: NaiveDate,
    /// Star rating. `None` when the cell was blank or not numeric.
    pub overall: Option<f64>,
    pub sentiment: Sentiment,
    pub topic: Topic,
}

impl ReviewRecord {
    pub fn new(review_time: NaiveDate, sentiment: Sentiment, topic: Topic) -> Self {
        Self {
            review_time,
            overall: None,
            sentiment,
            topic,
        }
    }

    pub fn with_rating(mut self, overall: f64) -> Self {
        self.overall = Some(overall);
        self
    }
}

/// One input row before validation. Cells are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReview {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub review_time: Option<String>,
    pub overall: Option<String>,
    pub sentiment: Option<String>,
    pub topic: Option<String>,
}

/// Inclusive `[start, end]` date filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range. An inverted range is allowed and matches nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered; 0 when inverted.
    pub fn days(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            (self.end - self.start).num_days() as u64 + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(d(2023, 1, 1), d(2023, 1, 31));
        assert!(range.contains(d(2023, 1, 1)));
        assert!(range.contains(d(2023, 1, 31)));
        assert!(!range.contains(d(2023, 2, 1)));
        assert_eq!(range.days(), 31);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::new(d(2023, 2, 1), d(2023, 1, 1));
        assert!(range.is_inverted());
        assert!(!range.contains(d(2023, 1, 15)));
        assert_eq!(range.days(), 0);
    }

    #[test]
    fn test_single_day() {
        let range = DateRange::single_day(d(2024, 2, 29));
        assert!(range.contains(d(2024, 2, 29)));
        assert_eq!(range.days(), 1);
    }
}
