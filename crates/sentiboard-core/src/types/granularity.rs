//! Time bucket width for series over time.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Month,
    Day,
}

impl Granularity {
    /// First day of the bucket containing `date`.
    pub fn bucket(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Month => date.with_day(1).unwrap_or(date),
            Self::Day => date,
        }
    }

    /// Display label of a bucket start, e.g. `2023-01` or `2023-01-05`.
    pub fn label(&self, bucket: NaiveDate) -> String {
        match self {
            Self::Month => bucket.format("%Y-%m").to_string(),
            Self::Day => bucket.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Day => "day",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bucket_truncates_day() {
        assert_eq!(Granularity::Month.bucket(d(2023, 1, 31)), d(2023, 1, 1));
        assert_eq!(Granularity::Month.bucket(d(2024, 2, 29)), d(2024, 2, 1));
        assert_eq!(Granularity::Day.bucket(d(2023, 1, 31)), d(2023, 1, 31));
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(Granularity::Month.label(d(2023, 3, 1)), "2023-03");
        assert_eq!(Granularity::Day.label(d(2023, 3, 9)), "2023-03-09");
    }
}
