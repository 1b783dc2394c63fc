//! Headline figures shown above the charts.

use sentiboard_core::types::ReviewRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_reportings: u64,
    /// Records that carried a numeric rating.
    pub rated_reportings: u64,
    /// Mean rating rounded to two decimals; `None` when nothing was rated.
    pub average_rating: Option<f64>,
}

pub fn summarize(records: &[ReviewRecord]) -> DashboardSummary {
    let (sum, rated) = records
        .iter()
        .filter_map(|r| r.overall)
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0u64), |(sum, n), v| (sum + v, n + 1));

    let average_rating = (rated > 0).then(|| round2(sum / rated as f64));

    DashboardSummary {
        total_reportings: records.len() as u64,
        rated_reportings: rated,
        average_rating,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sentiboard_core::types::{Sentiment, Topic};

    fn rec(rating: Option<f64>) -> ReviewRecord {
        let mut r = ReviewRecord::new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            Sentiment::Positive,
            Topic::Price,
        );
        r.overall = rating;
        r
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let s = summarize(&[rec(Some(5.0)), rec(Some(4.0)), rec(Some(4.0))]);
        assert_eq!(s.total_reportings, 3);
        assert_eq!(s.average_rating, Some(4.33));
    }

    #[test]
    fn test_unrated_records_count_but_do_not_average() {
        let s = summarize(&[rec(Some(2.0)), rec(None)]);
        assert_eq!(s.total_reportings, 2);
        assert_eq!(s.rated_reportings, 1);
        assert_eq!(s.average_rating, Some(2.0));
    }

    #[test]
    fn test_empty_summary() {
        let s = summarize(&[]);
        assert_eq!(s.total_reportings, 0);
        assert_eq!(s.average_rating, None);
    }
}
