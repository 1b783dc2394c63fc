//! Sentiment series: overall counts and normalized proportions over time.

use sentiboard_core::types::{ReviewRecord, Sentiment};

use super::grouper::{group_normalize, Granularity};
use super::types::{
    NormalizedSentimentSeries, SentimentBucket, SentimentCount, SentimentCountSeries,
    SentimentShare,
};

/// Records per sentiment, most frequent first; ties keep canonical order.
pub fn sentiment_counts(records: &[ReviewRecord]) -> SentimentCountSeries {
    let mut counts = [0u64; 3];
    for record in records {
        counts[record.sentiment.index()] += 1;
    }

    let mut entries: Vec<SentimentCount> = Sentiment::all()
        .iter()
        .map(|s| SentimentCount {
            sentiment: *s,
            count: counts[s.index()],
        })
        .filter(|e| e.count > 0)
        .collect();
    // Stable: equal counts stay in canonical order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    SentimentCountSeries { entries }
}

/// Sentiment proportions per calendar month.
pub fn monthly_normalized_sentiment(records: &[ReviewRecord]) -> NormalizedSentimentSeries {
    normalized_sentiment_over_time(records, Granularity::Month)
}

/// Sentiment proportions per time bucket, chronological.
///
/// Each bucket's proportions sum to 1. Empty buckets are never emitted.
pub fn normalized_sentiment_over_time(
    records: &[ReviewRecord],
    granularity: Granularity,
) -> NormalizedSentimentSeries {
    let buckets = group_normalize(
        records,
        |r| granularity.bucket(r.review_time),
        |r| r.sentiment,
        1.0,
    )
    .into_iter()
    .map(|group| SentimentBucket {
        bucket: group.key,
        label: granularity.label(group.key),
        total: group.total,
        shares: group
            .shares
            .into_iter()
            .map(|(sentiment, proportion)| SentimentShare {
                sentiment,
                proportion,
            })
            .collect(),
    })
    .collect();

    NormalizedSentimentSeries {
        granularity,
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sentiboard_core::types::Topic;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(date: NaiveDate, sentiment: Sentiment) -> ReviewRecord {
        ReviewRecord::new(date, sentiment, Topic::Price)
    }

    #[test]
    fn test_counts_omit_absent_sentiments() {
        let records = vec![
            rec(d(2023, 1, 5), Sentiment::Positive),
            rec(d(2023, 1, 20), Sentiment::Negative),
            rec(d(2023, 2, 1), Sentiment::Positive),
        ];
        let series = sentiment_counts(&records);
        assert_eq!(series.get(Sentiment::Positive), Some(2));
        assert_eq!(series.get(Sentiment::Negative), Some(1));
        assert_eq!(series.get(Sentiment::Neutral), None);
        assert_eq!(series.total(), 3);
    }

    #[test]
    fn test_counts_sorted_descending_with_stable_ties() {
        let records = vec![
            rec(d(2023, 1, 1), Sentiment::Negative),
            rec(d(2023, 1, 1), Sentiment::Neutral),
            rec(d(2023, 1, 1), Sentiment::Negative),
            rec(d(2023, 1, 1), Sentiment::Positive),
        ];
        let order: Vec<Sentiment> = sentiment_counts(&records)
            .entries
            .iter()
            .map(|e| e.sentiment)
            .collect();
        assert_eq!(
            order,
            vec![Sentiment::Negative, Sentiment::Positive, Sentiment::Neutral]
        );
    }

    #[test]
    fn test_counts_percentages() {
        let records = vec![
            rec(d(2023, 1, 1), Sentiment::Positive),
            rec(d(2023, 1, 1), Sentiment::Positive),
            rec(d(2023, 1, 1), Sentiment::Positive),
            rec(d(2023, 1, 1), Sentiment::Negative),
        ];
        let pct = sentiment_counts(&records).percentages();
        assert_eq!(pct.len(), 2);
        assert!((pct[0].percentage - 75.0).abs() < 1e-9);
        assert!((pct[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_example() {
        let records = vec![
            rec(d(2023, 1, 5), Sentiment::Positive),
            rec(d(2023, 1, 20), Sentiment::Negative),
            rec(d(2023, 2, 1), Sentiment::Positive),
        ];
        let series = monthly_normalized_sentiment(&records);
        assert_eq!(series.buckets.len(), 2);

        let jan = series.get(d(2023, 1, 1)).unwrap();
        assert_eq!(jan.label, "2023-01");
        assert_eq!(jan.get(Sentiment::Positive), Some(0.5));
        assert_eq!(jan.get(Sentiment::Negative), Some(0.5));

        let feb = series.get(d(2023, 2, 14)).unwrap();
        assert_eq!(feb.get(Sentiment::Positive), Some(1.0));
        assert_eq!(feb.get(Sentiment::Negative), None);
        assert_eq!(feb.total, 1);
    }

    #[test]
    fn test_monthly_is_chronological_regardless_of_input_order() {
        let records = vec![
            rec(d(2023, 3, 1), Sentiment::Neutral),
            rec(d(2022, 12, 31), Sentiment::Positive),
            rec(d(2023, 1, 15), Sentiment::Negative),
        ];
        let labels: Vec<String> = monthly_normalized_sentiment(&records)
            .buckets
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["2022-12", "2023-01", "2023-03"]);
    }

    #[test]
    fn test_daily_granularity() {
        let records = vec![
            rec(d(2023, 1, 5), Sentiment::Positive),
            rec(d(2023, 1, 5), Sentiment::Neutral),
            rec(d(2023, 1, 6), Sentiment::Neutral),
        ];
        let series = normalized_sentiment_over_time(&records, Granularity::Day);
        assert_eq!(series.buckets.len(), 2);
        assert_eq!(series.buckets[0].label, "2023-01-05");
        assert_eq!(series.buckets[0].get(Sentiment::Neutral), Some(0.5));
        assert_eq!(
            series.sentiments_present(),
            vec![Sentiment::Positive, Sentiment::Neutral]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(sentiment_counts(&[]).is_empty());
        assert!(monthly_normalized_sentiment(&[]).is_empty());
    }
}
