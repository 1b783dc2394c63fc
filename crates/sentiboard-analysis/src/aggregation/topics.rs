//! Topic series: counts, sentiment breakdown, and the daily topic grid.

use sentiboard_core::types::{ReviewRecord, Topic};

use super::grouper::{group_counts, group_normalize, Granularity};
use super::types::{
    DailyTopicRow, DailyTopicSeries, SentimentPercentage, TopicCount, TopicCountSeries,
    TopicSentimentBreakdown, TopicSentimentSeries,
};

/// Records per topic, ascending by count; ties keep canonical topic order.
pub fn topic_counts(records: &[ReviewRecord]) -> TopicCountSeries {
    let mut counts = [0u64; 5];
    for record in records {
        counts[record.topic.index()] += 1;
    }

    let mut entries: Vec<TopicCount> = Topic::all()
        .iter()
        .map(|t| TopicCount {
            topic: *t,
            count: counts[t.index()],
        })
        .filter(|e| e.count > 0)
        .collect();
    entries.sort_by_key(|e| e.count);

    TopicCountSeries { entries }
}

/// Sentiment percentages within each topic; each topic sums to 100.
///
/// Topics without records are left out.
pub fn topic_sentiment_percentages(records: &[ReviewRecord]) -> TopicSentimentSeries {
    let topics = group_normalize(records, |r| r.topic, |r| r.sentiment, 100.0)
        .into_iter()
        .map(|group| TopicSentimentBreakdown {
            topic: group.key,
            total: group.total,
            percentages: group
                .shares
                .into_iter()
                .map(|(sentiment, percentage)| SentimentPercentage {
                    sentiment,
                    percentage,
                })
                .collect(),
        })
        .collect();

    TopicSentimentSeries { topics }
}

/// Mentions per (day, topic), columns reindexed to `topic_order`.
///
/// Every emitted day has a count for every topic in `topic_order` (0 when
/// absent that day). Days with no records are not synthesized. Topics not in
/// `topic_order` do not appear.
pub fn daily_topic_counts(records: &[ReviewRecord], topic_order: &[Topic]) -> DailyTopicSeries {
    let rows = group_counts(records, |r| Granularity::Day.bucket(r.review_time), |r| r.topic)
        .into_iter()
        .map(|group| {
            let counts = topic_order
                .iter()
                .map(|topic| {
                    group
                        .counts
                        .iter()
                        .find(|(t, _)| t == topic)
                        .map(|(_, n)| *n)
                        .unwrap_or(0)
                })
                .collect();
            DailyTopicRow {
                day: group.key,
                counts,
            }
        })
        .collect();

    DailyTopicSeries {
        topics: topic_order.to_vec(),
        rows,
    }
}
