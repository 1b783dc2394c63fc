//! Derived series and pipeline configuration.

use chrono::NaiveDate;
use sentiboard_core::config::DashboardConfig;
use sentiboard_core::constants::DEFAULT_TOPIC_STACK_ORDER;
use sentiboard_core::types::{Sentiment, Topic};
use serde::Serialize;

use super::grouper::Granularity;

/// Configuration for the aggregation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Topic columns of the daily topic grid, in order.
    pub topic_order: Vec<Topic>,
    /// Bucket width of the sentiment-over-time series.
    pub sentiment_granularity: Granularity,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            topic_order: DEFAULT_TOPIC_STACK_ORDER.to_vec(),
            sentiment_granularity: Granularity::Month,
        }
    }
}

impl From<&DashboardConfig> for PipelineConfig {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            topic_order: config.pipeline.effective_topic_order(),
            sentiment_granularity: config.pipeline.effective_sentiment_granularity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: u64,
}

/// Records per sentiment, most frequent first. Absent sentiments are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCountSeries {
    pub entries: Vec<SentimentCount>,
}

impl SentimentCountSeries {
    pub fn get(&self, sentiment: Sentiment) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.sentiment == sentiment)
            .map(|e| e.count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Share of each sentiment in percent, in entry order.
    pub fn percentages(&self) -> Vec<SentimentPercentage> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|e| SentimentPercentage {
                sentiment: e.sentiment,
                percentage: e.count as f64 / total as f64 * 100.0,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentShare {
    pub sentiment: Sentiment,
    /// In `[0, 1]`.
    pub proportion: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentPercentage {
    pub sentiment: Sentiment,
    /// In `[0, 100]`.
    pub percentage: f64,
}

/// One time bucket of the normalized sentiment series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBucket {
    /// First day of the bucket.
    pub bucket: NaiveDate,
    pub label: String,
    pub total: u64,
    /// Observed sentiments only, canonical order.
    pub shares: Vec<SentimentShare>,
}

impl SentimentBucket {
    pub fn get(&self, sentiment: Sentiment) -> Option<f64> {
        self.shares
            .iter()
            .find(|s| s.sentiment == sentiment)
            .map(|s| s.proportion)
    }
}

/// Sentiment proportions per time bucket, chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSentimentSeries {
    pub granularity: Granularity,
    pub buckets: Vec<SentimentBucket>,
}

impl NormalizedSentimentSeries {
    /// Bucket containing `date`, if any record fell into it.
    pub fn get(&self, date: NaiveDate) -> Option<&SentimentBucket> {
        let start = self.granularity.bucket(date);
        self.buckets.iter().find(|b| b.bucket == start)
    }

    /// Sentiments observed in at least one bucket, canonical order.
    pub fn sentiments_present(&self) -> Vec<Sentiment> {
        Sentiment::all()
            .iter()
            .copied()
            .filter(|s| self.buckets.iter().any(|b| b.get(*s).is_some()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub topic: Topic,
    pub count: u64,
}

/// Records per topic, ascending by count. Absent topics are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicCountSeries {
    pub entries: Vec<TopicCount>,
}

impl TopicCountSeries {
    pub fn get(&self, topic: Topic) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sentiment percentages of a single topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSentimentBreakdown {
    pub topic: Topic,
    pub total: u64,
    /// Observed sentiments only, canonical order.
    pub percentages: Vec<SentimentPercentage>,
}

impl TopicSentimentBreakdown {
    pub fn get(&self, sentiment: Sentiment) -> Option<f64> {
        self.percentages
            .iter()
            .find(|p| p.sentiment == sentiment)
            .map(|p| p.percentage)
    }
}

/// Per-topic sentiment percentages, canonical topic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopicSentimentSeries {
    pub topics: Vec<TopicSentimentBreakdown>,
}

impl TopicSentimentSeries {
    pub fn get(&self, topic: Topic) -> Option<&TopicSentimentBreakdown> {
        self.topics.iter().find(|t| t.topic == topic)
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// One day of the daily topic grid; `counts[i]` belongs to `topics[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTopicRow {
    pub day: NaiveDate,
    pub counts: Vec<u64>,
}

/// Day × topic mention counts. Rectangular: every row has one count per
/// column in `topics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyTopicSeries {
    pub topics: Vec<Topic>,
    pub rows: Vec<DailyTopicRow>,
}

impl DailyTopicSeries {
    pub fn count(&self, day: NaiveDate, topic: Topic) -> Option<u64> {
        let col = self.topics.iter().position(|t| *t == topic)?;
        self.rows
            .iter()
            .find(|r| r.day == day)
            .and_then(|r| r.counts.get(col).copied())
    }

    /// All counts of one topic column, in day order.
    pub fn column(&self, topic: Topic) -> Option<Vec<u64>> {
        let col = self.topics.iter().position(|t| *t == topic)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.counts.get(col).copied().unwrap_or(0))
                .collect(),
        )
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.day).collect()
    }

    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| r.counts.len() == self.topics.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
