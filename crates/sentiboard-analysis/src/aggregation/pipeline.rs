//! Top-level dashboard aggregation pipeline.

use sentiboard_core::types::{DateRange, ReviewRecord};
use serde::Serialize;

use super::filter::filter_by_date_range;
use super::sentiment::{normalized_sentiment_over_time, sentiment_counts};
use super::summary::{summarize, DashboardSummary};
use super::topics::{daily_topic_counts, topic_counts, topic_sentiment_percentages};
use super::types::{
    DailyTopicSeries, NormalizedSentimentSeries, PipelineConfig, SentimentCountSeries,
    TopicCountSeries, TopicSentimentSeries,
};

/// Filters once, then derives every dashboard series from the same subset.
pub struct DashboardPipeline {
    config: PipelineConfig,
}

impl DashboardPipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline for one filter selection.
    ///
    /// Input: the full, validated record set (not modified) and the range.
    /// Output: fresh series. An empty selection yields empty series.
    pub fn run(&self, records: &[ReviewRecord], range: DateRange) -> DashboardSeries {
        let selected = filter_by_date_range(records, range);
        if selected.is_empty() {
            tracing::warn!(start = %range.start, end = %range.end, "no records in selected range");
        }

        let series = DashboardSeries {
            range,
            summary: summarize(&selected),
            sentiment_counts: sentiment_counts(&selected),
            sentiment_over_time: normalized_sentiment_over_time(
                &selected,
                self.config.sentiment_granularity,
            ),
            topic_counts: topic_counts(&selected),
            topic_sentiment: topic_sentiment_percentages(&selected),
            daily_topics: daily_topic_counts(&selected, &self.config.topic_order),
        };

        tracing::debug!(
            range_days = range.days(),
            selected = selected.len(),
            time_buckets = series.sentiment_over_time.buckets.len(),
            topics = series.topic_counts.entries.len(),
            days = series.daily_topics.rows.len(),
            "pipeline run complete"
        );

        series
    }
}

impl Default for DashboardPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Everything the rendering layer needs for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSeries {
    pub range: DateRange,
    pub summary: DashboardSummary,
    pub sentiment_counts: SentimentCountSeries,
    pub sentiment_over_time: NormalizedSentimentSeries,
    pub topic_counts: TopicCountSeries,
    pub topic_sentiment: TopicSentimentSeries,
    pub daily_topics: DailyTopicSeries,
}

impl DashboardSeries {
    /// True when the selected range contained no records.
    pub fn is_empty(&self) -> bool {
        self.summary.total_reportings == 0
    }
}
