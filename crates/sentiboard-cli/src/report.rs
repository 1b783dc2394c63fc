//! Dashboard report: headline KPIs plus chart payloads for one selection.

use sentiboard_analysis::{DashboardSeries, DataQualityReport};
use sentiboard_core::types::DateRange;
use serde::Serialize;

use crate::charts::sentiment::{
    sentiment_count_chart, sentiment_over_time_chart, sentiment_share_chart,
};
use crate::charts::topics::{
    sentiment_by_topic_chart, topic_distribution_chart, topic_over_time_chart,
};
use crate::charts::{Chart, ChartId, Palette};

pub const DASHBOARD_TITLE: &str = "Feedback System Dashboard";

/// A headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    /// `None` when there is nothing to measure (e.g. no ratings).
    pub value: Option<f64>,
}

impl Kpi {
    fn new(label: &str, value: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn display_value(&self) -> String {
        match self.value {
            None => "n/a".to_string(),
            Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
            Some(v) => format!("{v:.2}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub title: String,
    /// `None` when the dataset has no records to derive a default range from.
    pub range: Option<DateRange>,
    /// True when the selection contains no records.
    pub empty: bool,
    pub kpis: Vec<Kpi>,
    pub data_quality: DataQualityReport,
    pub charts: Vec<Chart>,
}

impl DashboardReport {
    /// Build the report for a pipeline run, keeping only the requested charts
    /// (all of them when `charts` is empty).
    pub fn build(
        series: &DashboardSeries,
        quality: &DataQualityReport,
        palette: &Palette,
        charts: &[ChartId],
    ) -> Self {
        let wanted: &[ChartId] = if charts.is_empty() { ChartId::all() } else { charts };
        let charts = ChartId::all()
            .iter()
            .filter(|id| wanted.contains(id))
            .map(|id| build_chart(*id, series, palette))
            .collect();

        Self {
            title: DASHBOARD_TITLE.to_string(),
            range: Some(series.range),
            empty: series.is_empty(),
            kpis: kpis(series.summary.total_reportings, series.summary.average_rating, quality),
            data_quality: quality.clone(),
            charts,
        }
    }

    /// Report for a dataset with no usable records at all.
    pub fn no_data(quality: &DataQualityReport) -> Self {
        Self {
            title: DASHBOARD_TITLE.to_string(),
            range: None,
            empty: true,
            kpis: kpis(0, None, quality),
            data_quality: quality.clone(),
            charts: Vec::new(),
        }
    }

    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }
}

fn kpis(total: u64, average_rating: Option<f64>, quality: &DataQualityReport) -> Vec<Kpi> {
    vec![
        Kpi::new("Total Reportings", Some(total as f64)),
        Kpi::new("Average rating", average_rating),
        Kpi::new("Excluded rows", Some(quality.excluded() as f64)),
    ]
}

fn build_chart(id: ChartId, series: &DashboardSeries, palette: &Palette) -> Chart {
    match id {
        ChartId::SentimentCount => sentiment_count_chart(&series.sentiment_counts, palette),
        ChartId::SentimentShare => sentiment_share_chart(&series.sentiment_counts, palette),
        ChartId::SentimentOverTime => sentiment_over_time_chart(&series.sentiment_over_time, palette),
        ChartId::TopicDistribution => topic_distribution_chart(&series.topic_counts, palette),
        ChartId::SentimentByTopic => sentiment_by_topic_chart(&series.topic_sentiment, palette),
        ChartId::TopicOverTime => topic_over_time_chart(&series.daily_topics, palette),
    }
}
