//! Chart payloads.
//!
//! Each builder turns one pipeline series into a renderer-neutral [`Chart`]:
//! titles, axis labels, traces, and colours. Nothing here aggregates.

pub mod palette;
pub mod sentiment;
pub mod topics;

use std::fmt;

use serde::Serialize;

pub use palette::Palette;

/// The six dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    SentimentCount,
    SentimentShare,
    SentimentOverTime,
    TopicDistribution,
    SentimentByTopic,
    TopicOverTime,
}

impl ChartId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SentimentCount => "sentiment-count",
            Self::SentimentShare => "sentiment-share",
            Self::SentimentOverTime => "sentiment-over-time",
            Self::TopicDistribution => "topic-distribution",
            Self::SentimentByTopic => "sentiment-by-topic",
            Self::TopicOverTime => "topic-over-time",
        }
    }

    /// Dashboard order.
    pub fn all() -> &'static [ChartId] {
        &[
            Self::SentimentCount,
            Self::SentimentShare,
            Self::SentimentOverTime,
            Self::TopicDistribution,
            Self::SentimentByTopic,
            Self::TopicOverTime,
        ]
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Donut,
    Line,
    StackedBar,
    StackedArea,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontal-bar",
            Self::Donut => "donut",
            Self::Line => "line",
            Self::StackedBar => "stacked-bar",
            Self::StackedArea => "stacked-area",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: String,
    pub y: f64,
}

impl Point {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    /// Colour of the whole trace (lines, areas, stacked segments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-point colours (bars, donut slices), parallel to `points`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point_colors: Vec<String>,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: ChartId,
    pub title: String,
    pub kind: ChartKind,
    pub x_title: String,
    pub y_title: String,
    pub traces: Vec<Trace>,
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        self.traces.iter().all(|t| t.points.is_empty())
    }
}
