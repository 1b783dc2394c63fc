//! Sentiment charts: count bar, share donut, proportion-over-time lines.

use sentiboard_analysis::aggregation::types::{NormalizedSentimentSeries, SentimentCountSeries};

use super::{Chart, ChartId, ChartKind, Palette, Point, Trace};

pub fn sentiment_count_chart(series: &SentimentCountSeries, palette: &Palette) -> Chart {
    let trace = Trace {
        name: "count".to_string(),
        color: None,
        point_colors: series
            .entries
            .iter()
            .map(|e| palette.sentiment(e.sentiment).to_string())
            .collect(),
        points: series
            .entries
            .iter()
            .map(|e| Point::new(e.sentiment.as_str(), e.count as f64))
            .collect(),
    };
    Chart {
        id: ChartId::SentimentCount,
        title: "Sentiment Count".to_string(),
        kind: ChartKind::Bar,
        x_title: "Sentiment".to_string(),
        y_title: "Count".to_string(),
        traces: vec![trace],
    }
}

pub fn sentiment_share_chart(series: &SentimentCountSeries, palette: &Palette) -> Chart {
    let shares = series.percentages();
    let trace = Trace {
        name: "share".to_string(),
        color: None,
        point_colors: shares
            .iter()
            .map(|s| palette.sentiment(s.sentiment).to_string())
            .collect(),
        points: shares
            .iter()
            .map(|s| Point::new(s.sentiment.as_str(), s.percentage))
            .collect(),
    };
    Chart {
        id: ChartId::SentimentShare,
        title: "Sentiment Percentage".to_string(),
        kind: ChartKind::Donut,
        x_title: "Sentiment".to_string(),
        y_title: "Percentage".to_string(),
        traces: vec![trace],
    }
}

/// One line per sentiment seen anywhere in the range. A bucket that lacks
/// the sentiment plots 0.
pub fn sentiment_over_time_chart(series: &NormalizedSentimentSeries, palette: &Palette) -> Chart {
    let traces = series
        .sentiments_present()
        .into_iter()
        .map(|sentiment| Trace {
            name: sentiment.as_str().to_string(),
            color: Some(palette.sentiment(sentiment).to_string()),
            point_colors: Vec::new(),
            points: series
                .buckets
                .iter()
                .map(|b| Point::new(b.label.clone(), b.get(sentiment).unwrap_or(0.0)))
                .collect(),
        })
        .collect();
    Chart {
        id: ChartId::SentimentOverTime,
        title: "Normalized Sentiment Analysis Over Time".to_string(),
        kind: ChartKind::Line,
        x_title: "Date".to_string(),
        y_title: "Proportion".to_string(),
        traces,
    }
}
