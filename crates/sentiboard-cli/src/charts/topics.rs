//! Topic charts: distribution bars, sentiment-by-topic stack, topic areas.

use sentiboard_analysis::aggregation::types::{
    DailyTopicSeries, TopicCountSeries, TopicSentimentSeries,
};
use sentiboard_core::types::Sentiment;

use super::{Chart, ChartId, ChartKind, Palette, Point, Trace};

/// Stacking order of the sentiment-by-topic bars, bottom first.
const SENTIMENT_STACK_ORDER: [Sentiment; 3] =
    [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

/// Horizontal bars, smallest topic first.
pub fn topic_distribution_chart(series: &TopicCountSeries, palette: &Palette) -> Chart {
    let trace = Trace {
        name: "frequency".to_string(),
        color: None,
        point_colors: series
            .entries
            .iter()
            .map(|e| palette.topic(e.topic).to_string())
            .collect(),
        points: series
            .entries
            .iter()
            .map(|e| Point::new(e.topic.as_str(), e.count as f64))
            .collect(),
    };
    Chart {
        id: ChartId::TopicDistribution,
        title: "Distribution of Classified Topics".to_string(),
        kind: ChartKind::HorizontalBar,
        x_title: "Frequency".to_string(),
        y_title: "Topic".to_string(),
        traces: vec![trace],
    }
}

/// One stacked segment per sentiment observed in any topic.
pub fn sentiment_by_topic_chart(series: &TopicSentimentSeries, palette: &Palette) -> Chart {
    let traces = SENTIMENT_STACK_ORDER
        .iter()
        .copied()
        .filter(|s| series.topics.iter().any(|t| t.get(*s).is_some()))
        .map(|sentiment| Trace {
            name: sentiment.as_str().to_string(),
            color: Some(palette.sentiment(sentiment).to_string()),
            point_colors: Vec::new(),
            points: series
                .topics
                .iter()
                .map(|t| Point::new(t.topic.as_str(), t.get(sentiment).unwrap_or(0.0)))
                .collect(),
        })
        .collect();
    Chart {
        id: ChartId::SentimentByTopic,
        title: "Sentiment Distribution by Topic in Percentage".to_string(),
        kind: ChartKind::StackedBar,
        x_title: "Topics".to_string(),
        y_title: "Percentage".to_string(),
        traces,
    }
}

/// One stacked area per grid column, in grid order.
pub fn topic_over_time_chart(series: &DailyTopicSeries, palette: &Palette) -> Chart {
    let traces = series
        .topics
        .iter()
        .enumerate()
        .map(|(col, topic)| Trace {
            name: topic.as_str().to_string(),
            color: Some(palette.topic_stack(*topic).to_string()),
            point_colors: Vec::new(),
            points: series
                .rows
                .iter()
                .map(|r| {
                    let count = r.counts.get(col).copied().unwrap_or(0);
                    Point::new(r.day.format("%Y-%m-%d").to_string(), count as f64)
                })
                .collect(),
        })
        .collect();
    Chart {
        id: ChartId::TopicOverTime,
        title: "Topic Distribution Over Time".to_string(),
        kind: ChartKind::StackedArea,
        x_title: "Day".to_string(),
        y_title: "Number of Mentions".to_string(),
        traces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sentiboard_analysis::aggregation::{
        daily_topic_counts, topic_counts, topic_sentiment_percentages,
    };
    use sentiboard_core::constants::DEFAULT_TOPIC_STACK_ORDER;
    use sentiboard_core::types::{ReviewRecord, Topic};

    fn records() -> Vec<ReviewRecord> {
        let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();
        vec![
            ReviewRecord::new(d(1, 5), Sentiment::Positive, Topic::Price),
            ReviewRecord::new(d(1, 20), Sentiment::Negative, Topic::Price),
            ReviewRecord::new(d(2, 1), Sentiment::Positive, Topic::Quality),
        ]
    }

    #[test]
    fn test_distribution_ascending_with_topic_colors() {
        let chart = topic_distribution_chart(&topic_counts(&records()), &Palette::default());
        let trace = &chart.traces[0];
        assert_eq!(trace.points[0], Point::new("Quality", 1.0));
        assert_eq!(trace.points[1], Point::new("Price", 2.0));
        assert_eq!(trace.point_colors, vec!["#FFD700", "#FFA500"]);
    }

    #[test]
    fn test_sentiment_by_topic_stacks_negative_first_and_skips_absent() {
        let chart = sentiment_by_topic_chart(
            &topic_sentiment_percentages(&records()),
            &Palette::default(),
        );
        let names: Vec<&str> = chart.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["negative", "positive"]);
        let negative = &chart.traces[0];
        assert_eq!(negative.points[0], Point::new("Price", 50.0));
        assert_eq!(negative.points[1], Point::new("Quality", 0.0));
    }

    #[test]
    fn test_topic_over_time_has_one_area_per_column() {
        let chart = topic_over_time_chart(
            &daily_topic_counts(&records(), &DEFAULT_TOPIC_STACK_ORDER),
            &Palette::default(),
        );
        assert_eq!(chart.traces.len(), 5);
        assert_eq!(chart.traces[0].name, "Compatibility with devices");
        assert_eq!(chart.traces[0].color.as_deref(), Some("red"));
        let price = &chart.traces[1];
        assert_eq!(price.points.len(), 3);
        assert_eq!(price.points[0], Point::new("2023-01-05", 1.0));
        assert_eq!(price.points[2], Point::new("2023-02-01", 0.0));
    }
}
