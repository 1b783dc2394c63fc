//! Aggregation: filter, group, count, normalize.

pub mod filter;
pub mod grouper;
pub mod pipeline;
pub mod sentiment;
pub mod summary;
pub mod topics;
pub mod types;

pub use filter::{date_bounds, filter_by_date_range};
pub use grouper::{group_counts, group_normalize, Granularity};
pub use sentiment::{monthly_normalized_sentiment, normalized_sentiment_over_time, sentiment_counts};
pub use summary::{summarize, DashboardSummary};
pub use topics::{daily_topic_counts, topic_counts, topic_sentiment_percentages};
