//! Workspace-wide constants: default column names, formats, and topic order.

use crate::types::Topic;

/// Config file looked up in the project root when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "sentiboard.toml";

/// Default input file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "topics_classified.csv";

pub const DEFAULT_DATE_COLUMN: &str = "reviewTime";
pub const DEFAULT_RATING_COLUMN: &str = "overall";
pub const DEFAULT_SENTIMENT_COLUMN: &str = "sentiment";
pub const DEFAULT_TOPIC_COLUMN: &str = "deberta_topics";

/// `chrono` format of the date column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stacking order for the topic-over-time chart, bottom layer first.
pub const DEFAULT_TOPIC_STACK_ORDER: [Topic; 5] = [
    Topic::CompatibilityWithDevices,
    Topic::Price,
    Topic::ProductFunctionality,
    Topic::Quality,
    Topic::DeliveryService,
];

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "SENTIBOARD_LOG";
