//! Individual config sections. Every field is optional; `effective_*`
//! accessors fill in the defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_PATH, DEFAULT_DATE_COLUMN, DEFAULT_DATE_FORMAT, DEFAULT_RATING_COLUMN,
    DEFAULT_SENTIMENT_COLUMN, DEFAULT_TOPIC_COLUMN, DEFAULT_TOPIC_STACK_ORDER,
};
use crate::errors::ConfigError;
use crate::types::{Granularity, Topic};

/// `[data]`: where the input lives and what its columns are called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub path: Option<PathBuf>,
    pub date_column: Option<String>,
    pub rating_column: Option<String>,
    pub sentiment_column: Option<String>,
    pub topic_column: Option<String>,
    /// `chrono` strftime format for the date column.
    pub date_format: Option<String>,
}

impl DataConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn effective_date_column(&self) -> &str {
        self.date_column.as_deref().unwrap_or(DEFAULT_DATE_COLUMN)
    }

    pub fn effective_rating_column(&self) -> &str {
        self.rating_column.as_deref().unwrap_or(DEFAULT_RATING_COLUMN)
    }

    pub fn effective_sentiment_column(&self) -> &str {
        self.sentiment_column
            .as_deref()
            .unwrap_or(DEFAULT_SENTIMENT_COLUMN)
    }

    pub fn effective_topic_column(&self) -> &str {
        self.topic_column.as_deref().unwrap_or(DEFAULT_TOPIC_COLUMN)
    }

    pub fn effective_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let columns = [
            ("data.date_column", &self.date_column),
            ("data.rating_column", &self.rating_column),
            ("data.sentiment_column", &self.sentiment_column),
            ("data.topic_column", &self.topic_column),
            ("data.date_format", &self.date_format),
        ];
        for (field, value) in columns {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// `[pipeline]`: aggregation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSection {
    /// Topic column order for the daily topic grid, by display name.
    pub topic_order: Option<Vec<String>>,
    /// Bucket width of the sentiment-over-time series: `month` or `day`.
    pub sentiment_granularity: Option<Granularity>,
}

impl PipelineSection {
    /// Resolved topic order. Only valid after [`PipelineSection::validate`].
    pub fn effective_topic_order(&self) -> Vec<Topic> {
        match &self.topic_order {
            Some(names) => names.iter().filter_map(|n| n.parse().ok()).collect(),
            None => DEFAULT_TOPIC_STACK_ORDER.to_vec(),
        }
    }

    pub fn effective_sentiment_granularity(&self) -> Granularity {
        self.sentiment_granularity.unwrap_or_default()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let Some(names) = &self.topic_order else {
            return Ok(());
        };
        if names.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.topic_order".to_string(),
                message: "must name at least one topic".to_string(),
            });
        }
        let mut seen = Vec::with_capacity(names.len());
        for name in names {
            let topic: Topic = name.parse().map_err(|e| ConfigError::InvalidValue {
                field: "pipeline.topic_order".to_string(),
                message: format!("{e}"),
            })?;
            if seen.contains(&topic) {
                return Err(ConfigError::InvalidValue {
                    field: "pipeline.topic_order".to_string(),
                    message: format!("duplicate topic '{topic}'"),
                });
            }
            seen.push(topic);
        }
        Ok(())
    }
}

/// `[palette]`: colour overrides keyed by label display name.
///
/// Consumed only by the rendering layer; the pipeline never sees colours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub sentiment: BTreeMap<String, String>,
    pub topic: BTreeMap<String, String>,
    pub topic_stack: BTreeMap<String, String>,
}

impl PaletteConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for key in self.sentiment.keys() {
            key.parse::<crate::types::Sentiment>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "palette.sentiment".to_string(),
                    message: format!("{e}"),
                })?;
        }
        for (field, map) in [("palette.topic", &self.topic), ("palette.topic_stack", &self.topic_stack)] {
            for key in map.keys() {
                key.parse::<Topic>().map_err(|e| ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{e}"),
                })?;
            }
        }
        Ok(())
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!("unknown format '{other}' (expected text, json, or yaml)"),
            }),
        }
    }
}

/// `[output]`: report rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    /// Width in characters of the longest bar in text output.
    pub bar_width: Option<usize>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn effective_bar_width(&self) -> usize {
        self.bar_width.unwrap_or(40).clamp(1, 200)
    }
}
