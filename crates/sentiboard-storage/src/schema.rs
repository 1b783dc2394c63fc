//! Header resolution.

use csv::StringRecord;
use sentiboard_core::config::DataConfig;
use sentiboard_core::constants::{
    DEFAULT_DATE_COLUMN, DEFAULT_RATING_COLUMN, DEFAULT_SENTIMENT_COLUMN, DEFAULT_TOPIC_COLUMN,
};
use sentiboard_core::errors::LoadError;

/// Names of the required input columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub date: String,
    pub rating: String,
    pub sentiment: String,
    pub topic: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_COLUMN.to_string(),
            rating: DEFAULT_RATING_COLUMN.to_string(),
            sentiment: DEFAULT_SENTIMENT_COLUMN.to_string(),
            topic: DEFAULT_TOPIC_COLUMN.to_string(),
        }
    }
}

impl From<&DataConfig> for ColumnSpec {
    fn from(config: &DataConfig) -> Self {
        Self {
            date: config.effective_date_column().to_string(),
            rating: config.effective_rating_column().to_string(),
            sentiment: config.effective_sentiment_column().to_string(),
            topic: config.effective_topic_column().to_string(),
        }
    }
}

/// Field positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub date: usize,
    pub rating: usize,
    pub sentiment: usize,
    pub topic: usize,
}

impl ColumnIndex {
    /// Locate every required column. Header names are compared exactly
    /// after trimming; the first occurrence wins.
    pub fn resolve(headers: &StringRecord, spec: &ColumnSpec) -> Result<Self, LoadError> {
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::Empty);
        }
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: name.to_string(),
                    found: headers.iter().collect::<Vec<_>>().join(", "),
                })
        };
        Ok(Self {
            date: find(&spec.date)?,
            rating: find(&spec.rating)?,
            sentiment: find(&spec.sentiment)?,
            topic: find(&spec.topic)?,
        })
    }
}
