//! Recoverable per-row data-quality errors.

use std::fmt;

use serde::Serialize;

/// Which label column a category error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelField {
    Sentiment,
    Topic,
}

impl LabelField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentiment => "sentiment",
            Self::Topic => "topic",
        }
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label outside its closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {field} label '{value}'")]
pub struct ParseCategoryError {
    pub field: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    pub fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// A row excluded from aggregation. Rows are numbered from 1, header excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityError {
    #[error("Row {row}: malformed date '{value}'")]
    MalformedDate { row: usize, value: String },

    #[error("Row {row}: unknown {field} '{value}'")]
    UnknownCategory {
        row: usize,
        field: LabelField,
        value: String,
    },

    #[error("Row {row}: missing {field} label")]
    MissingLabel { row: usize, field: LabelField },
}

impl DataQualityError {
    pub fn row(&self) -> usize {
        match self {
            Self::MalformedDate { row, .. }
            | Self::UnknownCategory { row, .. }
            | Self::MissingLabel { row, .. } => *row,
        }
    }
}
