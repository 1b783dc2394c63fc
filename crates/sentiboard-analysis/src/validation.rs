//! Raw row validation.
//!
//! Policy: a row with a malformed date, a missing label, or a label outside
//! the closed vocabulary is dropped and reported. One issue is recorded per
//! dropped row (date, then sentiment, then topic). A bad rating never drops
//! a row; the rating becomes `None`.

use chrono::NaiveDate;
use sentiboard_core::constants::DEFAULT_DATE_FORMAT;
use sentiboard_core::errors::{DataQualityError, LabelField};
use sentiboard_core::types::{RawReview, ReviewRecord, Sentiment, Topic};
use serde::Serialize;

/// Outcome of validating a batch of raw rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedBatch {
    pub records: Vec<ReviewRecord>,
    pub report: DataQualityReport,
}

/// What validation dropped and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataQualityReport {
    pub total_rows: usize,
    pub accepted: usize,
    pub malformed_dates: usize,
    pub unknown_sentiments: usize,
    pub unknown_topics: usize,
    pub missing_labels: usize,
    /// Rows kept without a rating because the cell was not numeric.
    pub unparsed_ratings: usize,
    pub issues: Vec<DataQualityError>,
}

impl DataQualityReport {
    /// Rows dropped from aggregation.
    pub fn excluded(&self) -> usize {
        self.issues.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn record(&mut self, issue: DataQualityError) {
        match &issue {
            DataQualityError::MalformedDate { .. } => self.malformed_dates += 1,
            DataQualityError::UnknownCategory {
                field: LabelField::Sentiment,
                ..
            } => self.unknown_sentiments += 1,
            DataQualityError::UnknownCategory {
                field: LabelField::Topic,
                ..
            } => self.unknown_topics += 1,
            DataQualityError::MissingLabel { .. } => self.missing_labels += 1,
        }
        self.issues.push(issue);
    }
}

/// Turns [`RawReview`] rows into [`ReviewRecord`]s.
pub struct RecordValidator {
    date_format: String,
}

impl RecordValidator {
    /// Create a validator for dates in the given `chrono` format.
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Create a validator for `YYYY-MM-DD` dates.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }

    /// Validate every row, keeping the good ones in input order.
    pub fn validate(&self, rows: &[RawReview]) -> ValidatedBatch {
        let mut batch = ValidatedBatch {
            records: Vec::with_capacity(rows.len()),
            report: DataQualityReport {
                total_rows: rows.len(),
                ..DataQualityReport::default()
            },
        };

        for row in rows {
            match self.validate_row(row) {
                Ok((record, rating_ok)) => {
                    if !rating_ok {
                        batch.report.unparsed_ratings += 1;
                    }
                    batch.records.push(record);
                }
                Err(issue) => {
                    tracing::debug!(%issue, "dropping row");
                    batch.report.record(issue);
                }
            }
        }
        batch.report.accepted = batch.records.len();

        if !batch.report.is_clean() {
            tracing::warn!(
                excluded = batch.report.excluded(),
                malformed_dates = batch.report.malformed_dates,
                unknown_sentiments = batch.report.unknown_sentiments,
                unknown_topics = batch.report.unknown_topics,
                missing_labels = batch.report.missing_labels,
                "rows excluded from aggregation"
            );
        }
        batch
    }

    /// Validate one row. The flag is false when a rating cell was present
    /// but could not be read as a number.
    pub fn validate_row(&self, row: &RawReview) -> Result<(ReviewRecord, bool), DataQualityError> {
        let review_time = self.parse_date(row)?;
        let sentiment: Sentiment = parse_label(row.row, LabelField::Sentiment, &row.sentiment)?;
        let topic: Topic = parse_label(row.row, LabelField::Topic, &row.topic)?;
        let (overall, rating_ok) = parse_rating(&row.overall);

        Ok((
            ReviewRecord {
                review_time,
                overall,
                sentiment,
                topic,
            },
            rating_ok,
        ))
    }

    fn parse_date(&self, row: &RawReview) -> Result<NaiveDate, DataQualityError> {
        let value = row.review_time.as_deref().unwrap_or("").trim();
        NaiveDate::parse_from_str(value, &self.date_format).map_err(|_| {
            DataQualityError::MalformedDate {
                row: row.row,
                value: value.to_string(),
            }
        })
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn parse_label<T: std::str::FromStr>(
    row: usize,
    field: LabelField,
    cell: &Option<String>,
) -> Result<T, DataQualityError> {
    let value = match cell.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(DataQualityError::MissingLabel { row, field }),
    };
    value.parse().map_err(|_| DataQualityError::UnknownCategory {
        row,
        field,
        value: value.to_string(),
    })
}

fn parse_rating(cell: &Option<String>) -> (Option<f64>, bool) {
    match cell.as_deref().map(str::trim) {
        None | Some("") => (None, true),
        Some(v) => match v.parse::<f64>() {
            Ok(n) if n.is_finite() => (Some(n), true),
            _ => (None, false),
        },
    }
}
