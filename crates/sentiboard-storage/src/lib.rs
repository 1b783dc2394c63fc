//! # sentiboard-storage
//!
//! Tabular input layer: resolves the configured columns against a CSV header
//! and reads every data row into a [`RawReview`](sentiboard_core::RawReview).
//! Rows are not validated here; a missing column or a structurally broken
//! file is the only failure.

pub mod csv_source;
pub mod schema;

pub use csv_source::{read_reviews, CsvReviewSource};
pub use schema::{ColumnIndex, ColumnSpec};
