//! # sentiboard-analysis
//!
//! Aggregation pipeline for labeled review data: row validation, date
//! filtering, month/day bucketing, counting, and normalization into the
//! series a dashboard renders.
//!
//! Everything here is a pure in-memory transform. No I/O, no shared state.

#![allow(clippy::module_inception)]

pub mod aggregation;
pub mod validation;

pub use aggregation::pipeline::{DashboardPipeline, DashboardSeries};
pub use aggregation::types::PipelineConfig;
pub use validation::{DataQualityReport, RecordValidator, ValidatedBatch};
