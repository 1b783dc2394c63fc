//! Error types for every sentiboard subsystem.
//!
//! Fatal errors (`ConfigError`, `LoadError`) abort before any aggregation
//! runs. `DataQualityError` is recoverable: the offending row is dropped and
//! the issue is reported.

pub mod config_error;
pub mod data_quality;
pub mod load_error;

pub use config_error::ConfigError;
pub use data_quality::{DataQualityError, LabelField, ParseCategoryError};
pub use load_error::LoadError;
