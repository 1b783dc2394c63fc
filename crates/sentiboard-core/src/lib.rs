//! # sentiboard-core
//!
//! Core types, errors, config, tracing setup, and constants shared by the
//! sentiboard crates. Every other crate depends on this one; it depends on
//! none of them.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use config::DashboardConfig;
pub use types::{DateRange, RawReview, ReviewRecord, Sentiment, Topic};
