//! # sentiboard-cli
//!
//! Rendering side of the review dashboard.
//!
//! Architecture:
//! - `runtime`: `DashboardRuntime` owning config and the read-only dataset
//! - `charts`: chart payloads built from pipeline series, with palettes
//! - `report`: KPIs + charts for one filter selection
//! - `formats`: text, JSON, and YAML output
//! - `error_codes`: stable error codes and process exit codes

pub mod charts;
pub mod error_codes;
pub mod formats;
pub mod report;
pub mod runtime;
