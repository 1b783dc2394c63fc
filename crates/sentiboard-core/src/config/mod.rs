//! Configuration: `sentiboard.toml` sections and their effective defaults.

pub mod dashboard_config;
pub mod sections;

pub use dashboard_config::DashboardConfig;
pub use sections::{DataConfig, OutputConfig, OutputFormat, PaletteConfig, PipelineSection};
