//! Top-level `DashboardConfig` and its loading rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

use super::sections::{DataConfig, OutputConfig, PaletteConfig, PipelineSection};

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub pipeline: PipelineSection,
    pub palette: PaletteConfig,
    pub output: OutputConfig,
}

impl DashboardConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml(&contents)?;
        config.resolve_relative_paths(path.parent());
        Ok(config)
    }

    /// Resolve configuration for a project.
    ///
    /// An explicit path must exist. Otherwise `<root>/sentiboard.toml` is used
    /// when present, and defaults when not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading explicit config");
            return Self::from_file(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading project config");
            Self::from_file(&candidate)
        } else {
            tracing::debug!(root = %root.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.data.validate()?;
        self.pipeline.validate()?;
        self.palette.validate()?;
        Ok(())
    }

    /// Data paths in a config file are relative to that file.
    fn resolve_relative_paths(&mut self, base: Option<&Path>) {
        let (Some(base), Some(path)) = (base, self.data.path.as_ref()) else {
            return;
        };
        if path.is_relative() {
            self.data.path = Some(PathBuf::from(base).join(path));
        }
    }
}
