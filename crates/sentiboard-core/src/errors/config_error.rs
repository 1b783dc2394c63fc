//! Configuration errors.

/// Errors raised while locating, parsing, or validating `sentiboard.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read config {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Config parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
