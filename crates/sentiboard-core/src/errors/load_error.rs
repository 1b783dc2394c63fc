//! Structural input errors.

/// Errors that make an input file unusable as a whole.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {message}")]
    Io { path: String, message: String },

    #[error("Input has no header row")]
    Empty,

    #[error("Required column '{column}' is missing (found: {found})")]
    MissingColumn { column: String, found: String },

    #[error("Malformed input at line {line}: {message}")]
    Csv { line: u64, message: String },
}
