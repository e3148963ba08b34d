//! Error types for port operations.

use std::path::PathBuf;

/// Storage operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// File not found - includes the path for actionable error messages.
    #[error("Investigator file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem operation failed - includes operation name for tracing.
    #[error("IO error in {operation} ({}): {message}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File name rejected before touching the filesystem.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

impl StoreError {
    /// Create a NotFound error for `path`.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an Io error with operation context.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
