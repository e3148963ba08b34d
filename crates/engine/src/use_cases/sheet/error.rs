//! Sheet operation errors.

use crate::infrastructure::ports::StoreError;

/// Errors that can occur while reading, writing or exporting a sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Path has no file name: {0}")]
    NoFileName(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
