//! Investigator generation errors.

use crate::infrastructure::ports::StoreError;
use arkham_domain::DomainError;

/// Errors that can occur while generating an investigator.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
