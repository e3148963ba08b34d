//! Sanity and insanity operation errors.

use crate::use_cases::sheet::SheetError;

#[derive(Debug, thiserror::Error)]
pub enum InsanityError {
    #[error("Sanity loss must not be negative, got {0}")]
    NegativeLoss(i32),

    #[error(transparent)]
    Sheet(#[from] SheetError),
}
