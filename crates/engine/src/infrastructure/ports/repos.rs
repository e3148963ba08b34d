//! Storage port for investigator sheets.

use std::path::{Path, PathBuf};

use arkham_domain::Investigator;

use super::error::StoreError;

// =============================================================================
// Investigator Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait InvestigatorStore: Send + Sync {
    /// Persist `investigator` under `file_name` and return where it landed.
    ///
    /// The record is only read; a failed save leaves it as it was.
    fn save(&self, investigator: &Investigator, file_name: &str) -> Result<PathBuf, StoreError>;

    fn load(&self, path: &Path) -> Result<Investigator, StoreError>;

    /// Every saved sheet, sorted by path.
    fn list(&self) -> Result<Vec<PathBuf>, StoreError>;
}
