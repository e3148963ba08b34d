//! Sheet use cases: loading, saving, listing and text export.

mod error;

pub use error::SheetError;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arkham_domain::Investigator;

use crate::infrastructure::export::{export_text, render_text};
use crate::infrastructure::ports::InvestigatorStore;

/// Container for sheet use cases.
pub struct SheetUseCases {
    store: Arc<dyn InvestigatorStore>,
}

impl SheetUseCases {
    pub fn new(store: Arc<dyn InvestigatorStore>) -> Self {
        Self { store }
    }

    pub fn load(&self, path: &Path) -> Result<Investigator, SheetError> {
        Ok(self.store.load(path)?)
    }

    pub fn save(
        &self,
        investigator: &Investigator,
        file_name: &str,
    ) -> Result<PathBuf, SheetError> {
        Ok(self.store.save(investigator, file_name)?)
    }

    /// Save back under the file name `path` was loaded from.
    pub fn save_as_loaded(
        &self,
        investigator: &Investigator,
        path: &Path,
    ) -> Result<PathBuf, SheetError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SheetError::NoFileName(path.display().to_string()))?;
        let saved = self.store.save(investigator, file_name)?;
        if saved != path {
            tracing::info!(
                from = %path.display(),
                to = %saved.display(),
                "Sheet saved to the save directory"
            );
        }
        Ok(saved)
    }

    pub fn list(&self) -> Result<Vec<PathBuf>, SheetError> {
        Ok(self.store.list()?)
    }

    /// Load and render the sheet at `path`.
    pub fn render(&self, path: &Path) -> Result<String, SheetError> {
        Ok(render_text(&self.load(path)?))
    }

    /// Export the sheet at `path` as text to `output`, or beside it as `.txt`.
    pub fn export(&self, path: &Path, output: Option<&Path>) -> Result<PathBuf, SheetError> {
        let investigator = self.load(path)?;
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.with_extension("txt"));
        export_text(&investigator, &output)?;
        tracing::info!(path = %output.display(), name = investigator.name(), "Sheet exported");
        Ok(output)
    }
}
