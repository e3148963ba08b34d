//! JSON file storage for investigator sheets.
//!
//! One pretty-printed document per investigator. Non-ASCII text is written
//! as-is so the files stay readable.

use std::fs;
use std::path::{Path, PathBuf};

use arkham_domain::Investigator;

use crate::infrastructure::ports::{InvestigatorStore, StoreError};

const EXTENSION: &str = "json";

/// Stores investigators as `<dir>/<name>.json`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target(&self, file_name: &str) -> Result<PathBuf, StoreError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty()
            || trimmed.contains(['/', '\\'])
            || trimmed == "."
            || trimmed == ".."
        {
            return Err(StoreError::InvalidFileName(file_name.to_string()));
        }
        let path = self.dir.join(trimmed);
        Ok(if path.extension().is_some_and(|ext| ext == EXTENSION) {
            path
        } else {
            self.dir.join(format!("{trimmed}.{EXTENSION}"))
        })
    }
}

impl InvestigatorStore for JsonFileStore {
    fn save(&self, investigator: &Investigator, file_name: &str) -> Result<PathBuf, StoreError> {
        let path = self.target(file_name)?;
        let content = serde_json::to_string_pretty(investigator)
            .map_err(|e| StoreError::serialization(format!("{}: {e}", path.display())))?;

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io("save", &self.dir, e))?;

        // Staged write: an existing save survives a failed write.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, content).map_err(|e| StoreError::io("save", &staging, e))?;
        fs::rename(&staging, &path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            StoreError::io("save", &path, e)
        })?;

        tracing::debug!(path = %path.display(), name = investigator.name(), "Investigator saved");
        Ok(path)
    }

    fn load(&self, path: &Path) -> Result<Investigator, StoreError> {
        if !path.exists() {
            return Err(StoreError::not_found(path));
        }
        let content = fs::read_to_string(path).map_err(|e| StoreError::io("load", path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::serialization(format!("{}: {e}", path.display())))
    }

    fn list(&self) -> Result<Vec<PathBuf>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::io("list", &self.dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io("list", &self.dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
