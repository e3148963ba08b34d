//! JSON rule-table loader with built-in fallback.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use arkham_domain::{
    BackgroundTables, GenerationConfig, OccupationRecord, OccupationTable, RuleTables, SkillTable,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const OCCUPATIONS_FILE: &str = "occupations.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const BACKGROUNDS_FILE: &str = "backgrounds.json";
pub const GENERATION_FILE: &str = "generation.json";

#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("Table file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Table {} has no usable entries", .0.display())]
    Empty(PathBuf),
}

/// Loader for the rule tables under one data directory.
pub struct RuleTableLoader {
    data_dir: PathBuf,
}

impl RuleTableLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Every table, each falling back to the built-in one on its own.
    pub fn load(&self) -> RuleTables {
        let occupations = self
            .load_occupations()
            .unwrap_or_else(|e| fallback(OCCUPATIONS_FILE, e, RuleTables::builtin_occupations));
        let skills = self
            .load_skills()
            .unwrap_or_else(|e| fallback(SKILLS_FILE, e, RuleTables::builtin_skills));
        let backgrounds = self
            .load_backgrounds()
            .unwrap_or_else(|e| fallback(BACKGROUNDS_FILE, e, RuleTables::builtin_backgrounds));

        tracing::info!(
            data_dir = %self.data_dir.display(),
            occupations = occupations.len(),
            skills = skills.len(),
            "Rule tables loaded"
        );
        RuleTables::new(occupations, skills, backgrounds)
    }

    /// `generation.json`, or the rulebook defaults.
    pub fn load_generation_config(&self) -> GenerationConfig {
        self.read_json(GENERATION_FILE)
            .unwrap_or_else(|e| fallback(GENERATION_FILE, e, GenerationConfig::default))
    }

    /// Occupation records that fail to parse are skipped with a warning.
    pub fn load_occupations(&self) -> Result<OccupationTable, TableLoadError> {
        let records: BTreeMap<String, OccupationRecord> = self.read_json(OCCUPATIONS_FILE)?;
        let (table, rejected) = OccupationTable::from_records(&records);
        for (name, error) in &rejected {
            tracing::warn!(occupation = %name, error = %error, "Skipping malformed occupation");
        }
        if table.is_empty() {
            return Err(TableLoadError::Empty(self.path(OCCUPATIONS_FILE)));
        }
        Ok(table)
    }

    pub fn load_skills(&self) -> Result<SkillTable, TableLoadError> {
        let table: SkillTable = self.read_json(SKILLS_FILE)?;
        if table.is_empty() {
            return Err(TableLoadError::Empty(self.path(SKILLS_FILE)));
        }
        Ok(table)
    }

    pub fn load_backgrounds(&self) -> Result<BackgroundTables, TableLoadError> {
        self.read_json(BACKGROUNDS_FILE)
    }

    /// Write the built-in tables and generation config as editable JSON files.
    pub fn write_defaults(&self) -> Result<Vec<PathBuf>, TableLoadError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| TableLoadError::Io {
            path: self.data_dir.clone(),
            source,
        })?;
        Ok(vec![
            self.write_json(OCCUPATIONS_FILE, &RuleTables::builtin_occupation_records())?,
            self.write_json(SKILLS_FILE, &RuleTables::builtin_skills())?,
            self.write_json(BACKGROUNDS_FILE, &RuleTables::builtin_backgrounds())?,
            self.write_json(GENERATION_FILE, &GenerationConfig::default())?,
        ])
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, TableLoadError> {
        let path = self.path(file);
        if !path.exists() {
            return Err(TableLoadError::NotFound(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| TableLoadError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TableLoadError::Json { path, source })
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<PathBuf, TableLoadError> {
        let path = self.path(file);
        let content = serde_json::to_string_pretty(value).map_err(|source| TableLoadError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| TableLoadError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn fallback<T>(file: &str, error: TableLoadError, builtin: impl FnOnce() -> T) -> T {
    match error {
        TableLoadError::NotFound(_) => {
            tracing::debug!(file, "No table file, using built-in table")
        }
        error => tracing::warn!(file, error = %error, "Failed to load table, using built-in table"),
    }
    builtin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkham_domain::{AgeBracket, Attribute};
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, content: &str) {
        fs::write(dir.path().join(file), content).unwrap();
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let loader = RuleTableLoader::new("/definitely/not/here");
        assert_eq!(loader.load(), RuleTables::builtin());
        assert_eq!(loader.load_generation_config(), GenerationConfig::default());
        assert!(matches!(loader.load_skills(), Err(TableLoadError::NotFound(_))));
    }

    #[test]
    fn broken_json_falls_back_per_table() {
        let dir = TempDir::new().unwrap();
        write(&dir, SKILLS_FILE, "{ not json");
        write(
            &dir,
            OCCUPATIONS_FILE,
            r#"{
                "侦探": {
                    "description": "",
                    "skills": ["侦查", "心理学"],
                    "credit_rating": [20, 50],
                    "skill_points": "教育×4"
                }
            }"#,
        );

        let loader = RuleTableLoader::new(dir.path());
        assert!(matches!(loader.load_skills(), Err(TableLoadError::Json { .. })));

        let tables = loader.load();
        assert_eq!(tables.skills, RuleTables::builtin_skills());
        assert_eq!(tables.occupations.len(), 1);
        assert!(tables.occupations.get("侦探").is_some());
        assert_eq!(tables.backgrounds, RuleTables::builtin_backgrounds());
    }

    #[test]
    fn malformed_occupations_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            OCCUPATIONS_FILE,
            r#"{
                "侦探": {"skills": ["侦查"], "credit_rating": [20, 50], "skill_points": "教育×4"},
                "坏职业": {"skills": ["侦查"], "credit_rating": [80, 20], "skill_points": "教育×4"}
            }"#,
        );
        let table = RuleTableLoader::new(dir.path()).load_occupations().unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["侦探"]);
    }

    #[test]
    fn table_with_no_usable_occupation_is_empty_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, OCCUPATIONS_FILE, "{}");
        let loader = RuleTableLoader::new(dir.path());
        assert!(matches!(loader.load_occupations(), Err(TableLoadError::Empty(_))));
        assert_eq!(loader.load().occupations, RuleTables::builtin_occupations());
    }

    #[test]
    fn partial_generation_config_keeps_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            GENERATION_FILE,
            r#"{"attributes": {"力量": {"dice": "4D6", "multiplier": 5}}}"#,
        );
        let config = RuleTableLoader::new(dir.path()).load_generation_config();
        let defaults = GenerationConfig::default();
        assert_ne!(config.roll_for(Attribute::Strength), defaults.roll_for(Attribute::Strength));
        assert_eq!(config.roll_for(Attribute::Luck), defaults.roll_for(Attribute::Luck));
        assert_eq!(
            config.rules_for(AgeBracket::Eighties),
            defaults.rules_for(AgeBracket::Eighties)
        );
    }

    #[test]
    fn written_defaults_load_back_unchanged() {
        let dir = TempDir::new().unwrap();
        let loader = RuleTableLoader::new(dir.path().join("data"));
        let written = loader.write_defaults().unwrap();
        assert_eq!(written.len(), 4);

        let content = fs::read_to_string(loader.data_dir().join(SKILLS_FILE)).unwrap();
        assert!(content.contains("侦查"), "non-ASCII must be written verbatim");

        assert_eq!(loader.load_occupations().unwrap(), RuleTables::builtin_occupations());
        assert_eq!(loader.load_skills().unwrap(), RuleTables::builtin_skills());
        assert_eq!(loader.load_backgrounds().unwrap(), RuleTables::builtin_backgrounds());
        assert_eq!(loader.load_generation_config(), GenerationConfig::default());
    }
}
