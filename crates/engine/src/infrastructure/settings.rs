//! Engine settings from the environment.

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "ARKHAM_DATA_DIR";
pub const SAVE_DIR_VAR: &str = "ARKHAM_SAVE_DIR";
pub const SEED_VAR: &str = "ARKHAM_SEED";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_SAVE_DIR: &str = "saves";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} must be an unsigned integer, got {value:?}: {source}")]
    InvalidSeed {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Where rule tables and saves live, and an optional fixed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub data_dir: PathBuf,
    pub save_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            seed: None,
        }
    }
}

impl EngineSettings {
    /// Read `ARKHAM_DATA_DIR`, `ARKHAM_SAVE_DIR` and `ARKHAM_SEED`.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let seed = match non_empty(SEED_VAR) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|source| {
                SettingsError::InvalidSeed {
                    var: SEED_VAR,
                    value: value.clone(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(Self {
            data_dir: non_empty(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            save_dir: non_empty(SAVE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR)),
            seed,
        })
    }

    /// A seed given on the command line wins over the environment.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = EngineSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.save_dir, PathBuf::from("saves"));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn reads_every_variable() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/srv/tables"),
            (SAVE_DIR_VAR, "/srv/saves"),
            (SEED_VAR, " 1234 "),
        ]))
        .unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/srv/tables"));
        assert_eq!(settings.save_dir, PathBuf::from("/srv/saves"));
        assert_eq!(settings.seed, Some(1234));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings =
            EngineSettings::from_lookup(lookup(&[(DATA_DIR_VAR, "  "), (SEED_VAR, "")])).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn invalid_seed_is_an_error() {
        let err = EngineSettings::from_lookup(lookup(&[(SEED_VAR, "-3")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidSeed { ref value, .. } if value == "-3"));
        assert!(err.to_string().contains(SEED_VAR));
    }

    #[test]
    fn command_line_seed_overrides() {
        let settings = EngineSettings::default().with_seed(Some(7));
        assert_eq!(settings.seed, Some(7));
        let kept = settings.with_seed(None);
        assert_eq!(kept.seed, Some(7));
    }
}
