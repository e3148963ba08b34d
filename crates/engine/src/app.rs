//! Application state and composition.

use std::sync::Arc;

use arkham_domain::{GenerationConfig, RuleTables};

use crate::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    importers::RuleTableLoader,
    persistence::JsonFileStore,
    ports::{ClockPort, InvestigatorStore, RandomPort},
    settings::EngineSettings,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the loaded rule tables and all use cases.
pub struct App {
    pub tables: Arc<RuleTables>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub generation: use_cases::GenerationUseCases,
    pub sheet: Arc<use_cases::SheetUseCases>,
    pub insanity: use_cases::InsanityUseCases,
    pub skills: use_cases::SkillUseCases,
}

impl App {
    /// Wire the adapters described by `settings`.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let loader = RuleTableLoader::new(&settings.data_dir);
        let tables = loader.load();
        let config = loader.load_generation_config();

        let random: Arc<dyn RandomPort> = match settings.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let store: Arc<dyn InvestigatorStore> = Arc::new(JsonFileStore::new(&settings.save_dir));

        Self::new(tables, config, random, clock, store)
    }

    pub fn new(
        tables: RuleTables,
        config: GenerationConfig,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        store: Arc<dyn InvestigatorStore>,
    ) -> Self {
        let tables = Arc::new(tables);
        let sheet = Arc::new(use_cases::SheetUseCases::new(store.clone()));

        let use_cases = UseCases {
            generation: use_cases::GenerationUseCases::new(
                tables.clone(),
                Arc::new(config),
                random.clone(),
                clock,
                store,
            ),
            insanity: use_cases::InsanityUseCases::new(sheet.clone(), random.clone()),
            skills: use_cases::SkillUseCases::new(tables.clone(), random),
            sheet,
        };

        Self { tables, use_cases }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkham_domain::GenerationRequest;
    use tempfile::TempDir;

    #[test]
    fn seeded_apps_generate_identical_saves() {
        let dir = TempDir::new().unwrap();
        let settings = EngineSettings {
            data_dir: dir.path().join("data"),
            save_dir: dir.path().join("saves"),
            seed: Some(99),
        };

        let first = App::from_settings(&settings)
            .use_cases
            .generation
            .generate_and_save(&GenerationRequest::default(), Some("first"))
            .unwrap();
        let second = App::from_settings(&settings)
            .use_cases
            .generation
            .generate_and_save(&GenerationRequest::default(), Some("second"))
            .unwrap();
        assert_eq!(first.investigator, second.investigator);

        let app = App::from_settings(&settings);
        assert_eq!(app.use_cases.sheet.list().unwrap().len(), 2);
        let loaded = app
            .use_cases
            .sheet
            .load(&dir.path().join("saves").join("first.json"))
            .unwrap();
        assert_eq!(loaded, first.investigator);
    }
}
