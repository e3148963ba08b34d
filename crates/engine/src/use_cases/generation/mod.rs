//! Investigator generation use cases.
//!
//! Rolls complete investigators from the loaded rule tables and optionally
//! saves them.

mod error;

pub use error::GenerationError;

use std::path::PathBuf;
use std::sync::Arc;

use arkham_domain::game_systems::coc7e::generate_investigator;
use arkham_domain::{
    GenerationConfig, GenerationRequest, GenerationSummary, Investigator, Occupation, RuleTables,
};

use crate::infrastructure::ports::{ClockPort, InvestigatorStore, RandomPort};

// =============================================================================
// Result Types
// =============================================================================

/// A freshly rolled investigator and what the pipeline decided.
#[derive(Debug, Clone)]
pub struct GeneratedInvestigator {
    pub investigator: Investigator,
    pub summary: GenerationSummary,
    /// Where the sheet was saved, when it was.
    pub path: Option<PathBuf>,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for generation use cases.
pub struct GenerationUseCases {
    tables: Arc<RuleTables>,
    config: Arc<GenerationConfig>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    store: Arc<dyn InvestigatorStore>,
}

impl GenerationUseCases {
    pub fn new(
        tables: Arc<RuleTables>,
        config: Arc<GenerationConfig>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        store: Arc<dyn InvestigatorStore>,
    ) -> Self {
        Self {
            tables,
            config,
            random,
            clock,
            store,
        }
    }

    /// Roll an investigator without saving it.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedInvestigator, GenerationError> {
        let (investigator, summary) =
            generate_investigator(&self.tables, &self.config, request, &mut |min, max| {
                self.random.gen_range(min, max)
            })?;

        tracing::info!(
            name = investigator.name(),
            occupation = %summary.occupation,
            age = investigator.age(),
            age_bracket = %summary.age_bracket,
            occupation_points = summary.budgets.occupation,
            interest_points = summary.budgets.interest,
            "Investigator generated"
        );
        for allocation in [&summary.occupation_allocation, &summary.interest_allocation] {
            tracing::debug!(
                pool = %allocation.pool,
                spent = allocation.spent,
                unspent = allocation.unspent(),
                draws = allocation.draws,
                "Skill points allocated"
            );
            if !allocation.skipped.is_empty() {
                tracing::warn!(
                    pool = %allocation.pool,
                    skipped = ?allocation.skipped,
                    "Occupation lists skills missing from the skill table"
                );
            }
        }

        Ok(GeneratedInvestigator {
            investigator,
            summary,
            path: None,
        })
    }

    /// Roll an investigator and save it under `file_name`, or under
    /// `<name>_<timestamp>` when none is given.
    pub fn generate_and_save(
        &self,
        request: &GenerationRequest,
        file_name: Option<&str>,
    ) -> Result<GeneratedInvestigator, GenerationError> {
        let mut generated = self.generate(request)?;
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => self.default_file_name(&generated.investigator),
        };
        let path = self.store.save(&generated.investigator, &file_name)?;
        tracing::info!(path = %path.display(), "Investigator saved");
        generated.path = Some(path);
        Ok(generated)
    }

    /// The editable starting sheet.
    pub fn blank(&self) -> Investigator {
        Investigator::blank()
    }

    pub fn occupations(&self) -> impl Iterator<Item = &Occupation> {
        self.tables.occupations.iter()
    }

    fn default_file_name(&self, investigator: &Investigator) -> String {
        let name: String = investigator
            .name()
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        format!("{}_{}", name, self.clock.now().format("%Y%m%d_%H%M%S"))
    }
}
