//! Sanity loss, insanity bouts and recovery.
//!
//! The in-memory operations mutate a record and return the rules report.
//! The `*_saved` variants load a sheet, apply the operation and write it back.

mod error;

pub use error::InsanityError;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arkham_domain::game_systems::coc7e::{
    apply_insanity, attempt_recovery, lose_sanity, InsanityReport, RecoveryOutcome, SanityLoss,
};
use arkham_domain::Investigator;

use crate::infrastructure::ports::RandomPort;
use crate::use_cases::sheet::SheetUseCases;

/// A sanity loss and the bout it set off, if any.
#[derive(Debug, Clone)]
pub struct SanityOutcome {
    pub loss: SanityLoss,
    pub report: Option<InsanityReport>,
}

/// Container for insanity use cases.
pub struct InsanityUseCases {
    sheet: Arc<SheetUseCases>,
    random: Arc<dyn RandomPort>,
}

impl InsanityUseCases {
    pub fn new(sheet: Arc<SheetUseCases>, random: Arc<dyn RandomPort>) -> Self {
        Self { sheet, random }
    }

    pub fn apply(&self, investigator: &mut Investigator) -> InsanityReport {
        let report = apply_insanity(investigator, &mut |min, max| self.random.gen_range(min, max));
        tracing::info!(
            name = investigator.name(),
            kind = %report.kind,
            status = investigator.status(),
            "Insanity applied"
        );
        report
    }

    pub fn recover(&self, investigator: &mut Investigator) -> RecoveryOutcome {
        let outcome =
            attempt_recovery(investigator, &mut |min, max| self.random.gen_range(min, max));
        tracing::info!(
            name = investigator.name(),
            kind = %outcome.kind,
            success = outcome.success,
            roll = ?outcome.roll,
            "Recovery attempted"
        );
        outcome
    }

    /// Take `amount` SAN; a loss that sets an insanity flag immediately
    /// rolls the bout.
    pub fn lose_sanity(
        &self,
        investigator: &mut Investigator,
        amount: i32,
    ) -> Result<SanityOutcome, InsanityError> {
        if amount < 0 {
            return Err(InsanityError::NegativeLoss(amount));
        }
        let loss = lose_sanity(investigator, amount);
        tracing::info!(
            name = investigator.name(),
            previous = loss.previous,
            current = loss.current,
            "Sanity lost"
        );
        let report = (loss.temporary_triggered || loss.permanent_triggered)
            .then(|| self.apply(investigator));
        Ok(SanityOutcome { loss, report })
    }

    pub fn apply_saved(&self, path: &Path) -> Result<(InsanityReport, PathBuf), InsanityError> {
        let mut investigator = self.sheet.load(path)?;
        let report = self.apply(&mut investigator);
        let saved = self.sheet.save_as_loaded(&investigator, path)?;
        Ok((report, saved))
    }

    pub fn recover_saved(&self, path: &Path) -> Result<(RecoveryOutcome, PathBuf), InsanityError> {
        let mut investigator = self.sheet.load(path)?;
        let outcome = self.recover(&mut investigator);
        let saved = self.sheet.save_as_loaded(&investigator, path)?;
        Ok((outcome, saved))
    }

    pub fn lose_sanity_saved(
        &self,
        path: &Path,
        amount: i32,
    ) -> Result<(SanityOutcome, PathBuf), InsanityError> {
        let mut investigator = self.sheet.load(path)?;
        let outcome = self.lose_sanity(&mut investigator, amount)?;
        let saved = self.sheet.save_as_loaded(&investigator, path)?;
        Ok((outcome, saved))
    }
}
