//! Rule tables: occupations, skills and background options.
//!
//! Each table is independently replaceable. The built-in set is complete on
//! its own and is what the engine falls back to when a table file is missing
//! or broken.

mod backgrounds;
mod occupations;
mod skills;

use crate::entities::{BackgroundTables, OccupationRecord, OccupationTable, SkillTable};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    pub occupations: OccupationTable,
    pub skills: SkillTable,
    pub backgrounds: BackgroundTables,
}

impl RuleTables {
    pub fn new(
        occupations: OccupationTable,
        skills: SkillTable,
        backgrounds: BackgroundTables,
    ) -> Self {
        Self {
            occupations,
            skills,
            backgrounds,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            occupations::builtin_occupations(),
            skills::builtin_skills(),
            backgrounds::builtin_backgrounds(),
        )
    }

    pub fn builtin_occupations() -> OccupationTable {
        occupations::builtin_occupations()
    }

    /// Built-in occupations in their file form, for writing a starter data dir.
    pub fn builtin_occupation_records() -> BTreeMap<String, OccupationRecord> {
        occupations::builtin_occupation_records()
    }

    pub fn builtin_skills() -> SkillTable {
        skills::builtin_skills()
    }

    pub fn builtin_backgrounds() -> BackgroundTables {
        backgrounds::builtin_backgrounds()
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::builtin()
    }
}
