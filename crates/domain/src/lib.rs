//! Call of Cthulhu 7e investigator rules.
//!
//! Pure and synchronous: no I/O, no logging, no owned randomness. Every
//! operation that rolls dice takes a [`RandomSource`], which any
//! `FnMut(i32, i32) -> i32` closure satisfies.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{Investigator, SkillWrite, SKILL_MAX};
pub use entities::{
    Background, BackgroundTables, CreditRating, Occupation, OccupationRecord, OccupationTable,
    Possession, SkillCategory, SkillDefinition, SkillTable,
};
pub use error::DomainError;
pub use game_systems::coc7e::{
    GenerationConfig, GenerationRequest, GenerationSummary, RuleTables,
};
pub use value_objects::{
    AgeBracket, AgeRules, Attribute, Attributes, DiceFormula, DiceParseError, DiceRollResult,
    OccupationSkillEntry, RandomSource, SkillLabel, SkillPointFormula, SkillPool, SpendingLevel,
};
