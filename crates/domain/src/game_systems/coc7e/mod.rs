//! Call of Cthulhu 7th Edition rules.
//!
//! - `attributes`: characteristic rolls, age adjustment, derived stats
//! - `allocation`: skill-point budgets, occupation list expansion, random and manual spending
//! - `language`: language family transfer
//! - `insanity`: sanity loss and the insanity state machine
//! - `check`: percentile skill checks
//! - `background`, `generation`: the random investigator pipeline
//! - `tables`: built-in rule tables

pub mod allocation;
pub mod attributes;
pub mod background;
pub mod check;
pub mod generation;
pub mod insanity;
pub mod language;
pub mod tables;

pub use allocation::{
    allocate, allocate_interest, compute_budgets, expand_occupation_skill_list,
    initialize_base_skills, reset_skill_points, spend_points, AllocationSummary, SkillBudgets,
    SpendOutcome, ALLOCATION_CEILING, MAX_POINTS_PER_DRAW,
};
pub use attributes::{
    adjust_for_age, base_mov, default_attribute_rolls, roll_attributes, AgeAdjustment,
    AttributeRoll, DamageBonus, DerivedStats,
};
pub use background::generate_background;
pub use check::{
    check_success, push_check, skill_check, CheckResult, Difficulty, PushedCheck, SuccessLevel,
    MAX_NET_DICE,
};
pub use generation::{
    generate_investigator, GenerationConfig, GenerationRequest, GenerationSummary, CITIES,
};
pub use insanity::{
    apply_insanity, attempt_recovery, lose_sanity, InsanityKind, InsanityReport, RecoveryOutcome,
    SanityLoss,
};
pub use language::{language_families, LanguageFamily};
pub use tables::RuleTables;
