//! Rule-table importers.
//!
//! Loads the JSON rule tables from the data directory, converting them to
//! domain tables. Any table that is missing or broken is replaced by its
//! built-in counterpart.

mod rule_tables;

pub use rule_tables::{
    RuleTableLoader, TableLoadError, BACKGROUNDS_FILE, GENERATION_FILE, OCCUPATIONS_FILE,
    SKILLS_FILE,
};
