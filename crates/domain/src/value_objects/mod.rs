//! Value objects - Immutable objects defined by their attributes

mod age;
mod attribute;
mod dice;
mod formula;
mod random;
mod skill_label;
mod skill_pool;
mod spending_level;

pub use age::{AgeBracket, AgeRules, MAX_AGE, MIN_AGE};
pub use attribute::{Attribute, Attributes, ATTRIBUTE_MAX};
pub use dice::{DiceFormula, DiceParseError, DiceRollResult};
pub use formula::{OccupationSkillEntry, SkillPointFormula};
pub use random::RandomSource;
pub use skill_label::{SkillLabel, LANGUAGE_SKILL};
pub use skill_pool::SkillPool;
pub use spending_level::SpendingLevel;

#[cfg(test)]
pub(crate) use random::testing;
