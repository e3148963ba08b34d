//! Age brackets and the per-bracket characteristic adjustments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Youngest age an investigator may be created at.
pub const MIN_AGE: u32 = 15;
/// Oldest age an investigator may be created at.
pub const MAX_AGE: u32 = 89;

/// One of the seven rulebook age bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "15-19")]
    Teens,
    #[serde(rename = "20-39")]
    Adult,
    #[serde(rename = "40-49")]
    Forties,
    #[serde(rename = "50-59")]
    Fifties,
    #[serde(rename = "60-69")]
    Sixties,
    #[serde(rename = "70-79")]
    Seventies,
    #[serde(rename = "80-89")]
    Eighties,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 7] = [
        AgeBracket::Teens,
        AgeBracket::Adult,
        AgeBracket::Forties,
        AgeBracket::Fifties,
        AgeBracket::Sixties,
        AgeBracket::Seventies,
        AgeBracket::Eighties,
    ];

    /// The bracket containing `age`, or `None` outside 15-89.
    pub fn from_age(age: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| {
            let (low, high) = b.range();
            (low..=high).contains(&age)
        })
    }

    /// Inclusive age range.
    pub fn range(&self) -> (u32, u32) {
        match self {
            AgeBracket::Teens => (15, 19),
            AgeBracket::Adult => (20, 39),
            AgeBracket::Forties => (40, 49),
            AgeBracket::Fifties => (50, 59),
            AgeBracket::Sixties => (60, 69),
            AgeBracket::Seventies => (70, 79),
            AgeBracket::Eighties => (80, 89),
        }
    }

    /// Points taken off MOV.
    pub fn mov_penalty(&self) -> i32 {
        match self {
            AgeBracket::Teens | AgeBracket::Adult => 0,
            AgeBracket::Forties => 1,
            AgeBracket::Fifties => 2,
            AgeBracket::Sixties => 3,
            AgeBracket::Seventies => 4,
            AgeBracket::Eighties => 5,
        }
    }

    /// Published adjustment row for this bracket.
    pub fn default_rules(&self) -> AgeRules {
        let row = |str_siz, edu, luck, checks, app, physical| AgeRules {
            str_siz_reduction: str_siz,
            edu_reduction: edu,
            luck_rolls: luck,
            edu_improvement_checks: checks,
            app_reduction: app,
            str_con_dex_reduction: physical,
        };
        match self {
            AgeBracket::Teens => row(5, 5, 2, 0, 0, 0),
            AgeBracket::Adult => row(0, 0, 1, 1, 0, 0),
            AgeBracket::Forties => row(0, 0, 1, 2, 5, 5),
            AgeBracket::Fifties => row(0, 0, 1, 3, 10, 10),
            AgeBracket::Sixties => row(0, 0, 1, 4, 15, 20),
            AgeBracket::Seventies => row(0, 0, 1, 4, 20, 40),
            AgeBracket::Eighties => row(0, 0, 1, 4, 25, 80),
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.range();
        write!(f, "{low}-{high}")
    }
}

impl FromStr for AgeBracket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.to_string() == trimmed)
            .ok_or_else(|| DomainError::parse(format!("Unknown age bracket: {trimmed}")))
    }
}

/// Characteristic adjustments applied when an investigator is aged into a bracket.
///
/// Every field defaults to 0 so partial configuration rows deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRules {
    /// Split between STR and SIZ at random.
    pub str_siz_reduction: i32,
    pub edu_reduction: i32,
    /// Luck is rolled this many times and the best kept.
    pub luck_rolls: u32,
    pub edu_improvement_checks: u32,
    pub app_reduction: i32,
    /// Taken one point at a time from STR, CON or DEX.
    pub str_con_dex_reduction: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_cover_15_to_89_without_gaps() {
        assert_eq!(AgeBracket::from_age(14), None);
        assert_eq!(AgeBracket::from_age(90), None);
        for age in MIN_AGE..=MAX_AGE {
            assert!(AgeBracket::from_age(age).is_some(), "age {age}");
        }
        assert_eq!(AgeBracket::from_age(39), Some(AgeBracket::Adult));
        assert_eq!(AgeBracket::from_age(40), Some(AgeBracket::Forties));
    }

    #[test]
    fn mov_penalty_starts_at_forty() {
        let penalties: Vec<i32> = AgeBracket::ALL.iter().map(|b| b.mov_penalty()).collect();
        assert_eq!(penalties, vec![0, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn published_rows() {
        let teens = AgeBracket::Teens.default_rules();
        assert_eq!(teens.str_siz_reduction, 5);
        assert_eq!(teens.edu_reduction, 5);
        assert_eq!(teens.luck_rolls, 2);

        let eighties = AgeBracket::Eighties.default_rules();
        assert_eq!(eighties.edu_improvement_checks, 4);
        assert_eq!(eighties.app_reduction, 25);
        assert_eq!(eighties.str_con_dex_reduction, 80);
    }

    #[test]
    fn serializes_as_range_text() {
        let json = serde_json::to_string(&AgeBracket::Fifties).unwrap();
        assert_eq!(json, "\"50-59\"");
        assert_eq!("50-59".parse::<AgeBracket>().unwrap(), AgeBracket::Fifties);
    }

    #[test]
    fn partial_rule_rows_default_to_zero() {
        let rules: AgeRules = serde_json::from_str(r#"{"edu_improvement_checks": 2}"#).unwrap();
        assert_eq!(rules.edu_improvement_checks, 2);
        assert_eq!(rules.luck_rolls, 0);
        assert_eq!(rules.app_reduction, 0);
    }
}
