use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two skill-point budgets a spend draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillPool {
    Occupation,
    Interest,
}

impl fmt::Display for SkillPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillPool::Occupation => f.write_str("职业技能点"),
            SkillPool::Interest => f.write_str("兴趣技能点"),
        }
    }
}
