//! Percentile skill checks.
//!
//! CoC 7e is roll-under d100 with three success tiers: Regular, Hard (half),
//! Extreme (fifth). Bonus and penalty dice cancel one for one; net bonus
//! dice keep the lowest roll, net penalty dice the highest. At most
//! [`MAX_NET_DICE`] extra dice are rolled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::RandomSource;

/// Success levels for CoC 7e skill checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessLevel {
    /// Roll of 01, or 02-05 when that is still within the skill
    Critical,
    /// Roll <= skill / 5
    Extreme,
    /// Roll <= skill / 2
    Hard,
    /// Roll <= skill
    Regular,
    /// Roll > skill but not a fumble
    Failure,
    /// 96-100 if skill < 50, or 100 if skill >= 50
    Fumble,
}

impl SuccessLevel {
    /// Check if this is any form of success.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SuccessLevel::Critical
                | SuccessLevel::Extreme
                | SuccessLevel::Hard
                | SuccessLevel::Regular
        )
    }

    /// True when this level meets `difficulty`.
    pub fn meets(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Regular => self.is_success(),
            Difficulty::Hard => matches!(
                self,
                SuccessLevel::Critical | SuccessLevel::Extreme | SuccessLevel::Hard
            ),
            Difficulty::Extreme => matches!(self, SuccessLevel::Critical | SuccessLevel::Extreme),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuccessLevel::Critical => "大成功",
            SuccessLevel::Extreme => "极难成功",
            SuccessLevel::Hard => "困难成功",
            SuccessLevel::Regular => "成功",
            SuccessLevel::Failure => "失败",
            SuccessLevel::Fumble => "大失败",
        }
    }
}

impl fmt::Display for SuccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Required success tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Regular,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Highest roll that passes at this difficulty.
    pub fn target(&self, skill: i32) -> i32 {
        match self {
            Difficulty::Regular => skill,
            Difficulty::Hard => skill / 2,
            Difficulty::Extreme => skill / 5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "常规" => Ok(Difficulty::Regular),
            "hard" | "困难" => Ok(Difficulty::Hard),
            "extreme" | "极难" => Ok(Difficulty::Extreme),
            other => Err(DomainError::parse(format!("Unknown difficulty: {other}"))),
        }
    }
}

/// Net bonus or penalty dice beyond this are ignored.
pub const MAX_NET_DICE: i64 = 2;

/// Highest roll besides 01 that can still be a critical.
const CRITICAL_CEILING: i32 = 5;

/// Determine success level for a CoC 7e roll.
pub fn check_success(roll: i32, skill: i32) -> SuccessLevel {
    if roll == 1 || (roll <= CRITICAL_CEILING && roll <= skill) {
        return SuccessLevel::Critical;
    }
    if is_fumble(roll, skill) {
        return SuccessLevel::Fumble;
    }
    if roll <= skill / 5 {
        SuccessLevel::Extreme
    } else if roll <= skill / 2 {
        SuccessLevel::Hard
    } else if roll <= skill {
        SuccessLevel::Regular
    } else {
        SuccessLevel::Failure
    }
}

/// Check if a roll is a fumble.
pub fn is_fumble(roll: i32, skill: i32) -> bool {
    if skill < 50 {
        roll >= 96
    } else {
        roll == 100
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub skill: i32,
    pub difficulty: Difficulty,
    /// Every d100 rolled; the first is the base roll.
    pub rolls: Vec<i32>,
    /// The roll that counts after bonus/penalty dice.
    pub roll: i32,
    pub level: SuccessLevel,
    pub passed: bool,
}

/// Rolls a check against `skill`.
pub fn skill_check(
    skill: i32,
    difficulty: Difficulty,
    bonus_dice: u32,
    penalty_dice: u32,
    rng: &mut impl RandomSource,
) -> CheckResult {
    let net = (i64::from(bonus_dice) - i64::from(penalty_dice)).clamp(-MAX_NET_DICE, MAX_NET_DICE);
    let rolls: Vec<i32> = (0..=net.unsigned_abs()).map(|_| rng.roll_d100()).collect();
    let roll = match net {
        n if n > 0 => rolls.iter().copied().min(),
        n if n < 0 => rolls.iter().copied().max(),
        _ => rolls.first().copied(),
    }
    .unwrap_or(100);

    let level = check_success(roll, skill);
    CheckResult {
        skill,
        difficulty,
        rolls,
        roll,
        level,
        passed: level.meets(difficulty),
    }
}

/// A check and, when it failed, its pushed re-roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushedCheck {
    pub first: CheckResult,
    pub pushed: Option<CheckResult>,
}

impl PushedCheck {
    /// The result that stands.
    pub fn outcome(&self) -> &CheckResult {
        self.pushed.as_ref().unwrap_or(&self.first)
    }
}

/// Rolls a check; a failure may be pushed once.
pub fn push_check(skill: i32, difficulty: Difficulty, rng: &mut impl RandomSource) -> PushedCheck {
    let first = skill_check(skill, difficulty, 0, 0, rng);
    let pushed = (!first.passed).then(|| skill_check(skill, difficulty, 0, 0, rng));
    PushedCheck { first, pushed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::testing::scripted;

    #[test]
    fn success_level_determination() {
        assert_eq!(check_success(1, 50), SuccessLevel::Critical);
        assert_eq!(check_success(5, 50), SuccessLevel::Critical);
        assert_eq!(check_success(6, 50), SuccessLevel::Extreme);
        assert_eq!(check_success(10, 50), SuccessLevel::Extreme);
        assert_eq!(check_success(20, 50), SuccessLevel::Hard);
        assert_eq!(check_success(45, 50), SuccessLevel::Regular);
        assert_eq!(check_success(60, 50), SuccessLevel::Failure);
        assert_eq!(check_success(96, 40), SuccessLevel::Fumble);
        assert_eq!(check_success(100, 60), SuccessLevel::Fumble);
        assert_eq!(check_success(96, 60), SuccessLevel::Failure);
    }

    #[test]
    fn difficulty_raises_the_bar() {
        let mut rng = scripted(vec![30]);
        let hard = skill_check(50, Difficulty::Hard, 0, 0, &mut rng);
        assert_eq!(hard.level, SuccessLevel::Regular);
        assert!(!hard.passed);

        let mut rng = scripted(vec![9]);
        let extreme = skill_check(50, Difficulty::Extreme, 0, 0, &mut rng);
        assert!(extreme.passed);
        assert_eq!(Difficulty::Extreme.target(50), 10);
    }

    #[test]
    fn bonus_keeps_lowest_penalty_keeps_highest() {
        let mut rng = scripted(vec![80, 20, 55]);
        let bonus = skill_check(50, Difficulty::Regular, 2, 0, &mut rng);
        assert_eq!(bonus.rolls, vec![80, 20, 55]);
        assert_eq!(bonus.roll, 20);

        let mut rng = scripted(vec![30, 70]);
        let penalty = skill_check(50, Difficulty::Regular, 0, 1, &mut rng);
        assert_eq!(penalty.roll, 70);
        assert!(!penalty.passed);
    }

    #[test]
    fn low_rolls_within_skill_are_critical() {
        assert_eq!(check_success(3, 3), SuccessLevel::Critical);
        assert_eq!(check_success(4, 3), SuccessLevel::Failure);
        assert_eq!(check_success(1, 0), SuccessLevel::Critical);
        assert_eq!(check_success(2, 0), SuccessLevel::Failure);
    }

    #[test]
    fn extra_dice_are_capped() {
        let mut draws = 0;
        let mut rng = |min: i32, _max: i32| {
            draws += 1;
            min + 40
        };
        let bonus = skill_check(50, Difficulty::Regular, u32::MAX, 0, &mut rng);
        assert_eq!(bonus.rolls.len(), 3);

        let penalty = skill_check(50, Difficulty::Regular, 1, 20_000_000, &mut rng);
        assert_eq!(penalty.rolls.len(), 3);
        assert_eq!(draws, 6);
    }

    #[test]
    fn bonus_and_penalty_cancel() {
        let mut rng = scripted(vec![42, 1, 1]);
        let result = skill_check(50, Difficulty::Regular, 1, 1, &mut rng);
        assert_eq!(result.rolls, vec![42]);
        assert_eq!(result.roll, 42);
    }

    #[test]
    fn push_only_after_failure() {
        let mut rng = scripted(vec![30, 99]);
        let check = push_check(50, Difficulty::Regular, &mut rng);
        assert!(check.pushed.is_none());
        assert_eq!(check.outcome().roll, 30);

        let mut rng = scripted(vec![80, 25]);
        let check = push_check(50, Difficulty::Regular, &mut rng);
        assert_eq!(check.first.level, SuccessLevel::Failure);
        assert_eq!(check.outcome().roll, 25);
        assert!(check.outcome().passed);
    }

    #[test]
    fn parses_difficulty_names() {
        assert_eq!("困难".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("EXTREME".parse::<Difficulty>().unwrap(), Difficulty::Extreme);
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
