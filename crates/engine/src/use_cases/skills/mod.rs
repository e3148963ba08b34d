//! Skill and characteristic checks, plus skill-table lookups.

mod error;

pub use error::SkillError;

use std::sync::Arc;

use arkham_domain::game_systems::coc7e::{
    language_families, push_check, skill_check, CheckResult, Difficulty,
};
use arkham_domain::{Attribute, Investigator, RuleTables, SkillLabel};

use crate::infrastructure::ports::RandomPort;

/// What a check was rolled against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    Attribute(Attribute),
    Skill(SkillLabel),
}

impl std::fmt::Display for CheckTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckTarget::Attribute(attribute) => write!(f, "{attribute}"),
            CheckTarget::Skill(label) => write!(f, "{label}"),
        }
    }
}

/// Options for one check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    pub difficulty: Difficulty,
    pub bonus_dice: u32,
    pub penalty_dice: u32,
    /// Re-roll once on failure. Bonus and penalty dice do not apply to pushed checks.
    pub push: bool,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub target: CheckTarget,
    pub value: i32,
    pub first: CheckResult,
    pub pushed: Option<CheckResult>,
}

impl CheckReport {
    /// The result that stands.
    pub fn outcome(&self) -> &CheckResult {
        self.pushed.as_ref().unwrap_or(&self.first)
    }
}

/// Container for skill use cases.
pub struct SkillUseCases {
    tables: Arc<RuleTables>,
    random: Arc<dyn RandomPort>,
}

impl SkillUseCases {
    pub fn new(tables: Arc<RuleTables>, random: Arc<dyn RandomPort>) -> Self {
        Self { tables, random }
    }

    /// Resolve `name` to a characteristic or a skill and its current value.
    ///
    /// Skills never written on the sheet fall back to their table base.
    pub fn resolve(
        &self,
        investigator: &Investigator,
        name: &str,
    ) -> Result<(CheckTarget, i32), SkillError> {
        if let Ok(attribute) = name.parse::<Attribute>() {
            return Ok((
                CheckTarget::Attribute(attribute),
                investigator.attribute(attribute),
            ));
        }

        let label = SkillLabel::parse(name)?;
        let value = investigator.skill_value(&label).or_else(|| {
            self.tables
                .skills
                .base_value(&label, investigator.attributes())
        });
        match value {
            Some(value) => Ok((CheckTarget::Skill(label), value)),
            None => Err(SkillError::UnknownTarget(name.to_string())),
        }
    }

    pub fn check(
        &self,
        investigator: &Investigator,
        name: &str,
        options: CheckOptions,
    ) -> Result<CheckReport, SkillError> {
        let (target, value) = self.resolve(investigator, name)?;
        let mut rng = |min, max| self.random.gen_range(min, max);

        let plain = options.bonus_dice == 0 && options.penalty_dice == 0;
        let (first, pushed) = if options.push && plain {
            let pushed = push_check(value, options.difficulty, &mut rng);
            (pushed.first, pushed.pushed)
        } else {
            let first = skill_check(
                value,
                options.difficulty,
                options.bonus_dice,
                options.penalty_dice,
                &mut rng,
            );
            let pushed = (options.push && !first.passed)
                .then(|| skill_check(value, options.difficulty, 0, 0, &mut rng));
            (first, pushed)
        };

        let report = CheckReport {
            target,
            value,
            first,
            pushed,
        };
        tracing::info!(
            name = investigator.name(),
            target = %report.target,
            value,
            roll = report.outcome().roll,
            level = %report.outcome().level,
            passed = report.outcome().passed,
            "Check rolled"
        );
        Ok(report)
    }

    /// Language families for display.
    pub fn language_families(&self) -> Vec<(String, Vec<String>)> {
        language_families(&self.tables.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::ports::MockRandomPort;
    use arkham_domain::game_systems::coc7e::SuccessLevel;

    fn use_cases(random: impl RandomPort + 'static) -> SkillUseCases {
        SkillUseCases::new(Arc::new(RuleTables::builtin()), Arc::new(random))
    }

    fn sequence(rolls: Vec<i32>) -> MockRandomPort {
        let mut random = MockRandomPort::new();
        let mut rolls = rolls.into_iter();
        random
            .expect_gen_range()
            .returning(move |min, _| rolls.next().unwrap_or(min));
        random
    }

    #[test]
    fn resolves_characteristics_and_skills() {
        let use_cases = use_cases(FixedRandom(1));
        let mut investigator = Investigator::blank();
        investigator.set_skill(SkillLabel::new("侦查"), 60);

        assert_eq!(
            use_cases.resolve(&investigator, "幸运").unwrap(),
            (CheckTarget::Attribute(Attribute::Luck), 50)
        );
        assert_eq!(
            use_cases.resolve(&investigator, "侦查").unwrap(),
            (CheckTarget::Skill(SkillLabel::new("侦查")), 60)
        );
        // Never written: table base, dodge is DEX / 2.
        assert_eq!(use_cases.resolve(&investigator, "闪避").unwrap().1, 25);
        assert_eq!(
            use_cases.resolve(&investigator, "射击(手枪)").unwrap().1,
            20
        );
    }

    #[test]
    fn unknown_names_are_errors() {
        let use_cases = use_cases(FixedRandom(1));
        let investigator = Investigator::blank();
        assert!(matches!(
            use_cases.resolve(&investigator, "飞天"),
            Err(SkillError::UnknownTarget(_))
        ));
        assert!(matches!(
            use_cases.resolve(&investigator, "侦查（"),
            Err(SkillError::Domain(_))
        ));
    }

    #[test]
    fn regular_check_uses_one_roll() {
        let use_cases = use_cases(sequence(vec![45]));
        let mut investigator = Investigator::blank();
        investigator.set_skill(SkillLabel::new("图书馆使用"), 60);

        let report = use_cases
            .check(&investigator, "图书馆使用", CheckOptions::default())
            .unwrap();
        assert_eq!(report.value, 60);
        assert_eq!(report.first.rolls, vec![45]);
        assert_eq!(report.outcome().level, SuccessLevel::Regular);
        assert!(report.pushed.is_none());
    }

    #[test]
    fn failed_check_is_pushed_once() {
        let use_cases = use_cases(sequence(vec![80, 12]));
        let investigator = Investigator::blank();

        let report = use_cases
            .check(
                &investigator,
                "力量",
                CheckOptions {
                    push: true,
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!report.first.passed);
        assert_eq!(report.outcome().roll, 12);
        assert!(report.outcome().passed);
    }

    #[test]
    fn bonus_die_keeps_the_lower_roll() {
        let use_cases = use_cases(sequence(vec![70, 30]));
        let investigator = Investigator::blank();

        let report = use_cases
            .check(
                &investigator,
                "意志",
                CheckOptions {
                    bonus_dice: 1,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(report.first.roll, 30);
        assert!(report.first.passed);
    }

    #[test]
    fn oversized_dice_counts_roll_a_bounded_pool() {
        let use_cases = use_cases(sequence(vec![70, 30, 90, 10]));
        let investigator = Investigator::blank();

        let report = use_cases
            .check(
                &investigator,
                "意志",
                CheckOptions {
                    bonus_dice: u32::MAX,
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(report.first.rolls, vec![70, 30, 90]);
        assert_eq!(report.first.roll, 30);
    }

    #[test]
    fn lists_language_families() {
        let families = use_cases(FixedRandom(1)).language_families();
        assert_eq!(families.len(), 7);
        assert!(families.iter().any(|(_, languages)| languages.iter().any(|l| l == "英语")));
    }
}
