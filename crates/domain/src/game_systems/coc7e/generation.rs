//! The random generation pipeline.
//!
//! attributes → age adjustment → derivation → occupation → skill list →
//! base skills → budgets → occupation points → interest points → background
//! → cash.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::allocation::{
    allocate, allocate_interest, compute_budgets, expand_occupation_skill_list,
    initialize_base_skills, AllocationSummary, SkillBudgets,
};
use super::attributes::{
    adjust_for_age, default_attribute_rolls, roll_attributes, AgeAdjustment, AttributeRoll,
};
use super::background::generate_background;
use super::tables::RuleTables;
use crate::aggregates::Investigator;
use crate::entities::Occupation;
use crate::error::DomainError;
use crate::value_objects::{AgeBracket, AgeRules, Attribute, RandomSource, SkillPool};

/// Cities residence and birthplace are drawn from.
pub const CITIES: [&str; 10] = [
    "阿卡姆", "波士顿", "纽约", "芝加哥", "伦敦", "巴黎", "柏林", "罗马", "开罗", "上海",
];

const GENDERS: [&str; 2] = ["男", "女"];
const DEFAULT_NAME: &str = "随机调查员";
const DEFAULT_PLAYER: &str = "玩家";
const DEFAULT_ASSETS: &str = "无特殊资产";

/// Characteristic rolls and age rules, replaceable from `generation.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    #[serde(rename = "attributes")]
    pub attribute_rolls: BTreeMap<Attribute, AttributeRoll>,
    #[serde(rename = "age_groups")]
    pub age_rules: BTreeMap<AgeBracket, AgeRules>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            attribute_rolls: default_attribute_rolls(),
            age_rules: AgeBracket::ALL
                .into_iter()
                .map(|bracket| (bracket, bracket.default_rules()))
                .collect(),
        }
    }
}

impl GenerationConfig {
    /// Rules for `bracket`; a missing row falls back to the rulebook row.
    pub fn rules_for(&self, bracket: AgeBracket) -> AgeRules {
        self.age_rules
            .get(&bracket)
            .copied()
            .unwrap_or_else(|| bracket.default_rules())
    }

    pub fn roll_for(&self, attribute: Attribute) -> AttributeRoll {
        self.attribute_rolls
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| AttributeRoll::default_for(attribute))
    }
}

/// What the caller pins down; everything left `None` is rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub name: Option<String>,
    pub player: Option<String>,
    pub gender: Option<String>,
    /// Exact age. Takes precedence over `age_bracket`.
    pub age: Option<u32>,
    /// Defaults to 20-39.
    pub age_bracket: Option<AgeBracket>,
    pub occupation: Option<String>,
}

/// Everything the pipeline decided, for the caller to log.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub occupation: String,
    pub age_bracket: AgeBracket,
    pub age_adjustment: AgeAdjustment,
    pub budgets: SkillBudgets,
    pub occupation_allocation: AllocationSummary,
    pub interest_allocation: AllocationSummary,
    pub cash: f64,
}

/// Rolls a complete investigator.
///
/// Fails when the requested age is out of range, the requested occupation
/// is unknown, or the occupation table is empty.
pub fn generate_investigator(
    tables: &RuleTables,
    config: &GenerationConfig,
    request: &GenerationRequest,
    rng: &mut impl RandomSource,
) -> Result<(Investigator, GenerationSummary), DomainError> {
    let occupation = choose_occupation(tables, request.occupation.as_deref(), rng)?;

    let (bracket, age) = match request.age {
        Some(age) => {
            let bracket = AgeBracket::from_age(age)
                .ok_or_else(|| DomainError::validation(format!("Age {age} is outside 15-89")))?;
            (bracket, age)
        }
        None => {
            let bracket = request.age_bracket.unwrap_or(AgeBracket::Adult);
            let (min, max) = bracket.range();
            let rolled = rng.roll_between(to_i32(min), to_i32(max));
            (bracket, u32::try_from(rolled).unwrap_or(min))
        }
    };

    let mut record = Investigator::new();
    record.set_name(request.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string()));
    record.set_player(request.player.clone().unwrap_or_else(|| DEFAULT_PLAYER.to_string()));
    let gender = match &request.gender {
        Some(gender) => gender.clone(),
        None => pick_str(&GENDERS, rng),
    };
    record.set_gender(gender);
    record.set_residence(pick_str(&CITIES, rng));
    record.set_birthplace(pick_str(&CITIES, rng));

    // Characteristics
    let mut attributes = roll_attributes(&config.attribute_rolls, rng);
    let age_adjustment = adjust_for_age(
        &mut attributes,
        &config.rules_for(bracket),
        &config.roll_for(Attribute::Luck),
        rng,
    );
    record.set_attributes(attributes);
    record.set_age(age)?;

    // Skills
    record.set_occupation(occupation.name());
    let skill_list = expand_occupation_skill_list(occupation.skill_entries(), &tables.skills, rng);
    record.set_occupation_skills(skill_list.clone());
    initialize_base_skills(&mut record, &tables.skills);

    let budgets = compute_budgets(occupation, record.attributes());
    record.set_skill_budgets(budgets.occupation, budgets.interest);
    let occupation_allocation = allocate(
        &mut record,
        SkillPool::Occupation,
        &skill_list,
        &tables.skills,
        rng,
    );
    let interest_allocation = allocate_interest(&mut record, &tables.skills, rng);

    record.set_background(generate_background(&tables.backgrounds, rng));

    // Possessions
    let credit = occupation.credit_rating();
    let cash = f64::from(rng.roll_between(credit.min, credit.max));
    record.set_cash(cash);
    record.set_assets(DEFAULT_ASSETS);

    let summary = GenerationSummary {
        occupation: occupation.name().to_string(),
        age_bracket: bracket,
        age_adjustment,
        budgets,
        occupation_allocation,
        interest_allocation,
        cash,
    };
    Ok((record, summary))
}

fn choose_occupation<'a>(
    tables: &'a RuleTables,
    requested: Option<&str>,
    rng: &mut impl RandomSource,
) -> Result<&'a Occupation, DomainError> {
    match requested {
        Some(name) => tables
            .occupations
            .get(name)
            .ok_or_else(|| DomainError::not_found("Occupation", name)),
        None => {
            let all: Vec<&Occupation> = tables.occupations.iter().collect();
            rng.choose(&all)
                .copied()
                .ok_or_else(|| DomainError::validation("Occupation table is empty"))
        }
    }
}

fn pick_str(options: &[&str], rng: &mut impl RandomSource) -> String {
    rng.choose(options).map(|s| (*s).to_string()).unwrap_or_default()
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::SKILL_MAX;
    use crate::game_systems::coc7e::allocation::ALLOCATION_CEILING;
    use crate::value_objects::testing::seeded;

    fn request(occupation: &str) -> GenerationRequest {
        GenerationRequest {
            occupation: Some(occupation.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn generated_record_is_consistent() {
        let tables = RuleTables::builtin();
        let config = GenerationConfig::default();
        for seed in 0..20 {
            let (record, summary) = generate_investigator(
                &tables,
                &config,
                &GenerationRequest::default(),
                &mut seeded(seed),
            )
            .unwrap();

            assert!(tables.occupations.get(record.occupation()).is_some());
            assert_eq!(summary.age_bracket, AgeBracket::Adult);
            assert!((20..=39).contains(&record.age()));
            assert!(CITIES.contains(&record.residence()));
            assert!(record.attributes().is_complete());

            let mut rederived = record.clone();
            rederived.derive_stats();
            assert_eq!(rederived.hp(), record.hp());
            assert_eq!(rederived.mov(), record.mov());

            assert!(record.occupation_skill_points_allocated() <= record.occupation_skill_points());
            assert!(record.interest_skill_points_allocated() <= record.interest_skill_points());
            assert!(record.skills().values().all(|v| (0..=SKILL_MAX).contains(v)));
            assert!(!record.background().personal_description.is_empty());
            assert_eq!(record.assets(), DEFAULT_ASSETS);
        }
    }

    #[test]
    fn occupation_points_stay_under_the_ceiling() {
        let tables = RuleTables::builtin();
        let (record, summary) = generate_investigator(
            &tables,
            &GenerationConfig::default(),
            &request("医生"),
            &mut seeded(42),
        )
        .unwrap();

        assert_eq!(record.occupation(), "医生");
        // Only skills below the ceiling ever receive points, so they end at or under it.
        for (label, added) in &summary.occupation_allocation.added {
            assert!(*added > 0);
            assert!(record.skill(label) <= ALLOCATION_CEILING);
        }
        let credit = tables.occupations.get("医生").unwrap().credit_rating();
        assert!(record.cash() >= f64::from(credit.min) && record.cash() <= f64::from(credit.max));
    }

    #[test]
    fn exact_age_selects_its_bracket() {
        let tables = RuleTables::builtin();
        let request = GenerationRequest {
            age: Some(72),
            name: Some("哈维·沃尔特斯".into()),
            ..Default::default()
        };
        let (record, summary) =
            generate_investigator(&tables, &GenerationConfig::default(), &request, &mut seeded(5))
                .unwrap();
        assert_eq!(record.age(), 72);
        assert_eq!(record.name(), "哈维·沃尔特斯");
        assert_eq!(summary.age_bracket, AgeBracket::Seventies);
        assert!(summary.age_adjustment.education_gains.len() <= 4);
    }

    #[test]
    fn bad_requests_fail() {
        let tables = RuleTables::builtin();
        let config = GenerationConfig::default();
        let unknown = generate_investigator(&tables, &config, &request("宇航员"), &mut seeded(1));
        assert!(matches!(unknown, Err(DomainError::NotFound { .. })));

        let too_old = GenerationRequest {
            age: Some(95),
            ..Default::default()
        };
        assert!(generate_investigator(&tables, &config, &too_old, &mut seeded(1)).is_err());

        let empty = RuleTables {
            occupations: Default::default(),
            ..RuleTables::builtin()
        };
        let any = GenerationRequest::default();
        assert!(generate_investigator(&empty, &config, &any, &mut seeded(1)).is_err());
    }

    #[test]
    fn config_reads_generation_json_shape() {
        let json = r#"{
            "attributes": {"力量": {"dice": "3D6", "multiplier": 5}},
            "age_groups": {
                "40-49": {
                    "edu_improvement_checks": 2,
                    "app_reduction": 5,
                    "str_con_dex_reduction": 5
                }
            }
        }"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.attribute_rolls.len(), 1);
        assert_eq!(
            config.roll_for(Attribute::Education),
            AttributeRoll::default_for(Attribute::Education)
        );
        assert_eq!(config.rules_for(AgeBracket::Forties).app_reduction, 5);
        assert_eq!(config.rules_for(AgeBracket::Teens), AgeBracket::Teens.default_rules());
    }
}
