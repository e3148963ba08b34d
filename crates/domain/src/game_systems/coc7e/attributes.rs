//! Characteristic rolls, age adjustment and derived statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{
    AgeBracket, AgeRules, Attribute, Attributes, DiceFormula, RandomSource, ATTRIBUTE_MAX,
};

// =============================================================================
// Rolling
// =============================================================================

/// How one characteristic is rolled: `dice × multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRoll {
    pub dice: DiceFormula,
    pub multiplier: i32,
}

impl AttributeRoll {
    pub fn new(dice: DiceFormula, multiplier: i32) -> Self {
        Self { dice, multiplier }
    }

    /// Rulebook default: (2D6+6)×5 for SIZ, INT and EDU, 3D6×5 otherwise.
    pub fn default_for(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Size | Attribute::Intelligence | Attribute::Education => {
                Self::new(DiceFormula::TWO_D6_PLUS_SIX, 5)
            }
            _ => Self::new(DiceFormula::THREE_D6, 5),
        }
    }

    pub fn roll(&self, rng: &mut impl RandomSource) -> i32 {
        self.dice.roll_total(rng) * self.multiplier
    }
}

/// Default roll for every characteristic.
pub fn default_attribute_rolls() -> BTreeMap<Attribute, AttributeRoll> {
    Attribute::ALL
        .into_iter()
        .map(|a| (a, AttributeRoll::default_for(a)))
        .collect()
}

/// Rolls all nine characteristics. Attributes missing from `rolls` use the default roll.
pub fn roll_attributes(
    rolls: &BTreeMap<Attribute, AttributeRoll>,
    rng: &mut impl RandomSource,
) -> Attributes {
    Attribute::ALL
        .into_iter()
        .map(|attribute| {
            let roll = rolls
                .get(&attribute)
                .copied()
                .unwrap_or_else(|| AttributeRoll::default_for(attribute));
            (attribute, roll.roll(rng))
        })
        .collect()
}

// =============================================================================
// Age adjustment
// =============================================================================

/// What [`adjust_for_age`] did, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeAdjustment {
    pub strength_reduced: i32,
    pub size_reduced: i32,
    pub education_reduced: i32,
    /// STR/CON/DEX points actually removed (can fall short once all three hit 0).
    pub physical_reduced: i32,
    pub appearance_reduced: i32,
    /// EDU gained from each successful improvement check.
    pub education_gains: Vec<i32>,
    /// Luck rolls made when the bracket grants more than one; the best is kept.
    pub luck_rolls: Vec<i32>,
}

/// Applies one bracket's adjustments in rulebook order:
/// STR/SIZ split, EDU reduction, STR/CON/DEX reduction, APP reduction,
/// EDU improvement checks, luck rerolls.
///
/// Reductions floor at 0 and EDU improvement caps at 99.
pub fn adjust_for_age(
    attributes: &mut Attributes,
    rules: &AgeRules,
    luck_roll: &AttributeRoll,
    rng: &mut impl RandomSource,
) -> AgeAdjustment {
    let mut report = AgeAdjustment::default();

    if rules.str_siz_reduction > 0 {
        let from_strength = rng.gen_range(0, rules.str_siz_reduction);
        let from_size = rules.str_siz_reduction - from_strength;
        report.strength_reduced = reduce(attributes, Attribute::Strength, from_strength);
        report.size_reduced = reduce(attributes, Attribute::Size, from_size);
    }

    if rules.edu_reduction > 0 {
        report.education_reduced = reduce(attributes, Attribute::Education, rules.edu_reduction);
    }

    // One point at a time from whichever of STR/CON/DEX still has points.
    let physical = [Attribute::Strength, Attribute::Constitution, Attribute::Dexterity];
    let mut remaining = rules.str_con_dex_reduction;
    while remaining > 0 {
        let candidates: Vec<Attribute> = physical
            .into_iter()
            .filter(|a| attributes.get(*a) > 0)
            .collect();
        let Some(attribute) = rng.choose(&candidates).copied() else {
            break;
        };
        attributes.adjust(attribute, -1);
        remaining -= 1;
        report.physical_reduced += 1;
    }

    if rules.app_reduction > 0 {
        report.appearance_reduced = reduce(attributes, Attribute::Appearance, rules.app_reduction);
    }

    for _ in 0..rules.edu_improvement_checks {
        if rng.roll_d100() > attributes.get(Attribute::Education) {
            let gain = DiceFormula::D10.roll_total(rng);
            let before = attributes.get(Attribute::Education);
            attributes.set(Attribute::Education, (before + gain).min(ATTRIBUTE_MAX));
            report.education_gains.push(attributes.get(Attribute::Education) - before);
        }
    }

    if rules.luck_rolls > 1 {
        report.luck_rolls = (0..rules.luck_rolls).map(|_| luck_roll.roll(rng)).collect();
        if let Some(best) = report.luck_rolls.iter().max() {
            attributes.set(Attribute::Luck, *best);
        }
    }

    report
}

fn reduce(attributes: &mut Attributes, attribute: Attribute, amount: i32) -> i32 {
    let before = attributes.get(attribute);
    attributes.adjust(attribute, -amount);
    before - attributes.get(attribute)
}

// =============================================================================
// Derived statistics
// =============================================================================

/// Damage bonus, shown on the sheet as a signed number or dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DamageBonus {
    MinusTwo,
    MinusOne,
    #[default]
    None,
    PlusD4,
    PlusD6,
    PlusTwoD6,
}

impl DamageBonus {
    /// Damage bonus and build from STR+SIZ. Bucket upper bounds are inclusive.
    pub fn from_strength_and_size(total: i32) -> (Self, i32) {
        match total {
            i32::MIN..=64 => (DamageBonus::MinusTwo, -2),
            65..=84 => (DamageBonus::MinusOne, -1),
            85..=124 => (DamageBonus::None, 0),
            125..=164 => (DamageBonus::PlusD4, 1),
            165..=204 => (DamageBonus::PlusD6, 2),
            _ => (DamageBonus::PlusTwoD6, 3),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageBonus::MinusTwo => "-2",
            DamageBonus::MinusOne => "-1",
            DamageBonus::None => "0",
            DamageBonus::PlusD4 => "+1D4",
            DamageBonus::PlusD6 => "+1D6",
            DamageBonus::PlusTwoD6 => "+2D6",
        }
    }

    /// Rolls the bonus: flat values as-is, dice bonuses rolled.
    pub fn roll(&self, rng: &mut impl RandomSource) -> i32 {
        match self {
            DamageBonus::MinusTwo => -2,
            DamageBonus::MinusOne => -1,
            DamageBonus::None => 0,
            DamageBonus::PlusD4 => rng.gen_range(1, 4),
            DamageBonus::PlusD6 => rng.gen_range(1, 6),
            DamageBonus::PlusTwoD6 => rng.gen_range(1, 6) + rng.gen_range(1, 6),
        }
    }
}

impl fmt::Display for DamageBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamageBonus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        [
            DamageBonus::MinusTwo,
            DamageBonus::MinusOne,
            DamageBonus::None,
            DamageBonus::PlusD4,
            DamageBonus::PlusD6,
            DamageBonus::PlusTwoD6,
        ]
        .into_iter()
        .find(|db| db.as_str() == normalized)
        .ok_or_else(|| DomainError::parse(format!("Unknown damage bonus: {s}")))
    }
}

impl TryFrom<String> for DamageBonus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DamageBonus> for String {
    fn from(value: DamageBonus) -> Self {
        value.as_str().to_string()
    }
}

/// HP, MP, starting SAN, damage bonus, build and MOV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub hp: i32,
    pub mp: i32,
    pub san: i32,
    pub damage_bonus: DamageBonus,
    pub build: i32,
    pub mov: i32,
}

impl DerivedStats {
    /// Pure function of characteristics, age and the sanity ceiling.
    pub fn compute(attributes: &Attributes, age: u32, max_sanity: i32) -> Self {
        let strength = attributes.get(Attribute::Strength);
        let size = attributes.get(Attribute::Size);
        let power = attributes.get(Attribute::Power);
        let (damage_bonus, build) = DamageBonus::from_strength_and_size(strength + size);
        let penalty = AgeBracket::from_age(age)
            .map(|b| b.mov_penalty())
            .unwrap_or(0);

        Self {
            hp: (attributes.get(Attribute::Constitution) + size) / 10,
            mp: power / 5,
            san: power.min(max_sanity),
            damage_bonus,
            build,
            mov: base_mov(attributes) - penalty,
        }
    }
}

/// 7 when DEX and STR are both below SIZ, 9 when both are at or above it, else 8.
pub fn base_mov(attributes: &Attributes) -> i32 {
    let size = attributes.get(Attribute::Size);
    let dexterity = attributes.get(Attribute::Dexterity);
    let strength = attributes.get(Attribute::Strength);
    if dexterity < size && strength < size {
        7
    } else if dexterity >= size && strength >= size {
        9
    } else {
        8
    }
}
