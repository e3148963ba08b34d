//! Investigator aggregate - the complete character sheet
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: every field is reached through accessors or setters
//! - **Single derivation entry point**: any attribute or age change re-runs
//!   [`Investigator::derive_stats`], so HP/MP/SAN/DB/Build/MOV are never stale
//! - **Single skill-write path**: [`Investigator::set_skill`] mirrors
//!   specializations and fires language transfer; nothing else writes skills
//!   with crossing detection
//! - **Mutations return reports**: `set_skill` returns a [`SkillWrite`]
//!
//! The serialized form is a flat document whose keys are the sheet fields.
//! Derived fields are trusted verbatim on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{Background, Possession, CTHULHU_MYTHOS};
use crate::error::DomainError;
use crate::game_systems::coc7e::{language, DamageBonus, DerivedStats};
use crate::value_objects::{
    AgeBracket, Attribute, Attributes, SkillLabel, SkillPool, SpendingLevel, MAX_AGE, MIN_AGE,
};

/// Highest value a skill can hold.
pub const SKILL_MAX: i32 = 99;

/// What a single [`Investigator::set_skill`] call changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillWrite {
    pub label: SkillLabel,
    pub previous: i32,
    pub value: i32,
    /// Sibling languages raised by language transfer, with their new values.
    pub propagated: Vec<(SkillLabel, i32)>,
}

/// An investigator sheet.
///
/// # Invariants
///
/// - `attributes` holds all nine keys with values in `[0, 99]`
/// - `attribute_half`/`attribute_fifth` and the derived stats match `attributes` and `age`
/// - `skills` values are in `[0, 99]`; `skill_specializations` mirrors every specialized entry
/// - allocated skill points never exceed their budget
/// - `phobias` and `manias` hold no duplicates
///
/// # Example
///
/// ```
/// use arkham_domain::aggregates::Investigator;
/// use arkham_domain::value_objects::{Attribute, SkillLabel};
///
/// let mut investigator = Investigator::blank();
/// investigator.set_attribute(Attribute::Strength, 80);
/// assert_eq!(investigator.damage_bonus().as_str(), "+1D4");
///
/// let write = investigator.set_skill(SkillLabel::language("英语"), 55);
/// assert_eq!(write.previous, 0);
/// assert_eq!(investigator.skill(&SkillLabel::language("德语")), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Investigator {
    // Identity
    name: String,
    player: String,
    occupation: String,
    age: u32,
    gender: String,
    residence: String,
    birthplace: String,

    // Characteristics
    attributes: Attributes,
    attribute_half: Attributes,
    attribute_fifth: Attributes,

    // Derived
    hp: i32,
    mp: i32,
    san: i32,
    armor: i32,
    db: DamageBonus,
    build: i32,
    mov: i32,

    // Skills
    skills: BTreeMap<SkillLabel, i32>,
    skill_specializations: BTreeMap<String, BTreeMap<SkillLabel, i32>>,
    occupation_skills: Vec<SkillLabel>,
    occupation_skill_points: i32,
    occupation_skill_points_allocated: i32,
    interest_skill_points: i32,
    interest_skill_points_allocated: i32,

    #[serde(flatten)]
    background: Background,

    // Possessions
    equipment: Vec<Possession>,
    cash: f64,
    assets: String,
    spending_level: SpendingLevel,
    items: Vec<Possession>,
    weapons: Vec<Possession>,

    // Insanity
    temporary_insanity: bool,
    indefinite_insanity: bool,
    permanent_insanity: bool,
    phobias: Vec<String>,
    manias: Vec<String>,
    status: String,
}

impl Default for Investigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Investigator {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// An empty record: no identity, every characteristic 0, derived stats consistent.
    pub fn new() -> Self {
        let mut investigator = Self {
            name: String::new(),
            player: String::new(),
            occupation: String::new(),
            age: 0,
            gender: String::new(),
            residence: String::new(),
            birthplace: String::new(),
            attributes: Attributes::uniform(0),
            attribute_half: Attributes::new(),
            attribute_fifth: Attributes::new(),
            hp: 0,
            mp: 0,
            san: 0,
            armor: 0,
            db: DamageBonus::default(),
            build: 0,
            mov: 0,
            skills: BTreeMap::new(),
            skill_specializations: BTreeMap::new(),
            occupation_skills: Vec::new(),
            occupation_skill_points: 0,
            occupation_skill_points_allocated: 0,
            interest_skill_points: 0,
            interest_skill_points_allocated: 0,
            background: Background::default(),
            equipment: Vec::new(),
            cash: 0.0,
            assets: String::new(),
            spending_level: SpendingLevel::from_cash(0.0),
            items: Vec::new(),
            weapons: Vec::new(),
            temporary_insanity: false,
            indefinite_insanity: false,
            permanent_insanity: false,
            phobias: Vec::new(),
            manias: Vec::new(),
            status: String::new(),
        };
        investigator.derive_stats();
        investigator
    }

    /// The editable starting sheet: placeholder identity, every characteristic 50.
    pub fn blank() -> Self {
        let mut investigator = Self::new();
        investigator.name = "新调查员".to_string();
        investigator.player = "玩家".to_string();
        investigator.occupation = "无业".to_string();
        investigator.gender = "男".to_string();
        investigator.residence = "阿卡姆".to_string();
        investigator.birthplace = "阿卡姆".to_string();
        investigator.age = 30;
        investigator.attributes = Attributes::uniform(50);
        investigator.background = Background {
            personal_description: "普通人".to_string(),
            ideology: "无特殊信念".to_string(),
            significant_people: "无".to_string(),
            meaningful_locations: "无".to_string(),
            treasured_possessions: "无".to_string(),
            traits: "无".to_string(),
            ..Background::default()
        };
        investigator.assets = "无特殊资产".to_string();
        investigator.set_cash(50.0);
        investigator.derive_stats();
        investigator
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn set_player(&mut self, player: impl Into<String>) {
        self.player = player.into();
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    pub fn set_occupation(&mut self, occupation: impl Into<String>) {
        self.occupation = occupation.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Age bracket, `None` while the age is outside 15-89 (an empty record).
    pub fn age_bracket(&self) -> Option<AgeBracket> {
        AgeBracket::from_age(self.age)
    }

    /// Sets the age and re-derives. Must fall inside an age bracket.
    pub fn set_age(&mut self, age: u32) -> Result<(), DomainError> {
        if AgeBracket::from_age(age).is_none() {
            return Err(DomainError::validation(format!(
                "Age must be between {MIN_AGE} and {MAX_AGE}, got {age}"
            )));
        }
        self.age = age;
        self.derive_stats();
        Ok(())
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.gender = gender.into();
    }

    pub fn residence(&self) -> &str {
        &self.residence
    }

    pub fn set_residence(&mut self, residence: impl Into<String>) {
        self.residence = residence.into();
    }

    pub fn birthplace(&self) -> &str {
        &self.birthplace
    }

    pub fn set_birthplace(&mut self, birthplace: impl Into<String>) {
        self.birthplace = birthplace.into();
    }

    // =========================================================================
    // Characteristics and derived stats
    // =========================================================================

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn attribute_half(&self) -> &Attributes {
        &self.attribute_half
    }

    pub fn attribute_fifth(&self) -> &Attributes {
        &self.attribute_fifth
    }

    /// Sets one characteristic (clamped to `[0, 99]`) and re-derives.
    pub fn set_attribute(&mut self, attribute: Attribute, value: i32) {
        self.attributes.set(attribute, value);
        self.derive_stats();
    }

    /// Replaces all characteristics and re-derives. Missing keys become 0.
    pub fn set_attributes(&mut self, mut attributes: Attributes) {
        attributes.fill_missing();
        self.attributes = attributes;
        self.derive_stats();
    }

    /// Recomputes half/fifth values, HP, MP, SAN, damage bonus, build and MOV.
    ///
    /// Idempotent. SAN is reset to `min(POW, max_sanity)`; sanity lost in
    /// play is tracked through [`crate::game_systems::coc7e::lose_sanity`].
    pub fn derive_stats(&mut self) {
        self.attribute_half = self.attributes.iter().map(|(a, v)| (a, v / 2)).collect();
        self.attribute_fifth = self.attributes.iter().map(|(a, v)| (a, v / 5)).collect();

        let stats = DerivedStats::compute(&self.attributes, self.age, self.max_sanity());
        self.hp = stats.hp;
        self.mp = stats.mp;
        self.san = stats.san;
        self.db = stats.damage_bonus;
        self.build = stats.build;
        self.mov = stats.mov;
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn mp(&self) -> i32 {
        self.mp
    }

    pub fn san(&self) -> i32 {
        self.san
    }

    pub(crate) fn set_san(&mut self, san: i32) {
        self.san = san.clamp(0, self.max_sanity());
    }

    /// `99 - 克苏鲁神话`
    pub fn max_sanity(&self) -> i32 {
        SKILL_MAX - self.skill(&SkillLabel::new(CTHULHU_MYTHOS))
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn set_armor(&mut self, armor: i32) {
        self.armor = armor.max(0);
    }

    pub fn damage_bonus(&self) -> DamageBonus {
        self.db
    }

    pub fn build(&self) -> i32 {
        self.build
    }

    pub fn mov(&self) -> i32 {
        self.mov
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// Current value, 0 when the skill has never been written.
    pub fn skill(&self, label: &SkillLabel) -> i32 {
        self.skills.get(label).copied().unwrap_or(0)
    }

    pub fn skill_value(&self, label: &SkillLabel) -> Option<i32> {
        self.skills.get(label).copied()
    }

    pub fn skills(&self) -> &BTreeMap<SkillLabel, i32> {
        &self.skills
    }

    pub fn skill_specializations(&self) -> &BTreeMap<String, BTreeMap<SkillLabel, i32>> {
        &self.skill_specializations
    }

    /// The one skill-write operation.
    ///
    /// Clamps to `[0, 99]`, mirrors specializations, raises sibling languages
    /// when a language crosses 50 or 90 upward, and re-caps SAN when
    /// 克苏鲁神话 changes.
    pub fn set_skill(&mut self, label: SkillLabel, value: i32) -> SkillWrite {
        let value = value.clamp(0, SKILL_MAX);
        let previous = self.skill(&label);
        self.write_skill_value(&label, value);

        let propagated = match label.language_name() {
            Some(lang) if language::crosses_threshold(previous, value) => {
                let lang = lang.to_string();
                language::propagate(self, &lang, value)
            }
            _ => Vec::new(),
        };

        if label.main() == CTHULHU_MYTHOS {
            self.san = self.san.min(self.max_sanity());
        }

        SkillWrite {
            label,
            previous,
            value,
            propagated,
        }
    }

    /// Value-only write: stores and mirrors, no threshold detection.
    pub(crate) fn write_skill_value(&mut self, label: &SkillLabel, value: i32) {
        let value = value.clamp(0, SKILL_MAX);
        self.skills.insert(label.clone(), value);
        if label.is_specialized() {
            self.skill_specializations
                .entry(label.main().to_string())
                .or_default()
                .insert(label.clone(), value);
        }
    }

    pub(crate) fn clear_skills(&mut self) {
        self.skills.clear();
        self.skill_specializations.clear();
    }

    pub fn occupation_skills(&self) -> &[SkillLabel] {
        &self.occupation_skills
    }

    pub fn set_occupation_skills(&mut self, skills: Vec<SkillLabel>) {
        self.occupation_skills = skills;
    }

    // =========================================================================
    // Skill point budgets
    // =========================================================================

    pub fn occupation_skill_points(&self) -> i32 {
        self.occupation_skill_points
    }

    pub fn occupation_skill_points_allocated(&self) -> i32 {
        self.occupation_skill_points_allocated
    }

    pub fn interest_skill_points(&self) -> i32 {
        self.interest_skill_points
    }

    pub fn interest_skill_points_allocated(&self) -> i32 {
        self.interest_skill_points_allocated
    }

    pub fn budget(&self, pool: SkillPool) -> i32 {
        match pool {
            SkillPool::Occupation => self.occupation_skill_points,
            SkillPool::Interest => self.interest_skill_points,
        }
    }

    pub fn allocated(&self, pool: SkillPool) -> i32 {
        match pool {
            SkillPool::Occupation => self.occupation_skill_points_allocated,
            SkillPool::Interest => self.interest_skill_points_allocated,
        }
    }

    pub fn remaining(&self, pool: SkillPool) -> i32 {
        self.budget(pool) - self.allocated(pool)
    }

    /// New budgets; both allocated counters restart at 0.
    pub fn set_skill_budgets(&mut self, occupation: i32, interest: i32) {
        self.occupation_skill_points = occupation.max(0);
        self.interest_skill_points = interest.max(0);
        self.reset_allocations();
    }

    pub(crate) fn reset_allocations(&mut self) {
        self.occupation_skill_points_allocated = 0;
        self.interest_skill_points_allocated = 0;
    }

    /// Counts `points` against a budget. Fails rather than overspend.
    pub(crate) fn record_allocation(
        &mut self,
        pool: SkillPool,
        points: i32,
    ) -> Result<(), DomainError> {
        if points < 0 {
            return Err(DomainError::validation("Allocated points cannot be negative"));
        }
        if points > self.remaining(pool) {
            return Err(DomainError::constraint(format!(
                "{pool}: {points} requested, {} remaining",
                self.remaining(pool)
            )));
        }
        match pool {
            SkillPool::Occupation => self.occupation_skill_points_allocated += points,
            SkillPool::Interest => self.interest_skill_points_allocated += points,
        }
        Ok(())
    }

    // =========================================================================
    // Background
    // =========================================================================

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn background_mut(&mut self) -> &mut Background {
        &mut self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    // =========================================================================
    // Possessions
    // =========================================================================

    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Sets cash (floored at 0) and the spending level that follows from it.
    pub fn set_cash(&mut self, cash: f64) {
        self.cash = cash.max(0.0);
        self.spending_level = SpendingLevel::from_cash(self.cash);
    }

    pub fn spending_level(&self) -> SpendingLevel {
        self.spending_level
    }

    pub fn assets(&self) -> &str {
        &self.assets
    }

    pub fn set_assets(&mut self, assets: impl Into<String>) {
        self.assets = assets.into();
    }

    pub fn equipment(&self) -> &[Possession] {
        &self.equipment
    }

    pub fn add_equipment(&mut self, possession: Possession) {
        self.equipment.push(possession);
    }

    pub fn items(&self) -> &[Possession] {
        &self.items
    }

    pub fn add_item(&mut self, possession: Possession) {
        self.items.push(possession);
    }

    pub fn weapons(&self) -> &[Possession] {
        &self.weapons
    }

    pub fn add_weapon(&mut self, possession: Possession) {
        self.weapons.push(possession);
    }

    // =========================================================================
    // Insanity
    // =========================================================================

    pub fn is_temporarily_insane(&self) -> bool {
        self.temporary_insanity
    }

    pub fn is_indefinitely_insane(&self) -> bool {
        self.indefinite_insanity
    }

    pub fn is_permanently_insane(&self) -> bool {
        self.permanent_insanity
    }

    pub fn set_temporary_insanity(&mut self, value: bool) {
        self.temporary_insanity = value;
    }

    pub fn set_indefinite_insanity(&mut self, value: bool) {
        self.indefinite_insanity = value;
    }

    pub fn set_permanent_insanity(&mut self, value: bool) {
        self.permanent_insanity = value;
    }

    pub fn phobias(&self) -> &[String] {
        &self.phobias
    }

    pub fn manias(&self) -> &[String] {
        &self.manias
    }

    /// Adds a phobia unless already present. Returns whether it was new.
    pub fn add_phobia(&mut self, phobia: impl Into<String>) -> bool {
        push_unique(&mut self.phobias, phobia.into())
    }

    /// Adds a mania unless already present. Returns whether it was new.
    pub fn add_mania(&mut self, mania: impl Into<String>) -> bool {
        push_unique(&mut self.manias, mania.into())
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sheet_is_consistent() {
        let investigator = Investigator::blank();
        assert_eq!(investigator.name(), "新调查员");
        assert_eq!(investigator.age(), 30);
        assert!(investigator.attributes().is_complete());
        assert_eq!(investigator.hp(), 10);
        assert_eq!(investigator.mp(), 10);
        assert_eq!(investigator.san(), 50);
        assert_eq!(investigator.damage_bonus(), DamageBonus::None);
        assert_eq!(investigator.build(), 0);
        assert_eq!(investigator.mov(), 9);
        assert_eq!(investigator.spending_level(), SpendingLevel::Comfortable);
        assert_eq!(investigator.attribute_half().get(Attribute::Luck), 25);
        assert_eq!(investigator.attribute_fifth().get(Attribute::Luck), 10);
    }

    #[test]
    fn blank_sheet_has_placeholder_background() {
        let background = Investigator::blank().background().clone();
        assert_eq!(background.personal_description, "普通人");
        assert_eq!(background.ideology, "无特殊信念");
        assert_eq!(background.traits, "无");
        assert!(background.injuries_scars.is_empty());
        assert!(background.background_story.is_empty());
    }

    #[test]
    fn attribute_changes_rederive() {
        let mut investigator = Investigator::blank();
        investigator.set_attribute(Attribute::Constitution, 70);
        assert_eq!(investigator.hp(), 12);
        assert_eq!(investigator.attribute_half().get(Attribute::Constitution), 35);
        assert_eq!(investigator.attribute_fifth().get(Attribute::Constitution), 14);

        investigator.set_attribute(Attribute::Power, 65);
        assert_eq!(investigator.mp(), 13);
        assert_eq!(investigator.san(), 65);
    }

    #[test]
    fn age_must_fall_in_a_bracket_and_moves_mov() {
        let mut investigator = Investigator::blank();
        assert!(investigator.set_age(14).is_err());
        assert!(investigator.set_age(90).is_err());
        assert_eq!(investigator.age(), 30);

        investigator.set_age(55).unwrap();
        assert_eq!(investigator.mov(), 7);
    }

    #[test]
    fn set_skill_clamps_and_mirrors_specializations() {
        let mut investigator = Investigator::new();
        let pistol = SkillLabel::specialized("射击", "手枪");
        let write = investigator.set_skill(pistol.clone(), 120);
        assert_eq!(write.value, 99);
        assert_eq!(investigator.skill(&pistol), 99);
        assert_eq!(
            investigator.skill_specializations()["射击"].get(&pistol),
            Some(&99)
        );

        investigator.set_skill(pistol.clone(), 40);
        assert_eq!(
            investigator.skill_specializations()["射击"].get(&pistol),
            Some(&40)
        );

        investigator.set_skill(SkillLabel::new("侦查"), -3);
        assert_eq!(investigator.skill(&SkillLabel::new("侦查")), 0);
        assert!(!investigator.skill_specializations().contains_key("侦查"));
    }

    #[test]
    fn language_crossing_fifty_raises_siblings_to_floor() {
        let mut investigator = Investigator::new();
        investigator.set_skill(SkillLabel::language("英语"), 10);
        investigator.set_skill(SkillLabel::language("荷兰语"), 15);

        let write = investigator.set_skill(SkillLabel::language("英语"), 55);

        assert_eq!(investigator.skill(&SkillLabel::language("德语")), 10);
        assert_eq!(investigator.skill(&SkillLabel::language("瑞典语")), 10);
        assert_eq!(investigator.skill(&SkillLabel::language("挪威语")), 10);
        assert_eq!(investigator.skill(&SkillLabel::language("丹麦语")), 10);
        assert_eq!(investigator.skill(&SkillLabel::language("荷兰语")), 15);
        assert_eq!(investigator.skill_value(&SkillLabel::language("法语")), None);
        assert_eq!(write.propagated.len(), 4);
        assert_eq!(
            investigator.skill_specializations()["语言"].get(&SkillLabel::language("德语")),
            Some(&10)
        );
    }

    #[test]
    fn no_propagation_without_a_crossing() {
        let mut investigator = Investigator::new();
        investigator.set_skill(SkillLabel::language("法语"), 60);
        investigator.set_skill(SkillLabel::language("西班牙语"), 0);

        let write = investigator.set_skill(SkillLabel::language("法语"), 70);
        assert!(write.propagated.is_empty());
        assert_eq!(investigator.skill(&SkillLabel::language("西班牙语")), 0);
    }

    #[test]
    fn mythos_caps_sanity() {
        let mut investigator = Investigator::blank();
        investigator.set_attribute(Attribute::Power, 90);
        assert_eq!(investigator.san(), 90);

        investigator.set_skill(SkillLabel::new(CTHULHU_MYTHOS), 15);
        assert_eq!(investigator.max_sanity(), 84);
        assert_eq!(investigator.san(), 84);

        investigator.derive_stats();
        assert_eq!(investigator.san(), 84);
    }

    #[test]
    fn allocation_never_exceeds_budget() {
        let mut investigator = Investigator::blank();
        investigator.set_skill_budgets(100, 40);
        investigator.record_allocation(SkillPool::Occupation, 60).unwrap();
        assert_eq!(investigator.remaining(SkillPool::Occupation), 40);
        assert!(investigator.record_allocation(SkillPool::Occupation, 41).is_err());
        assert!(investigator.record_allocation(SkillPool::Interest, -1).is_err());
        assert_eq!(investigator.occupation_skill_points_allocated(), 60);

        investigator.set_skill_budgets(200, 40);
        assert_eq!(investigator.occupation_skill_points_allocated(), 0);
    }

    #[test]
    fn phobias_and_manias_have_set_semantics() {
        let mut investigator = Investigator::new();
        assert!(investigator.add_phobia("恐高症"));
        assert!(!investigator.add_phobia("恐高症"));
        assert!(investigator.add_mania("盗窃癖"));
        assert_eq!(investigator.phobias(), &["恐高症".to_string()]);
        assert_eq!(investigator.manias().len(), 1);
    }

    #[test]
    fn cash_drives_spending_level() {
        let mut investigator = Investigator::new();
        investigator.set_cash(5.0);
        assert_eq!(investigator.spending_level(), SpendingLevel::Poor);
        investigator.set_cash(750.0);
        assert_eq!(investigator.spending_level(), SpendingLevel::Rich);
        investigator.set_cash(-20.0);
        assert_eq!(investigator.cash(), 0.0);
    }

    #[test]
    fn serializes_flat_sheet_fields() {
        let mut investigator = Investigator::blank();
        investigator.set_skill(SkillLabel::language("英语"), 60);
        investigator.background_mut().traits = "慷慨大方。".to_string();
        investigator.add_weapon(Possession::weapon("小刀", "1D4", "接触"));
        investigator.set_temporary_insanity(true);

        let value = serde_json::to_value(&investigator).unwrap();
        for key in [
            "name",
            "attributes",
            "attribute_half",
            "attribute_fifth",
            "db",
            "skills",
            "skill_specializations",
            "occupation_skill_points_allocated",
            "personal_description",
            "background_story",
            "spending_level",
            "weapons",
            "temporary_insanity",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["traits"], "慷慨大方。");
        assert_eq!(value["skills"]["语言（英语）"], 60);
        assert_eq!(value["attributes"]["力量"], 50);
        assert_eq!(value["db"], "0");
        assert_eq!(value["spending_level"], "小康");

        let back: Investigator = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back, investigator);
        assert_eq!(serde_json::to_value(&back).unwrap(), value);
    }

    #[test]
    fn tolerates_documents_without_insanity_fields() {
        let json = r#"{"name": "旧档案", "age": 40, "san": 45, "skills": {"侦查": 60}}"#;
        let investigator: Investigator = serde_json::from_str(json).unwrap();
        assert_eq!(investigator.name(), "旧档案");
        assert_eq!(investigator.san(), 45);
        assert!(!investigator.is_temporarily_insane());
        assert!(investigator.phobias().is_empty());
        assert_eq!(investigator.skill(&SkillLabel::new("侦查")), 60);
    }
}
