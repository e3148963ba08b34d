//! Skill definitions - the skill half of the rule tables
//!
//! Each main skill carries a base value, a category, and optionally a list
//! of specializations. The `语言` entry may also carry language-family
//! groupings for display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::{Attribute, Attributes, SkillLabel};

/// Dodge: base is half DEX.
pub const DODGE: &str = "闪避";
/// Own language: base is EDU.
pub const OWN_LANGUAGE: &str = "母语";
/// Cthulhu Mythos: starts at 0 and caps maximum sanity.
pub const CTHULHU_MYTHOS: &str = "克苏鲁神话";
/// Credit Rating: driven by occupation, never by random allocation.
pub const CREDIT_RATING: &str = "信用评级";

/// Skill categories for grouping on the sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "知识")]
    Knowledge,
    #[serde(rename = "社交")]
    Social,
    #[serde(rename = "战斗")]
    Combat,
    #[serde(rename = "感知")]
    Perception,
    #[serde(rename = "身体")]
    Physical,
    #[serde(rename = "技能")]
    Practical,
    /// Anything a hand-edited table invents.
    #[default]
    #[serde(rename = "其他", other)]
    Other,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Knowledge => "知识",
            Self::Social => "社交",
            Self::Combat => "战斗",
            Self::Perception => "感知",
            Self::Physical => "身体",
            Self::Practical => "技能",
            Self::Other => "其他",
        }
    }
}

/// One row of the skill table.
///
/// Every field is optional in table files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDefinition {
    pub base_value: i32,
    pub category: SkillCategory,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub language_families: BTreeMap<String, Vec<String>>,
    /// Specializations whose base differs from `base_value` (e.g. 射击（步枪/霰弹枪） 25).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub specialization_bases: BTreeMap<String, i32>,
}

impl SkillDefinition {
    pub fn new(base_value: i32, category: SkillCategory) -> Self {
        Self {
            base_value,
            category,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_specializations<I, S>(mut self, specializations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specializations = specializations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specialization_base(
        mut self,
        specialization: impl Into<String>,
        base: i32,
    ) -> Self {
        self.specialization_bases.insert(specialization.into(), base);
        self
    }

    pub fn has_specializations(&self) -> bool {
        !self.specializations.is_empty()
    }
}

/// Main skill name → definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTable(BTreeMap<String, SkillDefinition>);

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: SkillDefinition) {
        self.0.insert(name.into(), definition);
    }

    pub fn get(&self, main: &str) -> Option<&SkillDefinition> {
        self.0.get(main)
    }

    pub fn contains(&self, main: &str) -> bool {
        self.0.contains_key(main)
    }

    /// True when the label's main skill is in the table.
    pub fn knows(&self, label: &SkillLabel) -> bool {
        self.contains(label.main())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillDefinition)> {
        self.0.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Specializations listed for `main`; empty for unknown or plain skills.
    pub fn specializations_of(&self, main: &str) -> &[String] {
        self.get(main)
            .map(|def| def.specializations.as_slice())
            .unwrap_or(&[])
    }

    /// Starting value of a skill for these characteristics.
    ///
    /// `None` when the main skill is unknown.
    pub fn base_value(&self, label: &SkillLabel, attributes: &Attributes) -> Option<i32> {
        let definition = self.get(label.main())?;
        let base = match label.main() {
            DODGE => attributes.get(Attribute::Dexterity) / 2,
            OWN_LANGUAGE => attributes.get(Attribute::Education),
            _ => definition.base_value,
        };
        Some(
            label
                .specialization()
                .and_then(|spec| definition.specialization_bases.get(spec).copied())
                .unwrap_or(base),
        )
    }
}

impl FromIterator<(String, SkillDefinition)> for SkillTable {
    fn from_iter<T: IntoIterator<Item = (String, SkillDefinition)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SkillTable {
        let mut table = SkillTable::new();
        table.insert("侦查", SkillDefinition::new(25, SkillCategory::Perception));
        table.insert(DODGE, SkillDefinition::new(0, SkillCategory::Physical));
        table.insert(OWN_LANGUAGE, SkillDefinition::new(0, SkillCategory::Knowledge));
        table.insert(
            "射击",
            SkillDefinition::new(20, SkillCategory::Combat)
                .with_specializations(["手枪", "步枪/霰弹枪"])
                .with_specialization_base("步枪/霰弹枪", 25),
        );
        table
    }

    #[test]
    fn dynamic_bases_read_attributes() {
        let attributes: Attributes = [(Attribute::Dexterity, 65), (Attribute::Education, 70)]
            .into_iter()
            .collect();
        let table = table();
        assert_eq!(table.base_value(&SkillLabel::new(DODGE), &attributes), Some(32));
        assert_eq!(
            table.base_value(&SkillLabel::new(OWN_LANGUAGE), &attributes),
            Some(70)
        );
        assert_eq!(table.base_value(&SkillLabel::new("侦查"), &attributes), Some(25));
    }

    #[test]
    fn specialization_base_overrides_main_base() {
        let table = table();
        let attributes = Attributes::new();
        assert_eq!(
            table.base_value(&SkillLabel::specialized("射击", "手枪"), &attributes),
            Some(20)
        );
        assert_eq!(
            table.base_value(&SkillLabel::specialized("射击", "步枪/霰弹枪"), &attributes),
            Some(25)
        );
    }

    #[test]
    fn unknown_skill_is_absent_not_an_error() {
        let table = table();
        assert_eq!(table.get("飞天"), None);
        assert_eq!(table.base_value(&SkillLabel::new("飞天"), &Attributes::new()), None);
        assert!(table.specializations_of("飞天").is_empty());
        assert!(table.specializations_of("侦查").is_empty());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let json = r#"{"侦查": {"base_value": 25}, "神秘学": {"category": "玄学"}}"#;
        let table: SkillTable = serde_json::from_str(json).unwrap();
        let spot = table.get("侦查").unwrap();
        assert_eq!(spot.category, SkillCategory::Other);
        assert!(spot.specializations.is_empty());
        let occult = table.get("神秘学").unwrap();
        assert_eq!(occult.base_value, 0);
        assert_eq!(occult.category, SkillCategory::Other);
    }
}
