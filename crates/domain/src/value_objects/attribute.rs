//! The nine characteristics and the value map that holds them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Highest value any characteristic can hold.
pub const ATTRIBUTE_MAX: i32 = 99;

/// One of the nine characteristics.
///
/// Serialized under its Chinese name, which is also the key used in
/// persisted investigator files and rule-table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "力量")]
    Strength,
    #[serde(rename = "体质")]
    Constitution,
    #[serde(rename = "体型")]
    Size,
    #[serde(rename = "敏捷")]
    Dexterity,
    #[serde(rename = "外貌")]
    Appearance,
    #[serde(rename = "智力")]
    Intelligence,
    #[serde(rename = "意志")]
    Power,
    #[serde(rename = "教育")]
    Education,
    #[serde(rename = "幸运")]
    Luck,
}

impl Attribute {
    /// All nine, in sheet order.
    pub const ALL: [Attribute; 9] = [
        Attribute::Strength,
        Attribute::Constitution,
        Attribute::Size,
        Attribute::Dexterity,
        Attribute::Appearance,
        Attribute::Intelligence,
        Attribute::Power,
        Attribute::Education,
        Attribute::Luck,
    ];

    /// Chinese sheet name.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "力量",
            Attribute::Constitution => "体质",
            Attribute::Size => "体型",
            Attribute::Dexterity => "敏捷",
            Attribute::Appearance => "外貌",
            Attribute::Intelligence => "智力",
            Attribute::Power => "意志",
            Attribute::Education => "教育",
            Attribute::Luck => "幸运",
        }
    }

    /// English rulebook abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Constitution => "CON",
            Attribute::Size => "SIZ",
            Attribute::Dexterity => "DEX",
            Attribute::Appearance => "APP",
            Attribute::Intelligence => "INT",
            Attribute::Power => "POW",
            Attribute::Education => "EDU",
            Attribute::Luck => "LUCK",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    /// Accepts the Chinese name or the abbreviation (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == trimmed || a.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute: {trimmed}")))
    }
}

/// Characteristic values keyed by attribute.
///
/// Values are kept in `[0, 99]`. A missing key reads as 0 through [`Attributes::get`];
/// use [`Attributes::value`] when absence matters (skill-point formulas fall back
/// on a missing attribute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<Attribute, i32>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every attribute set to `value`.
    pub fn uniform(value: i32) -> Self {
        let mut attributes = Self::new();
        for attribute in Attribute::ALL {
            attributes.set(attribute, value);
        }
        attributes
    }

    /// Value or 0 when absent.
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.0.get(&attribute).copied().unwrap_or(0)
    }

    pub fn value(&self, attribute: Attribute) -> Option<i32> {
        self.0.get(&attribute).copied()
    }

    /// Stores `value` clamped into `[0, 99]`.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        self.0.insert(attribute, value.clamp(0, ATTRIBUTE_MAX));
    }

    /// Adds `delta` (negative to reduce), staying within `[0, 99]`.
    pub fn adjust(&mut self, attribute: Attribute, delta: i32) {
        let current = self.get(attribute);
        self.set(attribute, current + delta);
    }

    /// True when all nine keys are present.
    pub fn is_complete(&self) -> bool {
        Attribute::ALL.iter().all(|a| self.0.contains_key(a))
    }

    /// Inserts 0 for any missing key.
    pub fn fill_missing(&mut self) {
        for attribute in Attribute::ALL {
            self.0.entry(attribute).or_insert(0);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.0.iter().map(|(a, v)| (*a, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Attribute, i32)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (Attribute, i32)>>(iter: T) -> Self {
        let mut attributes = Attributes::new();
        for (attribute, value) in iter {
            attributes.set(attribute, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chinese_names_and_abbreviations() {
        assert_eq!("力量".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("edu".parse::<Attribute>().unwrap(), Attribute::Education);
        assert_eq!(" 幸运 ".parse::<Attribute>().unwrap(), Attribute::Luck);
        assert!("魅力".parse::<Attribute>().is_err());
    }

    #[test]
    fn values_are_clamped() {
        let mut attributes = Attributes::new();
        attributes.set(Attribute::Strength, 140);
        attributes.set(Attribute::Size, -5);
        assert_eq!(attributes.get(Attribute::Strength), 99);
        assert_eq!(attributes.get(Attribute::Size), 0);

        attributes.adjust(Attribute::Strength, -120);
        assert_eq!(attributes.get(Attribute::Strength), 0);
    }

    #[test]
    fn missing_reads_as_zero_but_is_distinguishable() {
        let attributes: Attributes = [(Attribute::Education, 60)].into_iter().collect();
        assert_eq!(attributes.get(Attribute::Dexterity), 0);
        assert_eq!(attributes.value(Attribute::Dexterity), None);
        assert!(!attributes.is_complete());

        let mut filled = attributes.clone();
        filled.fill_missing();
        assert!(filled.is_complete());
        assert_eq!(filled.get(Attribute::Education), 60);
    }

    #[test]
    fn serializes_with_chinese_keys_in_sheet_order() {
        let attributes = Attributes::uniform(50);
        let json = serde_json::to_string(&attributes).unwrap();
        assert!(json.starts_with("{\"力量\":50,\"体质\":50,\"体型\":50"));
        assert!(json.ends_with("\"幸运\":50}"));

        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attributes);
    }
}
