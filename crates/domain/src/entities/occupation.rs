//! Occupations - the occupation half of the rule tables
//!
//! Table files hold [`OccupationRecord`]s with free-text skill entries and
//! formulas. They are parsed once into [`Occupation`]s so generation never
//! looks at the raw text again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::value_objects::{Attributes, OccupationSkillEntry, SkillPointFormula};

/// An occupation exactly as it appears in a table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupationRecord {
    pub description: String,
    pub skills: Vec<String>,
    /// `[min, max]`
    pub credit_rating: (i32, i32),
    pub skill_points: String,
}

/// Inclusive credit rating range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRating {
    pub min: i32,
    pub max: i32,
}

impl CreditRating {
    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if !(0..=99).contains(&min) || !(0..=99).contains(&max) {
            return Err(DomainError::validation(format!(
                "Credit rating must be within 0-99, got {min}-{max}"
            )));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "Credit rating minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }
}

/// A parsed occupation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupation {
    name: String,
    description: String,
    skill_entries: Vec<OccupationSkillEntry>,
    credit_rating: CreditRating,
    skill_points: SkillPointFormula,
}

impl Occupation {
    /// Parse a table record. Skill entries must all parse; an unrecognized
    /// formula falls back to EDU × 4.
    pub fn from_record(
        name: impl Into<String>,
        record: &OccupationRecord,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Occupation name cannot be empty"));
        }
        let skill_entries = record
            .skills
            .iter()
            .map(|entry| OccupationSkillEntry::parse(entry))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::parse(format!("Occupation '{name}': {e}")))?;
        let credit_rating = CreditRating::new(record.credit_rating.0, record.credit_rating.1)?;

        Ok(Self {
            name,
            description: record.description.clone(),
            skill_entries,
            credit_rating,
            skill_points: SkillPointFormula::resolve(&record.skill_points),
        })
    }

    pub fn to_record(&self) -> OccupationRecord {
        OccupationRecord {
            description: self.description.clone(),
            skills: self.skill_entries.iter().map(ToString::to_string).collect(),
            credit_rating: (self.credit_rating.min, self.credit_rating.max),
            skill_points: self.skill_points.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skill_entries(&self) -> &[OccupationSkillEntry] {
        &self.skill_entries
    }

    pub fn credit_rating(&self) -> CreditRating {
        self.credit_rating
    }

    pub fn skill_points(&self) -> &SkillPointFormula {
        &self.skill_points
    }

    /// Occupation skill points for these characteristics.
    pub fn occupation_points(&self, attributes: &Attributes) -> i32 {
        self.skill_points.points(attributes)
    }
}

/// All occupations by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupationTable {
    occupations: BTreeMap<String, Occupation>,
}

impl OccupationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole table. Records that fail to parse are returned alongside
    /// the table instead of failing it.
    pub fn from_records(
        records: &BTreeMap<String, OccupationRecord>,
    ) -> (Self, Vec<(String, DomainError)>) {
        let mut table = Self::new();
        let mut rejected = Vec::new();
        for (name, record) in records {
            match Occupation::from_record(name.clone(), record) {
                Ok(occupation) => table.insert(occupation),
                Err(e) => rejected.push((name.clone(), e)),
            }
        }
        (table, rejected)
    }

    pub fn insert(&mut self, occupation: Occupation) {
        self.occupations.insert(occupation.name.clone(), occupation);
    }

    pub fn get(&self, name: &str) -> Option<&Occupation> {
        self.occupations.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.occupations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Occupation> {
        self.occupations.values()
    }

    pub fn len(&self) -> usize {
        self.occupations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupations.is_empty()
    }

    pub fn to_records(&self) -> BTreeMap<String, OccupationRecord> {
        self.occupations
            .iter()
            .map(|(name, occupation)| (name.clone(), occupation.to_record()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Attribute, SkillLabel};

    fn record(skills: &[&str], formula: &str) -> OccupationRecord {
        OccupationRecord {
            description: String::new(),
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            credit_rating: (9, 30),
            skill_points: formula.to_string(),
        }
    }

    #[test]
    fn parses_record_into_typed_entries() {
        let occupation =
            Occupation::from_record("记者", &record(&["历史", "其他语言", "自选二技能"], "教育×4"))
                .unwrap();
        assert_eq!(
            occupation.skill_entries(),
            &[
                OccupationSkillEntry::Fixed(SkillLabel::new("历史")),
                OccupationSkillEntry::AnySpecialization("语言".into()),
                OccupationSkillEntry::ChooseAny(2),
            ]
        );
        assert_eq!(occupation.credit_rating(), CreditRating { min: 9, max: 30 });
    }

    #[test]
    fn occupation_points_follow_formula() {
        let occupation =
            Occupation::from_record("艺术家", &record(&["侦查"], "教育×2+敏捷×2")).unwrap();
        let attributes: Attributes = [(Attribute::Education, 60)].into_iter().collect();
        assert_eq!(occupation.occupation_points(&attributes), 180);
    }

    #[test]
    fn missing_fields_default() {
        let parsed: OccupationRecord = serde_json::from_str(r#"{"skills": ["侦查"]}"#).unwrap();
        assert_eq!(parsed.credit_rating, (0, 0));
        let occupation = Occupation::from_record("无业", &parsed).unwrap();
        assert_eq!(occupation.skill_points(), &SkillPointFormula::EducationTimesFour);
    }

    #[test]
    fn bad_records_are_rejected_individually() {
        let mut records = BTreeMap::new();
        records.insert("好".to_string(), record(&["侦查"], "教育×4"));
        records.insert("坏".to_string(), record(&["自选零技能"], "教育×4"));
        let mut inverted = record(&["侦查"], "教育×4");
        inverted.credit_rating = (50, 10);
        records.insert("反".to_string(), inverted);

        let (table, rejected) = OccupationTable::from_records(&records);
        assert_eq!(table.len(), 1);
        assert!(table.get("好").is_some());
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn record_round_trips_through_parsed_form() {
        let original = record(
            &["艺术与手艺（任一）", "历史或博物学", "自选三技能"],
            "教育×2+外貌×2或敏捷×2",
        );
        let occupation = Occupation::from_record("艺人", &original).unwrap();
        assert_eq!(occupation.to_record(), original);
    }
}
