//! Typed forms of the occupation table's text fields.
//!
//! Occupation entries arrive as free text ("教育×2+敏捷×2或力量×2",
//! "艺术与手艺（任一）", "自选二技能"). They are parsed once, when the
//! table is loaded, into the closed variants below and evaluated from there.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Attribute, Attributes, SkillLabel, LANGUAGE_SKILL};
use crate::error::DomainError;

// =============================================================================
// Skill point formula
// =============================================================================

/// How an occupation's skill-point budget is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SkillPointFormula {
    /// EDU × 4
    EducationTimesFour,
    /// EDU × 2 + (best of the listed attributes) × 2
    EducationTimesTwoPlus(Vec<Attribute>),
}

impl SkillPointFormula {
    /// Lenient resolution: unrecognized text becomes EDU × 4.
    pub fn resolve(text: &str) -> Self {
        text.parse().unwrap_or(Self::EducationTimesFour)
    }

    /// Evaluate against the investigator's characteristics.
    ///
    /// A missing secondary attribute is replaced by EDU / 2; when several
    /// alternatives are allowed ("或") the highest one is used.
    pub fn points(&self, attributes: &Attributes) -> i32 {
        let education = attributes.get(Attribute::Education);
        match self {
            Self::EducationTimesFour => education * 4,
            Self::EducationTimesTwoPlus(alternatives) => {
                let best = alternatives
                    .iter()
                    .map(|a| attributes.value(*a).unwrap_or(education / 2))
                    .max()
                    .unwrap_or(education / 2);
                education * 2 + best * 2
            }
        }
    }
}

impl Default for SkillPointFormula {
    fn default() -> Self {
        Self::EducationTimesFour
    }
}

impl FromStr for SkillPointFormula {
    type Err = DomainError;

    /// Accepts `教育×4`, `教育×2+敏捷×2`, `教育×2+外貌×2或敏捷×2` and the
    /// ASCII spellings `EDU*4`, `EDU*2+DEX*2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '*' => '×',
                '＋' => '+',
                other => other,
            })
            .collect();

        let term = |text: &str| -> Result<(Attribute, i32), DomainError> {
            let (name, factor) = text
                .split_once('×')
                .ok_or_else(|| DomainError::parse(format!("Missing multiplier in '{text}'")))?;
            let attribute: Attribute = name.parse()?;
            let factor: i32 = factor
                .parse()
                .map_err(|_| DomainError::parse(format!("Invalid multiplier in '{text}'")))?;
            Ok((attribute, factor))
        };

        let unknown = || DomainError::parse(format!("Unrecognized skill point formula: {s}"));

        match normalized.split_once('+') {
            None => match term(&normalized)? {
                (Attribute::Education, 4) => Ok(Self::EducationTimesFour),
                _ => Err(unknown()),
            },
            Some((base, rest)) => {
                if term(base)? != (Attribute::Education, 2) {
                    return Err(unknown());
                }
                let alternatives = rest
                    .split('或')
                    .map(|part| match term(part)? {
                        (attribute, 2) if attribute != Attribute::Education => Ok(attribute),
                        _ => Err(unknown()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::EducationTimesTwoPlus(alternatives))
            }
        }
    }
}

impl fmt::Display for SkillPointFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EducationTimesFour => f.write_str("教育×4"),
            Self::EducationTimesTwoPlus(alternatives) => {
                let rest: Vec<String> = alternatives.iter().map(|a| format!("{a}×2")).collect();
                write!(f, "教育×2+{}", rest.join("或"))
            }
        }
    }
}

impl TryFrom<String> for SkillPointFormula {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkillPointFormula> for String {
    fn from(value: SkillPointFormula) -> Self {
        value.to_string()
    }
}

// =============================================================================
// Occupation skill entries
// =============================================================================

/// One line of an occupation's skill list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupationSkillEntry {
    /// A concrete skill.
    Fixed(SkillLabel),
    /// Any specialization of the named main skill (`艺术与手艺（任一）`, `其他语言`).
    AnySpecialization(String),
    /// Exactly one of the listed skills (`历史或博物学`, `一种社交技能（…）`).
    OneOf(Vec<SkillLabel>),
    /// Free picks from skills not already on the list (`自选二技能`).
    ChooseAny(u8),
}

impl OccupationSkillEntry {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(DomainError::parse("Empty occupation skill entry"));
        }

        if let Some(count) = text
            .strip_prefix("自选")
            .and_then(|rest| rest.strip_suffix("技能"))
        {
            let count = parse_count(count)
                .ok_or_else(|| DomainError::parse(format!("Invalid pick count in '{text}'")))?;
            return Ok(Self::ChooseAny(count));
        }

        if text == "其他语言" {
            return Ok(Self::AnySpecialization(LANGUAGE_SKILL.to_string()));
        }
        if let Some(spec) = text
            .strip_prefix("其他语言（")
            .and_then(|rest| rest.strip_suffix('）'))
        {
            return Ok(Self::Fixed(SkillLabel::language(spec)));
        }

        if let Some(main) = text.strip_suffix("（任一）") {
            return Ok(Self::AnySpecialization(main.trim().to_string()));
        }

        if let Some(rest) = text.strip_prefix("一种") {
            let inner = rest
                .split_once('（')
                .and_then(|(_, inner)| inner.strip_suffix('）'))
                .ok_or_else(|| DomainError::parse(format!("Missing option list in '{text}'")))?;
            let options = inner
                .split(['、', '或'])
                .filter(|s| !s.trim().is_empty())
                .map(SkillLabel::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Self::one_of(options, text);
        }

        if text.contains('或') {
            let options = text
                .split('或')
                .map(SkillLabel::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Self::one_of(options, text);
        }

        SkillLabel::parse(text).map(Self::Fixed)
    }

    fn one_of(options: Vec<SkillLabel>, text: &str) -> Result<Self, DomainError> {
        if options.len() < 2 {
            return Err(DomainError::parse(format!("Too few options in '{text}'")));
        }
        Ok(Self::OneOf(options))
    }
}

impl FromStr for OccupationSkillEntry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OccupationSkillEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(label) => write!(f, "{label}"),
            Self::AnySpecialization(main) if main == LANGUAGE_SKILL => f.write_str("其他语言"),
            Self::AnySpecialization(main) => write!(f, "{main}（任一）"),
            Self::OneOf(options) => {
                let names: Vec<String> = options.iter().map(ToString::to_string).collect();
                f.write_str(&names.join("或"))
            }
            Self::ChooseAny(count) => write!(f, "自选{}技能", count_name(*count)),
        }
    }
}

const COUNT_NAMES: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

fn parse_count(text: &str) -> Option<u8> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u8>() {
        return (n > 0).then_some(n);
    }
    let text = if text == "两" { "二" } else { text };
    COUNT_NAMES
        .iter()
        .position(|name| *name == text)
        .and_then(|i| u8::try_from(i + 1).ok())
}

fn count_name(count: u8) -> String {
    usize::from(count)
        .checked_sub(1)
        .and_then(|i| COUNT_NAMES.get(i))
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edu_only(edu: i32) -> Attributes {
        [(Attribute::Education, edu)].into_iter().collect()
    }

    #[test]
    fn parses_the_four_formula_shapes() {
        assert_eq!(
            "教育×4".parse::<SkillPointFormula>().unwrap(),
            SkillPointFormula::EducationTimesFour
        );
        assert_eq!(
            "教育×2+敏捷×2".parse::<SkillPointFormula>().unwrap(),
            SkillPointFormula::EducationTimesTwoPlus(vec![Attribute::Dexterity])
        );
        assert_eq!(
            "教育×2+外貌×2或敏捷×2".parse::<SkillPointFormula>().unwrap(),
            SkillPointFormula::EducationTimesTwoPlus(vec![
                Attribute::Appearance,
                Attribute::Dexterity
            ])
        );
        assert_eq!(
            "EDU*2 + STR*2".parse::<SkillPointFormula>().unwrap(),
            SkillPointFormula::EducationTimesTwoPlus(vec![Attribute::Strength])
        );
    }

    #[test]
    fn unrecognized_formula_defaults_to_edu_times_four() {
        assert!("智力×4".parse::<SkillPointFormula>().is_err());
        assert!("教育×3+敏捷×2".parse::<SkillPointFormula>().is_err());
        assert_eq!(
            SkillPointFormula::resolve("随便"),
            SkillPointFormula::EducationTimesFour
        );
    }

    #[test]
    fn missing_secondary_attribute_falls_back_to_half_edu() {
        let formula = SkillPointFormula::resolve("教育×2+敏捷×2");
        assert_eq!(formula.points(&edu_only(60)), 60 * 2 + (60 / 2) * 2);
        assert_eq!(formula.points(&edu_only(60)), 180);
    }

    #[test]
    fn alternatives_take_the_best_attribute() {
        let formula = SkillPointFormula::resolve("教育×2+敏捷×2或力量×2");
        let attributes: Attributes = [
            (Attribute::Education, 50),
            (Attribute::Dexterity, 40),
            (Attribute::Strength, 70),
        ]
        .into_iter()
        .collect();
        assert_eq!(formula.points(&attributes), 100 + 140);
    }

    #[test]
    fn formula_display_round_trips() {
        for text in ["教育×4", "教育×2+力量×2", "教育×2+外貌×2或力量×2"] {
            assert_eq!(SkillPointFormula::resolve(text).to_string(), text);
        }
    }

    #[test]
    fn parses_every_skill_entry_shape() {
        assert_eq!(
            OccupationSkillEntry::parse("侦查").unwrap(),
            OccupationSkillEntry::Fixed(SkillLabel::new("侦查"))
        );
        assert_eq!(
            OccupationSkillEntry::parse("艺术与手艺（任一）").unwrap(),
            OccupationSkillEntry::AnySpecialization("艺术与手艺".into())
        );
        assert_eq!(
            OccupationSkillEntry::parse("其他语言").unwrap(),
            OccupationSkillEntry::AnySpecialization("语言".into())
        );
        assert_eq!(
            OccupationSkillEntry::parse("其他语言（拉丁语）").unwrap(),
            OccupationSkillEntry::Fixed(SkillLabel::language("拉丁语"))
        );
        assert_eq!(
            OccupationSkillEntry::parse("历史或博物学").unwrap(),
            OccupationSkillEntry::OneOf(vec![SkillLabel::new("历史"), SkillLabel::new("博物学")])
        );
        assert_eq!(
            OccupationSkillEntry::parse("一种社交技能（取悦、话术、恐吓或说服）").unwrap(),
            OccupationSkillEntry::OneOf(vec![
                SkillLabel::new("取悦"),
                SkillLabel::new("话术"),
                SkillLabel::new("恐吓"),
                SkillLabel::new("说服"),
            ])
        );
        assert_eq!(
            OccupationSkillEntry::parse("自选二技能").unwrap(),
            OccupationSkillEntry::ChooseAny(2)
        );
        assert_eq!(
            OccupationSkillEntry::parse("自选六技能").unwrap(),
            OccupationSkillEntry::ChooseAny(6)
        );
        assert_eq!(
            OccupationSkillEntry::parse("射击（步枪/霰弹枪）").unwrap(),
            OccupationSkillEntry::Fixed(SkillLabel::specialized("射击", "步枪/霰弹枪"))
        );
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(OccupationSkillEntry::parse("").is_err());
        assert!(OccupationSkillEntry::parse("自选零技能").is_err());
        assert!(OccupationSkillEntry::parse("一种社交技能").is_err());
    }

    #[test]
    fn entry_display_uses_table_shorthand() {
        for text in [
            "侦查",
            "艺术与手艺（任一）",
            "其他语言",
            "历史或博物学",
            "自选三技能",
        ] {
            assert_eq!(OccupationSkillEntry::parse(text).unwrap().to_string(), text);
        }
    }
}
