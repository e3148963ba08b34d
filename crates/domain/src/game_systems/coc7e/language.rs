//! Language skill transfer.
//!
//! When a `语言（X）` skill crosses 50 or 90 upward, every other language of
//! X's family is raised to a floor: 10 at 50+, 20 at 90+. The write is a
//! capped set, never an addition, never a decrease. Sibling writes go through
//! the value-only path, so a cascade is exactly one level deep.

use std::fmt;

use crate::aggregates::Investigator;
use crate::entities::SkillTable;
use crate::value_objects::{SkillLabel, LANGUAGE_SKILL};

/// Thresholds that trigger a transfer, with the floor each one grants.
const THRESHOLDS: [(i32, i32); 2] = [(90, 20), (50, 10)];

/// The seven fixed language families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    Germanic,
    Slavic,
    Romance,
    SinoTibetan,
    Altaic,
    Semitic,
    Classical,
}

impl LanguageFamily {
    pub const ALL: [LanguageFamily; 7] = [
        LanguageFamily::Germanic,
        LanguageFamily::Slavic,
        LanguageFamily::Romance,
        LanguageFamily::SinoTibetan,
        LanguageFamily::Altaic,
        LanguageFamily::Semitic,
        LanguageFamily::Classical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LanguageFamily::Germanic => "日耳曼语族",
            LanguageFamily::Slavic => "斯拉夫语族",
            LanguageFamily::Romance => "罗曼语族",
            LanguageFamily::SinoTibetan => "汉藏语系",
            LanguageFamily::Altaic => "阿尔泰语系",
            LanguageFamily::Semitic => "闪含语系",
            LanguageFamily::Classical => "古典语言",
        }
    }

    pub fn languages(&self) -> &'static [&'static str] {
        match self {
            LanguageFamily::Germanic => &["英语", "德语", "荷兰语", "瑞典语", "挪威语", "丹麦语"],
            LanguageFamily::Slavic => &["俄语", "波兰语", "捷克语", "乌克兰语", "塞尔维亚语"],
            LanguageFamily::Romance => &["法语", "西班牙语", "意大利语", "葡萄牙语", "罗马尼亚语"],
            LanguageFamily::SinoTibetan => &["中文", "藏语"],
            LanguageFamily::Altaic => &["日语", "韩语", "蒙古语", "维吾尔语"],
            LanguageFamily::Semitic => &["阿拉伯语", "希伯来语", "埃塞俄比亚语"],
            LanguageFamily::Classical => &["拉丁语", "希腊语", "梵语", "古埃及语"],
        }
    }

    /// Family containing `language`, if any.
    pub fn of(language: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.languages().contains(&language))
    }
}

impl fmt::Display for LanguageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sibling floor granted by a language value: 20 at 90+, 10 at 50+.
pub fn transfer_floor(value: i32) -> Option<i32> {
    THRESHOLDS
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, floor)| *floor)
}

/// True when moving from `previous` to `value` passes 50 or 90 upward.
pub fn crosses_threshold(previous: i32, value: i32) -> bool {
    THRESHOLDS
        .iter()
        .any(|(threshold, _)| previous < *threshold && *threshold <= value)
}

/// Raises every sibling of `language` below the floor for `value` to exactly
/// that floor. Returns the siblings written, in family order.
///
/// Languages outside the fixed families propagate to nobody.
pub fn propagate(record: &mut Investigator, language: &str, value: i32) -> Vec<(SkillLabel, i32)> {
    let (Some(family), Some(floor)) = (LanguageFamily::of(language), transfer_floor(value)) else {
        return Vec::new();
    };

    let mut raised = Vec::new();
    for sibling in family.languages().iter().filter(|l| **l != language) {
        let label = SkillLabel::language(*sibling);
        if record.skill(&label) < floor {
            record.write_skill_value(&label, floor);
            raised.push((label, floor));
        }
    }
    raised
}

/// Family groupings for display: the 语言 skill's own table entry when it has
/// one, otherwise the fixed families.
pub fn language_families(skills: &SkillTable) -> Vec<(String, Vec<String>)> {
    if let Some(families) = skills
        .get(LANGUAGE_SKILL)
        .map(|def| &def.language_families)
        .filter(|f| !f.is_empty())
    {
        return families
            .iter()
            .map(|(name, languages)| (name.clone(), languages.clone()))
            .collect();
    }
    LanguageFamily::ALL
        .iter()
        .map(|family| {
            (
                family.name().to_string(),
                family.languages().iter().map(|l| (*l).to_string()).collect(),
            )
        })
        .collect()
}
