//! Plain-text character sheet.

use std::fs;
use std::path::Path;

use arkham_domain::{Attribute, Investigator, Possession};

use crate::infrastructure::ports::StoreError;

/// Render the whole sheet as sectioned plain text.
pub fn render_text(investigator: &Investigator) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(heading("基本信息"));
    lines.push(format!("姓名: {}", investigator.name()));
    lines.push(format!("玩家: {}", investigator.player()));
    lines.push(format!("职业: {}", investigator.occupation()));
    lines.push(format!("年龄: {}", investigator.age()));
    lines.push(format!("性别: {}", investigator.gender()));
    lines.push(format!("居住地: {}", investigator.residence()));
    lines.push(format!("出生地: {}", investigator.birthplace()));
    lines.push(String::new());

    lines.push(heading("属性"));
    for attribute in Attribute::ALL {
        lines.push(format!(
            "{}: {} (半值: {}, 五分之一值: {})",
            attribute.name(),
            investigator.attribute(attribute),
            investigator.attribute_half().get(attribute),
            investigator.attribute_fifth().get(attribute),
        ));
    }
    lines.push(String::new());

    lines.push(heading("衍生属性"));
    lines.push(format!("生命值: {}", investigator.hp()));
    lines.push(format!("魔法值: {}", investigator.mp()));
    lines.push(format!(
        "理智值: {} / {}",
        investigator.san(),
        investigator.max_sanity()
    ));
    lines.push(format!("护甲: {}", investigator.armor()));
    lines.push(format!("伤害加值: {}", investigator.damage_bonus()));
    lines.push(format!("体格: {}", investigator.build()));
    lines.push(format!("移动速度: {}", investigator.mov()));
    if !investigator.status().is_empty() {
        lines.push(format!("精神状态: {}", investigator.status()));
    }
    if !investigator.phobias().is_empty() {
        lines.push(format!("恐惧症: {}", investigator.phobias().join("、")));
    }
    if !investigator.manias().is_empty() {
        lines.push(format!("躁狂症: {}", investigator.manias().join("、")));
    }
    lines.push(String::new());

    lines.push(heading("技能"));
    if !investigator.occupation_skills().is_empty() {
        lines.push("职业技能:".to_string());
        lines.extend(
            investigator
                .occupation_skills()
                .iter()
                .map(|label| format!("- {label}")),
        );
    }
    lines.push(format!(
        "职业技能点: {} / {}",
        investigator.occupation_skill_points_allocated(),
        investigator.occupation_skill_points()
    ));
    lines.push(format!(
        "兴趣技能点: {} / {}",
        investigator.interest_skill_points_allocated(),
        investigator.interest_skill_points()
    ));
    if !investigator.skills().is_empty() {
        lines.push(String::new());
        lines.push("技能值:".to_string());
        lines.extend(
            investigator
                .skills()
                .iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );
    }
    lines.push(String::new());

    lines.push(heading("背景"));
    for (label, text) in investigator.background().entries() {
        lines.push(format!("{label}: {text}"));
    }
    lines.push(String::new());

    lines.push(heading("装备和资产"));
    lines.push(format!("现金: {}", investigator.cash()));
    lines.push(format!("资产: {}", investigator.assets()));
    lines.push(format!("消费水平: {}", investigator.spending_level()));
    possession_block(&mut lines, "装备", investigator.equipment());
    possession_block(&mut lines, "物品", investigator.items());
    possession_block(&mut lines, "武器", investigator.weapons());

    lines.join("\n")
}

/// Write [`render_text`] to `path`, creating parent directories.
pub fn export_text(investigator: &Investigator, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io("export", parent, e))?;
    }
    fs::write(path, render_text(investigator)).map_err(|e| StoreError::io("export", path, e))?;
    tracing::debug!(path = %path.display(), "Investigator exported as text");
    Ok(())
}

fn heading(title: &str) -> String {
    format!("=== {title} ===")
}

fn possession_block(lines: &mut Vec<String>, title: &str, possessions: &[Possession]) {
    if possessions.is_empty() {
        return;
    }
    lines.push(format!("{title}:"));
    for possession in possessions {
        let mut line = format!("- {}", possession.name);
        if possession.quantity != 1 {
            line.push_str(&format!(" ×{}", possession.quantity));
        }
        if !possession.damage.is_empty() {
            line.push_str(&format!(" 伤害 {}", possession.damage));
        }
        if !possession.range.is_empty() {
            line.push_str(&format!(" 射程 {}", possession.range));
        }
        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkham_domain::SkillLabel;
    use tempfile::TempDir;

    fn doctor() -> Investigator {
        let mut investigator = Investigator::blank();
        investigator.set_name("陈明");
        investigator.set_occupation("医生");
        investigator
            .set_occupation_skills(vec![SkillLabel::new("医学"), SkillLabel::new("急救")]);
        investigator.set_skill(SkillLabel::new("医学"), 70);
        investigator.set_cash(35.5);
        investigator.add_item(Possession::new("医药箱"));
        investigator.add_weapon(Possession::weapon("手术刀", "1D3", "接触"));
        investigator
    }

    #[test]
    fn sections_appear_in_sheet_order() {
        let text = render_text(&doctor());
        let titles = ["基本信息", "属性", "衍生属性", "技能", "背景", "装备和资产"];
        let positions: Vec<usize> = titles
            .iter()
            .map(|title| {
                text.find(&format!("=== {title} ==="))
                    .unwrap_or_else(|| panic!("missing section {title}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn renders_values() {
        let text = render_text(&doctor());
        assert!(text.contains("姓名: 陈明"));
        assert!(text.contains("力量: 50 (半值: 25, 五分之一值: 10)"));
        assert!(text.contains("- 医学"));
        assert!(text.contains("医学: 70"));
        assert!(text.contains("现金: 35.5"));
        assert!(text.contains("消费水平: 标准"));
        assert!(text.contains("- 手术刀 伤害 1D3 射程 接触"));
        assert!(text.contains("形象描述: "));
        assert!(!text.contains("精神状态"));
    }

    #[test]
    fn insanity_lines_only_when_present() {
        let mut investigator = doctor();
        investigator.add_phobia("恐高症");
        let text = render_text(&investigator);
        assert!(text.lines().any(|l| l == "恐惧症: 恐高症"));
        // The background label 恐惧症和躁狂症 is always present.
        assert!(!text.lines().any(|l| l.starts_with("躁狂症: ")));

        investigator.add_mania("洁癖");
        let text = render_text(&investigator);
        assert!(text.lines().any(|l| l == "躁狂症: 洁癖"));
    }

    #[test]
    fn export_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("陈明.txt");
        export_text(&doctor(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), render_text(&doctor()));
    }
}
