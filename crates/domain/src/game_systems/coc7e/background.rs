//! Random background generation.

use crate::entities::{Background, BackgroundTables};
use crate::value_objects::{DiceFormula, RandomSource};

const OLD_INJURY: &str = "有一处旧伤或疤痕，提醒着你过去的危险经历。";
const NO_INJURY: &str = "没有明显的创伤或疤痕。";
const NO_PHOBIA: &str = "没有特别的恐惧症或狂热。";
const ARCANE_EXPOSURE: &str = "你曾经接触过一些神秘学知识，但并不深入。";
const NO_ARCANE: &str = "你对超自然和神秘学一无所知。";
const STORY_STUB: &str = "这是一个普通人的故事，直到他/她遇到了不可名状的恐怖……";

/// True on a d10 roll of `chance_in_ten` or less.
fn chance(chance_in_ten: i32, rng: &mut impl RandomSource) -> bool {
    DiceFormula::D10.roll_total(rng) <= chance_in_ten
}

fn pick(options: &[String], rng: &mut impl RandomSource) -> String {
    rng.choose(options).cloned().unwrap_or_default()
}

/// Fills all ten narrative fields. Empty option lists leave their field empty.
///
/// 30% chance of an old injury, 20% of a phobia drawn from `tables.phobias`,
/// 10% of arcane exposure.
pub fn generate_background(tables: &BackgroundTables, rng: &mut impl RandomSource) -> Background {
    let significant_people = {
        let who = pick(&tables.significant_people_who, rng);
        let why = pick(&tables.significant_people_why, rng);
        match (who.is_empty(), why.is_empty()) {
            (false, false) => format!("{who}\n{why}"),
            (false, true) => who,
            _ => why,
        }
    };

    let mut background = Background {
        personal_description: pick(&tables.personal_descriptions, rng),
        ideology: pick(&tables.ideology_beliefs, rng),
        significant_people,
        meaningful_locations: pick(&tables.meaningful_locations, rng),
        treasured_possessions: pick(&tables.treasured_possessions, rng),
        traits: pick(&tables.traits, rng),
        background_story: STORY_STUB.to_string(),
        ..Background::default()
    };

    background.injuries_scars = if chance(3, rng) { OLD_INJURY } else { NO_INJURY }.to_string();
    background.phobias_manias = match rng.choose(&tables.phobias) {
        Some(phobia) if chance(2, rng) => format!("你患有{phobia}。"),
        _ => NO_PHOBIA.to_string(),
    };
    background.arcane_tomes_spells = if chance(1, rng) {
        ARCANE_EXPOSURE
    } else {
        NO_ARCANE
    }
    .to_string();

    background
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::testing::{highest, lowest, seeded};

    fn tables() -> BackgroundTables {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        BackgroundTables {
            personal_descriptions: list(&["结实的", "英俊的"]),
            ideology_beliefs: list(&["传统和责任比其他东西都重要。"]),
            significant_people_who: list(&["父辈。", "孩子。"]),
            significant_people_why: list(&["你欠了他们人情。"]),
            meaningful_locations: list(&["你的故乡。"]),
            treasured_possessions: list(&["宠物。"]),
            traits: list(&["梦想家。"]),
            phobias: list(&["幽闭恐惧症", "黑暗恐惧症"]),
        }
    }

    #[test]
    fn low_rolls_give_every_optional_line() {
        let background = generate_background(&tables(), &mut lowest());
        assert_eq!(background.personal_description, "结实的");
        assert_eq!(background.significant_people, "父辈。\n你欠了他们人情。");
        assert_eq!(background.injuries_scars, OLD_INJURY);
        assert_eq!(background.phobias_manias, "你患有幽闭恐惧症。");
        assert_eq!(background.arcane_tomes_spells, ARCANE_EXPOSURE);
        assert_eq!(background.background_story, STORY_STUB);
    }

    #[test]
    fn high_rolls_give_the_plain_lines() {
        let background = generate_background(&tables(), &mut highest());
        assert_eq!(background.personal_description, "英俊的");
        assert_eq!(background.injuries_scars, NO_INJURY);
        assert_eq!(background.phobias_manias, NO_PHOBIA);
        assert_eq!(background.arcane_tomes_spells, NO_ARCANE);
    }

    #[test]
    fn empty_tables_leave_fields_empty() {
        let background = generate_background(&BackgroundTables::default(), &mut seeded(3));
        assert!(background.personal_description.is_empty());
        assert!(background.significant_people.is_empty());
        assert_eq!(background.phobias_manias, NO_PHOBIA);
        assert!(!background.injuries_scars.is_empty());
    }
}
