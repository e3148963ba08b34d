use serde::{Deserialize, Serialize};

/// Option lists background generation draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundTables {
    pub personal_descriptions: Vec<String>,
    pub ideology_beliefs: Vec<String>,
    pub significant_people_who: Vec<String>,
    pub significant_people_why: Vec<String>,
    pub meaningful_locations: Vec<String>,
    pub treasured_possessions: Vec<String>,
    pub traits: Vec<String>,
    /// Phobias an investigator may carry from before play.
    pub phobias: Vec<String>,
}

/// The ten narrative fields of the sheet. Opaque text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub personal_description: String,
    pub ideology: String,
    pub significant_people: String,
    pub meaningful_locations: String,
    pub treasured_possessions: String,
    pub traits: String,
    pub injuries_scars: String,
    pub phobias_manias: String,
    pub arcane_tomes_spells: String,
    pub background_story: String,
}

impl Background {
    /// `(label, text)` pairs in sheet order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("形象描述", self.personal_description.as_str()),
            ("思想/信念", self.ideology.as_str()),
            ("重要之人", self.significant_people.as_str()),
            ("意义非凡之地", self.meaningful_locations.as_str()),
            ("宝贵之物", self.treasured_possessions.as_str()),
            ("特质", self.traits.as_str()),
            ("伤口和疤痕", self.injuries_scars.as_str()),
            ("恐惧症和躁狂症", self.phobias_manias.as_str()),
            ("神秘学典籍、法术和神器", self.arcane_tomes_spells.as_str()),
            ("背景故事", self.background_story.as_str()),
        ]
    }
}
