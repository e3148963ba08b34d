use serde::{Deserialize, Serialize};

fn one() -> u32 {
    1
}

/// An equipment, item or weapon line on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Possession {
    pub name: String,
    #[serde(default = "one")]
    pub quantity: u32,
    /// Damage for weapons, effect text for anything else.
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub range: String,
}

impl Possession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 1,
            damage: String::new(),
            range: String::new(),
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        damage: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            damage: damage.into(),
            range: range.into(),
            ..Self::new(name)
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        let item: Possession = serde_json::from_str(r#"{"name": "手电筒"}"#).unwrap();
        assert_eq!(item, Possession::new("手电筒"));
    }

    #[test]
    fn weapon_keeps_damage_and_range() {
        let pistol = Possession::weapon(".38左轮手枪", "1D10", "15码").with_quantity(2);
        assert_eq!(pistol.quantity, 2);
        assert_eq!(pistol.damage, "1D10");
        assert_eq!(pistol.range, "15码");
    }
}
