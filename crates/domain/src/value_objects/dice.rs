//! Dice rolling value objects and parsing
//!
//! Supports the rulebook notation `[count]D<faces>[+|-modifier]`:
//! "3D6", "2D6+6", "D100", "1d10". Count defaults to 1, modifier to 0.
//! Rolling draws from an injected [`RandomSource`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::RandomSource;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XDY or XDY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    /// Modifier overflow
    #[error("Modifier value overflow")]
    ModifierOverflow,
}

/// A parsed dice formula like "2D6+6"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XDY)
    dice_count: u8,
    /// Size of each die (Y in XDY)
    die_size: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    modifier: i32,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(dice_count: u8, die_size: u8, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// 3D6, the standard characteristic roll.
    pub const THREE_D6: Self = Self {
        dice_count: 3,
        die_size: 6,
        modifier: 0,
    };

    /// 2D6+6, used for SIZ, INT and EDU.
    pub const TWO_D6_PLUS_SIX: Self = Self {
        dice_count: 2,
        die_size: 6,
        modifier: 6,
    };

    /// 1D10
    pub const D10: Self = Self {
        dice_count: 1,
        die_size: 10,
        modifier: 0,
    };

    /// Parse a dice formula string like "3D6", "2D6+6", "D100"
    ///
    /// Supported formats (case-insensitive):
    /// - "XDY" - Roll X dice of size Y
    /// - "XDY+Z" - Roll X dice of size Y, add Z
    /// - "XDY-Z" - Roll X dice of size Y, subtract Z
    /// - "DY" - Roll 1 die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_uppercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('D').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'D' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u8 = if dice_count_str.is_empty() {
            1 // "D100" means "1D100"
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };

        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }

        let after_d = &input[d_pos + 1..];

        let (die_size_str, modifier) = match after_d.find(['+', '-']) {
            Some(0) => {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )))
            }
            Some(sign_pos) => {
                let die_str = &after_d[..sign_pos];
                let mod_str = &after_d[sign_pos + 1..];
                if !mod_str.chars().all(|c| c.is_ascii_digit()) || mod_str.is_empty() {
                    return Err(DiceParseError::InvalidFormat(format!(
                        "Invalid modifier: '{}'",
                        &after_d[sign_pos..]
                    )));
                }
                let magnitude: i32 = mod_str
                    .parse()
                    .map_err(|_| DiceParseError::ModifierOverflow)?;
                let modifier = if after_d[sign_pos..].starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (die_str, modifier)
            }
            None => (after_d, 0),
        };

        let die_size: u8 = die_size_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_size_str))
        })?;

        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }

        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    pub fn dice_count(&self) -> u8 {
        self.dice_count
    }

    pub fn die_size(&self) -> u8 {
        self.die_size
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Roll the dice and return the result
    pub fn roll(&self, rng: &mut impl RandomSource) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count)
            .map(|_| rng.gen_range(1, i32::from(self.die_size)))
            .collect();

        let dice_total: i32 = individual_rolls.iter().sum();
        let total = dice_total + self.modifier;

        DiceRollResult {
            formula: *self,
            individual_rolls,
            dice_total,
            modifier_applied: self.modifier,
            total,
        }
    }

    /// Roll and keep only the total.
    pub fn roll_total(&self, rng: &mut impl RandomSource) -> i32 {
        self.roll(rng).total
    }

    /// Get the minimum possible roll
    pub fn min_roll(&self) -> i32 {
        i32::from(self.dice_count) + self.modifier
    }

    /// Get the maximum possible roll
    pub fn max_roll(&self) -> i32 {
        i32::from(self.dice_count) * i32::from(self.die_size) + self.modifier
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}D{}", self.dice_count, self.die_size)
        } else if self.modifier > 0 {
            write!(f, "{}D{}+{}", self.dice_count, self.die_size, self.modifier)
        } else {
            write!(f, "{}D{}{}", self.dice_count, self.die_size, self.modifier)
        }
    }
}

impl FromStr for DiceFormula {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DiceFormula {
    type Error = DiceParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DiceFormula> for String {
    fn from(value: DiceFormula) -> Self {
        value.to_string()
    }
}

/// Result of rolling dice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRollResult {
    /// The formula that was rolled
    pub formula: DiceFormula,
    /// Individual die results
    pub individual_rolls: Vec<i32>,
    /// Sum of dice before modifier
    pub dice_total: i32,
    /// Modifier that was applied
    pub modifier_applied: i32,
    /// Final total (dice_total + modifier)
    pub total: i32,
}

impl DiceRollResult {
    /// Format as a breakdown string (e.g., "1D10(7) = 7" or "2D6[3, 5] + 6 = 14")
    pub fn breakdown(&self) -> String {
        let faces = format!("{}D{}", self.formula.dice_count, self.formula.die_size);
        let rolls = if self.individual_rolls.len() == 1 {
            format!("({})", self.individual_rolls[0])
        } else {
            let rolls_str: Vec<String> = self
                .individual_rolls
                .iter()
                .map(|r| r.to_string())
                .collect();
            format!("[{}]", rolls_str.join(", "))
        };

        match self.modifier_applied {
            0 => format!("{faces}{rolls} = {}", self.total),
            m if m > 0 => format!("{faces}{rolls} + {m} = {}", self.total),
            m => format!("{faces}{rolls} - {} = {}", -m, self.total),
        }
    }
}
