use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifestyle bucket derived from cash on hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpendingLevel {
    #[serde(rename = "贫穷")]
    Poor,
    #[default]
    #[serde(rename = "标准")]
    Standard,
    #[serde(rename = "小康")]
    Comfortable,
    #[serde(rename = "富裕")]
    Wealthy,
    #[serde(rename = "富豪")]
    Rich,
}

impl SpendingLevel {
    pub fn from_cash(cash: f64) -> Self {
        if cash < 10.0 {
            SpendingLevel::Poor
        } else if cash < 50.0 {
            SpendingLevel::Standard
        } else if cash < 100.0 {
            SpendingLevel::Comfortable
        } else if cash < 500.0 {
            SpendingLevel::Wealthy
        } else {
            SpendingLevel::Rich
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpendingLevel::Poor => "贫穷",
            SpendingLevel::Standard => "标准",
            SpendingLevel::Comfortable => "小康",
            SpendingLevel::Wealthy => "富裕",
            SpendingLevel::Rich => "富豪",
        }
    }
}

impl fmt::Display for SpendingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
