//! Rule-table entities and the record pieces they populate

mod background;
mod occupation;
mod possession;
mod skill;

pub use background::{Background, BackgroundTables};
pub use occupation::{CreditRating, Occupation, OccupationRecord, OccupationTable};
pub use possession::Possession;
pub use skill::{
    SkillCategory, SkillDefinition, SkillTable, CREDIT_RATING, CTHULHU_MYTHOS, DODGE,
    OWN_LANGUAGE,
};
