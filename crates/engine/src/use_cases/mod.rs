//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the sheet.
//! Use cases wire the rules crate to the ports: randomness in, records out.

pub mod generation;
pub mod insanity;
pub mod sheet;
pub mod skills;

// Re-export main types
pub use generation::GenerationUseCases;
pub use insanity::InsanityUseCases;
pub use sheet::SheetUseCases;
pub use skills::SkillUseCases;
