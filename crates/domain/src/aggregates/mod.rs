//! Aggregate roots - domain objects that own their related data
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields, accessors, setters that re-derive |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Factory pattern | `::new()` / `::blank()` |
//! | Domain Events | Return reports from mutations (`SkillWrite`) |

pub mod investigator;

pub use investigator::{Investigator, SkillWrite, SKILL_MAX};
