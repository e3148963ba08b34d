//! Arkham Engine library.
//!
//! Everything around the rules crate: loading tables, storing sheets and
//! driving the rules from the `arkham` command line.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the rules crate
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
