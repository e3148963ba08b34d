//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Investigator storage (could swap JSON files -> a database)
//! - Clock/Random (for testing and reproducible runs)

mod error;
mod repos;
mod testing;

// =============================================================================
// Storage Ports
// =============================================================================
pub use repos::InvestigatorStore;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockInvestigatorStore;

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::StoreError;
