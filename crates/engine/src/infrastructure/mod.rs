//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod export;
pub mod importers;
pub mod persistence;
pub mod ports;
pub mod settings;
