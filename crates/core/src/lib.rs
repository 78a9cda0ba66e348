//! Goal Tracker Core - Domain entities, services, and traits.
//!
//! This crate contains the goal lifecycle logic: status derivation, deadline
//! parsing and the atomic completion transition. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod goals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
