//! SQLite storage implementation for the goal tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `goaltracker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (the `goals` / `goals_completed` schema)
//! - The single-writer actor that runs every write job in a transaction
//! - Repository implementations and Diesel model types
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from goaltracker-core for convenience
pub use goaltracker_core::errors::{DatabaseError, Error, Result};
