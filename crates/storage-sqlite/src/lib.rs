//! SQLite storage implementation for Pawhaven.
//!
//! This crate provides all database-related functionality using Diesel with
//! SQLite. It implements the repository traits defined in `pawhaven-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel exists;
//! the core crate is database-agnostic and works with traits. Reads go
//! through the r2d2 pool; every write goes through a single-writer actor
//! that runs each job inside an immediate transaction. Balance arithmetic
//! for the donation ledger is expressed as in-database column expressions,
//! never as read-modify-write from this layer.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod adoptions;
pub mod campaigns;
pub mod ledger;
pub mod pets;
pub mod users;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from pawhaven-core for convenience
pub use pawhaven_core::errors::{DatabaseError, Error, Result};
