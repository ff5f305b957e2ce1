//! Pawhaven Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Pawhaven adoption
//! and fundraising backend. It is database-agnostic and defines repository
//! traits that are implemented by the `storage-sqlite` crate.

pub mod adoptions;
pub mod authz;
pub mod campaigns;
pub mod constants;
pub mod errors;
pub mod gateway;
pub mod ledger;
pub mod money;
pub mod pets;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
