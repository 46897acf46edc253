//! Advisory Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the advisory practice: the
//! client registry contract, the financial metrics engine and client reports.
//! It is storage-agnostic and defines traits that are implemented by the
//! `storage-memory` crate.

pub mod clients;
pub mod constants;
pub mod errors;
pub mod financials;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
