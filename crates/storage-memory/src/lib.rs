//! In-memory storage implementation for the advisory engine.
//!
//! This crate implements the repository traits defined in `advisory-core`
//! on top of lock-guarded maps. Every store can optionally mirror its
//! contents to a JSON snapshot file so data survives restarts.
//!
//! ```text
//!      core (domain)
//!            │
//!            ▼
//!  storage-memory (this crate)
//!            │
//!            ▼
//!   JSON snapshot (optional)
//! ```

pub mod clients;
pub mod errors;
pub mod snapshot;

pub use clients::{demo_clients, ClientRepository};
pub use errors::StorageError;
pub use snapshot::SnapshotFile;

// Re-export from advisory-core for convenience
pub use advisory_core::errors::{DatabaseError, Error, Result};
