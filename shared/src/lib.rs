//! Shared types for the Festa table-sales engine
//!
//! Wire-level models for the backing sheet store, lifecycle status types,
//! the unified error type, and small utilities (timestamps, ID generation)
//! used across crates.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{SalesError, SalesResult};
pub use models::{ReservationEvent, TableDefinition};
pub use types::{SaleStatus, TableStatus};
