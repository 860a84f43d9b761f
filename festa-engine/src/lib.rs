//! Reservation Reconciliation & State Engine for the Festa table map
//!
//! Tracks the sale state of a fixed inventory of numbered tables for a
//! one-time event, backed by a shared, externally-editable tabular store
//! that behaves like an append-only reservation log:
//!
//! - **money**: normalization of hand-entered currency/number cells
//! - **store**: abstract sheet store (remote table) + in-memory implementation
//! - **catalog**: static layout catalog, cached per session
//! - **ledger**: reservation log view with last-writer-wins reduction
//! - **reconcile**: catalog × latest-events merge into authoritative rows
//! - **spatial**: click-point to table-id hit testing
//! - **finance**: collected/pending/occupancy aggregates
//! - **actions**: one module per lifecycle transition
//! - **desk**: the `SalesDesk` command surface
//!
//! # Data Flow
//!
//! ```text
//! Layout sheet ──► catalog ──┐
//!                            ├──► reconcile ──► ReconciledTable ──► finance
//! Reservation  ──► ledger ───┘         ▲
//! log sheet        (latest per table)  │
//!                                      │
//! actions (reserve / confirm / cancel / undo) write back to the log sheet
//! ```
//!
//! Every operation is read-reconcile-act: fetch a snapshot of the log,
//! derive status, issue the write. The store offers no locking, so two
//! concurrent reserves of one table can both land; the last-writer-wins
//! reduction arbitrates on the next read.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod desk;
pub mod finance;
pub mod ledger;
pub mod money;
pub mod reconcile;
pub mod spatial;
pub mod store;

// Re-exports
pub use actions::{CancelAction, Command, CommandContext, ConfirmSaleAction, ReserveAction, UndoSaleAction};
pub use catalog::LayoutCatalog;
pub use config::DeskConfig;
pub use desk::SalesDesk;
pub use finance::{FinancialSummary, aggregate};
pub use money::normalize;
pub use reconcile::{ReconciledTable, reconcile};
pub use spatial::{HitRegistry, Point, Viewport};
pub use store::{MemorySheetStore, Row, RowRef, SheetStore};

// Re-export shared types for convenience
pub use shared::{ReservationEvent, SaleStatus, SalesError, SalesResult, TableDefinition, TableStatus};
