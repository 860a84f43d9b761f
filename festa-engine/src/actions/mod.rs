//! Lifecycle actions
//!
//! One module per transition of the table state machine:
//!
//! ```text
//! Free ──reserve──► Reserved ──confirm_sale──► Sold
//!  ▲                   │  ▲                      │
//!  └─────cancel────────┘  └──────undo_sale───────┘
//! ```
//!
//! Every action is read-reconcile-act: it loads a fresh snapshot of the
//! reservation log, checks its precondition against the derived state, and
//! issues the write. A target event ID that is no longer in the log (a
//! concurrent actor got there first) is reported as `NotFound` with no
//! write issued, so the caller can re-fetch and inform the user.

mod cancel;
mod confirm_sale;
mod reserve;
mod undo_sale;

pub use cancel::CancelAction;
pub use confirm_sale::ConfirmSaleAction;
pub use reserve::ReserveAction;
pub use undo_sale::UndoSaleAction;

use async_trait::async_trait;
use shared::{SalesResult, TableDefinition};

use crate::store::SheetStore;

/// Everything one action execution needs: the store handle, the log sheet
/// it writes, and the session catalog for table lookups
pub struct CommandContext<'a> {
    pub store: &'a dyn SheetStore,
    pub reservation_sheet: &'a str,
    pub catalog: &'a [TableDefinition],
}

/// A lifecycle transition against the backing log
#[async_trait]
pub trait Command {
    type Output;

    async fn execute(&self, ctx: &CommandContext<'_>) -> SalesResult<Self::Output>;
}
