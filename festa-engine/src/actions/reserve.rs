//! Reserve command handler
//!
//! Takes a Free table to Reserved by appending a fresh log row.

use async_trait::async_trait;

use shared::util::{reservation_id, wire_timestamp_now};
use shared::{ReservationEvent, SaleStatus, SalesError, SalesResult};

use crate::ledger;

use super::{Command, CommandContext};

/// Reserve action: Free → Reserved
///
/// The backing log has no locking: two actors reserving the same Free table
/// from the same snapshot both succeed, and the last-writer-wins reduction
/// picks one as authoritative on the next read. Accepted race, not an error.
#[derive(Debug, Clone)]
pub struct ReserveAction {
    pub table_id: String,
    pub customer: String,
    pub referrer: String,
    pub phone: String,
}

impl ReserveAction {
    /// Validate input before touching the store; a rejected reserve must
    /// leave the log untouched
    fn validate(&self) -> SalesResult<()> {
        if self.customer.trim().is_empty() {
            return Err(SalesError::validation("customer name must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl Command for ReserveAction {
    type Output = String;

    async fn execute(&self, ctx: &CommandContext<'_>) -> SalesResult<String> {
        // 1. Validate input
        self.validate()?;

        // 2. The catalog decides which tables exist
        let table = ctx
            .catalog
            .iter()
            .find(|t| t.id == self.table_id)
            .ok_or_else(|| SalesError::not_found(format!("table {}", self.table_id)))?;

        // 3. Fresh snapshot of the log; table must derive as Free
        let events = ledger::load(ctx.store, ctx.reservation_sheet).await;
        let latest = ledger::latest_by_table(events);
        if let Some(current) = latest.get(&self.table_id)
            && let Some(tag) = current.status
        {
            return Err(SalesError::invalid_state(format!(
                "table {} is already {}",
                self.table_id, tag
            )));
        }

        // 4. Append the new Reserved event
        let event = ReservationEvent {
            event_id: reservation_id(),
            table_ref: table.id.clone(),
            status: Some(SaleStatus::Reserved),
            customer: self.customer.trim().to_string(),
            referrer: self.referrer.trim().to_string(),
            phone: self.phone.trim().to_string(),
            charged_amount: None,
            reserved_at: wire_timestamp_now(),
            confirmed_at: None,
        };
        ctx.store
            .append_row(ctx.reservation_sheet, event.to_row())
            .await?;

        tracing::info!(
            table = %table.id,
            event = %event.event_id,
            customer = %event.customer,
            "table reserved"
        );
        Ok(event.event_id)
    }
}
