//! ConfirmSale command handler
//!
//! Takes a Reserved event to Sold by rewriting its status, charged-amount
//! and confirmation-timestamp cells in place.

use async_trait::async_trait;

use shared::models::reservation::columns;
use shared::util::wire_timestamp_now;
use shared::{SaleStatus, SalesError, SalesResult};

use crate::ledger;
use crate::money::format_amount;

use super::{Command, CommandContext};

/// ConfirmSale action: Reserved → Sold
#[derive(Debug, Clone)]
pub struct ConfirmSaleAction {
    pub event_id: String,
    /// Charged amount; the table's base price when not overridden
    pub amount: Option<f64>,
}

#[async_trait]
impl Command for ConfirmSaleAction {
    type Output = ();

    async fn execute(&self, ctx: &CommandContext<'_>) -> SalesResult<()> {
        // 1. Fresh snapshot; the target event must still exist and be Reserved
        let events = ledger::load(ctx.store, ctx.reservation_sheet).await;
        let event = ledger::find_event(&events, &self.event_id)
            .ok_or_else(|| SalesError::not_found(format!("event {}", self.event_id)))?;
        match event.status {
            Some(SaleStatus::Reserved) => {}
            Some(SaleStatus::Sold) => {
                return Err(SalesError::invalid_state(format!(
                    "event {} is already sold",
                    self.event_id
                )));
            }
            None => {
                return Err(SalesError::invalid_state(format!(
                    "event {} has an unreadable status tag",
                    self.event_id
                )));
            }
        }

        // 2. Default the charged amount to the table's base price
        let amount = self.amount.unwrap_or_else(|| {
            match ctx.catalog.iter().find(|t| t.id == event.table_ref) {
                Some(table) => table.price,
                None => {
                    tracing::warn!(
                        table = %event.table_ref,
                        event = %self.event_id,
                        "confirming sale for a table missing from the catalog, charged amount defaults to 0"
                    );
                    0.0
                }
            }
        });

        // 3. Locate the physical row and rewrite its cells
        let row = ctx
            .store
            .find(ctx.reservation_sheet, &self.event_id)
            .await?
            .ok_or_else(|| SalesError::not_found(format!("event {}", self.event_id)))?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_STATUS, SaleStatus::Sold.as_wire())
            .await?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_CHARGED, &format_amount(amount))
            .await?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_CONFIRMED_AT, &wire_timestamp_now())
            .await?;

        tracing::info!(event = %self.event_id, amount, "sale confirmed");
        Ok(())
    }
}
