//! UndoSale command handler
//!
//! Takes a Sold event back to Reserved: the status cell is rewritten and
//! the charged amount and confirmation timestamp are cleared in place. The
//! row itself survives, so the reservation details stay intact.

use async_trait::async_trait;

use shared::models::reservation::columns;
use shared::{SaleStatus, SalesError, SalesResult};

use crate::ledger;

use super::{Command, CommandContext};

/// UndoSale action: Sold → Reserved
#[derive(Debug, Clone)]
pub struct UndoSaleAction {
    pub event_id: String,
}

#[async_trait]
impl Command for UndoSaleAction {
    type Output = ();

    async fn execute(&self, ctx: &CommandContext<'_>) -> SalesResult<()> {
        // 1. Fresh snapshot; the target event must still exist and be Sold
        let events = ledger::load(ctx.store, ctx.reservation_sheet).await;
        let event = ledger::find_event(&events, &self.event_id)
            .ok_or_else(|| SalesError::not_found(format!("event {}", self.event_id)))?;
        match event.status {
            Some(SaleStatus::Sold) => {}
            Some(SaleStatus::Reserved) => {
                return Err(SalesError::invalid_state(format!(
                    "event {} is not sold, nothing to undo",
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

        // 2. Rewrite the status and clear the sale cells
        let row = ctx
            .store
            .find(ctx.reservation_sheet, &self.event_id)
            .await?
            .ok_or_else(|| SalesError::not_found(format!("event {}", self.event_id)))?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_STATUS, SaleStatus::Reserved.as_wire())
            .await?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_CHARGED, "")
            .await?;
        ctx.store
            .update_cell(ctx.reservation_sheet, row, columns::CELL_CONFIRMED_AT, "")
            .await?;

        tracing::info!(event = %self.event_id, table = %event.table_ref, "sale undone");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySheetStore, Row, SheetStore};
    use shared::TableDefinition;

    fn catalog() -> Vec<TableDefinition> {
        vec![TableDefinition {
            id: "M01".to_string(),
            row: 1,
            column: 1,
            display_label: "Mesa 01".to_string(),
            sector: "Pista".to_string(),
            price: 150.0,
        }]
    }

    fn sold_row(event_id: &str) -> Row {
        [
            event_id,
            "M01",
            "Vendido",
            "Ana",
            "",
            "",
            "150",
            "2026-06-01 10:00:00.000000",
            "2026-06-01 11:00:00.000000",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn store_with(rows: Vec<Row>) -> MemorySheetStore {
        let header: Row = [
            "ID_Venda",
            "Ref_Mesa",
            "Status",
            "Nome_Cliente",
            "Nome_Festeiro",
            "Telefone_Cliente",
            "Valor_Entrada_Cobrado",
            "Data_Reserva",
            "Data_Confirmacao",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let mut all = vec![header];
        all.extend(rows);
        MemorySheetStore::new().with_sheet("RESERVAS", all)
    }

    #[tokio::test]
    async fn undo_restores_reserved_and_clears_sale_cells() {
        let store = store_with(vec![sold_row("RES-1")]);
        let tables = catalog();
        let ctx = CommandContext {
            store: &store,
            reservation_sheet: "RESERVAS",
            catalog: &tables,
        };

        UndoSaleAction {
            event_id: "RES-1".to_string(),
        }
        .execute(&ctx)
        .await
        .unwrap();

        let rows = store.read_all("RESERVAS").await.unwrap();
        assert_eq!(rows[1][2], "Reservado");
        assert_eq!(rows[1][6], "");
        assert_eq!(rows[1][8], "");
        // Reservation details survive the undo
        assert_eq!(rows[1][3], "Ana");
        assert_eq!(rows[1][7], "2026-06-01 10:00:00.000000");
    }

    #[tokio::test]
    async fn undoing_a_reserved_event_is_rejected() {
        let mut row = sold_row("RES-1");
        row[2] = "Reservado".to_string();
        let store = store_with(vec![row]);
        let tables = catalog();
        let ctx = CommandContext {
            store: &store,
            reservation_sheet: "RESERVAS",
            catalog: &tables,
        };

        let result = UndoSaleAction {
            event_id: "RES-1".to_string(),
        }
        .execute(&ctx)
        .await;

        assert!(matches!(result, Err(SalesError::InvalidState { .. })));
    }

    #[tokio::test]
    async fn stale_event_id_is_a_distinct_not_found() {
        let store = store_with(vec![]);
        let tables = catalog();
        let ctx = CommandContext {
            store: &store,
            reservation_sheet: "RESERVAS",
            catalog: &tables,
        };

        let result = UndoSaleAction {
            event_id: "RES-404".to_string(),
        }
        .execute(&ctx)
        .await;

        assert!(matches!(&result, Err(e) if e.is_stale_selection()));
    }
}
