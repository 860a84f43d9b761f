//! Cancel command handler
//!
//! Takes a Reserved event back to Free by physically deleting its log row.
//! Cancellation of a Sold table requires an undo first; the charged amount
//! must not silently disappear from the log.

use async_trait::async_trait;

use shared::{SaleStatus, SalesError, SalesResult};

use crate::ledger;

use super::{Command, CommandContext};

/// Cancel action: Reserved → Free
#[derive(Debug, Clone)]
pub struct CancelAction {
    pub event_id: String,
}

#[async_trait]
impl Command for CancelAction {
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
                    "event {} is sold; undo the sale before cancelling",
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

        // 2. Delete the physical row; the table derives as Free on next read
        let row = ctx
            .store
            .find(ctx.reservation_sheet, &self.event_id)
            .await?
            .ok_or_else(|| SalesError::not_found(format!("event {}", self.event_id)))?;
        ctx.store.delete_row(ctx.reservation_sheet, row).await?;

        tracing::info!(event = %self.event_id, table = %event.table_ref, "reservation cancelled");
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

    fn log_row(event_id: &str, table: &str, status: &str) -> Row {
        [
            event_id,
            table,
            status,
            "Ana",
            "",
            "",
            "",
            "2026-06-01 10:00:00.000000",
            "",
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
    async fn cancel_deletes_the_log_row() {
        let store = store_with(vec![
            log_row("RES-1", "M01", "Reservado"),
            log_row("RES-2", "M02", "Reservado"),
        ]);
        let tables = catalog();
        let ctx = CommandContext {
            store: &store,
            reservation_sheet: "RESERVAS",
            catalog: &tables,
        };

        CancelAction {
            event_id: "RES-1".to_string(),
        }
        .execute(&ctx)
        .await
        .unwrap();

        assert_eq!(store.row_count("RESERVAS"), 2);
        assert_eq!(store.find("RESERVAS", "RES-1").await.unwrap(), None);
        // The sibling row is untouched and has shifted up
        assert_eq!(store.find("RESERVAS", "RES-2").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn cancelling_a_sold_event_is_rejected() {
        let store = store_with(vec![log_row("RES-1", "M01", "Vendido")]);
        let tables = catalog();
        let ctx = CommandContext {
            store: &store,
            reservation_sheet: "RESERVAS",
            catalog: &tables,
        };

        let result = CancelAction {
            event_id: "RES-1".to_string(),
        }
        .execute(&ctx)
        .await;

        assert!(matches!(result, Err(SalesError::InvalidState { .. })));
        assert_eq!(store.row_count("RESERVAS"), 2);
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

        let result = CancelAction {
            event_id: "RES-404".to_string(),
        }
        .execute(&ctx)
        .await;

        assert!(matches!(&result, Err(e) if e.is_stale_selection()));
    }
}
