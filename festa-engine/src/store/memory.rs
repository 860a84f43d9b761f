//! In-memory sheet store
//!
//! Backs tests and any embedding that works against a local snapshot.
//! Behavior mirrors the remote sheet APIs: rows are 1-based, row 1 is the
//! header, deletes shift the remaining rows up.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::{SalesError, SalesResult};

use super::{Row, RowRef, SheetStore};

/// In-process sheet store over a `RwLock`ed map of sheets
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    sheets: RwLock<HashMap<String, Vec<Row>>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style sheet seeding; `rows` includes the header row
    pub fn with_sheet(self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.sheets.write().insert(name.into(), rows);
        self
    }

    /// Number of physical rows in a sheet (header included), for assertions
    pub fn row_count(&self, name: &str) -> usize {
        self.sheets.read().get(name).map(Vec::len).unwrap_or(0)
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn read_all(&self, sheet: &str) -> SalesResult<Vec<Row>> {
        self.sheets
            .read()
            .get(sheet)
            .cloned()
            .ok_or_else(|| SalesError::not_found(format!("sheet {sheet}")))
    }

    async fn append_row(&self, sheet: &str, row: Row) -> SalesResult<()> {
        let mut sheets = self.sheets.write();
        let rows = sheets
            .get_mut(sheet)
            .ok_or_else(|| SalesError::not_found(format!("sheet {sheet}")))?;
        rows.push(row);
        Ok(())
    }

    async fn update_cell(
        &self,
        sheet: &str,
        row: RowRef,
        column: usize,
        value: &str,
    ) -> SalesResult<()> {
        if row == 0 || column == 0 {
            return Err(SalesError::storage("row and column positions are 1-based"));
        }
        let mut sheets = self.sheets.write();
        let rows = sheets
            .get_mut(sheet)
            .ok_or_else(|| SalesError::not_found(format!("sheet {sheet}")))?;
        let cells = rows
            .get_mut(row - 1)
            .ok_or_else(|| SalesError::storage(format!("row {row} out of range in {sheet}")))?;
        // Remote sheets accept writes past the current width; match that
        if cells.len() < column {
            cells.resize(column, String::new());
        }
        cells[column - 1] = value.to_string();
        Ok(())
    }

    async fn delete_row(&self, sheet: &str, row: RowRef) -> SalesResult<()> {
        if row == 0 {
            return Err(SalesError::storage("row positions are 1-based"));
        }
        let mut sheets = self.sheets.write();
        let rows = sheets
            .get_mut(sheet)
            .ok_or_else(|| SalesError::not_found(format!("sheet {sheet}")))?;
        if row > rows.len() {
            return Err(SalesError::storage(format!("row {row} out of range in {sheet}")));
        }
        rows.remove(row - 1);
        Ok(())
    }

    async fn find(&self, sheet: &str, key: &str) -> SalesResult<Option<RowRef>> {
        let sheets = self.sheets.read();
        let rows = sheets
            .get(sheet)
            .ok_or_else(|| SalesError::not_found(format!("sheet {sheet}")))?;
        Ok(rows
            .iter()
            .position(|cells| cells.iter().any(|c| c == key))
            .map(|idx| idx + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn seeded() -> MemorySheetStore {
        MemorySheetStore::new().with_sheet(
            "RESERVAS",
            vec![
                row(&["ID_Venda", "Ref_Mesa", "Status"]),
                row(&["RES-1", "M01", "Reservado"]),
                row(&["RES-2", "M02", "Vendido"]),
            ],
        )
    }

    #[tokio::test]
    async fn find_returns_one_based_row() {
        let store = seeded();
        assert_eq!(store.find("RESERVAS", "RES-1").await.unwrap(), Some(2));
        assert_eq!(store.find("RESERVAS", "M02").await.unwrap(), Some(3));
        assert_eq!(store.find("RESERVAS", "RES-404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_cell_pads_short_rows() {
        let store = seeded();
        store.update_cell("RESERVAS", 2, 9, "2026-06-01 10:00:00").await.unwrap();
        let rows = store.read_all("RESERVAS").await.unwrap();
        assert_eq!(rows[1][8], "2026-06-01 10:00:00");
        assert_eq!(rows[1][5], "");
    }

    #[tokio::test]
    async fn delete_row_shifts_rows_up() {
        let store = seeded();
        store.delete_row("RESERVAS", 2).await.unwrap();
        assert_eq!(store.find("RESERVAS", "RES-2").await.unwrap(), Some(2));
        assert_eq!(store.row_count("RESERVAS"), 2);
    }

    #[tokio::test]
    async fn missing_sheet_is_not_found() {
        let store = seeded();
        let err = store.read_all("Layout_Mesas").await.unwrap_err();
        assert!(matches!(err, SalesError::NotFound { .. }));
        let err = store.append_row("Layout_Mesas", row(&["x"])).await.unwrap_err();
        assert!(matches!(err, SalesError::NotFound { .. }));
    }

    #[tokio::test]
    async fn positions_are_one_based() {
        let store = seeded();
        assert!(store.update_cell("RESERVAS", 0, 1, "x").await.is_err());
        assert!(store.delete_row("RESERVAS", 0).await.is_err());
        assert!(store.delete_row("RESERVAS", 99).await.is_err());
    }
}
