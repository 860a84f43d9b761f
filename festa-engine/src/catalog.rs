//! Layout catalog
//!
//! The static set of sellable tables, loaded from the layout sheet and
//! cached for the session. The sheet is read by header name, normalized
//! cell by cell, and filtered: a record whose row number does not
//! normalize to a strictly positive integer is a stray/header row, not
//! inventory.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::table::columns;
use shared::{SalesResult, TableDefinition};

use crate::money::normalize;
use crate::store::{Row, SheetStore};

/// Session-cached view of the layout sheet
pub struct LayoutCatalog {
    store: Arc<dyn SheetStore>,
    sheet: String,
    cache: RwLock<Option<Arc<Vec<TableDefinition>>>>,
}

impl LayoutCatalog {
    pub fn new(store: Arc<dyn SheetStore>, sheet: impl Into<String>) -> Self {
        Self {
            store,
            sheet: sheet.into(),
            cache: RwLock::new(None),
        }
    }

    /// Cached table set, loading it on first use.
    ///
    /// Unlike the reservation log, a failure here is fatal to the
    /// operation: without the catalog there is no inventory to sell.
    pub async fn fetch(&self) -> SalesResult<Arc<Vec<TableDefinition>>> {
        if let Some(cached) = self.cache.read().clone() {
            return Ok(cached);
        }
        let rows = self.store.read_all(&self.sheet).await?;
        let tables = Arc::new(parse_layout(&rows));
        tracing::info!(sheet = %self.sheet, tables = tables.len(), "layout catalog loaded");
        *self.cache.write() = Some(tables.clone());
        Ok(tables)
    }

    /// Drop the cache and re-fetch. Explicit only; the catalog never
    /// refreshes on a timer.
    pub async fn refresh(&self) -> SalesResult<Arc<Vec<TableDefinition>>> {
        *self.cache.write() = None;
        self.fetch().await
    }
}

/// Parse the physical rows of the layout sheet (header first).
///
/// Column order is not assumed; the header row is indexed by name.
/// A sheet without the mandatory columns yields an empty catalog.
fn parse_layout(rows: &[Row]) -> Vec<TableDefinition> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let position = |name: &str| header.iter().position(|h| h.trim() == name);

    let (Some(id_col), Some(row_col)) = (position(columns::ID), position(columns::ROW)) else {
        tracing::warn!("layout sheet is missing its ID/row columns, catalog is empty");
        return Vec::new();
    };
    let column_col = position(columns::COLUMN);
    let display_col = position(columns::DISPLAY);
    let sector_col = position(columns::SECTOR);
    let price_col = position(columns::PRICE);

    let cell = |row: &Row, col: Option<usize>| {
        col.and_then(|c| row.get(c)).map(String::as_str).unwrap_or("").trim().to_string()
    };

    data.iter()
        .filter_map(|row| {
            let id = cell(row, Some(id_col));
            if id.is_empty() {
                return None;
            }
            let grid_row = normalize(&cell(row, Some(row_col)));
            if grid_row <= 0.0 {
                // Stray or repeated-header row mixed into the data
                return None;
            }
            Some(TableDefinition {
                id,
                row: grid_row as u32,
                column: normalize(&cell(row, column_col)) as u32,
                display_label: cell(row, display_col),
                sector: cell(row, sector_col),
                price: normalize(&cell(row, price_col)),
            })
        })
        .collect()
}
