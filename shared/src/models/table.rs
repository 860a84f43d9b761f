//! Table Definition Model

use serde::{Deserialize, Serialize};

/// Header names of the layout sheet. The layout sheet is read by header,
/// not by position, so hand-reordered columns keep working.
pub mod columns {
    pub const ID: &str = "ID_Mesa";
    pub const ROW: &str = "Linha";
    pub const COLUMN: &str = "Coluna";
    pub const DISPLAY: &str = "Numero_Display";
    pub const SECTOR: &str = "Tipo_Item";
    pub const PRICE: &str = "Preco_Mesa";
}

/// A sellable table: one unit of event inventory, loaded once per session
/// from the layout sheet.
///
/// `row`/`column` are the normalized grid position (strictly positive; rows
/// that normalize to zero are excluded from the sellable set upstream).
/// `price` is the normalized base price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDefinition {
    pub id: String,
    pub row: u32,
    pub column: u32,
    pub display_label: String,
    pub sector: String,
    pub price: f64,
}
