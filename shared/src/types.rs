//! Lifecycle status types
//!
//! Two views of a table's sale state: the tag written on log rows
//! (`SaleStatus`) and the derived per-table status (`TableStatus`).
//! Wire literals match the backing sheet, which predates this engine
//! and is hand-edited, so parsing is lenient.

use serde::{Deserialize, Serialize};

/// Status tag carried by a reservation log row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SaleStatus {
    #[serde(rename = "Reservado")]
    Reserved,
    #[serde(rename = "Vendido")]
    Sold,
}

impl SaleStatus {
    /// Wire literal as stored in the sheet's Status column
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Reserved => "Reservado",
            Self::Sold => "Vendido",
        }
    }

    /// Parse a Status cell. Unknown or blank tags return `None`;
    /// a row with an unreadable tag must not abort the whole log read.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Reservado" => Some(Self::Reserved),
            "Vendido" => Some(Self::Sold),
            _ => None,
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Derived per-table status, recomputed on every reconciliation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TableStatus {
    #[default]
    #[serde(rename = "Livre")]
    Free,
    #[serde(rename = "Reservado")]
    Reserved,
    #[serde(rename = "Vendido")]
    Sold,
}

impl From<Option<SaleStatus>> for TableStatus {
    fn from(tag: Option<SaleStatus>) -> Self {
        match tag {
            Some(SaleStatus::Reserved) => Self::Reserved,
            Some(SaleStatus::Sold) => Self::Sold,
            None => Self::Free,
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Free => "Livre",
            Self::Reserved => "Reservado",
            Self::Sold => "Vendido",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_literals_round_trip() {
        assert_eq!(SaleStatus::from_wire("Reservado"), Some(SaleStatus::Reserved));
        assert_eq!(SaleStatus::from_wire(" Vendido "), Some(SaleStatus::Sold));
        assert_eq!(SaleStatus::from_wire(""), None);
        assert_eq!(SaleStatus::from_wire("vendido"), None);
        assert_eq!(SaleStatus::Sold.as_wire(), "Vendido");
    }

    #[test]
    fn serde_uses_sheet_literals() {
        let json = serde_json::to_string(&TableStatus::Reserved).unwrap();
        assert_eq!(json, "\"Reservado\"");
        let back: TableStatus = serde_json::from_str("\"Livre\"").unwrap();
        assert_eq!(back, TableStatus::Free);
    }

    #[test]
    fn derived_status_from_tag() {
        assert_eq!(TableStatus::from(None), TableStatus::Free);
        assert_eq!(TableStatus::from(Some(SaleStatus::Reserved)), TableStatus::Reserved);
        assert_eq!(TableStatus::from(Some(SaleStatus::Sold)), TableStatus::Sold);
    }
}
