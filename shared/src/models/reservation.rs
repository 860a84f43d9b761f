//! Reservation Event Model
//!
//! One append-only log row per reserve/sell state change. Rows are never
//! rewritten wholesale: a sale confirmation or undo rewrites individual
//! cells, a cancellation deletes the row.

use crate::types::SaleStatus;
use crate::util::parse_wire_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column positions of the reservation log sheet.
///
/// The log is position-keyed (ordered columns), unlike the layout sheet.
/// `IDX_*` are 0-based indices into a data row; `CELL_*` are the 1-based
/// column positions used for in-place cell rewrites.
pub mod columns {
    pub const IDX_EVENT_ID: usize = 0; // ID_Venda
    pub const IDX_TABLE_REF: usize = 1; // Ref_Mesa
    pub const IDX_STATUS: usize = 2; // Status
    pub const IDX_CUSTOMER: usize = 3; // Nome_Cliente
    pub const IDX_REFERRER: usize = 4; // Nome_Festeiro
    pub const IDX_PHONE: usize = 5; // Telefone_Cliente
    pub const IDX_CHARGED: usize = 6; // Valor_Entrada_Cobrado
    pub const IDX_RESERVED_AT: usize = 7; // Data_Reserva
    pub const IDX_CONFIRMED_AT: usize = 8; // Data_Confirmacao

    pub const WIDTH: usize = 9;

    pub const CELL_STATUS: usize = IDX_STATUS + 1;
    pub const CELL_CHARGED: usize = IDX_CHARGED + 1;
    pub const CELL_CONFIRMED_AT: usize = IDX_CONFIRMED_AT + 1;
}

/// A single reservation log row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationEvent {
    /// Globally unique, time-ordered event ID (ID_Venda)
    pub event_id: String,
    /// Table this event references (Ref_Mesa); not unique across the log
    pub table_ref: String,
    /// Status tag; `None` when the cell holds an unknown hand-entered value
    pub status: Option<SaleStatus>,
    pub customer: String,
    pub referrer: String,
    pub phone: String,
    /// Raw charged-amount cell; empty until the sale is confirmed.
    /// Kept unparsed: normalization happens at aggregation time.
    pub charged_amount: Option<String>,
    /// Raw reservation timestamp cell (authoritative ordering key)
    pub reserved_at: String,
    /// Raw confirmation timestamp cell; empty until the sale is confirmed
    pub confirmed_at: Option<String>,
}

impl ReservationEvent {
    /// Parse a data row from the reservation sheet.
    ///
    /// Returns `None` for rows missing an event ID or table reference
    /// (blank padding rows, half-deleted rows); such rows carry no state.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("").trim().to_string();

        let event_id = cell(columns::IDX_EVENT_ID);
        let table_ref = cell(columns::IDX_TABLE_REF);
        if event_id.is_empty() || table_ref.is_empty() {
            if row.iter().any(|c| !c.trim().is_empty()) {
                tracing::debug!(?row, "skipping log row without event ID or table reference");
            }
            return None;
        }

        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };

        Some(Self {
            event_id,
            table_ref,
            status: SaleStatus::from_wire(&cell(columns::IDX_STATUS)),
            customer: cell(columns::IDX_CUSTOMER),
            referrer: cell(columns::IDX_REFERRER),
            phone: cell(columns::IDX_PHONE),
            charged_amount: non_empty(cell(columns::IDX_CHARGED)),
            reserved_at: cell(columns::IDX_RESERVED_AT),
            confirmed_at: non_empty(cell(columns::IDX_CONFIRMED_AT)),
        })
    }

    /// Render as a full log row for appending
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.event_id.clone(),
            self.table_ref.clone(),
            self.status.map(|s| s.as_wire().to_string()).unwrap_or_default(),
            self.customer.clone(),
            self.referrer.clone(),
            self.phone.clone(),
            self.charged_amount.clone().unwrap_or_default(),
            self.reserved_at.clone(),
            self.confirmed_at.clone().unwrap_or_default(),
        ]
    }

    /// Parsed reservation timestamp; `None` for hand-edited cells the
    /// wire format can't explain
    pub fn reserved_at_ts(&self) -> Option<NaiveDateTime> {
        parse_wire_timestamp(&self.reserved_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_full_row() {
        let r = row(&[
            "RES-1001",
            "M01",
            "Vendido",
            "Ana",
            "João",
            "912345678",
            "R$ 80,00",
            "2026-06-01 20:15:00.000000",
            "2026-06-01 21:00:00.000000",
        ]);
        let ev = ReservationEvent::from_row(&r).unwrap();
        assert_eq!(ev.event_id, "RES-1001");
        assert_eq!(ev.table_ref, "M01");
        assert_eq!(ev.status, Some(SaleStatus::Sold));
        assert_eq!(ev.charged_amount.as_deref(), Some("R$ 80,00"));
        assert!(ev.confirmed_at.is_some());
        assert!(ev.reserved_at_ts().is_some());
    }

    #[test]
    fn blank_and_truncated_rows_are_skipped() {
        assert!(ReservationEvent::from_row(&row(&["", "", ""])).is_none());
        assert!(ReservationEvent::from_row(&row(&["RES-1", ""])).is_none());
        assert!(ReservationEvent::from_row(&[]).is_none());
    }

    #[test]
    fn short_row_parses_with_empty_tail() {
        // A row appended before the confirmation columns existed
        let ev = ReservationEvent::from_row(&row(&["RES-2", "M02", "Reservado"])).unwrap();
        assert_eq!(ev.status, Some(SaleStatus::Reserved));
        assert!(ev.charged_amount.is_none());
        assert!(ev.confirmed_at.is_none());
        assert_eq!(ev.reserved_at, "");
    }

    #[test]
    fn unknown_status_tag_is_preserved_as_none() {
        let ev = ReservationEvent::from_row(&row(&["RES-3", "M03", "pago???"])).unwrap();
        assert_eq!(ev.status, None);
    }

    #[test]
    fn to_row_round_trips() {
        let r = row(&[
            "RES-4", "M04", "Reservado", "Bia", "", "911", "", "2026-06-01 10:00:00.000000", "",
        ]);
        let ev = ReservationEvent::from_row(&r).unwrap();
        assert_eq!(ev.to_row(), r);
    }
}
