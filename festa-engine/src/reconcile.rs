//! Reconciliation engine
//!
//! Left-outer merge of the layout catalog with the latest-event-per-table
//! reduction. The catalog is the source of truth for which tables exist:
//! every catalog table yields exactly one output row, and events without a
//! matching table definition are dropped.

use std::collections::HashMap;

use serde::Serialize;
use shared::{ReservationEvent, TableDefinition, TableStatus};

/// The authoritative per-table record, recomputed on every read and never
/// persisted. Staleness is bounded by the recency of the last log fetch.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReconciledTable {
    pub definition: TableDefinition,
    pub status: TableStatus,
    /// Latest applicable event; `None` for a Free table
    pub event: Option<ReservationEvent>,
}

impl ReconciledTable {
    pub fn id(&self) -> &str {
        &self.definition.id
    }
}

/// Merge catalog and latest events into one record per table.
///
/// Output length always equals `tables.len()`.
pub fn reconcile(
    tables: &[TableDefinition],
    latest_events: &HashMap<String, ReservationEvent>,
) -> Vec<ReconciledTable> {
    let orphans = latest_events
        .keys()
        .filter(|table_ref| !tables.iter().any(|t| &t.id == *table_ref))
        .count();
    if orphans > 0 {
        tracing::debug!(orphans, "events referencing unknown tables were dropped");
    }

    tables
        .iter()
        .map(|table| {
            let event = latest_events.get(&table.id).cloned();
            let status = TableStatus::from(event.as_ref().and_then(|e| e.status));
            ReconciledTable {
                definition: table.clone(),
                status,
                event,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SaleStatus;

    fn table(id: &str) -> TableDefinition {
        TableDefinition {
            id: id.to_string(),
            row: 1,
            column: 1,
            display_label: id.to_string(),
            sector: "Pista".to_string(),
            price: 50.0,
        }
    }

    fn event(table_ref: &str, status: Option<SaleStatus>) -> ReservationEvent {
        ReservationEvent {
            event_id: format!("RES-{table_ref}"),
            table_ref: table_ref.to_string(),
            status,
            customer: "Ana".to_string(),
            referrer: String::new(),
            phone: String::new(),
            charged_amount: None,
            reserved_at: "2026-06-01 10:00:00.000000".to_string(),
            confirmed_at: None,
        }
    }

    #[test]
    fn every_catalog_table_appears_exactly_once() {
        let tables = vec![table("M01"), table("M02"), table("M03")];
        let mut latest = HashMap::new();
        latest.insert("M01".to_string(), event("M01", Some(SaleStatus::Sold)));

        let view = reconcile(&tables, &latest);
        assert_eq!(view.len(), tables.len());
        assert_eq!(view[0].status, TableStatus::Sold);
        assert_eq!(view[1].status, TableStatus::Free);
        assert!(view[1].event.is_none());
    }

    #[test]
    fn orphaned_events_are_dropped() {
        let tables = vec![table("M01")];
        let mut latest = HashMap::new();
        latest.insert("GHOST".to_string(), event("GHOST", Some(SaleStatus::Reserved)));

        let view = reconcile(&tables, &latest);
        assert_eq!(view.len(), 1);
        assert!(!view.iter().any(|t| t.id() == "GHOST"));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let tables = vec![table("M01"), table("M02")];
        let mut latest = HashMap::new();
        latest.insert("M02".to_string(), event("M02", Some(SaleStatus::Reserved)));

        assert_eq!(reconcile(&tables, &latest), reconcile(&tables, &latest));
    }

    #[test]
    fn unknown_status_tag_reads_as_free() {
        let tables = vec![table("M01")];
        let mut latest = HashMap::new();
        latest.insert("M01".to_string(), event("M01", None));

        let view = reconcile(&tables, &latest);
        assert_eq!(view[0].status, TableStatus::Free);
        // The event itself is still surfaced for inspection
        assert!(view[0].event.is_some());
    }
}
