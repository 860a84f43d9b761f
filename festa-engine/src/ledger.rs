//! Reservation log view
//!
//! Read model over the append-only reservation sheet. Two operations:
//! `load` fetches every parseable log row, and `latest_by_table` reduces
//! the log to the single most recent event per table, the last-writer-wins
//! policy that makes a cancelled-and-rebooked table reflect only its newest
//! event even while older rows still physically exist.

use std::cmp::Ordering;
use std::collections::HashMap;

use shared::util::reservation_ordinal;
use shared::ReservationEvent;

use crate::store::SheetStore;

/// Load all reservation events.
///
/// An absent or unreachable log is not an error: before the first sale the
/// sheet may simply not exist yet, and the view degrades to "no
/// reservations". The failure is logged so connectivity loss stays visible.
pub async fn load(store: &dyn SheetStore, sheet: &str) -> Vec<ReservationEvent> {
    match store.read_all(sheet).await {
        Ok(rows) => rows
            .iter()
            .skip(1) // header
            .filter_map(|row| ReservationEvent::from_row(row))
            .collect(),
        Err(e) => {
            tracing::warn!(sheet = %sheet, error = %e, "reservation log unavailable, treating as empty");
            Vec::new()
        }
    }
}

/// Reduce the log to the most recent event per table reference.
///
/// Ordering: reservation timestamp descending, ties broken by event ID
/// (higher wins; IDs are time-derived and monotonic). Timestamps are
/// compared parsed when possible, lexically otherwise, which agrees with
/// the parsed order for the wire format itself.
pub fn latest_by_table(events: Vec<ReservationEvent>) -> HashMap<String, ReservationEvent> {
    let mut sorted = events;
    sorted.sort_by(newest_first);

    let mut latest: HashMap<String, ReservationEvent> = HashMap::new();
    for event in sorted {
        latest.entry(event.table_ref.clone()).or_insert(event);
    }
    latest
}

fn newest_first(a: &ReservationEvent, b: &ReservationEvent) -> Ordering {
    let by_timestamp = match (a.reserved_at_ts(), b.reserved_at_ts()) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        _ => b.reserved_at.cmp(&a.reserved_at),
    };
    by_timestamp.then_with(|| match (reservation_ordinal(&a.event_id), reservation_ordinal(&b.event_id)) {
        (Some(na), Some(nb)) => nb.cmp(&na),
        _ => b.event_id.cmp(&a.event_id),
    })
}

/// Find one event by ID in a freshly loaded log. Lifecycle transitions
/// use this to detect stale selections before issuing any write.
pub fn find_event<'a>(
    events: &'a [ReservationEvent],
    event_id: &str,
) -> Option<&'a ReservationEvent> {
    events.iter().find(|e| e.event_id == event_id)
}
