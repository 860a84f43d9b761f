//! Financial aggregation
//!
//! Totals over the reconciled table set: cash already collected, expected
//! revenue still pending, per-status counts and the occupancy ratio.
//! Accumulation runs on `Decimal`; charged-amount cells go through the
//! normalizer so a malformed cell degrades to 0 instead of aborting the
//! whole computation.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::TableStatus;

use crate::money::{normalize, to_decimal, to_f64};
use crate::reconcile::ReconciledTable;

/// Event-level financial snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancialSummary {
    /// Sum of charged amounts over Sold tables
    pub collected: f64,
    /// Sum of base prices over Reserved tables (expected, not yet collected)
    pub pending: f64,
    pub sold_count: usize,
    pub reserved_count: usize,
    pub free_count: usize,
    pub total_count: usize,
    /// (sold + reserved) / total; 0 for an empty catalog
    pub occupancy_ratio: f64,
}

/// Compute the financial summary for a reconciled view
pub fn aggregate(tables: &[ReconciledTable]) -> FinancialSummary {
    let mut collected = Decimal::ZERO;
    let mut pending = Decimal::ZERO;
    let mut sold_count = 0;
    let mut reserved_count = 0;
    let mut free_count = 0;

    for table in tables {
        match table.status {
            TableStatus::Sold => {
                sold_count += 1;
                let raw = table
                    .event
                    .as_ref()
                    .and_then(|e| e.charged_amount.as_deref())
                    .unwrap_or("");
                collected += to_decimal(normalize(raw));
            }
            TableStatus::Reserved => {
                reserved_count += 1;
                pending += to_decimal(table.definition.price);
            }
            TableStatus::Free => {
                free_count += 1;
            }
        }
    }

    let total_count = tables.len();
    let occupancy_ratio = if total_count == 0 {
        0.0
    } else {
        (sold_count + reserved_count) as f64 / total_count as f64
    };

    FinancialSummary {
        collected: to_f64(collected),
        pending: to_f64(pending),
        sold_count,
        reserved_count,
        free_count,
        total_count,
        occupancy_ratio,
    }
}
