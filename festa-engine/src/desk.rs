//! SalesDesk: the command surface exposed to the presentation layer
//!
//! Owns the store handle, the session catalog cache and the hit-test
//! registry, and turns upward-facing calls into lifecycle actions. There
//! is no ambient "currently selected table": selection is a value the
//! caller obtains from `select_at`/`select` and passes into subsequent
//! calls explicitly.

use std::collections::HashMap;
use std::sync::Arc;

use shared::util::parse_wire_timestamp;
use shared::{ReservationEvent, SalesError, SalesResult, TableDefinition, TableStatus};

use crate::actions::{
    CancelAction, Command, CommandContext, ConfirmSaleAction, ReserveAction, UndoSaleAction,
};
use crate::catalog::LayoutCatalog;
use crate::config::DeskConfig;
use crate::finance::{FinancialSummary, aggregate};
use crate::ledger;
use crate::reconcile::{ReconciledTable, reconcile};
use crate::spatial::{HitRegistry, Point, Viewport};
use crate::store::SheetStore;

/// Command surface over one event's table map
pub struct SalesDesk {
    store: Arc<dyn SheetStore>,
    config: DeskConfig,
    catalog: LayoutCatalog,
    registry: HitRegistry,
}

impl SalesDesk {
    pub fn new(store: Arc<dyn SheetStore>, config: DeskConfig) -> Self {
        let catalog = LayoutCatalog::new(store.clone(), config.layout_sheet.clone());
        Self {
            store,
            config,
            catalog,
            registry: HitRegistry::new(),
        }
    }

    /// Attach the table-position registry used by `select_at`
    pub fn with_registry(mut self, registry: HitRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Drop the session catalog cache and re-fetch it
    pub async fn refresh(&self) -> SalesResult<()> {
        self.catalog.refresh().await.map(|_| ())
    }

    /// Snapshot for one read: cached catalog + fresh latest-event reduction
    async fn snapshot(
        &self,
    ) -> SalesResult<(Arc<Vec<TableDefinition>>, HashMap<String, ReservationEvent>)> {
        let tables = self.catalog.fetch().await?;
        let events = ledger::load(&*self.store, &self.config.reservation_sheet).await;
        Ok((tables, ledger::latest_by_table(events)))
    }

    // ========== Selection ==========

    /// Hit-test a rendered click against the registry; `None` is a miss
    pub fn select_at(&self, click: Point, viewport: &Viewport) -> Option<String> {
        self.registry
            .locate_in_viewport(click, viewport, self.config.hit_radius)
            .map(str::to_string)
    }

    /// Authoritative record for one table
    pub async fn select(&self, table_id: &str) -> SalesResult<ReconciledTable> {
        let (tables, latest) = self.snapshot().await?;
        reconcile(&tables, &latest)
            .into_iter()
            .find(|t| t.id() == table_id)
            .ok_or_else(|| SalesError::not_found(format!("table {table_id}")))
    }

    // ========== Lifecycle transitions ==========

    /// Reserve a Free table; returns the new event ID
    pub async fn reserve(
        &self,
        table_id: &str,
        customer: &str,
        referrer: &str,
        phone: &str,
    ) -> SalesResult<String> {
        let tables = self.catalog.fetch().await?;
        let action = ReserveAction {
            table_id: table_id.to_string(),
            customer: customer.to_string(),
            referrer: referrer.to_string(),
            phone: phone.to_string(),
        };
        action.execute(&self.context(&tables)).await
    }

    /// Confirm the sale of a Reserved event; `amount` defaults to the
    /// table's base price
    pub async fn confirm_sale(&self, event_id: &str, amount: Option<f64>) -> SalesResult<()> {
        let tables = self.catalog.fetch().await?;
        let action = ConfirmSaleAction {
            event_id: event_id.to_string(),
            amount,
        };
        action.execute(&self.context(&tables)).await
    }

    /// Cancel a Reserved event, returning its table to Free
    pub async fn cancel(&self, event_id: &str) -> SalesResult<()> {
        let tables = self.catalog.fetch().await?;
        let action = CancelAction {
            event_id: event_id.to_string(),
        };
        action.execute(&self.context(&tables)).await
    }

    /// Revert a Sold event to Reserved, clearing the charged amount
    pub async fn undo_sale(&self, event_id: &str) -> SalesResult<()> {
        let tables = self.catalog.fetch().await?;
        let action = UndoSaleAction {
            event_id: event_id.to_string(),
        };
        action.execute(&self.context(&tables)).await
    }

    fn context<'a>(&'a self, tables: &'a [TableDefinition]) -> CommandContext<'a> {
        CommandContext {
            store: &*self.store,
            reservation_sheet: &self.config.reservation_sheet,
            catalog: tables,
        }
    }

    // ========== Read models ==========

    /// Reconciled view of the whole map, optionally narrowed to one sector
    pub async fn reconciled_view(&self, sector: Option<&str>) -> SalesResult<Vec<ReconciledTable>> {
        let (tables, latest) = self.snapshot().await?;
        let mut view = reconcile(&tables, &latest);
        if let Some(sector) = sector {
            view.retain(|t| t.definition.sector == sector);
        }
        Ok(view)
    }

    /// Distinct sector tags in first-seen catalog order (filter choices)
    pub async fn sectors(&self) -> SalesResult<Vec<String>> {
        let tables = self.catalog.fetch().await?;
        let mut sectors: Vec<String> = Vec::new();
        for table in tables.iter() {
            if !table.sector.is_empty() && !sectors.contains(&table.sector) {
                sectors.push(table.sector.clone());
            }
        }
        Ok(sectors)
    }

    /// Event-level financial summary over the full map
    pub async fn financial_summary(&self) -> SalesResult<FinancialSummary> {
        Ok(aggregate(&self.reconciled_view(None).await?))
    }

    /// Sold tables ordered by confirmation time (the sales statement)
    pub async fn sales_statement(&self) -> SalesResult<Vec<ReconciledTable>> {
        let mut sold: Vec<ReconciledTable> = self
            .reconciled_view(None)
            .await?
            .into_iter()
            .filter(|t| t.status == TableStatus::Sold)
            .collect();
        sold.sort_by_key(|t| {
            t.event
                .as_ref()
                .and_then(|e| e.confirmed_at.as_deref())
                .and_then(parse_wire_timestamp)
        });
        Ok(sold)
    }
}
