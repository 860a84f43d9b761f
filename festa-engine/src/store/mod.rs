//! Abstract sheet store
//!
//! The backing store is a remote spreadsheet-like table shared with other
//! writers (and with humans editing it directly). The engine only assumes
//! the five operations below; it gets no locking, no transactions, and no
//! change notifications. Implementations translate transport failures into
//! `SalesError::Connection` and missing sheets into `SalesError::NotFound`.

use async_trait::async_trait;
use shared::SalesResult;

pub mod memory;

pub use memory::MemorySheetStore;

/// A physical sheet row: raw cells, left to right
pub type Row = Vec<String>;

/// 1-based physical row position, as used by remote sheet APIs.
/// Row 1 is the header row.
pub type RowRef = usize;

/// Remote tabular store with append/update/delete semantics
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// All physical rows of a sheet, header row included
    async fn read_all(&self, sheet: &str) -> SalesResult<Vec<Row>>;

    /// Append one data row at the bottom of a sheet
    async fn append_row(&self, sheet: &str, row: Row) -> SalesResult<()>;

    /// Rewrite a single cell; `column` is 1-based
    async fn update_cell(
        &self,
        sheet: &str,
        row: RowRef,
        column: usize,
        value: &str,
    ) -> SalesResult<()>;

    /// Physically remove a row, shifting the rows below it up
    async fn delete_row(&self, sheet: &str, row: RowRef) -> SalesResult<()>;

    /// Position of the first row with any cell exactly equal to `key`
    async fn find(&self, sheet: &str, key: &str) -> SalesResult<Option<RowRef>>;
}
