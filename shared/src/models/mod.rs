//! Wire-level models for the backing sheet store

pub mod reservation;
pub mod table;

pub use reservation::ReservationEvent;
pub use table::TableDefinition;
