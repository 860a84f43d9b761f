//! Error types for the shared crate
//!
//! Standardized error types used across the engine and any embedding layer

use thiserror::Error;

/// Unified error type for sales operations
#[derive(Debug, Error)]
pub enum SalesError {
    /// Input rejected before any write (e.g. empty customer name)
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Target no longer exists (stale selection, unknown table, missing sheet)
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Operation not valid for the table's current lifecycle state
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// Backing store unreachable
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// Backing store rejected the write
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl SalesError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState { message: message.into() }
    }

    /// Create a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }

    /// Whether this error means the caller should re-fetch and retry the
    /// selection (the underlying row changed under them)
    pub fn is_stale_selection(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for sales operations
pub type SalesResult<T> = Result<T, SalesError>;
