//! Error types for the core domain layer.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in the core domain layer.
///
/// The store is deliberately permissive: mutations addressed at an unknown
/// ticket id are silent no-ops rather than `NotFound` errors, matching the
/// observed UI behavior. `NotFound` is kept for read-side callers that need
/// to distinguish a missing record.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input rejected before any state change was applied.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A ticket or user id that is absent from the collection.
    #[error("Not found: {0}")]
    NotFound(String),
}
