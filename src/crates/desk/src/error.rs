//! Error types for the desk application.

use thiserror::Error;

/// Errors that can occur in the desk application. The ticket workflow
/// itself has no fatal errors; these cover terminal, configuration, and
/// event-plumbing setup.
#[derive(Debug, Error)]
pub enum DeskError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Core domain error surfaced to the user via the status line; only
    /// setup paths propagate it.
    #[error("{0}")]
    Core(#[from] desk_core::CoreError),

    /// Terminal event channel closed
    #[error("Event channel closed")]
    EventChannel(#[from] std::sync::mpsc::RecvError),
}

/// Result type for desk operations
pub type Result<T> = std::result::Result<T, DeskError>;
