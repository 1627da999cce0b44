//! Error types for Stylebox core.

use crate::input::ListenerId;

/// Errors raised by the core event plumbing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The listener was never registered or has already been removed.
    #[error("Unknown or already removed listener {0:?}")]
    UnknownListener(ListenerId),
}

/// A specialized Result type for Stylebox core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
