//! Error types for the proptable crate.

use thiserror::Error;

/// Errors raised at the edges of the crate, where outside data is decoded.
///
/// Building a table never fails; only turning raw input into the typed
/// model can.
#[derive(Debug, Error)]
pub enum PropTableError {
    /// The props payload was not valid JSON or did not match its shape.
    #[error("invalid props payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for proptable operations.
pub type Result<T> = std::result::Result<T, PropTableError>;
