//! Error types for the truncation engine

use thiserror::Error;

/// Errors surfaced by the truncation engine.
///
/// An oversize result is not an error: the engine returns its best
/// effort and leaves policy to the caller.
#[derive(Debug, Error)]
pub enum TruncationError {
    /// A custom strategy failed contract validation at registration time
    #[error("invalid truncation strategy '{name}': {reason}")]
    InvalidStrategy { name: String, reason: String },
}
