//! Error types for the Pathways engine.
//!
//! Uses `thiserror` for ergonomic error definitions. Adapters raise
//! [`Error::InvalidDomainValue`]; the engine propagates it untouched.

use thiserror::Error;

/// The top-level error type for all Pathways operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value lies outside the adapter's legal value space
    /// (an empty string, a non-positive integer, ...).
    #[error("Invalid {domain} value: {reason}")]
    InvalidDomainValue {
        domain: &'static str,
        reason: String,
    },

    /// A non-basic object produced no component pairs, so the engine
    /// returned the unsolved sentinel. Only raised by [`crate::ensure_solved`].
    #[error("Unsolved: a non-basic object yielded no decompositions")]
    UnsolvedDegenerate,
}

impl Error {
    /// Shorthand used by adapters.
    pub fn invalid(domain: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDomainValue {
            domain,
            reason: reason.into(),
        }
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
