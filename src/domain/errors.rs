//! Domain errors for the roster façade.

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the employee store and everything layered on top of it.
///
/// Transport failures are classified into these variants exactly once, at the
/// upstream client boundary; higher components re-raise them unchanged. All
/// variants carry owned strings so the error is `Clone` and a single-flight
/// fetch failure can be handed to every waiter.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested employee does not exist upstream.
    #[error("employee {0} does not exist")]
    NotFound(Uuid),

    /// Upstream throttled the request. Surfaced immediately, never retried here.
    #[error("employee store rate limit exceeded")]
    RateLimited,

    /// Upstream answered with an error-tagged envelope, regardless of the
    /// HTTP status the transport reported.
    #[error("employee store rejected the request: {0}")]
    Rejected(String),

    /// Upstream answered with an HTTP failure status.
    #[error("employee store error: HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The request never completed at the transport level.
    #[error("failed to reach employee store: {0}")]
    Transport(String),

    /// Upstream answered 2xx but the body did not match the wire contract.
    #[error("malformed employee store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// True for the caller-visible "not found" condition. Every other
    /// variant is surfaced as an internal failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias used throughout the domain and service layers.
pub type StoreResult<T> = Result<T, StoreError>;
