//! Driven port for the append-only reroute trail.

use async_trait::async_trait;

use crate::domain::reroute::{ComplaintReroute, NewReroute};

/// Failures raised by reroute store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RerouteStoreError {
    /// Store connection could not be established.
    #[error("reroute store connection failed: {message}")]
    Connection { message: String },
    /// Append failed during execution.
    #[error("reroute store append failed: {message}")]
    Query { message: String },
}

/// Append-only reroute requests; the store assigns the identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RerouteRepository: Send + Sync {
    /// Append a pending request and return the persisted record.
    async fn append(&self, request: NewReroute) -> Result<ComplaintReroute, RerouteStoreError>;
}
