//! Driven port for complaint persistence.

use async_trait::async_trait;

use crate::domain::complaint::{Complaint, ComplaintId};

/// Failures raised by complaint store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComplaintStoreError {
    /// Store connection could not be established.
    #[error("complaint store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("complaint store query failed: {message}")]
    Query { message: String },
}

/// Complaint records: load by id, persist atomically.
///
/// `save` is the transactional unit: an adapter must apply the whole
/// record or nothing. Concurrent saves against the same id resolve as
/// last-writer-wins; the domain deliberately carries no version guard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Fetch a complaint by identifier.
    async fn find_by_id(&self, id: ComplaintId) -> Result<Option<Complaint>, ComplaintStoreError>;

    /// Persist the full record as one atomic write.
    async fn save(&self, complaint: &Complaint) -> Result<(), ComplaintStoreError>;
}
