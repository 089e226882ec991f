//! Driven port for the server-held session table.
//!
//! An explicit injected store rather than ambient global state: created at
//! process start, torn down at process stop. Expired records are swept
//! lazily by the session manager on access.

use async_trait::async_trait;

use crate::domain::session::{SessionToken, StaffSession};

/// Failures raised by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// The backing store rejected the operation.
    #[error("session store failure: {message}")]
    Backend { message: String },
}

/// Token → session record mapping.
///
/// All operations must be safe under concurrent access to the same token;
/// `remove` of an absent token is a no-op.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert or replace the record for `token`.
    async fn put(&self, token: &SessionToken, session: StaffSession)
        -> Result<(), SessionStoreError>;

    /// Fetch the record for `token`, if any.
    async fn get(&self, token: &SessionToken) -> Result<Option<StaffSession>, SessionStoreError>;

    /// Drop the record for `token`; absent tokens are ignored.
    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
}
