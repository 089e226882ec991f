//! Driven port for the external credential store.

use async_trait::async_trait;

use crate::domain::user::User;

/// Failures raised by credential store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Store connection could not be established.
    #[error("credential store connection failed: {message}")]
    Connection { message: String },
    /// Lookup failed during execution.
    #[error("credential store query failed: {message}")]
    Query { message: String },
}

/// Read-only view of user records; creation and mutation happen elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserStoreError>;
}
