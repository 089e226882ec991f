//! Driving port for the staff session pipeline.

use async_trait::async_trait;

use crate::domain::session::SessionToken;
use crate::domain::user::Identity;
use crate::domain::Error;

/// Session lifecycle as seen by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaffSessions: Send + Sync {
    /// Open a session bound to `identity` and return its opaque token.
    async fn login(&self, identity: Identity) -> Result<SessionToken, Error>;

    /// Resolve a token to its identity, refreshing the inactivity deadline.
    ///
    /// Absent or expired sessions fail with `unauthorized`.
    async fn resolve(&self, token: &SessionToken) -> Result<Identity, Error>;

    /// Destroy the session if present; logging out twice is not an error.
    async fn logout(&self, token: &SessionToken) -> Result<(), Error>;
}
