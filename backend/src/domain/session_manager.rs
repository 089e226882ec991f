//! Staff session manager.
//!
//! Implements the [`StaffSessions`] driving port over the injected session
//! store and clock. Expired records are swept lazily: the first resolve
//! after the deadline removes the record and reports `unauthorized`.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{SessionStore, SessionStoreError, StaffSessions};
use crate::domain::session::{SessionToken, StaffSession};
use crate::domain::user::Identity;
use crate::domain::Error;

fn map_store_error(error: SessionStoreError) -> Error {
    Error::internal(format!("session store error: {error}"))
}

/// Session pipeline backed by a token → record store.
#[derive(Clone)]
pub struct SessionManager<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> SessionManager<S>
where
    S: SessionStore,
{
    /// Create the manager over the given store and clock.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl<S> StaffSessions for SessionManager<S>
where
    S: SessionStore,
{
    async fn login(&self, identity: Identity) -> Result<SessionToken, Error> {
        let token = SessionToken::generate();
        let session = StaffSession::open(identity, self.clock.utc());
        info!(user_id = %session.identity.id, "staff session opened");
        self.store
            .put(&token, session)
            .await
            .map_err(map_store_error)?;
        Ok(token)
    }

    async fn resolve(&self, token: &SessionToken) -> Result<Identity, Error> {
        let Some(session) = self.store.get(token).await.map_err(map_store_error)? else {
            return Err(Error::unauthorized("login required"));
        };

        let now = self.clock.utc();
        if session.is_expired(now) {
            info!(user_id = %session.identity.id, "staff session expired");
            self.store.remove(token).await.map_err(map_store_error)?;
            return Err(Error::unauthorized("session expired"));
        }

        let refreshed = session.refreshed(now);
        let identity = refreshed.identity.clone();
        self.store
            .put(token, refreshed)
            .await
            .map_err(map_store_error)?;
        Ok(identity)
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), Error> {
        // Idempotent: removing an absent token is not an error.
        self.store.remove(token).await.map_err(map_store_error)
    }
}
