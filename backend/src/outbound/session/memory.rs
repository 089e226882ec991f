//! In-memory token → session map.
//!
//! Lives for the process lifetime and is injected into the session
//! manager; nothing else holds a reference to the table. Safe under
//! concurrent access to the same token (double-click logout races an
//! in-flight resolve without corruption).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::session::{SessionToken, StaffSession};

/// Process-local session table.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, StaffSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        token: &SessionToken,
        session: StaffSession,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.as_str().to_owned(), session);
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<StaffSession>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token.as_str()).cloned())
    }

    async fn remove(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token.as_str());
        Ok(())
    }
}
