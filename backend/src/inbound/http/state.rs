//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data` so they only depend on
//! the domain's driving ports and stay testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::{Authenticator, ComplaintLifecycle, RerouteWorkflow, StaffSessions};

/// Cookie attributes applied when issuing the staff session cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookieSettings {
    /// Whether the cookie is marked `Secure`; off only for local dev.
    pub secure: bool,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn Authenticator>,
    pub sessions: Arc<dyn StaffSessions>,
    pub complaints: Arc<dyn ComplaintLifecycle>,
    pub reroutes: Arc<dyn RerouteWorkflow>,
    pub cookie: SessionCookieSettings,
}
