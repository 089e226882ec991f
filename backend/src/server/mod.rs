//! Server construction: state wiring and development seeding.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::warn;

use crate::domain::complaint::{Complaint, ComplaintId, ComplaintStatus, DepartmentId, GeoPoint};
use crate::domain::user::{DisplayName, Role, User, UserId, Username};
use crate::domain::{AuthService, ComplaintService, Error, RerouteService, SessionManager};
use crate::inbound::http::{HttpState, SessionCookieSettings};
use crate::outbound::password::{hash_password, BcryptVerifier};
use crate::outbound::persistence::{
    InMemoryComplaintStore, InMemoryRerouteStore, InMemoryUserStore,
};
use crate::outbound::session::InMemorySessionStore;

/// Handles on the in-memory adapters, kept alongside the HTTP state so
/// seeding and tests can reach past the ports.
#[derive(Clone)]
pub struct InMemoryStores {
    pub users: Arc<InMemoryUserStore>,
    pub complaints: Arc<InMemoryComplaintStore>,
    pub reroutes: Arc<InMemoryRerouteStore>,
    pub sessions: Arc<InMemorySessionStore>,
}

/// Wire domain services over in-memory adapters.
pub fn in_memory_state(cookie_secure: bool, clock: Arc<dyn Clock>) -> (HttpState, InMemoryStores) {
    let users = Arc::new(InMemoryUserStore::new());
    let complaints = Arc::new(InMemoryComplaintStore::new());
    let reroutes = Arc::new(InMemoryRerouteStore::new(Arc::clone(&clock)));
    let sessions = Arc::new(InMemorySessionStore::new());

    let state = HttpState {
        auth: Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::new(BcryptVerifier),
        )),
        sessions: Arc::new(SessionManager::new(
            Arc::clone(&sessions),
            Arc::clone(&clock),
        )),
        complaints: Arc::new(ComplaintService::new(
            Arc::clone(&complaints),
            Arc::clone(&clock),
        )),
        reroutes: Arc::new(RerouteService::new(
            Arc::clone(&complaints),
            Arc::clone(&reroutes),
        )),
        cookie: SessionCookieSettings {
            secure: cookie_secure,
        },
    };

    let stores = InMemoryStores {
        users,
        complaints,
        reroutes,
        sessions,
    };
    (state, stores)
}

/// As [`in_memory_state`], with the system clock.
pub fn default_state(cookie_secure: bool) -> (HttpState, InMemoryStores) {
    in_memory_state(cookie_secure, Arc::new(DefaultClock))
}

fn seeded_user(id: i64, username: &str, display: &str, role: Role, password: &str) -> Result<User, Error> {
    Ok(User {
        id: UserId(id),
        username: Username::new(username)
            .map_err(|err| Error::internal(format!("seed user {username}: {err}")))?,
        password_hash: hash_password(password)
            .map_err(|err| Error::internal(format!("seed user {username}: {err}")))?,
        display_name: DisplayName::new(display)
            .map_err(|err| Error::internal(format!("seed user {username}: {err}")))?,
        role,
    })
}

/// Populate the stores with development fixtures.
///
/// Accounts and the sample complaint exist only to make a fresh instance
/// explorable; real deployments front a durable store instead.
pub async fn seed_dev_data(stores: &InMemoryStores) -> Result<(), Error> {
    warn!("seeding development fixtures; do not enable in production");

    stores
        .users
        .upsert(seeded_user(1, "citizen.lee", "Lee", Role::Citizen, "citizen-pw")?)
        .await;
    stores
        .users
        .upsert(seeded_user(7, "agent.kim", "Kim", Role::Agent, "agent-pw")?)
        .await;
    stores
        .users
        .upsert(seeded_user(3, "admin", "Admin", Role::Admin, "admin-pw")?)
        .await;

    stores
        .complaints
        .seed(Complaint {
            id: ComplaintId(42),
            title: "Broken streetlight".to_owned(),
            body: "The light at the corner has been out for a week.".to_owned(),
            address_text: "12 Elm Street".to_owned(),
            location: Some(GeoPoint {
                latitude: 52.52,
                longitude: 13.405,
            }),
            applicant_id: UserId(1),
            current_department_id: DepartmentId(1),
            assigned_staff_id: None,
            status: ComplaintStatus::Submitted,
            answer: None,
            answered_at: None,
        })
        .await;

    Ok(())
}
