//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (stores, password verifier) are consumed by the domain
//! services; driving ports (use-cases) are what inbound adapters call.
//! Adapters in `outbound/` implement the driven side.

mod authenticator;
mod complaint_lifecycle;
mod complaint_repository;
mod password;
mod reroute_repository;
mod reroute_workflow;
mod session_store;
mod staff_sessions;
mod user_repository;

pub use authenticator::Authenticator;
#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use complaint_lifecycle::{AnswerCommand, ComplaintLifecycle};
#[cfg(test)]
pub use complaint_lifecycle::MockComplaintLifecycle;
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{ComplaintRepository, ComplaintStoreError};
#[cfg(test)]
pub use password::MockPasswordVerifier;
pub use password::{PasswordVerifier, PasswordVerifyError};
#[cfg(test)]
pub use reroute_repository::MockRerouteRepository;
pub use reroute_repository::{RerouteRepository, RerouteStoreError};
pub use reroute_workflow::RerouteWorkflow;
#[cfg(test)]
pub use reroute_workflow::MockRerouteWorkflow;
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use staff_sessions::MockStaffSessions;
pub use staff_sessions::StaffSessions;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserStoreError};
