//! Domain primitives, aggregates, and services.
//!
//! Types here are transport agnostic; inbound adapters translate them to
//! HTTP, outbound adapters implement the driven ports in [`ports`].

pub mod auth;
pub mod auth_service;
pub mod complaint;
pub mod complaint_service;
pub mod error;
pub mod ports;
pub mod reroute;
pub mod reroute_service;
pub mod session;
pub mod session_manager;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::auth_service::AuthService;
pub use self::complaint::{
    Complaint, ComplaintEvent, ComplaintId, ComplaintStatus, DepartmentId, GeoPoint,
    TransitionError,
};
pub use self::complaint_service::ComplaintService;
pub use self::error::{Error, ErrorCode};
pub use self::reroute::{ComplaintReroute, NewReroute, RerouteId, RerouteStatus};
pub use self::reroute_service::RerouteService;
pub use self::session::{SessionToken, StaffSession, SESSION_IDLE_MINUTES};
pub use self::session_manager::SessionManager;
pub use self::user::{
    DisplayName, Identity, PasswordHash, Role, User, UserId, UserValidationError, Username,
};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
