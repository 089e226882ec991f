//! HTTP adapter: handlers, route table, error mapping, and shared state.

pub mod agent;
pub mod auth;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

pub use self::error::ApiResult;
pub use self::routes::configure;
pub use self::state::{HttpState, SessionCookieSettings};
