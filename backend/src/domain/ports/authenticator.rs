//! Driving port for credential authentication.
//!
//! Inbound adapters call this to turn a username/password pair into a
//! verified identity without knowing the backing infrastructure.
//!
//! The returned errors keep the failure taxonomy distinct (`not_found`
//! for an unknown username, `unauthorized` for a password mismatch,
//! `forbidden` for a citizen on the internal entry point); the HTTP
//! boundary collapses them into one generic response so usernames cannot
//! be enumerated.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::user::Identity;
use crate::domain::Error;

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate credentials and return the verified identity.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error>;

    /// As [`Self::authenticate`], but additionally refuse CITIZEN accounts
    /// before the password is even checked.
    async fn internal_login(&self, credentials: &LoginCredentials) -> Result<Identity, Error>;
}
