//! Server-held staff sessions.
//!
//! A session binds an opaque token to an identity snapshot with an
//! inactivity deadline. The record lives in the injected session store;
//! the cookie only ever carries the token.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use super::user::Identity;

/// Inactivity window after which a staff session expires.
pub const SESSION_IDLE_MINUTES: i64 = 30;

/// Opaque token referencing a server-held session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

const TOKEN_LEN: usize = 48;

impl SessionToken {
    /// Mint a fresh random token.
    pub fn generate() -> Self {
        use rand::distributions::Alphanumeric;
        use rand::Rng;

        let raw: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(raw)
    }

    /// Wrap a token received from a request cookie.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Session record bound to a verified staff identity.
///
/// ## Invariants
/// - The record is valid iff `now < deadline`; every successful resolve
///   pushes the deadline forward by [`SESSION_IDLE_MINUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffSession {
    pub identity: Identity,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

impl StaffSession {
    /// Open a new session for `identity` starting at `now`.
    pub fn open(identity: Identity, now: DateTime<Utc>) -> Self {
        Self {
            identity,
            created_at: now,
            deadline: now + Duration::minutes(SESSION_IDLE_MINUTES),
        }
    }

    /// Whether the inactivity deadline has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    /// The record with its deadline pushed out from `now`.
    pub fn refreshed(mut self, now: DateTime<Utc>) -> Self {
        self.deadline = now + Duration::minutes(SESSION_IDLE_MINUTES);
        self
    }
}
