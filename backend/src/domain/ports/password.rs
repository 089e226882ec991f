//! Driven port for one-way password verification.
//!
//! The hash algorithm is the adapter's concern; the domain only relies on
//! the verify contract.

use crate::domain::user::PasswordHash;

/// Failures raised while verifying a password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordVerifyError {
    /// The stored hash could not be interpreted by the adapter.
    #[error("stored password hash is malformed")]
    MalformedHash,
}

/// Compare a raw password against a stored one-way hash.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(true)` iff `password` matches `hash`.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordVerifyError>;
}
