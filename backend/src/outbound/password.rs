//! bcrypt-backed password verification.
//!
//! The credential store holds bcrypt hashes; only the one-way
//! hash-and-verify contract crosses the port.

use crate::domain::ports::{PasswordVerifier, PasswordVerifyError};
use crate::domain::user::PasswordHash;

/// Verifier for bcrypt password hashes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptVerifier;

impl PasswordVerifier for BcryptVerifier {
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordVerifyError> {
        bcrypt::verify(password, hash.as_str()).map_err(|_| PasswordVerifyError::MalformedHash)
    }
}

/// Hash a raw password for seeding and tests.
///
/// Production account creation happens outside this core; this helper
/// exists so bootstrap users carry real hashes.
pub fn hash_password(raw: &str) -> Result<PasswordHash, PasswordVerifyError> {
    bcrypt::hash(raw, bcrypt::DEFAULT_COST)
        .map(PasswordHash::new)
        .map_err(|_| PasswordVerifyError::MalformedHash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_its_own_hashes() {
        let hash = hash_password("hunter2").expect("hashing succeeds");
        let verifier = BcryptVerifier;
        assert!(verifier.verify("hunter2", &hash).expect("verify"));
        assert!(!verifier.verify("hunter3", &hash).expect("verify"));
    }

    #[test]
    fn malformed_hash_is_reported_not_matched() {
        let verifier = BcryptVerifier;
        let err = verifier
            .verify("hunter2", &PasswordHash::new("not-a-bcrypt-hash"))
            .expect_err("malformed hash must error");
        assert_eq!(err, PasswordVerifyError::MalformedHash);
    }
}
