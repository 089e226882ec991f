//! Credential authentication service.
//!
//! Implements the [`Authenticator`] driving port over the credential store
//! and the one-way password verify contract.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::auth::LoginCredentials;
use crate::domain::ports::{Authenticator, PasswordVerifier, UserRepository, UserStoreError};
use crate::domain::user::{Identity, User};
use crate::domain::Error;

fn map_store_error(error: UserStoreError) -> Error {
    Error::internal(format!("credential store error: {error}"))
}

/// Authenticator backed by a credential store and password verifier.
#[derive(Clone)]
pub struct AuthService<R, V> {
    users: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> AuthService<R, V>
where
    R: UserRepository,
    V: PasswordVerifier,
{
    /// Create the service over the given store and verifier.
    pub fn new(users: Arc<R>, verifier: Arc<V>) -> Self {
        Self { users, verifier }
    }

    async fn lookup(&self, username: &str) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {username} not found")))
    }

    fn check_password(&self, credentials: &LoginCredentials, user: &User) -> Result<(), Error> {
        let matches = self
            .verifier
            .verify(credentials.password(), &user.password_hash)
            .map_err(|err| Error::internal(format!("password verification failed: {err}")))?;
        if !matches {
            warn!(username = %user.username, "password mismatch");
            return Err(Error::unauthorized("invalid credentials"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R, V> Authenticator for AuthService<R, V>
where
    R: UserRepository,
    V: PasswordVerifier,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Identity, Error> {
        let user = self.lookup(credentials.username()).await?;
        self.check_password(credentials, &user)?;
        Ok(user.identity())
    }

    async fn internal_login(&self, credentials: &LoginCredentials) -> Result<Identity, Error> {
        let user = self.lookup(credentials.username()).await?;
        // Role gate runs before password verification, matching the
        // original ordering; the boundary response is generic either way.
        if !user.role.is_internal() {
            warn!(username = %user.username, "citizen attempted internal login");
            return Err(Error::forbidden("internal staff only"));
        }
        self.check_password(credentials, &user)?;
        Ok(user.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockPasswordVerifier, MockUserRepository};
    use crate::domain::user::{DisplayName, PasswordHash, Role, UserId, Username};
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn stored_user(role: Role) -> User {
        User {
            id: UserId(7),
            username: Username::new("agent.kim").expect("username"),
            password_hash: PasswordHash::new("$2b$12$stored"),
            display_name: DisplayName::new("Kim").expect("display name"),
            role,
        }
    }

    fn creds(password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts("agent.kim", password).expect("credential shape")
    }

    fn service_with(
        user: Option<User>,
        verifier: MockPasswordVerifier,
    ) -> AuthService<MockUserRepository, MockPasswordVerifier> {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(move |_| Ok(user.clone()));
        AuthService::new(Arc::new(users), Arc::new(verifier))
    }

    #[tokio::test]
    async fn unknown_username_fails_with_not_found_and_no_partial_identity() {
        // The verifier must never run for an absent user.
        let verifier = MockPasswordVerifier::new();
        let service = service_with(None, verifier);

        let err = service
            .authenticate(&creds("whatever"))
            .await
            .expect_err("absent user must fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn password_mismatch_fails_with_unauthorized() {
        let mut verifier = MockPasswordVerifier::new();
        verifier.expect_verify().returning(|_, _| Ok(false));
        let service = service_with(Some(stored_user(Role::Agent)), verifier);

        let err = service
            .authenticate(&creds("wrong"))
            .await
            .expect_err("mismatch must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(Role::Agent)]
    #[case(Role::Admin)]
    #[tokio::test]
    async fn staff_roles_pass_both_entry_points(#[case] role: Role) {
        let mut verifier = MockPasswordVerifier::new();
        verifier.expect_verify().returning(|_, _| Ok(true));
        let service = service_with(Some(stored_user(role)), verifier);

        let identity = service
            .internal_login(&creds("correct"))
            .await
            .expect("staff login succeeds");
        assert_eq!(identity.id, UserId(7));
        assert_eq!(identity.role, role);
    }

    #[tokio::test]
    async fn citizen_is_rejected_before_password_verification() {
        // No expect_verify set: a call would panic, proving the role gate
        // runs first even when the password would have been correct.
        let verifier = MockPasswordVerifier::new();
        let service = service_with(Some(stored_user(Role::Citizen)), verifier);

        let err = service
            .internal_login(&creds("correct"))
            .await
            .expect_err("citizen must be refused");
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn citizen_may_still_authenticate_on_the_plain_entry_point() {
        let mut verifier = MockPasswordVerifier::new();
        verifier.expect_verify().returning(|_, _| Ok(true));
        let service = service_with(Some(stored_user(Role::Citizen)), verifier);

        let identity = service
            .authenticate(&creds("correct"))
            .await
            .expect("plain authenticate has no role gate");
        assert_eq!(identity.role, Role::Citizen);
    }
}
