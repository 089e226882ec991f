//! Staff identity extraction for guarded handlers.
//!
//! The session guard resolves the cookie token and stashes the identity in
//! request extensions; handlers receive it through [`StaffIdentity`] so
//! they never touch cookies or the session store themselves.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::user::Identity;
use crate::domain::Error;

/// Name of the cookie carrying the opaque staff session token.
pub const SESSION_COOKIE: &str = "agent_session";

/// Build the session cookie for a freshly issued token.
pub fn staff_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish()
}

/// An expired removal cookie clearing the session token on the client.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

/// Identity resolved by the session guard for the current request.
#[derive(Debug, Clone)]
pub struct StaffIdentity(pub Identity);

impl FromRequest for StaffIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(
            identity
                .map(StaffIdentity)
                .ok_or_else(|| Error::unauthorized("login required")),
        )
    }
}
