//! Session guard for the staff pipeline.
//!
//! Wraps the `/api/agent` scope and resolves the session cookie before any
//! handler runs. Only the login endpoint is exempt; every other path under
//! the scope is default-deny, including ones no handler matches. On
//! success the resolved identity lands in request extensions for the
//! [`StaffIdentity`](crate::inbound::http::session::StaffIdentity)
//! extractor.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::{HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::domain::ports::StaffSessions;
use crate::domain::session::SessionToken;
use crate::domain::Error;
use crate::inbound::http::session::SESSION_COOKIE;

const LOGIN_PATH: &str = "/api/agent/login";

fn is_exempt(req: &ServiceRequest) -> bool {
    req.path() == LOGIN_PATH && req.method() == Method::POST
}

/// Middleware factory holding the session pipeline handle.
pub struct SessionGuard {
    sessions: Arc<dyn StaffSessions>,
}

impl SessionGuard {
    pub fn new(sessions: Arc<dyn StaffSessions>) -> Self {
        Self { sessions }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = SessionGuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware {
            service: Rc::new(service),
            sessions: Arc::clone(&self.sessions),
        }))
    }
}

/// Per-request enforcement arm of [`SessionGuard`].
pub struct SessionGuardMiddleware<S> {
    service: Rc<S>,
    sessions: Arc<dyn StaffSessions>,
}

/// Convert a refusal into a response on the spot, so the guard's outcome
/// is a normal 401 body rather than an error bubbling past the scope.
fn refuse<B>(req: ServiceRequest, error: &Error) -> ServiceResponse<EitherBody<B>> {
    let (request, _) = req.into_parts();
    let response = error.error_response().map_into_right_body();
    ServiceResponse::new(request, response)
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let sessions = Arc::clone(&self.sessions);

        Box::pin(async move {
            if is_exempt(&req) {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let Some(cookie) = req.request().cookie(SESSION_COOKIE) else {
                debug!(path = req.path(), "staff request without session cookie");
                return Ok(refuse(req, &Error::unauthorized("login required")));
            };

            let token = SessionToken::from_raw(cookie.value());
            match sessions.resolve(&token).await {
                Ok(identity) => {
                    req.extensions_mut().insert(identity);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    debug!(path = req.path(), %error, "session resolution failed");
                    Ok(refuse(req, &error))
                }
            }
        })
    }
}
