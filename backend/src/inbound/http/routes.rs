//! Route table wiring both pipelines.

use actix_web::web;

use crate::middleware::SessionGuard;

use super::state::HttpState;
use super::{agent, auth};

/// Register both pipelines on `cfg`.
///
/// The guarded staff scope is registered first so `/api/agent/**` always
/// meets the session guard before any other matching is attempted. Paths
/// outside the two scopes deliberately fall through to the open pipeline's
/// default 404.
pub fn configure(cfg: &mut web::ServiceConfig, state: HttpState) {
    let guard = SessionGuard::new(state.sessions.clone());
    cfg.app_data(web::Data::new(state))
        .service(
            web::scope("/api/agent")
                .wrap(guard)
                .service(agent::login)
                .service(agent::logout)
                .service(agent::me)
                .service(agent::complaint_detail)
                .service(agent::assign)
                .service(agent::answer)
                .service(agent::reroute),
        )
        .service(web::scope("/api/auth").service(auth::internal_login));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockAuthenticator, MockComplaintLifecycle, MockRerouteWorkflow, MockStaffSessions,
    };
    use crate::inbound::http::state::SessionCookieSettings;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn state() -> HttpState {
        HttpState {
            auth: Arc::new(MockAuthenticator::new()),
            sessions: Arc::new(MockStaffSessions::new()),
            complaints: Arc::new(MockComplaintLifecycle::new()),
            reroutes: Arc::new(MockRerouteWorkflow::new()),
            cookie: SessionCookieSettings { secure: false },
        }
    }

    #[actix_web::test]
    async fn unmatched_staff_paths_are_refused_before_routing() {
        let app = test::init_service(
            App::new().configure(|cfg| configure(cfg, state())),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/agent/no-such-endpoint")
                .to_request(),
        )
        .await;

        // Default-deny: 401 from the guard, never a revealing 404.
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unmatched_public_paths_fall_through_to_404() {
        let app = test::init_service(
            App::new().configure(|cfg| configure(cfg, state())),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/other/unknown")
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
