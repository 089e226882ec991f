//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! both pipelines: the session-guarded staff surface under `/api/agent` and
//! the stateless public surface under `/api/auth`. The generated document
//! backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::complaint::{Complaint, ComplaintStatus, GeoPoint};
use crate::domain::reroute::{ComplaintReroute, RerouteStatus};
use crate::domain::user::{Identity, Role};
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::agent::{AnswerRequest, LoginRequest, RerouteRequest};
use crate::inbound::http::auth::InternalLoginResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "agent_session",
                "Staff session cookie issued by POST /api/agent/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Complaint routing API",
        description = "Staff pipeline for complaint triage plus the stateless internal login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::agent::login,
        crate::inbound::http::agent::logout,
        crate::inbound::http::agent::me,
        crate::inbound::http::agent::complaint_detail,
        crate::inbound::http::agent::assign,
        crate::inbound::http::agent::answer,
        crate::inbound::http::agent::reroute,
        crate::inbound::http::auth::internal_login,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Identity,
        Role,
        Complaint,
        ComplaintStatus,
        GeoPoint,
        ComplaintReroute,
        RerouteStatus,
        LoginRequest,
        AnswerRequest,
        RerouteRequest,
        InternalLoginResponse,
    )),
    tags(
        (name = "agent", description = "Session-guarded staff operations"),
        (name = "auth", description = "Stateless public authentication")
    )
)]
pub struct ApiDoc;
