//! Public pipeline handlers under `/api/auth`.
//!
//! This pipeline holds no server-side state: a successful internal login
//! returns a token in the body instead of opening a session. Token
//! issuance is not wired up yet, so the field carries a fixed placeholder.

use actix_web::{post, web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::domain::user::Role;
use crate::domain::LoginCredentials;

use super::agent::{generic_unauthorized, map_login_validation_error, LoginRequest};
use super::state::HttpState;
use super::ApiResult;

/// Response body for a successful internal login.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InternalLoginResponse {
    /// Placeholder until token issuance is wired up.
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// Stateless internal login for staff tooling.
///
/// Refuses CITIZEN accounts before the password is checked, but the
/// refusal is not allowed to show: on this open endpoint a distinct role
/// error would confirm that a username exists, so unknown users, wrong
/// passwords and non-staff accounts all surface as the same generic 401.
#[utoipa::path(
    post,
    path = "/api/auth/internal/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = InternalLoginResponse),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 401, description = "Invalid credentials", body = crate::domain::Error)
    ),
    tag = "auth",
    operation_id = "internalLogin"
)]
#[post("/internal/login")]
pub async fn internal_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let identity = state
        .auth
        .internal_login(&credentials)
        .await
        .map_err(|err| generic_unauthorized(&err))?;

    info!(user_id = %identity.id, "internal login succeeded");
    Ok(HttpResponse::Ok().json(InternalLoginResponse {
        token: "pending-token".to_owned(),
        username: identity.username.to_string(),
        role: identity.role,
    }))
}
