//! Staff pipeline handlers under `/api/agent`.
//!
//! Everything except `POST /login` sits behind the session guard; handlers
//! receive the resolved identity through the
//! [`StaffIdentity`](super::session::StaffIdentity) extractor.

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::domain::complaint::{Complaint, ComplaintId, DepartmentId};
use crate::domain::ports::AnswerCommand;
use crate::domain::reroute::ComplaintReroute;
use crate::domain::session::SessionToken;
use crate::domain::user::Identity;
use crate::domain::{Error, LoginCredentials, LoginValidationError};

use super::session::{removal_cookie, staff_cookie, StaffIdentity, SESSION_COOKIE};
use super::state::HttpState;
use super::ApiResult;

/// Login request body shared by both pipelines.
///
/// Example JSON: `{"username":"agent.kim","password":"hunter2"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

pub(super) fn map_login_validation_error(err: LoginValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": err.field() }))
}

/// Collapse every authentication failure into one generic response so the
/// boundary does not reveal whether the username or the password failed.
pub(super) fn generic_unauthorized(err: &Error) -> Error {
    warn!(error = %err, "authentication failed");
    Error::unauthorized("invalid credentials")
}

/// Staff login: verify credentials, gate on role, open a session.
#[utoipa::path(
    post,
    path = "/api/agent/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Staff session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 403, description = "Not a staff account", body = Error)
    ),
    tag = "agent",
    operation_id = "agentLogin"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let identity = state
        .auth
        .authenticate(&credentials)
        .await
        .map_err(|err| generic_unauthorized(&err))?;

    // Second gate: valid citizen credentials must still be refused here,
    // surfaced distinctly from a failed authentication.
    if !identity.role.is_internal() {
        warn!(user_id = %identity.id, "citizen refused on the staff pipeline");
        return Err(Error::forbidden("staff access only"));
    }

    let token = state.sessions.login(identity).await?;
    let cookie = staff_cookie(token.as_str().to_owned(), state.cookie.secure);
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "message": "login successful" })))
}

/// Destroy the caller's session; repeated logouts are not an error.
#[utoipa::path(
    post,
    path = "/api/agent/logout",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "No valid session", body = Error)
    ),
    tag = "agent",
    operation_id = "agentLogout"
)]
#[post("/logout")]
pub async fn logout(state: web::Data<HttpState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        let token = SessionToken::from_raw(cookie.value());
        state.sessions.logout(&token).await?;
    }
    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(json!({ "message": "logged out" })))
}

/// The caller's own identity.
#[utoipa::path(
    get,
    path = "/api/agent/me",
    responses(
        (status = 200, description = "Resolved identity", body = Identity),
        (status = 401, description = "No valid session", body = Error)
    ),
    tag = "agent",
    operation_id = "agentMe"
)]
#[get("/me")]
pub async fn me(staff: StaffIdentity) -> web::Json<Identity> {
    web::Json(staff.0)
}

/// Complaint detail for the staff view.
#[utoipa::path(
    get,
    path = "/api/agent/complaints/{id}",
    params(("id" = i64, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint", body = Complaint),
        (status = 401, description = "No valid session", body = Error),
        (status = 404, description = "Unknown complaint", body = Error)
    ),
    tag = "agent",
    operation_id = "complaintDetail"
)]
#[get("/complaints/{id}")]
pub async fn complaint_detail(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    _staff: StaffIdentity,
) -> ApiResult<web::Json<Complaint>> {
    let complaint = state
        .complaints
        .complaint_detail(ComplaintId(path.into_inner()))
        .await?;
    Ok(web::Json(complaint))
}

/// Assign the caller as manager, moving the complaint into IN_PROGRESS.
#[utoipa::path(
    post,
    path = "/api/agent/complaints/{id}/assign",
    params(("id" = i64, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Assigned complaint", body = Complaint),
        (status = 401, description = "No valid session", body = Error),
        (status = 404, description = "Unknown complaint", body = Error),
        (status = 409, description = "Complaint already closed", body = Error)
    ),
    tag = "agent",
    operation_id = "assignManager"
)]
#[post("/complaints/{id}/assign")]
pub async fn assign(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    staff: StaffIdentity,
) -> ApiResult<web::Json<Complaint>> {
    let complaint = state
        .complaints
        .assign_manager(ComplaintId(path.into_inner()), staff.0.id)
        .await?;
    Ok(web::Json(complaint))
}

/// Answer submission body.
///
/// `isTemporary: true` saves a draft; `false` closes the complaint.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub answer: String,
    pub is_temporary: bool,
}

/// Save or finalize an answer.
#[utoipa::path(
    post,
    path = "/api/agent/complaints/{id}/answer",
    params(("id" = i64, Path, description = "Complaint id")),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Updated complaint", body = Complaint),
        (status = 401, description = "No valid session", body = Error),
        (status = 404, description = "Unknown complaint", body = Error),
        (status = 409, description = "Complaint already closed", body = Error)
    ),
    tag = "agent",
    operation_id = "saveAnswer"
)]
#[post("/complaints/{id}/answer")]
pub async fn answer(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<AnswerRequest>,
    _staff: StaffIdentity,
) -> ApiResult<web::Json<Complaint>> {
    let body = payload.into_inner();
    let complaint = state
        .complaints
        .save_answer(
            ComplaintId(path.into_inner()),
            AnswerCommand {
                answer: body.answer,
                temporary: body.is_temporary,
            },
        )
        .await?;
    Ok(web::Json(complaint))
}

/// Reroute request body.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RerouteRequest {
    pub target_department_id: i64,
    pub reason: String,
}

/// File a reroute request; the complaint itself stays untouched.
#[utoipa::path(
    post,
    path = "/api/agent/complaints/{id}/reroute",
    params(("id" = i64, Path, description = "Complaint id")),
    request_body = RerouteRequest,
    responses(
        (status = 200, description = "Pending reroute record", body = ComplaintReroute),
        (status = 401, description = "No valid session", body = Error),
        (status = 404, description = "Unknown complaint", body = Error)
    ),
    tag = "agent",
    operation_id = "requestReroute"
)]
#[post("/complaints/{id}/reroute")]
pub async fn reroute(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RerouteRequest>,
    staff: StaffIdentity,
) -> ApiResult<web::Json<ComplaintReroute>> {
    let body = payload.into_inner();
    let record = state
        .reroutes
        .request_reroute(
            ComplaintId(path.into_inner()),
            DepartmentId(body.target_department_id),
            body.reason,
            staff.0.id,
        )
        .await?;
    Ok(web::Json(record))
}
