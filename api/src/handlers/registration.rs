//! Registration handler

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::auth::session_cookies;
use crate::domain::entities::RegistrationRequest;
use crate::error::AppError;
use crate::AppState;

/// Where a newly registered user lands
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Sign-up body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "firstName", alias = "first_name")]
    pub first_name: String,
    #[serde(rename = "lastName", alias = "last_name")]
    pub last_name: String,
}

impl From<RegisterRequest> for RegistrationRequest {
    fn from(req: RegisterRequest) -> Self {
        RegistrationRequest {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// POST /users
///
/// Register a candidate and sign them in: 302 to the dashboard with
/// `access_token` and `refresh_token` cookies.
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let registration = state.registration_service.register(req.into()).await?;

    let [access, refresh] = session_cookies(&registration.tokens, state.cookie_secure);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, DASHBOARD_PATH)],
        AppendHeaders([(header::SET_COOKIE, access), (header::SET_COOKIE, refresh)]),
    )
        .into_response())
}
