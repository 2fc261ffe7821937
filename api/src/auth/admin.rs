//! Admin guard middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use super::cookies::{bearer_token, cookie_value, ACCESS_TOKEN_COOKIE};
use crate::error::AppError;
use crate::AppState;

/// Admin authentication middleware
///
/// Reads the access token from the `access_token` cookie, falling back to a
/// bearer header, and injects the admin `User` into request extensions.
/// No or invalid token: 401. Signed-in non-admin: 403.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();
    let token = cookie_value(headers, ACCESS_TOKEN_COOKIE)
        .or_else(|| bearer_token(headers))
        .ok_or(AppError::Unauthorized)?;

    let email = state.tokens.verify_access(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        AppError::Unauthorized
    })?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !user.role.is_admin() {
        tracing::warn!(user_id = %user.id, path = %request.uri().path(), "Non-admin on admin route");
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
