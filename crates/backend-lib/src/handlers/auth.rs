// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Login and logout endpoints.
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use schoolhub_common::{LoginRequest, LoginResponse};
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware::SESSION_COOKIE;
use crate::store::CredentialStore;
use crate::AppState;

/// `POST /auth/login`
///
/// Verifies credentials, issues a session token and sets it as an
/// HttpOnly cookie. Unknown user and wrong password produce the same
/// generic 401; the per-login rate limiter answers 429 once tripped.
pub async fn login<S>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AppError>
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    state.login_limiter.check(&req.email)?;

    let principal = match state.resolver.resolve(&req.email, &req.password).await {
        Ok(principal) => principal,
        Err(err) => {
            tracing::info!(login = %req.email, "login rejected");
            return Err(err.into());
        }
    };
    state.login_limiter.reset(&req.email);

    let issued_at = Utc::now();
    let token = state.tokens.issue_at(&principal, issued_at)?;
    let expires_at = issued_at.timestamp() + state.tokens.ttl_secs();

    tracing::info!(
        user = %principal.user_id,
        role = %principal.role,
        "login succeeded"
    );

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        state.tokens.ttl_secs()
    );
    let body = LoginResponse {
        user_id: principal.user_id,
        role: principal.role,
        linkage_id: principal.linkage_id,
        display_name: principal.display_name,
        expires_at,
    };

    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
}

/// `POST /auth/logout`
///
/// Expires the session cookie. There is no server-side revocation list;
/// sign-out is a client-side token discard.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(header::SET_COOKIE, cookie)], StatusCode::NO_CONTENT)
}
