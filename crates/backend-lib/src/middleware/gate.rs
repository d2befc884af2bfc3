// ============================
// schoolhub-backend-lib/src/middleware/gate.rs
// ============================
//! The request gate: pre-handler enforcement of the access policy.
//!
//! Runs before every route. Extracts the session token from the cookie
//! or the `Authorization` header, parses it (an invalid token counts as
//! no session at all), asks the [`AccessPolicy`] for a decision and
//! either forwards the request with the principal attached or answers
//! with a redirect.
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use schoolhub_common::Principal;
use std::sync::Arc;

use crate::error::AppError;
use crate::policy::GateDecision;
use crate::store::CredentialStore;
use crate::AppState;

/// Name of the HttpOnly session cookie.
pub const SESSION_COOKIE: &str = "schoolhub_session";

/// Pull the bearer token out of a request: `Authorization: Bearer`
/// first, session cookie second.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| value.to_string())
            })
        })
}

/// Gate middleware applied ahead of every handler.
pub async fn request_gate<S>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let path = request.uri().path().to_string();

    // An expired or forged token is identical to carrying none.
    let principal = session_token(request.headers())
        .and_then(|token| state.tokens.parse(&token).ok());

    match state.policy.decide(&path, principal.as_ref()) {
        GateDecision::Allow => {
            if let Some(principal) = principal {
                request.extensions_mut().insert(principal);
            }
            next.run(request).await
        }
        GateDecision::RedirectToLogin { callback } => {
            tracing::debug!(path = %path, "unauthenticated, redirecting to sign-in");
            let location = format!(
                "{}?callbackUrl={}",
                state.policy.sign_in_path(),
                urlencoding::encode(&callback)
            );
            Redirect::to(&location).into_response()
        }
        GateDecision::RedirectHome => {
            tracing::debug!(path = %path, "role denied, redirecting home");
            Redirect::to(state.policy.home_path()).into_response()
        }
    }
}

/// Extractor handing the gate-attached principal to API handlers.
///
/// Rejects with 401 when the request carried no valid session token.
pub struct AuthPrincipal(pub Principal);

impl<S> FromRequestParts<S> for AuthPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthPrincipal)
            .ok_or(AppError::Unauthenticated)
    }
}
