// ============================
// crates/backend-lib/src/handlers/pages.rs
// ============================
//! Page-route stand-ins.
//!
//! The dashboards themselves are rendered client-side; the backend only
//! needs routes for the gate to protect. These handlers answer 200 for
//! any page path the gate lets through.
use axum::{http::StatusCode, http::Uri, response::IntoResponse};

/// Public home page.
pub async fn home() -> impl IntoResponse {
    (StatusCode::OK, "SchoolHub")
}

/// Catch-all for gated page paths (dashboards, admin area and so on).
pub async fn shell(uri: Uri) -> impl IntoResponse {
    (StatusCode::OK, format!("SchoolHub: {}", uri.path()))
}

/// Sign-in page (the gate's login redirect target).
pub async fn sign_in() -> impl IntoResponse {
    (StatusCode::OK, "SchoolHub sign-in")
}
