// ============================
// schoolhub-backend-lib/src/router.rs
// ============================
//! Router assembly.
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::request_gate;
use crate::store::CredentialStore;
use crate::AppState;

/// Build the full application router with the request gate layered
/// ahead of every route.
pub fn create_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/auth/sign-in", get(handlers::pages::sign_in))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/api/admin/stats", get(handlers::api::admin_stats))
        .route(
            "/api/students/{student_id}/overview",
            get(handlers::api::student_overview),
        )
        .route(
            "/api/parents/{parent_id}/children",
            get(handlers::api::parent_children),
        )
        // Every other path is a gated page route.
        .fallback(handlers::pages::shell)
        .layer(from_fn_with_state(state.clone(), request_gate::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
