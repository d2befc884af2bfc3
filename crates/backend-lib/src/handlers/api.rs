// ============================
// crates/backend-lib/src/handlers/api.rs
// ============================
//! Role-scoped API handlers.
//!
//! The `/api` namespace bypasses the page gate and self-authorizes:
//! each handler starts with the [`authorize`] predicate and, where the
//! resource belongs to a single account, an ownership check against the
//! principal's linkage id.
use axum::{extract::Path, Json};
use schoolhub_common::Role;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::authorize;
use crate::error::AppError;
use crate::middleware::AuthPrincipal;

/// `GET /api/admin/stats` — admin or staff.
pub async fn admin_stats(AuthPrincipal(principal): AuthPrincipal) -> Result<Json<Value>, AppError> {
    if !authorize(&principal, &[Role::Admin, Role::Staff]) {
        return Err(AppError::Forbidden);
    }

    Ok(Json(json!({
        "viewer": principal.display_name,
        "students": 0,
        "parents": 0,
        "staff": 0,
        "outstanding_payments": 0,
    })))
}

/// `GET /api/students/{student_id}/overview` — the student themselves.
///
/// Ownership: the path id must match the principal's own student
/// linkage record. A student whose linkage row is missing holds a
/// degraded session and owns nothing.
pub async fn student_overview(
    AuthPrincipal(principal): AuthPrincipal,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !authorize(&principal, &[Role::Student]) {
        return Err(AppError::Forbidden);
    }
    if principal.linkage_id != Some(student_id) {
        return Err(AppError::Forbidden);
    }

    Ok(Json(json!({
        "student_id": student_id,
        "display_name": principal.display_name,
        "attendance": [],
        "tests": [],
    })))
}

/// `GET /api/parents/{parent_id}/children` — the parent themselves, or
/// admin/staff.
pub async fn parent_children(
    AuthPrincipal(principal): AuthPrincipal,
    Path(parent_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    if !authorize(&principal, &[Role::Parent, Role::Admin, Role::Staff]) {
        return Err(AppError::Forbidden);
    }
    // Parents may only read their own guardian record; admin and staff
    // may read any.
    if principal.role == Role::Parent && principal.linkage_id != Some(parent_id) {
        return Err(AppError::Forbidden);
    }

    Ok(Json(json!({
        "parent_id": parent_id,
        "children": [],
    })))
}
