// crates/backend-lib/src/middleware/mod.rs

//! Middleware for the `SchoolHub` backend.

pub mod gate;

pub use gate::{request_gate, session_token, AuthPrincipal, SESSION_COOKIE};
