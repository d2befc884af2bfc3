// crates/backend-lib/src/handlers/mod.rs

//! HTTP handlers, grouped by surface.

pub mod api;
pub mod auth;
pub mod pages;
