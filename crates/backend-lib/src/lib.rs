// ============================
// schoolhub-backend-lib/src/lib.rs
// ============================
//! Session and authorization core for the `SchoolHub` backend.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod router;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{IdentityResolver, LoginRateLimiter, TokenIssuer};
use crate::config::Settings;
use crate::policy::AccessPolicy;
use crate::store::CredentialStore;

/// Application state shared across all handlers.
///
/// Everything in here is initialized once at process start and
/// read-only afterwards; the state is shared behind an `Arc`.
pub struct AppState<S> {
    /// Identity resolver over the credential store
    pub resolver: IdentityResolver<S>,
    /// Session token issuer/parser
    pub tokens: TokenIssuer,
    /// Frozen path-prefix access policy
    pub policy: AccessPolicy,
    /// Login attempt rate limiter
    pub login_limiter: LoginRateLimiter,
    /// Settings the above were built from
    pub settings: Arc<Settings>,
}

impl<S: CredentialStore + Clone> AppState<S> {
    /// Build the application state from a credential store and settings.
    pub fn new(store: S, settings: Settings) -> Self {
        let tokens = TokenIssuer::new(&settings.token_secret, settings.token_ttl_secs);
        let login_limiter = LoginRateLimiter::new(
            Duration::from_secs(settings.auth_rate_limit.window_secs),
            settings.auth_rate_limit.max_attempts,
        );

        Self {
            resolver: IdentityResolver::new(store),
            tokens,
            policy: AccessPolicy::default(),
            login_limiter,
            settings: Arc::new(settings),
        }
    }
}
