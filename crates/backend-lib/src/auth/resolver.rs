// ============================
// schoolhub-backend-lib/src/auth/resolver.rs
// ============================
//! Identity resolution: credentials in, principal out.
use schoolhub_common::Principal;
use thiserror::Error;

use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::store::CredentialStore;

/// Authentication failure.
///
/// Unknown login and wrong password both map to `InvalidCredentials`;
/// there is exactly one failure value for the whole credential check so
/// nothing about which step failed leaks to the caller. Persistence
/// failures are a separate variant and surface as an internal error,
/// not as bad credentials.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("credential store failure")]
    Internal,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::InvalidCredentials,
            AuthError::Internal => AppError::Internal("credential store failure".to_string()),
        }
    }
}

/// Resolves a login identifier plus plaintext credential into a
/// [`Principal`], reading through the credential store.
#[derive(Clone)]
pub struct IdentityResolver<S> {
    store: S,
}

impl<S: CredentialStore> IdentityResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Verify credentials and build the principal for this user.
    ///
    /// A missing linkage record for a role that expects one yields a
    /// principal with `linkage_id = None` rather than a failure: the
    /// account stays able to hold a basic session even when its
    /// role-specific row is absent.
    pub async fn resolve(&self, login: &str, plaintext: &str) -> Result<Principal, AuthError> {
        let user = self
            .store
            .find_user_by_login(login)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed");
                AuthError::Internal
            })?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, plaintext) {
            return Err(AuthError::InvalidCredentials);
        }

        let linkage_id = if user.role.has_linkage() {
            let linkage = self
                .store
                .find_linkage(user.role, user.id)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "linkage lookup failed");
                    AuthError::Internal
                })?;
            if linkage.is_none() {
                tracing::warn!(
                    user = %user.id,
                    role = %user.role,
                    "no linkage record for role, issuing degraded session"
                );
            }
            linkage
        } else {
            None
        };

        Ok(Principal {
            user_id: user.id,
            role: user.role,
            linkage_id,
            display_name: user.display_name,
        })
    }
}
