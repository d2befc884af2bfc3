// ============================
// schoolhub-backend-lib/src/auth/token.rs
// ============================
//! Session token issuing and parsing.
//!
//! The session token is a signed, time-bounded bearer credential
//! carrying the serialized [`Principal`]. The signature and expiry are
//! validated before any claim is trusted; every verification failure
//! (bad signature, malformed payload, expired) collapses into one
//! [`TokenInvalid`] value, which callers treat identically to "no
//! session".
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use schoolhub_common::{Principal, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Marker for any token that failed verification.
///
/// Deliberately carries no detail: downstream code must not
/// distinguish a forged token from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenInvalid;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: user record id
    sub: Uuid,
    /// Account role
    role: Role,
    /// Role-specific linkage record id, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linkage: Option<Uuid>,
    /// Display name
    name: String,
    /// Issued-at (unix timestamp, seconds)
    iat: i64,
    /// Expiry (unix timestamp, seconds)
    exp: i64,
}

/// Issues and parses signed session tokens with a fixed TTL.
///
/// The signing secret is provided once at construction and never
/// changes for the process lifetime.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Token lifetime in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Expiry timestamp for a token issued now.
    pub fn expires_at(&self) -> i64 {
        (Utc::now() + self.ttl).timestamp()
    }

    /// Serialize and sign a principal into a session token.
    pub fn issue(&self, principal: &Principal) -> Result<String, AppError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token with an explicit issued-at instant.
    ///
    /// Expiry is always `issued_at + TTL`; tests use this to mint
    /// already-expired tokens.
    pub fn issue_at(
        &self,
        principal: &Principal,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: principal.user_id,
            role: principal.role,
            linkage: principal.linkage_id,
            name: principal.display_name.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Verify a token and rehydrate the principal it carries.
    ///
    /// Signature and expiry are checked before any field is read; all
    /// failures collapse to [`TokenInvalid`].
    pub fn parse(&self, token: &str) -> Result<Principal, TokenInvalid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|_| TokenInvalid)?;
        let claims = data.claims;

        Ok(Principal {
            user_id: claims.sub,
            role: claims.role,
            linkage_id: claims.linkage,
            display_name: claims.name,
        })
    }
}
