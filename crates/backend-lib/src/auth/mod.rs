// ============================
// schoolhub-backend-lib/src/auth/mod.rs
// ============================
//! Authentication and authorization primitives.

pub mod password;
pub mod rate_limit;
pub mod resolver;
pub mod token;

pub use password::{
    hash_password, hash_password_secure, validate_password_strength, verify_password,
    PasswordRequirements, MIN_PASSWORD_LENGTH,
};
pub use rate_limit::LoginRateLimiter;
pub use resolver::{AuthError, IdentityResolver};
pub use token::{TokenInvalid, TokenIssuer};

use schoolhub_common::{Principal, Role};

/// Route authorization predicate: role membership check invoked at the
/// top of each sensitive handler.
///
/// Returns `false` when the principal's role is not in the allowed set;
/// the handler must short-circuit with a forbidden result before
/// touching any business data. Ownership checks beyond the role live
/// next to each handler because the ownership relation differs per
/// resource.
pub fn authorize(principal: &Principal, allowed: &[Role]) -> bool {
    allowed.contains(&principal.role)
}
