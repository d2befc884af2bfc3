// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the `SchoolHub` clients and the backend.
//! This module defines the roles, the authenticated principal and the
//! login wire payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Account roles recognised by the platform.
///
/// The wire representation is the upper-case name stored in the user
/// table (`"ADMIN"`, `"STAFF"`, `"STUDENT"`, `"PARENT"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Staff,
    Student,
    Parent,
}

impl Role {
    /// Stable wire name for the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
            Role::Student => "STUDENT",
            Role::Parent => "PARENT",
        }
    }

    /// Whether accounts with this role carry a role-specific linkage
    /// record (student/parent/staff row referencing the user).
    pub fn has_linkage(self) -> bool {
        !matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "STAFF" => Ok(Role::Staff),
            "STUDENT" => Ok(Role::Student),
            "PARENT" => Ok(Role::Parent),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// The resolved, authenticated identity for a request.
///
/// Constructed at login from the user record plus its role-specific
/// linkage row, then carried inside the session token. `linkage_id` is
/// `None` for admins and for accounts whose linkage row is missing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Id of the backing user record
    pub user_id: Uuid,
    /// Account role
    pub role: Role,
    /// Role-specific record id (student/parent/staff row)
    pub linkage_id: Option<Uuid>,
    /// Display name shown in the UI
    pub display_name: String,
}

/// Login request body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    /// Login identifier (unique email)
    pub email: String,
    /// Plaintext credential, verified against the stored hash
    pub password: String,
}

/// Public fields returned after a successful login.
///
/// The session token itself travels in an HttpOnly cookie, not in this
/// body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub role: Role,
    pub linkage_id: Option<Uuid>,
    pub display_name: String,
    /// Unix timestamp at which the issued session expires
    pub expires_at: i64,
}
