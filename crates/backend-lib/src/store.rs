// ============================
// schoolhub-backend-lib/src/store.rs
// ============================
//! Credential store abstraction over the persistence service.
//!
//! The authorization core only ever needs two reads: a user record by
//! login identifier, and the role-specific linkage row for a verified
//! user. Both are single round-trips with no retry logic; a transient
//! failure surfaces as [`StoreError`] and is mapped to an internal
//! error, never to a bad-credentials outcome.
use async_trait::async_trait;
use schoolhub_common::Role;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Error from the persistence service.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// A user row as seen by the authorization core.
///
/// Created at account provisioning (out of scope here), read during
/// authentication, never mutated by this crate.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    /// Unique login identifier
    pub email: String,
    /// Opaque salted hash, only ever handed to the password verifier
    pub password_hash: String,
    pub display_name: String,
    pub role: Role,
}

/// Trait for credential store backends
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user record by its unique login identifier.
    async fn find_user_by_login(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Fetch the role-specific linkage record id (student/parent/staff
    /// row) for a user, if one exists.
    async fn find_linkage(&self, role: Role, user_id: Uuid) -> Result<Option<Uuid>, StoreError>;
}

/// In-memory implementation of the `CredentialStore` trait.
///
/// Stands in for the relational persistence service; used by the binary
/// in development and by the tests.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    linkages: Arc<RwLock<HashMap<(Role, Uuid), Uuid>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record, keyed by login identifier.
    pub async fn insert_user(&self, record: UserRecord) {
        let mut users = self.users.write().await;
        users.insert(record.email.clone(), record);
    }

    /// Associate a linkage record id with a (role, user) pair.
    pub async fn insert_linkage(&self, role: Role, user_id: Uuid, linkage_id: Uuid) {
        let mut linkages = self.linkages.write().await;
        linkages.insert((role, user_id), linkage_id);
    }
}

#[async_trait]
impl CredentialStore for InMemoryStore {
    async fn find_user_by_login(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn find_linkage(&self, role: Role, user_id: Uuid) -> Result<Option<Uuid>, StoreError> {
        let linkages = self.linkages.read().await;
        Ok(linkages.get(&(role, user_id)).copied())
    }
}
