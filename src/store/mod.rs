//! In-memory user store
//!
//! Registered identities live for the lifetime of the process, keyed by
//! username. Uniqueness is enforced inside `insert_if_absent`: the write
//! lock spans both the lookup and the insert, so two concurrent
//! registrations for the same username can never both succeed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Identity;

/// Returned when the username is already taken
#[derive(Error, Debug, PartialEq, Eq)]
#[error("username already registered")]
pub struct DuplicateUser;

/// Process-lifetime collection of registered identities
#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, Identity>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match lookup, case-sensitive
    pub async fn find(&self, username: &str) -> Option<Identity> {
        self.users.read().await.get(username).cloned()
    }

    /// Insert the identity unless its username is already taken
    pub async fn insert_if_absent(&self, identity: Identity) -> Result<(), DuplicateUser> {
        let mut users = self.users.write().await;
        match users.entry(identity.username.clone()) {
            Entry::Occupied(_) => Err(DuplicateUser),
            Entry::Vacant(slot) => {
                slot.insert(identity);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn identity(username: &str) -> Identity {
        Identity {
            name: "Jane Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            username: username.to_string(),
            password_hash: "$2b$10$fakehash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let store = UserStore::new();
        assert!(store.find("jane@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = UserStore::new();
        store
            .insert_if_absent(identity("jane@example.com"))
            .await
            .unwrap();

        let found = store.find("jane@example.com").await.unwrap();
        assert_eq!(found.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let store = UserStore::new();
        store
            .insert_if_absent(identity("jane@example.com"))
            .await
            .unwrap();

        let result = store.insert_if_absent(identity("jane@example.com")).await;
        assert_eq!(result, Err(DuplicateUser));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let store = UserStore::new();
        store
            .insert_if_absent(identity("jane@example.com"))
            .await
            .unwrap();

        assert!(store.find("Jane@example.com").await.is_none());
    }
}
