//! Bearer token persistence
//!
//! The stored token is the single source of truth for "is a session active".
//! There is no client-side expiry tracking; the server decides via 401/403.

use crate::core::storage::{KeyValueStore, StorageError};

/// Reads, writes and clears the session token under one storage key
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Current token. Blank values count as no session.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(&self.key)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(&self.key, token)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }

    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
