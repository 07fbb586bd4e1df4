//! Durable session persistence seam.
//!
//! DESIGN
//! ======
//! The browser original wrote straight to `localStorage`; here the store
//! writes through a `SessionStorage` trait so embedders can back it with
//! whatever the host offers. All three keys are written together on login
//! and cleared together on any transition to anonymous — partial session
//! residue is never left behind.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::state::User;

/// Serialized identity record.
pub const USER_KEY: &str = "user";
/// Opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Epoch millis of the last authentication.
pub const AUTH_TIMESTAMP_KEY: &str = "auth_timestamp";

/// Durable key/value storage for session data.
pub trait SessionStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory storage for tests and short-lived processes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage pre-seeded with a bearer token (CLI `--token` flow).
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let mut storage = Self::new();
        storage.set(AUTH_TOKEN_KEY, token);
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Write all session keys for an authenticated user.
pub fn persist_session(storage: &mut dyn SessionStorage, user: &User, token: Option<&str>) {
    match serde_json::to_string(user) {
        Ok(json) => storage.set(USER_KEY, &json),
        Err(error) => tracing::warn!(error = %error, "failed to serialize user for storage"),
    }

    match token {
        Some(token) => storage.set(AUTH_TOKEN_KEY, token),
        None => storage.remove(AUTH_TOKEN_KEY),
    }

    storage.set(AUTH_TIMESTAMP_KEY, &epoch_millis().to_string());
}

/// Clear every session key.
pub fn clear_session(storage: &mut dyn SessionStorage) {
    storage.remove(USER_KEY);
    storage.remove(AUTH_TOKEN_KEY);
    storage.remove(AUTH_TIMESTAMP_KEY);
}

/// Stored bearer token, if any.
#[must_use]
pub fn stored_token(storage: &dyn SessionStorage) -> Option<String> {
    storage.get(AUTH_TOKEN_KEY)
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
