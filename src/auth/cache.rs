//! Expiring key/value store for bearer tokens.
//!
//! In practice only [`TOKEN_CACHE_KEY`] is ever populated, but the store is
//! a general map. Expiry uses `tokio::time::Instant`, so paused-clock tests
//! can step across TTL boundaries deterministically.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Key under which the session token lives.
pub const TOKEN_CACHE_KEY: &str = "token";

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Thread-safe expiring map. Each `set` replaces the whole entry under the
/// write lock, so readers never observe a partial value.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TokenCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key` if it has not expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key` for `ttl`. A zero TTL removes the key
    /// instead, since the value would be unreadable anyway.
    pub fn set(&self, key: &str, value: impl Into<String>, ttl: Duration) {
        if ttl.is_zero() {
            self.entries.write().remove(key);
            return;
        }

        let entry = CacheEntry {
            value: value.into(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().insert(key.to_string(), entry);
    }

    /// Removes `key`, returning whether a live entry was dropped.
    pub fn remove(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .write()
            .remove(key)
            .map(|entry| entry.is_live(now))
            .unwrap_or(false)
    }

    /// Time left before `key` expires.
    pub fn time_to_live(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .read()
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.expires_at - now)
    }

    /// Drops expired entries and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    /// Returns true when no live entry exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
