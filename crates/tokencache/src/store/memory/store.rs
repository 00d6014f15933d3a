//! In-memory TTL key-value store.
//!
//! Single-process stand-in for the networked backend, used as the
//! default store and as the unit-test double for the cache. Expiry is
//! lazy: expired entries are purged whenever the store is touched, so
//! counts and enumeration only ever see live keys.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use tokencache_core::store::{KeyValueStore, StoreResult};

/// A stored value with its expiry deadline.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory TTL key-value store.
///
/// Clones share state, so a test can hold one handle while the cache
/// owns another and observe the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops expired entries so only live keys remain visible.
    async fn purge_expired(&self) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.purge_expired().await;
        let entries = self.entries.read().await;
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), Entry::new(value.to_string(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        self.purge_expired().await;
        let entries = self.entries.read().await;
        Ok(entries.contains_key(key))
    }

    async fn count(&self) -> StoreResult<usize> {
        self.purge_expired().await;
        let entries = self.entries.read().await;
        Ok(entries.len())
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        self.purge_expired().await;
        let entries = self.entries.read().await;
        Ok(entries.keys().cloned().collect())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()> {
        self.purge_expired().await;
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Instant::now() + ttl;
        }
        Ok(())
    }
}
