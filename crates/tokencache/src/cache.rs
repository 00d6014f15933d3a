//! Capacity-bounded token cache.
//!
//! Maps opaque user identifiers to opaque auth tokens, delegating
//! persistence and expiry to a [`KeyValueStore`] backend. The cache
//! enforces a capacity bound by evicting a live entry before admitting
//! a new user once the store is full.

use std::time::Duration;

use tokio::sync::Mutex;

use tokencache_core::store::{
    validate_max_size, validate_token, validate_user_id, KeyValueStore, Result,
};

/// TTL applied on insert and re-applied on every cache hit.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Bounded, thread-safe cache mapping user identifiers to auth tokens.
///
/// A single mutex serializes all operations on one instance: each call
/// holds the lock for its full set of store round-trips, so the
/// capacity check and the eviction + insert that may follow are atomic
/// with respect to other calls on the same instance. Writes reaching
/// the same backend from other processes bypass this lock, which makes
/// the capacity bound best-effort across instances.
///
/// Capacity eviction removes an arbitrary live entry (the first key the
/// store enumerates). No insertion-order or recency guarantee is made.
pub struct TokenCache {
    max_size: usize,
    token_ttl: Duration,
    store: Mutex<Box<dyn KeyValueStore>>,
}

impl TokenCache {
    /// Creates a cache bounded to `max_size` live entries, using the
    /// default 3600 second token TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidMaxSize`] if `max_size` is zero.
    ///
    /// [`CacheError::InvalidMaxSize`]: tokencache_core::store::CacheError::InvalidMaxSize
    pub fn new(max_size: usize, store: Box<dyn KeyValueStore>) -> Result<Self> {
        Self::with_token_ttl(max_size, DEFAULT_TOKEN_TTL, store)
    }

    /// Creates a cache with an explicit token TTL.
    pub fn with_token_ttl(
        max_size: usize,
        token_ttl: Duration,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self> {
        validate_max_size(max_size)?;
        Ok(Self {
            max_size,
            token_ttl,
            store: Mutex::new(store),
        })
    }

    /// Maximum number of live entries this cache admits.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Retrieves the token for a user, refreshing its TTL on a hit.
    ///
    /// A miss is a normal outcome and returns `Ok(None)`. A hit returns
    /// the exact token last written for the user; the refresh never
    /// alters the stored value.
    pub async fn get_token(&self, user_id: &str) -> Result<Option<String>> {
        validate_user_id(user_id)?;

        let store = self.store.lock().await;
        match store.get(user_id).await? {
            Some(token) => {
                store.expire(user_id, self.token_ttl).await?;
                tracing::trace!(user_id, "token cache hit");
                Ok(Some(token))
            }
            None => {
                tracing::trace!(user_id, "token cache miss");
                Ok(None)
            }
        }
    }

    /// Stores a token for a user, evicting one live entry if the store
    /// is at capacity.
    ///
    /// Re-inserting an existing user replaces the entry in place and
    /// never counts toward capacity growth.
    pub async fn set_token(&self, user_id: &str, token: &str) -> Result<()> {
        validate_user_id(user_id)?;
        validate_token(token)?;

        let store = self.store.lock().await;
        if store.exists(user_id).await? {
            store.delete(user_id).await?;
        } else if store.count().await? >= self.max_size {
            // The eviction and the insert below are two store calls; a
            // store failure in between surfaces to the caller and may
            // leave the freed slot unused until the next set.
            if let Some(victim) = store.keys().await?.into_iter().next() {
                tracing::debug!(
                    victim = %victim,
                    max_size = self.max_size,
                    "evicting entry at capacity"
                );
                store.delete(&victim).await?;
            }
        }
        store.set(user_id, token, self.token_ttl).await?;
        Ok(())
    }

    /// Renders the current contents as a display string.
    ///
    /// Diagnostic only; cost is proportional to the number of entries.
    /// Keys are sorted so the output is stable across calls.
    pub async fn describe(&self) -> Result<String> {
        let store = self.store.lock().await;
        let mut keys = store.keys().await?;
        keys.sort();

        let mut out = String::from("{");
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push_str(": ");
            match store.get(key).await? {
                Some(value) => out.push_str(&value),
                // An entry can expire between enumeration and the read.
                None => out.push_str("<expired>"),
            }
        }
        out.push('}');
        Ok(out)
    }
}
