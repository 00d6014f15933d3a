use std::{env, time::Duration};

use tokencache_core::store::{validate_max_size, Result};

use crate::cache::TokenCache;

/// Cache configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of live entries (required, must be positive)
    pub max_size: usize,
    /// TTL applied to entries, in seconds (default: 3600)
    pub token_ttl_seconds: u64,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    pub redis_url: String,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOKEN_CACHE_MAX_SIZE` - Maximum live entries (required, positive)
    /// - `TOKEN_TTL_SECONDS` - Entry TTL in seconds (default: 3600)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::InvalidMaxSize` if `TOKEN_CACHE_MAX_SIZE`
    /// is missing, unparseable, or zero.
    pub fn from_env() -> Result<Self> {
        let max_size = env::var("TOKEN_CACHE_MAX_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        validate_max_size(max_size)?;

        Ok(Self {
            max_size,
            token_ttl_seconds: env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }

    /// Get the entry TTL as a Duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }

    /// Builds a cache over an in-memory store.
    #[cfg(feature = "memory")]
    pub fn build_in_memory(&self) -> Result<TokenCache> {
        let store = crate::store::MemoryStore::new();
        TokenCache::with_token_ttl(self.max_size, self.token_ttl(), Box::new(store))
    }

    /// Connects to Redis and builds a cache over it.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Store` if the connection cannot be
    /// established.
    #[cfg(feature = "redis")]
    pub async fn build_redis(&self) -> Result<TokenCache> {
        let store = crate::store::RedisStore::new(&self.redis_url).await?;
        TokenCache::with_token_ttl(self.max_size, self.token_ttl(), Box::new(store))
    }
}
