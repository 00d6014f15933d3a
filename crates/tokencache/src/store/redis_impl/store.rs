//! Redis store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use tokencache_core::store::{KeyValueStore, StoreResult};

use super::error::map_redis_error;

/// Redis storage backend using a connection manager for pooling.
///
/// The connection URL should address a logical database dedicated to
/// this cache; `count` and `keys` cover the whole database.
pub struct RedisStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisStore {
    /// Creates a new Redis store connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL, including the logical database
    ///   the cache owns (e.g., "redis://localhost:6379/2")
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the connection cannot be
    /// established.
    pub async fn new(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let present: bool = conn.exists(key).await.map_err(map_redis_error)?;
        Ok(present)
    }

    async fn count(&self) -> StoreResult<usize> {
        let mut conn = self.conn.clone();
        let size: usize = redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(size)
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .query_async(&mut conn)
                .await
                .map_err(map_redis_error)?;
            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }
        Ok(keys)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1) as i64;
        conn.expire::<_, ()>(key, seconds)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}
