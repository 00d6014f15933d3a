use std::time::Duration;

use async_trait::async_trait;

use super::StoreResult;

/// Abstraction over a TTL-capable key-value storage backend.
///
/// The cache delegates persistence and expiry to this collaborator so
/// the admission and eviction logic stays storage-agnostic and can be
/// unit-tested against an in-memory fake.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Gets the value for a key, if present and not expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Creates or overwrites a value and sets its TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> StoreResult<()>;

    /// Deletes a key. No-op if absent.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Returns true if the key is present and not expired.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Number of live keys in the store's addressed namespace.
    async fn count(&self) -> StoreResult<usize>;

    /// All live keys in the store's addressed namespace.
    ///
    /// Enumeration order is implementation-defined. Callers use this to
    /// pick an eviction candidate, never for ordering guarantees.
    async fn keys(&self) -> StoreResult<Vec<String>>;

    /// Resets a key's TTL without changing its value. No-op if absent.
    async fn expire(&self, key: &str, ttl: Duration) -> StoreResult<()>;
}
