//! Storage backend implementations.
//!
//! Concrete implementations of the [`KeyValueStore`] trait defined in
//! `tokencache_core::store`, selected via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): in-memory store with lazy TTL expiry. Also the
//!   unit-test double for the cache.
//! - `redis`: networked store over a dedicated Redis logical database.
//!
//! [`KeyValueStore`]: tokencache_core::store::KeyValueStore

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

#[cfg(feature = "redis")]
pub use redis_impl::RedisStore;
