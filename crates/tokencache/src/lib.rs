//! Bounded, thread-safe cache for short-lived authentication tokens.
//!
//! This crate provides:
//! - [`TokenCache`]: a capacity-bounded token cache with TTL refresh on
//!   hit and eviction under capacity pressure
//! - Storage backends behind feature flags (`memory` by default,
//!   `redis` for a networked backend)
//! - [`CacheConfig`] for environment-driven wiring

mod cache;
mod config;
pub mod store;

pub use cache::{TokenCache, DEFAULT_TOKEN_TTL};
pub use config::CacheConfig;
pub use tokencache_core::store::{CacheError, KeyValueStore, Result, StoreError, StoreResult};
