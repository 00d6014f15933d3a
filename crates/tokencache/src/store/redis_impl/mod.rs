//! Redis storage backend.
//!
//! Talks to a dedicated Redis logical database: the whole database is
//! the cache's namespace, so `count` maps to `DBSIZE` and enumeration
//! is a `SCAN` walk. Redis owns TTL expiry; the cache never tracks
//! deadlines itself.

mod error;
mod store;

pub use store::RedisStore;
