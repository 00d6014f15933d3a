//! Functional core for the tokencache project.
//!
//! Pure types and contracts only: the [`store::KeyValueStore`] trait,
//! the error taxonomy, and argument validation. Backend implementations
//! and the cache itself live in the `tokencache` crate.

pub mod store;
