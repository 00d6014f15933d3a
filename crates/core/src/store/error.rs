use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the token cache.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backing store could not complete a call. Propagated to the
    /// caller unmodified; the cache performs no retries of its own.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("max_size must be greater than zero")]
    InvalidMaxSize,

    #[error("user_id must be non-empty and free of control characters")]
    InvalidUserId,

    #[error("token must be a non-empty string")]
    EmptyToken,
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
