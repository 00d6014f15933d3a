use super::CacheError;

/// Validates a user identifier before it is used as a store key.
///
/// The identifier is opaque to the cache but doubles as the storage
/// key, so it must be non-empty and free of control characters.
pub fn validate_user_id(user_id: &str) -> Result<(), CacheError> {
    if user_id.is_empty() || user_id.chars().any(|c| c.is_control()) {
        return Err(CacheError::InvalidUserId);
    }
    Ok(())
}

/// Validates a token value before it is stored.
///
/// Tokens are opaque; the only requirement is that they are non-empty.
pub fn validate_token(token: &str) -> Result<(), CacheError> {
    if token.is_empty() {
        return Err(CacheError::EmptyToken);
    }
    Ok(())
}

/// Validates the capacity bound at cache construction.
pub fn validate_max_size(max_size: usize) -> Result<(), CacheError> {
    if max_size == 0 {
        return Err(CacheError::InvalidMaxSize);
    }
    Ok(())
}
