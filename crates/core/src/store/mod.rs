mod error;
mod traits;
mod validation;

pub use error::{CacheError, Result, StoreError, StoreResult};
pub use traits::KeyValueStore;
pub use validation::{validate_max_size, validate_token, validate_user_id};
