//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Failure reported by a backing key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key is absent (never set, deleted or expired)
    #[error("key not found: {0}")]
    NotFound(String),

    /// TTL cannot be represented as an expiry time
    #[error("invalid expire time: {0:?}")]
    InvalidTtl(std::time::Duration),

    /// Key pattern could not be compiled
    #[error("invalid key pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Redis command or connection failure
    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be encoded with MessagePack
    #[error("unable to marshal data with MessagePack: {0}")]
    Serialization(#[source] rmp_serde::encode::Error),

    /// Stored bytes could not be decoded into the requested type
    #[error("unable to unmarshal data for key '{key}': {source}")]
    Deserialization {
        key: String,
        #[source]
        source: rmp_serde::decode::Error,
    },

    /// Backing store failed
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CacheError {
    pub(crate) fn store(context: &'static str, source: StoreError) -> Self {
        CacheError::Store { context, source }
    }

    /// Returns true when the error is a store-level "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CacheError::Store {
                source: StoreError::NotFound(_),
                ..
            }
        )
    }
}

// == Result Type Aliases ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Result type returned by store backends.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
