//! Store Module
//!
//! Backing key-value stores the cache facade issues commands against.

mod entry;
mod memory;
mod redis;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreResult;

// Re-export public types
pub(crate) use entry::StoredEntry;
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

// == Key Value Store ==
/// Minimal command set a backing store must support.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// SET `key` to `value`. A zero `ttl` stores the entry without expiry.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> StoreResult<()>;

    /// GET the bytes stored under `key`.
    ///
    /// Fails with [`StoreError::NotFound`](crate::error::StoreError::NotFound)
    /// when the key is absent or expired.
    async fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// KEYS matching a glob `pattern`, in store-defined order.
    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>>;

    /// DEL every key in `keys`, returning how many existed.
    async fn delete(&self, keys: &[String]) -> StoreResult<u64>;
}

#[async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> StoreResult<()> {
        (**self).set(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        (**self).get(key).await
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        (**self).keys(pattern).await
    }

    async fn delete(&self, keys: &[String]) -> StoreResult<u64> {
        (**self).delete(keys).await
    }
}
