//! Cache Module
//!
//! Typed cache facade over a [`KeyValueStore`](crate::store::KeyValueStore).

mod client;
pub mod codec;

#[cfg(test)]
mod property_tests;

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

// Re-export public types
pub use client::Cache;

// == Cache Client ==
/// Operations every cache client supports.
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Hex MD5 digest of the MessagePack encoding of `value`.
    ///
    /// Never fails. A value that cannot be encoded hashes like empty input.
    fn hash<T: Serialize>(&self, value: &T) -> String;

    /// Stores `value` under `key`. A zero `ttl` means no expiry.
    async fn set<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<()>
    where
        T: Serialize + Sync;

    /// Loads and decodes the value stored under `key`.
    async fn get<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Loads the value under `key` into `target`, leaving it untouched on error.
    async fn get_into<T>(&self, key: &str, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned + Send,
    {
        *target = self.get(key).await?;
        Ok(())
    }

    /// Keys matching the glob `pattern`, in store-defined order.
    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Deletes all `keys`. Missing keys are ignored; an empty slice is a no-op.
    async fn delete<K>(&self, keys: &[K]) -> Result<()>
    where
        K: AsRef<str> + Sync;
}
