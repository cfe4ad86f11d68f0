//! Cache Client Module
//!
//! Adapter mapping each cache operation to one store command plus codec calls.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{codec, CacheClient};
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

// == Cache ==
/// Cache client backed by a [`KeyValueStore`].
///
/// Holds only the store handle; every call is an independent round trip.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Creates a cache over an already-configured store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Like [`CacheClient::hash`], but surfaces encoding failures.
    pub fn try_hash<T: Serialize>(&self, value: &T) -> Result<String> {
        let packed = codec::encode(value).map_err(CacheError::Serialization)?;
        Ok(codec::digest(&packed))
    }
}

#[async_trait]
impl<S: KeyValueStore> CacheClient for Cache<S> {
    fn hash<T: Serialize>(&self, value: &T) -> String {
        // Encoding failures hash as empty input to keep digests compatible
        let packed = codec::encode(value).unwrap_or_else(|e| {
            warn!("Hashing unencodable value as empty input: {}", e);
            Vec::new()
        });
        codec::digest(&packed)
    }

    async fn set<T>(&self, key: &str, value: &T, ttl: Duration) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let packed = codec::encode(value).map_err(CacheError::Serialization)?;
        debug!("SET {} ({} bytes, ttl={:?})", key, packed.len(), ttl);

        self.store
            .set(key, packed, ttl)
            .await
            .map_err(|e| CacheError::store("unable to set cache-data", e))
    }

    async fn get<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let data = self
            .store
            .get(key)
            .await
            .map_err(|e| CacheError::store("get failed", e))?;
        debug!("GET {} ({} bytes)", key, data.len());

        codec::decode(&data).map_err(|source| CacheError::Deserialization {
            key: key.to_string(),
            source,
        })
    }

    async fn get_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let keys = self
            .store
            .keys(pattern)
            .await
            .map_err(|e| CacheError::store("unable to get keys by pattern", e))?;
        debug!("KEYS {} matched {}", pattern, keys.len());
        Ok(keys)
    }

    async fn delete<K>(&self, keys: &[K]) -> Result<()>
    where
        K: AsRef<str> + Sync,
    {
        if keys.is_empty() {
            return Ok(());
        }

        let keys: Vec<String> = keys.iter().map(|k| k.as_ref().to_string()).collect();
        let removed = self
            .store
            .delete(&keys)
            .await
            .map_err(|e| CacheError::store("unable to delete keys", e))?;
        debug!("DEL {} keys, {} existed", keys.len(), removed);
        Ok(())
    }
}
