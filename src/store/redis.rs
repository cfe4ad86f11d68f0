//! Redis Store Module
//!
//! Backend issuing SET/GET/KEYS/DEL against a Redis server through one
//! shared connection manager.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::info;

use super::KeyValueStore;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};

// == Redis Store ==
/// Redis backend.
///
/// The connection manager multiplexes commands over one connection and
/// reconnects on its own; clones of it share that connection.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    // == Constructors ==
    /// Wraps an already-established connection manager.
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Opens a connection to the Redis server at `url`.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Connected to Redis at {}", url);
        Ok(Self::new(conn))
    }

    /// Opens a connection using the configured URL.
    pub async fn from_config(config: &Config) -> StoreResult<Self> {
        Self::connect(&config.redis_url).await
    }
}

/// How a TTL is passed to SET.
#[derive(Debug, PartialEq, Eq)]
enum Expiry {
    Persist,
    Seconds(u64),
    Millis(u64),
}

impl Expiry {
    /// Whole seconds use EX; anything with a sub-second part needs PX,
    /// rounded up to the next millisecond so entries never expire early.
    fn from_ttl(ttl: Duration) -> StoreResult<Self> {
        if ttl.is_zero() {
            Ok(Expiry::Persist)
        } else if ttl.subsec_nanos() == 0 {
            Ok(Expiry::Seconds(ttl.as_secs()))
        } else {
            u64::try_from(ttl.as_nanos().div_ceil(1_000_000))
                .map(Expiry::Millis)
                .map_err(|_| StoreError::InvalidTtl(ttl))
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        match Expiry::from_ttl(ttl)? {
            Expiry::Persist => conn.set::<_, _, ()>(key, value).await?,
            Expiry::Seconds(secs) => conn.set_ex::<_, _, ()>(key, value, secs).await?,
            Expiry::Millis(ms) => conn.pset_ex::<_, _, ()>(key, value, ms).await?,
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<Vec<u8>>>(key)
            .await?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.keys::<_, Vec<String>>(pattern).await?)
    }

    async fn delete(&self, keys: &[String]) -> StoreResult<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.del::<_, u64>(keys).await?)
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}
