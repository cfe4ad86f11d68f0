//! kv_cache - A typed cache facade over a key-value store
//!
//! Values are encoded with MessagePack and stored through a pluggable
//! backend: Redis in production, an in-memory store for tests.
//!
//! ```ignore
//! use std::time::Duration;
//! use kv_cache::{Cache, CacheClient, Config, RedisStore};
//!
//! let store = RedisStore::from_config(&Config::from_env()).await?;
//! let cache = Cache::new(store);
//! cache.set("user:1", &user, Duration::from_secs(10)).await?;
//! let user: User = cache.get("user:1").await?;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tasks;

pub use cache::{Cache, CacheClient};
pub use config::Config;
pub use error::{CacheError, Result, StoreError};
pub use logging::init_tracing;
pub use store::{KeyValueStore, MemoryStore, RedisStore};
pub use tasks::spawn_cleanup_task;
