//! Memory Store Module
//!
//! In-process backend emulating the store semantics the cache facade relies
//! on: TTL expiry, glob key listing and bulk delete.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use globset::{GlobBuilder, GlobMatcher};
use tokio::sync::RwLock;

use super::{KeyValueStore, StoredEntry};
use crate::error::{StoreError, StoreResult};

// == Memory Store ==
/// Shared in-memory key-value store.
///
/// Cloning is cheap and every clone sees the same entries.
///
/// Key patterns follow Redis glob rules (`*`, `?`, `[...]`, `\` escapes,
/// braces literal). One difference remains: a malformed pattern such as an
/// unclosed `[` class fails with [`StoreError::InvalidPattern`], where Redis
/// returns no keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, StoredEntry>>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until purged.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Escapes `{` and `}` outside character classes so they match literally
/// instead of starting an alternation.
fn escape_braces(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' | '}' if !in_class => escaped.push('\\'),
            _ => {}
        }
        escaped.push(c);
    }
    escaped
}

/// Compiles a store key pattern into a matcher.
///
/// `*` crosses `:` and `/` alike, and `\` escapes the next character.
fn compile_pattern(pattern: &str) -> StoreResult<GlobMatcher> {
    GlobBuilder::new(&escape_braces(pattern))
        .literal_separator(false)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| StoreError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoredEntry::new(value, ttl)?);
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        // Write lock so an expired entry can be dropped on the spot
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
            }
            None => {}
        }
        Err(StoreError::NotFound(key.to_string()))
    }

    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let matcher = compile_pattern(pattern)?;
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(key, entry)| !entry.is_expired() && matcher.is_match(key.as_str()))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn delete(&self, keys: &[String]) -> StoreResult<u64> {
        let mut entries = self.entries.write().await;
        let mut removed = 0;
        for key in keys {
            if let Some(entry) = entries.remove(key) {
                if !entry.is_expired() {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }
}
