//! Stored Entry Module
//!
//! Encoded value plus expiry metadata held by the in-memory backend.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{StoreError, StoreResult};

// == Stored Entry ==
/// Represents a single entry held by [`MemoryStore`](super::MemoryStore).
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// Encoded value bytes
    pub value: Vec<u8>,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry. A zero `ttl` means the entry never expires.
    ///
    /// Fails with [`StoreError::InvalidTtl`] when `ttl` runs past the
    /// representable clock range.
    pub fn new(value: Vec<u8>, ttl: Duration) -> StoreResult<Self> {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            let expires = Instant::now()
                .checked_add(ttl)
                .ok_or(StoreError::InvalidTtl(ttl))?;
            Some(expires)
        };
        Ok(Self { value, expires_at })
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration
    /// instant, so a fully elapsed TTL is never readable.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }
}
