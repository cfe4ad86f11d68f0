//! Codec Module
//!
//! MessagePack encoding of cached values and MD5 content digests.

use md5::{Digest, Md5};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes a value as MessagePack, structs as maps keyed by field name.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(value)
}

/// Decodes MessagePack bytes into `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::from_slice(bytes)
}

/// Lowercase hex MD5 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}
