//! Serialization helpers for binary payloads.
//!
//! Provides serde serialization for `Vec<u8>` as standard base64 text, which is
//! how both backends carry inline bytes on the wire.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serializer};

/// Encode bytes as standard base64.
pub fn encode_bytes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Serialize bytes as base64 text.
pub fn serialize<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode_bytes(data))
}

/// Deserialize bytes from base64 text.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    STANDARD.decode(text.as_bytes()).map_err(serde::de::Error::custom)
}
