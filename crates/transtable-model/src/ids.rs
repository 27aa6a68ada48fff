#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::ModelError;

const FIELD_SEPARATOR: u8 = 0x1f;
const SYNTHETIC_NAMESPACE: &[u8] = b"transtable/row";

/// A stable row identifier.
///
/// Sixteen bytes taken from a SHA-256 digest, rendered as lowercase hex.
/// Ids are assigned once when a row is created and never recomputed from the
/// row's content, so edits to `key` do not move a row to a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId([u8; 16]);

impl RowId {
    pub fn from_first_16_bytes_of_sha256(digest: [u8; 32]) -> Self {
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    /// Content-derived id for a loaded entry.
    pub fn for_entry(section: &str, key: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(section.as_bytes());
        hasher.update([FIELD_SEPARATOR]);
        hasher.update(key.as_bytes());
        Self::from_first_16_bytes_of_sha256(hasher.finalize().into())
    }

    /// Synthetic id for the `seq`-th generated row of a store.
    pub fn synthetic(seq: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(SYNTHETIC_NAMESPACE);
        hasher.update([FIELD_SEPARATOR]);
        hasher.update(seq.to_be_bytes());
        Self::from_first_16_bytes_of_sha256(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for RowId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ModelError::InvalidRowId(s.to_string()))?;
        let out: [u8; 16] = bytes
            .try_into()
            .map_err(|_| ModelError::InvalidRowId(s.to_string()))?;
        Ok(Self(out))
    }
}

impl serde::Serialize for RowId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for RowId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
