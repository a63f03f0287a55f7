use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Length in bytes of a chunk digest (BLAKE3).
pub const DIGEST_LEN: usize = 32;

/// Content-addressed reference to a chunk.
///
/// A `ChunkRef` wraps the BLAKE3 digest of a chunk's canonical bytes.
/// Identical content always produces the same `ChunkRef`, so refs are value
/// types: equal digests mean interchangeable identity. Ordering is the
/// lexicographic order of the digest bytes, which makes refs usable as map
/// keys with a stable iteration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkRef([u8; DIGEST_LEN]);

impl ChunkRef {
    /// Wrap a pre-computed digest.
    pub const fn from_digest(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }

    /// Wrap a digest supplied as a slice.
    ///
    /// Fails with [`FormatError::InvalidLength`] if the slice is not exactly
    /// [`DIGEST_LEN`] bytes.
    pub fn from_digest_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() != DIGEST_LEN {
            return Err(FormatError::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(bytes);
        Ok(Self(digest))
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The stable textual form: 64 characters of lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex form (first 8 characters), for logs and debug output.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse the textual form back into a reference.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        let bytes = hex::decode(s).map_err(|e| FormatError::InvalidHex(e.to_string()))?;
        Self::from_digest_bytes(&bytes)
    }
}

impl fmt::Debug for ChunkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkRef({})", self.short_hex())
    }
}

impl fmt::Display for ChunkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for ChunkRef {
    fn from(digest: [u8; DIGEST_LEN]) -> Self {
        Self(digest)
    }
}

impl From<ChunkRef> for [u8; DIGEST_LEN] {
    fn from(r: ChunkRef) -> Self {
        r.0
    }
}
