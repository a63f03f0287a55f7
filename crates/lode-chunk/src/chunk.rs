use std::fmt;
use std::sync::OnceLock;

use lode_types::ChunkRef;

use crate::hasher::ChunkHasher;

/// An immutable, hash-addressed byte buffer.
///
/// The content hash is a pure function of the bytes; it is computed on the
/// first call to [`Chunk::chunk_ref`] and cached in a write-once slot, so
/// repeated lookups are free and racing callers simply compute the same
/// digest. Equality is hash equality.
#[derive(Clone)]
pub struct Chunk {
    data: Vec<u8>,
    cached_ref: OnceLock<ChunkRef>,
}

impl Chunk {
    /// Wrap raw bytes in a chunk. Never fails.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data,
            cached_ref: OnceLock::new(),
        }
    }

    /// The chunk's payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The content-addressed ref of this chunk.
    ///
    /// Computed at most once; subsequent calls return the cached digest.
    pub fn chunk_ref(&self) -> ChunkRef {
        *self
            .cached_ref
            .get_or_init(|| ChunkHasher::CHUNK.hash(&self.data))
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.chunk_ref() == other.chunk_ref()
    }
}

impl Eq for Chunk {}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("ref", &self.chunk_ref().short_hex())
            .field("len", &self.data.len())
            .finish()
    }
}
