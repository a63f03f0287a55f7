use lode_types::ChunkRef;

use crate::chunk::Chunk;
use crate::error::StoreResult;

/// Content-addressed chunk store.
///
/// This is the interface the reference core needs from a persistent store;
/// durability, garbage collection, and replication are the backend's own
/// business. All implementations must satisfy these invariants:
///
/// - Chunks are immutable once written; content-addressing guarantees that
///   the same bytes always map to the same ref.
/// - Writes are idempotent: re-putting an existing chunk is a no-op that
///   returns the same ref.
/// - Concurrent reads are always safe (chunks are immutable).
/// - Backend errors are propagated, never silently ignored.
pub trait ChunkStore: Send + Sync {
    /// Read a chunk by its content-addressed ref.
    ///
    /// Returns `Ok(None)` if the chunk does not exist. Returns `Err` on
    /// backend failure or data corruption.
    fn get(&self, r: &ChunkRef) -> StoreResult<Option<Chunk>>;

    /// Write a chunk and return its content-addressed ref.
    fn put(&self, chunk: &Chunk) -> StoreResult<ChunkRef>;

    /// Check whether a chunk exists in the store.
    fn has(&self, r: &ChunkRef) -> StoreResult<bool>;
}
