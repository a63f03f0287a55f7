use std::collections::HashMap;
use std::sync::RwLock;

use lode_types::ChunkRef;

use crate::chunk::Chunk;
use crate::error::{StoreError, StoreResult};
use crate::traits::ChunkStore;

/// In-memory, HashMap-based chunk store.
///
/// Intended for tests and embedding. Chunk payloads are held in memory behind
/// a `RwLock` for safe concurrent access and cloned on read.
pub struct InMemoryChunkStore {
    chunks: RwLock<HashMap<ChunkRef, Vec<u8>>>,
}

impl InMemoryChunkStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            chunks: RwLock::new(HashMap::new()),
        }
    }

    /// Number of chunks currently stored.
    pub fn len(&self) -> usize {
        self.chunks.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.chunks.read().expect("lock poisoned").is_empty()
    }

    /// Total payload bytes across all stored chunks.
    pub fn total_bytes(&self) -> u64 {
        self.chunks
            .read()
            .expect("lock poisoned")
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }
}

impl Default for InMemoryChunkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkStore for InMemoryChunkStore {
    fn get(&self, r: &ChunkRef) -> StoreResult<Option<Chunk>> {
        let map = self.chunks.read().expect("lock poisoned");
        match map.get(r) {
            None => Ok(None),
            Some(data) => {
                let chunk = Chunk::from_bytes(data.clone());
                // Verify on read so backend corruption surfaces as an error
                // instead of a wrong-content chunk.
                let computed = chunk.chunk_ref();
                if computed != *r {
                    return Err(StoreError::HashMismatch {
                        requested: *r,
                        computed,
                    });
                }
                Ok(Some(chunk))
            }
        }
    }

    fn put(&self, chunk: &Chunk) -> StoreResult<ChunkRef> {
        let r = chunk.chunk_ref();
        let mut map = self.chunks.write().expect("lock poisoned");
        // Idempotent: the same ref always maps to the same content.
        map.entry(r).or_insert_with(|| chunk.data().to_vec());
        Ok(r)
    }

    fn has(&self, r: &ChunkRef) -> StoreResult<bool> {
        let map = self.chunks.read().expect("lock poisoned");
        Ok(map.contains_key(r))
    }
}

impl std::fmt::Debug for InMemoryChunkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryChunkStore")
            .field("chunk_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::ChunkHasher;

    #[test]
    fn put_and_get() {
        let store = InMemoryChunkStore::new();
        let chunk = Chunk::from_bytes(b"hello world".to_vec());
        let r = store.put(&chunk).unwrap();

        let read_back = store.get(&r).unwrap().expect("should exist");
        assert_eq!(read_back, chunk);
        assert_eq!(read_back.data(), b"hello world");
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryChunkStore::new();
        let r = ChunkHasher::CHUNK.hash(b"never stored");
        assert!(store.get(&r).unwrap().is_none());
    }

    #[test]
    fn same_content_deduplicates() {
        let store = InMemoryChunkStore::new();
        let r1 = store.put(&Chunk::from_bytes(b"dup".to_vec())).unwrap();
        let r2 = store.put(&Chunk::from_bytes(b"dup".to_vec())).unwrap();
        assert_eq!(r1, r2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_stored_separately() {
        let store = InMemoryChunkStore::new();
        let r1 = store.put(&Chunk::from_bytes(b"aaa".to_vec())).unwrap();
        let r2 = store.put(&Chunk::from_bytes(b"bbb".to_vec())).unwrap();
        assert_ne!(r1, r2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn has_reports_presence() {
        let store = InMemoryChunkStore::new();
        let r = store.put(&Chunk::from_bytes(b"present".to_vec())).unwrap();
        assert!(store.has(&r).unwrap());
        assert!(!store.has(&ChunkHasher::CHUNK.hash(b"absent")).unwrap());
    }

    #[test]
    fn corruption_surfaces_as_hash_mismatch() {
        let store = InMemoryChunkStore::new();
        let r = store.put(&Chunk::from_bytes(b"good".to_vec())).unwrap();

        // Corrupt the stored payload behind the store's back.
        store
            .chunks
            .write()
            .unwrap()
            .insert(r, b"evil".to_vec());

        let err = store.get(&r).unwrap_err();
        assert!(matches!(err, StoreError::HashMismatch { .. }));
    }

    #[test]
    fn len_is_empty_total_bytes() {
        let store = InMemoryChunkStore::new();
        assert!(store.is_empty());
        store.put(&Chunk::from_bytes(b"12345".to_vec())).unwrap();
        store.put(&Chunk::from_bytes(b"123456789".to_vec())).unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryChunkStore::new());
        let r = store.put(&Chunk::from_bytes(b"shared".to_vec())).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let chunk = store.get(&r).unwrap().expect("should exist");
                    assert_eq!(chunk.chunk_ref(), r);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryChunkStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryChunkStore::new();
        store.put(&Chunk::from_bytes(b"x".to_vec())).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryChunkStore"));
        assert!(debug.contains("chunk_count"));
    }
}
