//! Hash-addressed chunks for the Lode content-addressed store.
//!
//! A [`Chunk`] is an immutable byte buffer identified by the BLAKE3 hash of
//! its contents. Chunks are the unit of storage: the store never interprets
//! chunk contents, it is a pure key-value store keyed by content hash.
//!
//! # Design Rules
//!
//! 1. Chunks are immutable once constructed; the content hash is computed at
//!    most once and cached internally.
//! 2. Hashing is domain-separated ([`ChunkHasher`]) so chunk refs can never
//!    collide with hashes minted by other subsystems.
//! 3. Chunk equality is hash equality.
//! 4. Store writes are idempotent: the same content always maps to the same
//!    ref, so re-writing an existing chunk is a no-op.

pub mod chunk;
pub mod error;
pub mod hasher;
pub mod memory;
pub mod traits;

pub use chunk::Chunk;
pub use error::{StoreError, StoreResult};
pub use hasher::ChunkHasher;
pub use memory::InMemoryChunkStore;
pub use traits::ChunkStore;
