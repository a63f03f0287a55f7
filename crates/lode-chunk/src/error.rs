use lode_types::ChunkRef;

/// Errors from chunk store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A chunk read back from the store hashed to a different ref than the
    /// one it was requested under (data corruption in the backend).
    #[error("hash mismatch for {requested}: stored bytes hash to {computed}")]
    HashMismatch {
        requested: ChunkRef,
        computed: ChunkRef,
    },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
