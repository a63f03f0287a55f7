use lode_types::ChunkRef;

/// Domain-separated BLAKE3 hasher.
///
/// The domain tag is prepended to every hash computation, so two subsystems
/// hashing identical bytes under different domains produce different refs.
/// All chunk refs in Lode are minted under [`ChunkHasher::CHUNK`].
pub struct ChunkHasher {
    domain: &'static str,
}

impl ChunkHasher {
    /// Hasher for canonical chunk payloads.
    pub const CHUNK: Self = Self {
        domain: "lode-chunk-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> ChunkRef {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        ChunkRef::from_digest(*hasher.finalize().as_bytes())
    }

    /// Verify that data hashes to the expected ref.
    pub fn verify(&self, data: &[u8], expected: &ChunkRef) -> bool {
        self.hash(data) == *expected
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let data = b"same bytes in, same ref out";
        assert_eq!(ChunkHasher::CHUNK.hash(data), ChunkHasher::CHUNK.hash(data));
    }

    #[test]
    fn different_data_produces_different_refs() {
        assert_ne!(
            ChunkHasher::CHUNK.hash(b"one"),
            ChunkHasher::CHUNK.hash(b"two")
        );
    }

    #[test]
    fn different_domains_produce_different_refs() {
        let other = ChunkHasher::new("lode-test-v1");
        let data = b"same content";
        assert_ne!(ChunkHasher::CHUNK.hash(data), other.hash(data));
    }

    #[test]
    fn verify_correct_and_tampered_data() {
        let r = ChunkHasher::CHUNK.hash(b"original");
        assert!(ChunkHasher::CHUNK.verify(b"original", &r));
        assert!(!ChunkHasher::CHUNK.verify(b"tampered", &r));
    }

    #[test]
    fn domain_is_exposed() {
        assert_eq!(ChunkHasher::CHUNK.domain(), "lode-chunk-v1");
    }
}
