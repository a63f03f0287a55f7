use lode_chunk::Chunk;
use lode_types::{ChunkRef, Kind, Value};
use tracing::trace;

use crate::encode::encode;
use crate::error::{CodecError, CodecResult};

/// Compute the content-addressed ref of a value.
///
/// The value's kind is derived from its shape, the canonical encoding is
/// wrapped in a [`Chunk`], and the chunk's hash is returned. Deterministic
/// across runs and platforms: the same logical value always yields the same
/// ref. No side effects; the input is never mutated.
pub fn get_ref(value: &Value) -> CodecResult<ChunkRef> {
    let chunk = Chunk::from_bytes(encode(value)?);
    let r = chunk.chunk_ref();
    trace!(kind = %value.kind(), chunk_ref = %r, "computed reference");
    Ok(r)
}

/// Compute the content-addressed ref of a value under an explicitly declared
/// kind.
///
/// Fails with [`CodecError::KindMismatch`] when the declared kind disagrees
/// with the value's shape. The mismatch is reported, never coerced.
pub fn get_ref_with_kind(value: &Value, kind: Kind) -> CodecResult<ChunkRef> {
    let actual = value.kind();
    if actual != kind {
        return Err(CodecError::KindMismatch {
            declared: kind,
            actual,
        });
    }
    get_ref(value)
}
