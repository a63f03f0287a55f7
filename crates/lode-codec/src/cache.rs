use std::sync::OnceLock;

use lode_types::{ChunkRef, Kind, Value};
use tracing::debug;

use crate::error::CodecResult;
use crate::refs::{get_ref, get_ref_with_kind};

/// Return the cached ref if one exists, otherwise compute it.
///
/// When `existing` is `Some`, it is returned unchanged and the canonicalizer
/// is not invoked — callers must guarantee the holder's content has not
/// changed since the ref was cached (holders are immutable once published).
/// When `None`, the ref is computed via [`get_ref`]. Never fails on its own;
/// only a first-computation error propagates.
pub fn ensure_ref(existing: Option<ChunkRef>, value: &Value) -> CodecResult<ChunkRef> {
    match existing {
        Some(r) => Ok(r),
        None => get_ref(value),
    }
}

/// [`ensure_ref`] with an explicitly declared kind.
///
/// The kind check only runs on the computing path; an existing ref is
/// returned unchanged regardless.
pub fn ensure_ref_with_kind(
    existing: Option<ChunkRef>,
    value: &Value,
    kind: Kind,
) -> CodecResult<ChunkRef> {
    match existing {
        Some(r) => Ok(r),
        None => get_ref_with_kind(value, kind),
    }
}

/// Write-once ref cache for a value holder.
///
/// A holder is created with an empty slot; the first [`RefSlot::get_or_compute`]
/// fills it and every later call returns the cached ref without recomputation.
/// Racing initializers are tolerated rather than excluded: each computes the
/// (identical, deterministic) ref and the slot keeps the first write, so all
/// callers observe equal refs. Reads after initialization are lock-free.
#[derive(Debug, Default)]
pub struct RefSlot {
    slot: OnceLock<ChunkRef>,
}

impl RefSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// The cached ref, if one has been computed.
    pub fn get(&self) -> Option<ChunkRef> {
        self.slot.get().copied()
    }

    /// Return the cached ref, computing and storing it on first use.
    ///
    /// The caller-contract precondition of [`ensure_ref`] applies: once the
    /// slot is filled, the holder's value must not change.
    pub fn get_or_compute(&self, value: &Value) -> CodecResult<ChunkRef> {
        if let Some(r) = self.slot.get() {
            return Ok(*r);
        }
        let computed = get_ref(value)?;
        debug!(chunk_ref = %computed, "cached reference");
        // A racing thread may have filled the slot since the check above;
        // keep the first write. Both writes carry the same digest.
        Ok(*self.slot.get_or_init(|| computed))
    }
}
