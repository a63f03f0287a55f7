//! Canonical encoding and reference computation for the Lode
//! content-addressed store.
//!
//! A value's chunk payload is its canonical encoding: the ASCII marker `t `
//! followed by a tagged literal `[<kind-ordinal>,<literal>]`. The encoding is
//! construction-path independent — two logically equal values always produce
//! byte-identical payloads — so the BLAKE3 ref over those bytes is a stable
//! identity for the value.
//!
//! # Entry Points
//!
//! - [`get_ref`] — canonicalize a value and return its chunk ref
//! - [`ensure_ref`] / [`RefSlot`] — compute a ref at most once per holder
//! - [`encode`] — the canonical byte encoding itself
//! - [`parse_canonical`] — parse the textual canonical form into a chunk
//!   (fixtures and interop)

pub mod cache;
pub mod encode;
pub mod error;
pub mod parse;
pub mod refs;

pub use cache::{ensure_ref, ensure_ref_with_kind, RefSlot};
pub use encode::encode;
pub use error::{CodecError, CodecResult};
pub use parse::{parse_canonical, parse_value};
pub use refs::{get_ref, get_ref_with_kind};
