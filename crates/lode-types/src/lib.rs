//! Foundation types for the Lode content-addressed store.
//!
//! This crate provides the value model and reference types the rest of the
//! Lode workspace is built on. Every other Lode crate depends on `lode-types`.
//!
//! # Key Types
//!
//! - [`Kind`] — Closed enumeration of value shapes with stable ordinals
//! - [`Value`] — A typed value in one of the supported shapes
//! - [`ChunkRef`] — Content-addressed identifier (BLAKE3 digest)

pub mod error;
pub mod kind;
pub mod reference;
pub mod value;

pub use error::FormatError;
pub use kind::Kind;
pub use reference::{ChunkRef, DIGEST_LEN};
pub use value::Value;
