use serde::{Deserialize, Serialize};

use crate::kind::Kind;
use crate::reference::ChunkRef;

/// A typed value in one of the shapes the content-addressing core supports.
///
/// This is the surface the surrounding type system hands to the
/// canonicalizer. Map entries are kept in insertion order here; canonical
/// entry ordering is applied at encoding time, so two maps built in different
/// orders still hash identically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Blob(Vec<u8>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Ref(ChunkRef),
}

impl Value {
    /// The kind of this value.
    ///
    /// Total and deterministic: every representable value has exactly one
    /// kind, with no error conditions.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Blob(_) => Kind::Blob,
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
            Self::Ref(_) => Kind::Ref,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl From<ChunkRef> for Value {
    fn from(r: ChunkRef) -> Self {
        Self::Ref(r)
    }
}
