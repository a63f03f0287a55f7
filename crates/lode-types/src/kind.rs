use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of a value, tagged with a stable ordinal.
///
/// Ordinals are embedded in the canonical byte encoding and therefore affect
/// every content hash. They are never renumbered; new kinds may only be
/// appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kind {
    /// Boolean value.
    Bool = 0,
    /// 64-bit floating point number.
    Number = 1,
    /// UTF-8 string.
    String = 2,
    /// Raw byte sequence.
    Blob = 3,
    /// Ordered sequence of values.
    List = 4,
    /// Key/value mapping with canonically ordered entries.
    Map = 5,
    /// Reference to another content-addressed value.
    Ref = 6,
}

impl Kind {
    /// The ordinal used as the kind tag in canonical encodings.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its ordinal. Returns `None` for unassigned ordinals.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Bool),
            1 => Some(Self::Number),
            2 => Some(Self::String),
            3 => Some(Self::Blob),
            4 => Some(Self::List),
            5 => Some(Self::Map),
            6 => Some(Self::Ref),
            _ => None,
        }
    }

    /// All kinds, in ordinal order.
    pub const ALL: [Kind; 7] = [
        Kind::Bool,
        Kind::Number,
        Kind::String,
        Kind::Blob,
        Kind::List,
        Kind::Map,
        Kind::Ref,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Blob => write!(f, "blob"),
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
            Self::Ref => write!(f, "ref"),
        }
    }
}
