use serde::{Deserialize, Serialize};

use super::value::Value;

/// Content stored under one tag id of a record.
///
/// `Opaque` holds the raw payload of a tag the decoding codec did not
/// recognize. It is written back byte-for-byte on encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Known(Value),
    Opaque(Vec<u8>),
}

impl Field {
    pub fn as_known(&self) -> Option<&Value> {
        match self {
            Field::Known(value) => Some(value),
            Field::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Field::Opaque(_))
    }
}
