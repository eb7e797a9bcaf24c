use thiserror::Error;

use super::format_version::FormatVersion;
use crate::metadata::domain::tag::Tag;
use crate::metadata::domain::validation::ValidationError;
use crate::shared::byte_reader::OutOfBounds;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),
    #[error("{tag} cannot be encoded in format {version}")]
    UnsupportedTag { tag: Tag, version: FormatVersion },
    #[error("field {tag_id} payload of {len} bytes exceeds the {max} byte limit")]
    FieldTooLarge { tag_id: u16, len: usize, max: usize },
    #[error("input truncated: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("{extra} unexpected bytes after the last field")]
    TrailingData { extra: usize },
    #[error("declared record length {declared} is smaller than the header")]
    InvalidHeader { declared: u32 },
    #[error("malformed field {tag_id}: {reason}")]
    MalformedField { tag_id: u16, reason: String },
    #[error("invalid field value: {0}")]
    Validation(#[from] ValidationError),
}

impl From<OutOfBounds> for CodecError {
    fn from(e: OutOfBounds) -> Self {
        CodecError::TruncatedInput {
            offset: e.offset,
            needed: e.needed,
            available: e.available,
        }
    }
}
