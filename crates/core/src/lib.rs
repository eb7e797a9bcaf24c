//! Typed video metadata records and their binary wire format.
//!
//! A [`MetadataRecord`] maps tag ids to typed values (capture time, position,
//! attitude, telemetry) or to opaque bytes for tags the decoder does not
//! know. [`BinaryCodec`] converts records to and from bytes in one of the
//! supported format versions.

pub mod codec;
pub mod metadata;
pub mod shared;

pub use codec::domain::codec_error::CodecError;
pub use codec::domain::format_version::FormatVersion;
pub use codec::domain::record_codec::RecordCodec;
pub use codec::domain::tag_table::{TagEntry, TagTable};
pub use codec::infrastructure::binary_codec::{decode, encode, BinaryCodec, FieldSpan, RecordHeader};
pub use metadata::domain::field::Field;
pub use metadata::domain::record::MetadataRecord;
pub use metadata::domain::tag::{Tag, ValueKind};
pub use metadata::domain::validation::{NotPresent, ValidationError};
pub use metadata::domain::value::{Euler, FlyingState, Location, Ned, Value};
