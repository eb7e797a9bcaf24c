use super::codec_error::CodecError;
use super::format_version::FormatVersion;
use crate::metadata::domain::record::MetadataRecord;

/// Converts records to and from a serialized byte form.
///
/// Implementations hold no mutable state, so a single instance can serve
/// concurrent callers.
pub trait RecordCodec: Send + Sync {
    /// Serializes `record` in the layout of `version`. Equal records always
    /// produce identical bytes.
    fn encode(&self, record: &MetadataRecord, version: u16) -> Result<Vec<u8>, CodecError>;

    /// Parses a complete record. No partial record is returned on failure.
    fn decode(&self, bytes: &[u8]) -> Result<MetadataRecord, CodecError>;

    /// Re-encodes `bytes` under another format version.
    fn transcode(&self, bytes: &[u8], version: u16) -> Result<Vec<u8>, CodecError> {
        let record = self.decode(bytes)?;
        self.encode(&record, version)
    }
}

/// Parses a raw version number, rejecting unknown revisions.
pub fn parse_version(raw: u16) -> Result<FormatVersion, CodecError> {
    FormatVersion::from_u16(raw).ok_or(CodecError::UnsupportedVersion(raw))
}
