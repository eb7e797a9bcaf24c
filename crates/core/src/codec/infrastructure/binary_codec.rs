use crate::codec::domain::codec_error::CodecError;
use crate::codec::domain::format_version::FormatVersion;
use crate::codec::domain::record_codec::{parse_version, RecordCodec};
use crate::codec::domain::tag_table::TagTable;
use crate::codec::infrastructure::field_layout::{payload_len, read_payload, write_payload};
use crate::metadata::domain::field::Field;
use crate::metadata::domain::record::MetadataRecord;
use crate::metadata::domain::tag::Tag;
use crate::shared::byte_reader::ByteReader;
use crate::shared::byte_writer::ByteWriter;
use crate::shared::constants::{HEADER_LEN, RESERVED_TAG};

/// Fixed-size record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub version: FormatVersion,
    pub field_count: u16,
    /// Length of the whole record, header included.
    pub total_len: u32,
}

/// Location and size of one field in an encoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub tag_id: u16,
    /// Offset of the payload from the start of the record.
    pub offset: usize,
    pub len: usize,
    /// The tag the codec interprets this field as, `None` for opaque fields.
    pub tag: Option<Tag>,
}

enum DecodeState<'a> {
    ReadHeader,
    ReadFieldTable {
        header: RecordHeader,
        body: ByteReader<'a>,
    },
    ValidateTotalLength {
        header: RecordHeader,
        body: ByteReader<'a>,
        record: MetadataRecord,
    },
    Done(MetadataRecord),
}

/// Binary record codec.
///
/// ```text
/// header:     version u16 | field_count u16 | total_len u32
/// field (v1): tag u16 | len u16 | payload
/// field (v2): tag u16 | len u32 | payload
/// ```
///
/// All integers are big-endian and fields are written in ascending tag
/// order. Padding is not allowed: any byte between the last field and the
/// end of the buffer is rejected as trailing data.
#[derive(Debug, Clone, Default)]
pub struct BinaryCodec {
    table: TagTable,
}

impl BinaryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: TagTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TagTable {
        &self.table
    }

    /// Parses only the fixed header.
    pub fn read_header(bytes: &[u8]) -> Result<RecordHeader, CodecError> {
        if bytes.len() < HEADER_LEN {
            return Err(CodecError::TruncatedInput {
                offset: 0,
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }
        let mut r = ByteReader::new(bytes);
        let version = parse_version(r.read_u16()?)?;
        let field_count = r.read_u16()?;
        let total_len = r.read_u32()?;
        if (total_len as usize) < HEADER_LEN {
            return Err(CodecError::InvalidHeader {
                declared: total_len,
            });
        }
        Ok(RecordHeader {
            version,
            field_count,
            total_len,
        })
    }

    /// Exact size `encode` would produce for `record` under `version`.
    pub fn encoded_len(&self, record: &MetadataRecord, version: u16) -> Result<usize, CodecError> {
        let version = parse_version(version)?;
        self.checked_len(record, version)
    }

    /// Walks the field table without interpreting payloads.
    pub fn field_spans(&self, bytes: &[u8]) -> Result<Vec<FieldSpan>, CodecError> {
        let header = Self::read_header(bytes)?;
        let mut body = Self::body(bytes, &header)?;
        let mut spans = Vec::with_capacity(header.field_count as usize);
        for _ in 0..header.field_count {
            let (tag_id, payload_offset, payload) = Self::read_field(&mut body, header.version)?;
            spans.push(FieldSpan {
                tag_id,
                offset: payload_offset,
                len: payload.len(),
                tag: self.table.lookup(tag_id, header.version),
            });
        }
        Ok(spans)
    }

    fn checked_len(&self, record: &MetadataRecord, version: FormatVersion) -> Result<usize, CodecError> {
        let mut total = HEADER_LEN;
        for (tag_id, field) in record.fields() {
            let len = match field {
                Field::Known(value) => {
                    self.encodable_tag(tag_id, version)?;
                    payload_len(value, version)
                }
                Field::Opaque(data) => {
                    self.check_opaque(tag_id, data, version)?;
                    data.len()
                }
            };
            let max = version.max_payload_len();
            if len > max {
                return Err(CodecError::FieldTooLarge { tag_id, len, max });
            }
            total += version.field_header_len() + len;
        }
        if total > u32::MAX as usize {
            return Err(CodecError::FieldTooLarge {
                tag_id: record.tags().last().unwrap_or(RESERVED_TAG),
                len: total,
                max: u32::MAX as usize,
            });
        }
        Ok(total)
    }

    fn encodable_tag(&self, tag_id: u16, version: FormatVersion) -> Result<Tag, CodecError> {
        let tag = Tag::from_id(tag_id).ok_or_else(|| CodecError::MalformedField {
            tag_id,
            reason: "typed value under an unrecognized tag".into(),
        })?;
        if !self.table.supports(tag, version) {
            return Err(CodecError::UnsupportedTag { tag, version });
        }
        Ok(tag)
    }

    /// Raw bytes under a tag this table interprets at `version` must decode
    /// as that tag, or the output would not read back.
    fn check_opaque(&self, tag_id: u16, data: &[u8], version: FormatVersion) -> Result<(), CodecError> {
        if let Some(tag) = self.table.lookup(tag_id, version) {
            read_payload(tag, data, version)?.validate(tag)?;
        }
        Ok(())
    }

    fn body<'a>(bytes: &'a [u8], header: &RecordHeader) -> Result<ByteReader<'a>, CodecError> {
        let total = header.total_len as usize;
        if bytes.len() < total {
            return Err(CodecError::TruncatedInput {
                offset: 0,
                needed: total,
                available: bytes.len(),
            });
        }
        let mut body = ByteReader::new(&bytes[..total]);
        body.read_bytes(HEADER_LEN)?;
        Ok(body)
    }

    /// Reads one field header and its payload, bounded by the declared
    /// record length.
    fn read_field<'a>(
        body: &mut ByteReader<'a>,
        version: FormatVersion,
    ) -> Result<(u16, usize, &'a [u8]), CodecError> {
        let tag_id = body.read_u16()?;
        let len = match version {
            FormatVersion::V1 => body.read_u16()? as usize,
            FormatVersion::V2 => body.read_u32()? as usize,
        };
        let offset = body.position();
        let payload = body.read_bytes(len)?;
        let max = version.max_payload_len();
        if len > max {
            return Err(CodecError::FieldTooLarge { tag_id, len, max });
        }
        if tag_id == RESERVED_TAG {
            return Err(CodecError::MalformedField {
                tag_id,
                reason: "reserved tag id".into(),
            });
        }
        Ok((tag_id, offset, payload))
    }

    fn read_field_table(
        &self,
        header: &RecordHeader,
        body: &mut ByteReader<'_>,
    ) -> Result<MetadataRecord, CodecError> {
        let mut record = MetadataRecord::new();
        for _ in 0..header.field_count {
            let (tag_id, _, payload) = Self::read_field(body, header.version)?;
            if record.contains(tag_id) {
                return Err(CodecError::MalformedField {
                    tag_id,
                    reason: "duplicate tag".into(),
                });
            }
            match self.table.lookup(tag_id, header.version) {
                Some(tag) => {
                    let value = read_payload(tag, payload, header.version)?;
                    record.set(tag, value)?;
                }
                None => {
                    log::debug!(
                        "preserving unrecognized tag {tag_id} ({} bytes) as opaque",
                        payload.len()
                    );
                    record.set_opaque(tag_id, payload.to_vec())?;
                }
            }
        }
        Ok(record)
    }

    fn run_decode(&self, bytes: &[u8]) -> Result<MetadataRecord, CodecError> {
        let mut state = DecodeState::ReadHeader;
        loop {
            state = match state {
                DecodeState::ReadHeader => {
                    let header = Self::read_header(bytes)?;
                    let body = Self::body(bytes, &header)?;
                    DecodeState::ReadFieldTable { header, body }
                }
                DecodeState::ReadFieldTable { header, mut body } => {
                    let record = self.read_field_table(&header, &mut body)?;
                    DecodeState::ValidateTotalLength {
                        header,
                        body,
                        record,
                    }
                }
                DecodeState::ValidateTotalLength {
                    header,
                    body,
                    record,
                } => {
                    let extra = body.remaining() + (bytes.len() - header.total_len as usize);
                    if extra > 0 {
                        return Err(CodecError::TrailingData { extra });
                    }
                    DecodeState::Done(record)
                }
                DecodeState::Done(record) => return Ok(record),
            };
        }
    }
}

impl RecordCodec for BinaryCodec {
    fn encode(&self, record: &MetadataRecord, version: u16) -> Result<Vec<u8>, CodecError> {
        let version = parse_version(version)?;
        let total = self.checked_len(record, version)?;

        let mut w = ByteWriter::with_capacity(total);
        w.put_u16(version.as_u16());
        // Tag 0 is reserved, so a record holds at most u16::MAX fields.
        w.put_u16(record.len() as u16);
        w.put_u32(total as u32);

        for (tag_id, field) in record.fields() {
            w.put_u16(tag_id);
            let len = match field {
                Field::Known(value) => payload_len(value, version),
                Field::Opaque(data) => data.len(),
            };
            match version {
                FormatVersion::V1 => w.put_u16(len as u16),
                FormatVersion::V2 => w.put_u32(len as u32),
            }
            match field {
                Field::Known(value) => {
                    let tag = self.encodable_tag(tag_id, version)?;
                    write_payload(&mut w, tag, value, version)?;
                }
                Field::Opaque(data) => w.put_bytes(data),
            }
        }

        debug_assert_eq!(w.len(), total);
        log::debug!(
            "encoded {} fields as {version} ({total} bytes)",
            record.len()
        );
        Ok(w.into_inner())
    }

    fn decode(&self, bytes: &[u8]) -> Result<MetadataRecord, CodecError> {
        let result = self.run_decode(bytes);
        match &result {
            Ok(record) => log::debug!("decoded {} fields from {} bytes", record.len(), bytes.len()),
            Err(e) => log::debug!("rejected {} byte record: {e}", bytes.len()),
        }
        result
    }
}

/// Encodes with the standard tag table.
pub fn encode(record: &MetadataRecord, version: u16) -> Result<Vec<u8>, CodecError> {
    BinaryCodec::new().encode(record, version)
}

/// Decodes with the standard tag table.
pub fn decode(bytes: &[u8]) -> Result<MetadataRecord, CodecError> {
    BinaryCodec::new().decode(bytes)
}
