use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::tag::Tag;
use super::validation::{NotPresent, ValidationError};
use super::value::Value;
use crate::shared::constants::RESERVED_TAG;

/// One complete set of metadata values for a frame or session.
///
/// Keyed by tag id, so each tag appears at most once. Iteration is always in
/// ascending tag order, which is what makes encoding deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RecordEntry>", into = "Vec<RecordEntry>")]
pub struct MetadataRecord {
    fields: BTreeMap<u16, Field>,
}

/// Serialized form of one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub tag: u16,
    pub field: Field,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `tag`, replacing any previous field.
    pub fn set(&mut self, tag: Tag, value: Value) -> Result<(), ValidationError> {
        value.validate(tag)?;
        self.fields.insert(tag.id(), Field::Known(value));
        Ok(())
    }

    /// Stores raw bytes under `tag_id`, replacing any previous field.
    pub fn set_opaque(&mut self, tag_id: u16, data: Vec<u8>) -> Result<(), ValidationError> {
        if tag_id == RESERVED_TAG {
            return Err(ValidationError::ReservedTag(tag_id));
        }
        self.fields.insert(tag_id, Field::Opaque(data));
        Ok(())
    }

    /// Typed value of `tag`. `None` when absent or held as opaque bytes.
    pub fn get(&self, tag: Tag) -> Option<&Value> {
        self.fields.get(&tag.id()).and_then(Field::as_known)
    }

    pub fn require(&self, tag: Tag) -> Result<&Value, NotPresent> {
        self.get(tag).ok_or(NotPresent(tag))
    }

    pub fn field(&self, tag: impl Into<u16>) -> Option<&Field> {
        self.fields.get(&tag.into())
    }

    pub fn contains(&self, tag: impl Into<u16>) -> bool {
        self.fields.contains_key(&tag.into())
    }

    /// Clears the field if present.
    pub fn remove(&mut self, tag: impl Into<u16>) -> Option<Field> {
        self.fields.remove(&tag.into())
    }

    /// Set tag ids in ascending order. Each call starts a fresh sequence.
    pub fn tags(&self) -> impl Iterator<Item = u16> + '_ {
        self.fields.keys().copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (u16, &Field)> + '_ {
        self.fields.iter().map(|(&id, field)| (id, field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<RecordEntry>> for MetadataRecord {
    type Error = ValidationError;

    fn try_from(entries: Vec<RecordEntry>) -> Result<Self, Self::Error> {
        let mut record = MetadataRecord::new();
        for entry in entries {
            if record.contains(entry.tag) {
                return Err(ValidationError::DuplicateTag(entry.tag));
            }
            match entry.field {
                Field::Known(value) => {
                    let tag = Tag::from_id(entry.tag)
                        .ok_or(ValidationError::UnrecognizedTag(entry.tag))?;
                    record.set(tag, value)?;
                }
                Field::Opaque(data) => record.set_opaque(entry.tag, data)?,
            }
        }
        Ok(record)
    }
}

impl From<MetadataRecord> for Vec<RecordEntry> {
    fn from(record: MetadataRecord) -> Self {
        record
            .fields
            .into_iter()
            .map(|(tag, field)| RecordEntry { tag, field })
            .collect()
    }
}
