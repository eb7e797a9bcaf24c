use super::format_version::FormatVersion;
use crate::metadata::domain::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: Tag,
    /// First format version whose layout defines this tag.
    pub since: FormatVersion,
}

/// Immutable set of tags a codec instance interprets.
///
/// Tags missing from the table, or introduced after the version being
/// decoded, are carried through as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    entries: Vec<TagEntry>,
}

const STANDARD: &[TagEntry] = &[
    TagEntry { tag: Tag::CaptureTimestamp, since: FormatVersion::V1 },
    TagEntry { tag: Tag::Location, since: FormatVersion::V1 },
    TagEntry { tag: Tag::Orientation, since: FormatVersion::V1 },
    TagEntry { tag: Tag::Extension, since: FormatVersion::V1 },
    TagEntry { tag: Tag::GroundDistance, since: FormatVersion::V2 },
    TagEntry { tag: Tag::Speed, since: FormatVersion::V2 },
    TagEntry { tag: Tag::ExposureTime, since: FormatVersion::V2 },
    TagEntry { tag: Tag::Gain, since: FormatVersion::V2 },
    TagEntry { tag: Tag::BatteryPercentage, since: FormatVersion::V2 },
    TagEntry { tag: Tag::FlyingState, since: FormatVersion::V2 },
    TagEntry { tag: Tag::CameraSerial, since: FormatVersion::V2 },
];

impl TagTable {
    /// Builds a table from `entries`. A later entry for the same tag
    /// replaces an earlier one.
    pub fn new(entries: impl IntoIterator<Item = TagEntry>) -> Self {
        let mut table: Vec<TagEntry> = Vec::new();
        for entry in entries {
            table.retain(|e| e.tag != entry.tag);
            table.push(entry);
        }
        table.sort_by_key(|e| e.tag.id());
        Self { entries: table }
    }

    /// Every tag this crate defines, at the version that introduced it.
    pub fn standard() -> Self {
        Self::new(STANDARD.iter().copied())
    }

    /// Standard table reduced to the tags `version` defines, i.e. what a
    /// peer that only implements `version` understands.
    pub fn up_to(version: FormatVersion) -> Self {
        Self::new(STANDARD.iter().copied().filter(|e| e.since <= version))
    }

    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    pub fn entry(&self, tag: Tag) -> Option<&TagEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    /// The tag `id` decodes to under `version`, if this table interprets it.
    pub fn lookup(&self, id: u16, version: FormatVersion) -> Option<Tag> {
        self.entries
            .iter()
            .find(|e| e.tag.id() == id && e.since <= version)
            .map(|e| e.tag)
    }

    pub fn supports(&self, tag: Tag, version: FormatVersion) -> bool {
        self.entry(tag).is_some_and(|e| e.since <= version)
    }
}

impl Default for TagTable {
    fn default() -> Self {
        Self::standard()
    }
}
