use crate::shared::constants::{
    FORMAT_VERSION_1, FORMAT_VERSION_2, V1_FIELD_HEADER_LEN, V1_MAX_PAYLOAD_LEN,
    V2_FIELD_HEADER_LEN, V2_MAX_PAYLOAD_LEN,
};

/// Supported wire format revisions.
///
/// Version 1 is the compact layout: 16-bit field lengths and fixed-point
/// slots for position and attitude. Version 2 widens lengths to 32 bits,
/// stores IEEE floats, and carries the extended telemetry tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatVersion {
    V1,
    V2,
}

impl FormatVersion {
    pub const ALL: &[FormatVersion] = &[FormatVersion::V1, FormatVersion::V2];
    pub const LATEST: FormatVersion = FormatVersion::V2;

    pub fn from_u16(raw: u16) -> Option<Self> {
        match raw {
            FORMAT_VERSION_1 => Some(FormatVersion::V1),
            FORMAT_VERSION_2 => Some(FormatVersion::V2),
            _ => None,
        }
    }

    pub fn as_u16(self) -> u16 {
        match self {
            FormatVersion::V1 => FORMAT_VERSION_1,
            FormatVersion::V2 => FORMAT_VERSION_2,
        }
    }

    pub fn field_header_len(self) -> usize {
        match self {
            FormatVersion::V1 => V1_FIELD_HEADER_LEN,
            FormatVersion::V2 => V2_FIELD_HEADER_LEN,
        }
    }

    /// Largest payload a single field may declare.
    pub fn max_payload_len(self) -> usize {
        match self {
            FormatVersion::V1 => V1_MAX_PAYLOAD_LEN,
            FormatVersion::V2 => V2_MAX_PAYLOAD_LEN,
        }
    }
}

impl std::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.as_u16())
    }
}
