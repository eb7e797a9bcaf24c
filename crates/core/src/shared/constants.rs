/// Record header: version (u16), field count (u16), total length (u32).
pub const HEADER_LEN: usize = 8;

pub const FORMAT_VERSION_1: u16 = 1;
pub const FORMAT_VERSION_2: u16 = 2;

/// Field header in version 1: tag (u16) + payload length (u16).
pub const V1_FIELD_HEADER_LEN: usize = 4;
/// Field header in version 2: tag (u16) + payload length (u32).
pub const V2_FIELD_HEADER_LEN: usize = 6;

pub const V1_MAX_PAYLOAD_LEN: usize = u16::MAX as usize;
pub const V2_MAX_PAYLOAD_LEN: usize = 16 * 1024 * 1024;

/// Tag id 0 never names a field.
pub const RESERVED_TAG: u16 = 0;

/// Fractional bits of the version 1 fixed-point slots.
pub const LAT_LON_FRAC_BITS: u32 = 22;
pub const ALTITUDE_FRAC_BITS: u32 = 16;
pub const ANGLE_FRAC_BITS: u32 = 12;

pub const MAX_BATTERY_PERCENTAGE: u8 = 100;
