//! Per-kind payload layouts.
//!
//! | kind          | v1                         | v2            |
//! |---------------|----------------------------|---------------|
//! | timestamp     | u64                        | u64           |
//! | location      | i32 Q10.22 ×2, i32 Q16.16  | f64 ×3        |
//! | orientation   | i16 Q4.12 ×3               | f32 ×3        |
//! | distance      | f64                        | f64           |
//! | speed         | f32 ×3                     | f32 ×3        |
//! | exposure time | f32                        | f32           |
//! | gain          | u16                        | u16           |
//! | percentage    | u8                         | u8            |
//! | flying state  | u8                         | u8            |
//! | bytes, text   | raw, length from header    | same          |

use std::f32::consts::{FRAC_PI_2, PI};

use crate::codec::domain::codec_error::CodecError;
use crate::codec::domain::format_version::FormatVersion;
use crate::metadata::domain::tag::{Tag, ValueKind};
use crate::metadata::domain::validation::ValidationError;
use crate::metadata::domain::value::{Euler, FlyingState, Location, Ned, Value};
use crate::shared::byte_reader::ByteReader;
use crate::shared::byte_writer::ByteWriter;
use crate::shared::constants::{ALTITUDE_FRAC_BITS, ANGLE_FRAC_BITS, LAT_LON_FRAC_BITS};
use crate::shared::fixed_point::{from_fixed_i16, from_fixed_i32, to_fixed_i16, to_fixed_i32};

/// Payload width of `kind` under `version`; `None` for variable-length kinds.
pub fn fixed_width(kind: ValueKind, version: FormatVersion) -> Option<usize> {
    match (kind, version) {
        (ValueKind::Timestamp, _) => Some(8),
        (ValueKind::Location, FormatVersion::V1) => Some(12),
        (ValueKind::Location, FormatVersion::V2) => Some(24),
        (ValueKind::Orientation, FormatVersion::V1) => Some(6),
        (ValueKind::Orientation, FormatVersion::V2) => Some(12),
        (ValueKind::Distance, _) => Some(8),
        (ValueKind::Speed, _) => Some(12),
        (ValueKind::ExposureTime, _) => Some(4),
        (ValueKind::Gain, _) => Some(2),
        (ValueKind::Percentage, _) => Some(1),
        (ValueKind::FlyingState, _) => Some(1),
        (ValueKind::Bytes, _) | (ValueKind::Text, _) => None,
    }
}

pub fn payload_len(value: &Value, version: FormatVersion) -> usize {
    match value {
        Value::Bytes(data) => data.len(),
        Value::Text(text) => text.len(),
        other => fixed_width(other.kind(), version).unwrap_or(0),
    }
}

fn fixed_i32(tag: Tag, component: &'static str, value: f64, frac_bits: u32) -> Result<i32, CodecError> {
    to_fixed_i32(value, frac_bits).ok_or_else(|| {
        ValidationError::OutOfRange {
            tag,
            component,
            value,
            min: from_fixed_i32(i32::MIN, frac_bits),
            max: from_fixed_i32(i32::MAX, frac_bits),
        }
        .into()
    })
}

fn fixed_i16(tag: Tag, component: &'static str, value: f64, frac_bits: u32) -> Result<i16, CodecError> {
    to_fixed_i16(value, frac_bits).ok_or_else(|| {
        ValidationError::OutOfRange {
            tag,
            component,
            value,
            min: from_fixed_i16(i16::MIN, frac_bits),
            max: from_fixed_i16(i16::MAX, frac_bits),
        }
        .into()
    })
}

/// Q4.12 slot for an angle bounded by `±limit`. The nearest step can land
/// just past the limit (pi is not on the grid), in which case the next step
/// toward zero is used so the decoded angle stays in range.
fn fixed_angle(tag: Tag, component: &'static str, value: f32, limit: f32) -> Result<i16, CodecError> {
    let raw = fixed_i16(tag, component, value as f64, ANGLE_FRAC_BITS)?;
    if (from_fixed_i16(raw, ANGLE_FRAC_BITS) as f32).abs() > limit {
        return Ok(raw - raw.signum());
    }
    Ok(raw)
}

/// Appends the payload of `value`. Fails when a component cannot be
/// represented in the fixed-point slot of `version`.
pub fn write_payload(
    w: &mut ByteWriter,
    tag: Tag,
    value: &Value,
    version: FormatVersion,
) -> Result<(), CodecError> {
    match (value, version) {
        (Value::Timestamp(us), _) => w.put_u64(*us),
        (Value::Location(loc), FormatVersion::V1) => {
            let lat = fixed_i32(tag, "latitude", loc.latitude, LAT_LON_FRAC_BITS)?;
            let lon = fixed_i32(tag, "longitude", loc.longitude, LAT_LON_FRAC_BITS)?;
            let alt = fixed_i32(tag, "altitude", loc.altitude, ALTITUDE_FRAC_BITS)?;
            w.put_i32(lat);
            w.put_i32(lon);
            w.put_i32(alt);
        }
        (Value::Location(loc), FormatVersion::V2) => {
            w.put_f64(loc.latitude);
            w.put_f64(loc.longitude);
            w.put_f64(loc.altitude);
        }
        (Value::Orientation(e), FormatVersion::V1) => {
            let yaw = fixed_angle(tag, "yaw", e.yaw, PI)?;
            let pitch = fixed_angle(tag, "pitch", e.pitch, FRAC_PI_2)?;
            let roll = fixed_angle(tag, "roll", e.roll, PI)?;
            w.put_i16(yaw);
            w.put_i16(pitch);
            w.put_i16(roll);
        }
        (Value::Orientation(e), FormatVersion::V2) => {
            w.put_f32(e.yaw);
            w.put_f32(e.pitch);
            w.put_f32(e.roll);
        }
        (Value::Bytes(data), _) => w.put_bytes(data),
        (Value::Distance(d), _) => w.put_f64(*d),
        (Value::Speed(v), _) => {
            w.put_f32(v.north);
            w.put_f32(v.east);
            w.put_f32(v.down);
        }
        (Value::ExposureTime(ms), _) => w.put_f32(*ms),
        (Value::Gain(g), _) => w.put_u16(*g),
        (Value::Percentage(p), _) => w.put_u8(*p),
        (Value::FlyingState(s), _) => w.put_u8(s.as_u8()),
        (Value::Text(text), _) => w.put_bytes(text.as_bytes()),
    }
    Ok(())
}

fn malformed(tag: Tag, reason: impl Into<String>) -> CodecError {
    CodecError::MalformedField {
        tag_id: tag.id(),
        reason: reason.into(),
    }
}

/// Parses the payload of a recognized tag. The result is not yet checked
/// against the tag's value domain.
pub fn read_payload(tag: Tag, payload: &[u8], version: FormatVersion) -> Result<Value, CodecError> {
    let kind = tag.kind();
    if let Some(width) = fixed_width(kind, version) {
        if payload.len() != width {
            return Err(malformed(
                tag,
                format!("expected {width} bytes, found {}", payload.len()),
            ));
        }
    }

    let mut r = ByteReader::new(payload);
    let value = match (kind, version) {
        (ValueKind::Timestamp, _) => Value::Timestamp(r.read_u64()?),
        (ValueKind::Location, FormatVersion::V1) => Value::Location(Location {
            latitude: from_fixed_i32(r.read_i32()?, LAT_LON_FRAC_BITS),
            longitude: from_fixed_i32(r.read_i32()?, LAT_LON_FRAC_BITS),
            altitude: from_fixed_i32(r.read_i32()?, ALTITUDE_FRAC_BITS),
        }),
        (ValueKind::Location, FormatVersion::V2) => Value::Location(Location {
            latitude: r.read_f64()?,
            longitude: r.read_f64()?,
            altitude: r.read_f64()?,
        }),
        (ValueKind::Orientation, FormatVersion::V1) => Value::Orientation(Euler {
            yaw: from_fixed_i16(r.read_i16()?, ANGLE_FRAC_BITS) as f32,
            pitch: from_fixed_i16(r.read_i16()?, ANGLE_FRAC_BITS) as f32,
            roll: from_fixed_i16(r.read_i16()?, ANGLE_FRAC_BITS) as f32,
        }),
        (ValueKind::Orientation, FormatVersion::V2) => Value::Orientation(Euler {
            yaw: r.read_f32()?,
            pitch: r.read_f32()?,
            roll: r.read_f32()?,
        }),
        (ValueKind::Bytes, _) => Value::Bytes(payload.to_vec()),
        (ValueKind::Distance, _) => Value::Distance(r.read_f64()?),
        (ValueKind::Speed, _) => Value::Speed(Ned {
            north: r.read_f32()?,
            east: r.read_f32()?,
            down: r.read_f32()?,
        }),
        (ValueKind::ExposureTime, _) => Value::ExposureTime(r.read_f32()?),
        (ValueKind::Gain, _) => Value::Gain(r.read_u16()?),
        (ValueKind::Percentage, _) => Value::Percentage(r.read_u8()?),
        (ValueKind::FlyingState, _) => {
            let raw = r.read_u8()?;
            let state = FlyingState::from_u8(raw)
                .ok_or_else(|| malformed(tag, format!("unknown flying state {raw}")))?;
            Value::FlyingState(state)
        }
        (ValueKind::Text, _) => {
            let text = std::str::from_utf8(payload)
                .map_err(|e| malformed(tag, format!("invalid UTF-8: {e}")))?;
            Value::Text(text.to_string())
        }
    };
    Ok(value)
}
