use std::f32::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use super::tag::{Tag, ValueKind};
use super::validation::{check_range, ValidationError};
use crate::shared::constants::MAX_BATTERY_PERCENTAGE;

/// Geodetic position: degrees for latitude/longitude, metres for altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Camera attitude as Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Velocity in the local north-east-down frame, metres per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ned {
    pub north: f32,
    pub east: f32,
    pub down: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlyingState {
    Landed,
    TakingOff,
    Hovering,
    Flying,
    Landing,
    Emergency,
}

impl FlyingState {
    pub fn as_u8(self) -> u8 {
        match self {
            FlyingState::Landed => 0,
            FlyingState::TakingOff => 1,
            FlyingState::Hovering => 2,
            FlyingState::Flying => 3,
            FlyingState::Landing => 4,
            FlyingState::Emergency => 5,
        }
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(FlyingState::Landed),
            1 => Some(FlyingState::TakingOff),
            2 => Some(FlyingState::Hovering),
            3 => Some(FlyingState::Flying),
            4 => Some(FlyingState::Landing),
            5 => Some(FlyingState::Emergency),
            _ => None,
        }
    }
}

/// A typed field value. Which variant a tag accepts is fixed by `Tag::kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Microseconds on a monotonic clock.
    Timestamp(u64),
    Location(Location),
    Orientation(Euler),
    Bytes(Vec<u8>),
    /// Metres.
    Distance(f64),
    Speed(Ned),
    /// Milliseconds.
    ExposureTime(f32),
    Gain(u16),
    Percentage(u8),
    FlyingState(FlyingState),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Location(_) => ValueKind::Location,
            Value::Orientation(_) => ValueKind::Orientation,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Distance(_) => ValueKind::Distance,
            Value::Speed(_) => ValueKind::Speed,
            Value::ExposureTime(_) => ValueKind::ExposureTime,
            Value::Gain(_) => ValueKind::Gain,
            Value::Percentage(_) => ValueKind::Percentage,
            Value::FlyingState(_) => ValueKind::FlyingState,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Checks the value against the domain of `tag`, independent of any
    /// wire format version.
    pub fn validate(&self, tag: Tag) -> Result<(), ValidationError> {
        if self.kind() != tag.kind() {
            return Err(ValidationError::KindMismatch {
                tag,
                expected: tag.kind(),
                actual: self.kind(),
            });
        }
        match self {
            Value::Location(loc) => {
                check_range(tag, "latitude", loc.latitude, -90.0, 90.0)?;
                check_range(tag, "longitude", loc.longitude, -180.0, 180.0)?;
                check_range(tag, "altitude", loc.altitude, f64::MIN, f64::MAX)
            }
            Value::Orientation(e) => {
                let (pi, half_pi) = (PI as f64, FRAC_PI_2 as f64);
                check_range(tag, "yaw", e.yaw as f64, -pi, pi)?;
                check_range(tag, "pitch", e.pitch as f64, -half_pi, half_pi)?;
                check_range(tag, "roll", e.roll as f64, -pi, pi)
            }
            Value::Speed(v) => {
                check_range(tag, "north", v.north as f64, f64::MIN, f64::MAX)?;
                check_range(tag, "east", v.east as f64, f64::MIN, f64::MAX)?;
                check_range(tag, "down", v.down as f64, f64::MIN, f64::MAX)
            }
            Value::Distance(d) => check_range(tag, "distance", *d, 0.0, f64::MAX),
            Value::ExposureTime(ms) => check_range(tag, "exposure", *ms as f64, 0.0, f64::MAX),
            Value::Percentage(p) => check_range(
                tag,
                "percentage",
                *p as f64,
                0.0,
                MAX_BATTERY_PERCENTAGE as f64,
            ),
            Value::Timestamp(_)
            | Value::Bytes(_)
            | Value::Gain(_)
            | Value::FlyingState(_)
            | Value::Text(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn location(latitude: f64, longitude: f64, altitude: f64) -> Value {
        Value::Location(Location {
            latitude,
            longitude,
            altitude,
        })
    }

    #[test]
    fn test_kind_mismatch() {
        let err = Value::Timestamp(1).validate(Tag::Location).unwrap_err();
        assert_eq!(
            err,
            ValidationError::KindMismatch {
                tag: Tag::Location,
                expected: ValueKind::Location,
                actual: ValueKind::Timestamp,
            }
        );
    }

    #[test]
    fn test_every_tag_kind_has_a_matching_variant() {
        let samples = [
            Value::Timestamp(0),
            location(0.0, 0.0, 0.0),
            Value::Orientation(Euler {
                yaw: 0.0,
                pitch: 0.0,
                roll: 0.0,
            }),
            Value::Bytes(Vec::new()),
            Value::Distance(0.0),
            Value::Speed(Ned {
                north: 0.0,
                east: 0.0,
                down: 0.0,
            }),
            Value::ExposureTime(0.0),
            Value::Gain(0),
            Value::Percentage(0),
            Value::FlyingState(FlyingState::Landed),
            Value::Text(String::new()),
        ];
        for &tag in Tag::ALL {
            assert!(
                samples.iter().any(|v| v.validate(tag).is_ok()),
                "no sample accepted by {tag}"
            );
        }
    }

    #[rstest]
    #[case::north_pole(location(90.0, 0.0, 0.0))]
    #[case::date_line(location(0.0, -180.0, -400.0))]
    #[case::high_altitude(location(45.0, 6.0, 1.0e6))]
    fn test_location_accepts(#[case] value: Value) {
        assert!(value.validate(Tag::Location).is_ok());
    }

    #[rstest]
    #[case::latitude_too_high(location(90.1, 0.0, 0.0))]
    #[case::longitude_too_low(location(0.0, -180.5, 0.0))]
    #[case::nan_altitude(location(0.0, 0.0, f64::NAN))]
    #[case::infinite_latitude(location(f64::INFINITY, 0.0, 0.0))]
    fn test_location_rejects(#[case] value: Value) {
        assert!(value.validate(Tag::Location).is_err());
    }

    #[test]
    fn test_orientation_accepts_f32_pi() {
        let value = Value::Orientation(Euler {
            yaw: PI,
            pitch: -FRAC_PI_2,
            roll: -PI,
        });
        assert!(value.validate(Tag::Orientation).is_ok());
    }

    #[test]
    fn test_orientation_rejects_pitch_past_vertical() {
        let value = Value::Orientation(Euler {
            yaw: 0.0,
            pitch: 1.6,
            roll: 0.0,
        });
        let err = value.validate(Tag::Orientation).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                component: "pitch",
                ..
            }
        ));
    }

    #[rstest]
    #[case::negative_distance(Tag::GroundDistance, Value::Distance(-0.1))]
    #[case::negative_exposure(Tag::ExposureTime, Value::ExposureTime(-1.0))]
    #[case::battery_over_full(Tag::BatteryPercentage, Value::Percentage(101))]
    #[case::nan_speed(Tag::Speed, Value::Speed(Ned { north: 0.0, east: f32::NAN, down: 0.0 }))]
    fn test_scalar_domains(#[case] tag: Tag, #[case] value: Value) {
        assert!(value.validate(tag).is_err());
    }

    #[test]
    fn test_flying_state_raw_values() {
        for raw in 0..=5u8 {
            let state = FlyingState::from_u8(raw).unwrap();
            assert_eq!(state.as_u8(), raw);
        }
        assert_eq!(FlyingState::from_u8(6), None);
    }

    #[test]
    fn test_value_json_shape() {
        let json = serde_json::to_string(&Value::Timestamp(5)).unwrap();
        assert_eq!(json, r#"{"timestamp":5}"#);
    }
}
