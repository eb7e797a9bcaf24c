#![allow(dead_code)]

use vmeta_core::{Euler, FlyingState, Location, MetadataRecord, Ned, Tag, Value};

/// Record using only the version 1 tags, with fixed-point values on the
/// Q-format grid so it survives a v1 round trip exactly.
pub fn v1_record() -> MetadataRecord {
    let mut record = MetadataRecord::new();
    record
        .set(Tag::CaptureTimestamp, Value::Timestamp(1_700_000_123_456))
        .unwrap();
    record
        .set(
            Tag::Location,
            Value::Location(Location {
                latitude: 48.875,
                longitude: 2.3125,
                altitude: 120.5,
            }),
        )
        .unwrap();
    record
        .set(
            Tag::Orientation,
            Value::Orientation(Euler {
                yaw: 1.5,
                pitch: -0.25,
                roll: 0.0625,
            }),
        )
        .unwrap();
    record
        .set(Tag::Extension, Value::Bytes(b"\x01app-block".to_vec()))
        .unwrap();
    record
}

/// Record exercising every tag plus one opaque field.
pub fn full_record() -> MetadataRecord {
    let mut record = v1_record();
    record
        .set(Tag::GroundDistance, Value::Distance(37.25))
        .unwrap();
    record
        .set(
            Tag::Speed,
            Value::Speed(Ned {
                north: 3.5,
                east: -1.25,
                down: 0.5,
            }),
        )
        .unwrap();
    record
        .set(Tag::ExposureTime, Value::ExposureTime(4.0))
        .unwrap();
    record.set(Tag::Gain, Value::Gain(200)).unwrap();
    record
        .set(Tag::BatteryPercentage, Value::Percentage(87))
        .unwrap();
    record
        .set(Tag::FlyingState, Value::FlyingState(FlyingState::Flying))
        .unwrap();
    record
        .set(Tag::CameraSerial, Value::Text("PI040416AA8G123456".into()))
        .unwrap();
    record.set_opaque(0x4242, vec![0xde, 0xad, 0xbe, 0xef]).unwrap();
    record
}
