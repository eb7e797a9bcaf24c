use serde::{Deserialize, Serialize};

/// Shape of the value a tag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Timestamp,
    Location,
    Orientation,
    Bytes,
    Distance,
    Speed,
    ExposureTime,
    Gain,
    Percentage,
    FlyingState,
    Text,
}

/// Recognized metadata fields, identified on the wire by their `u16` id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    CaptureTimestamp,
    Location,
    Orientation,
    Extension,
    GroundDistance,
    Speed,
    ExposureTime,
    Gain,
    BatteryPercentage,
    FlyingState,
    CameraSerial,
}

impl Tag {
    pub const ALL: &[Tag] = &[
        Tag::CaptureTimestamp,
        Tag::Location,
        Tag::Orientation,
        Tag::Extension,
        Tag::GroundDistance,
        Tag::Speed,
        Tag::ExposureTime,
        Tag::Gain,
        Tag::BatteryPercentage,
        Tag::FlyingState,
        Tag::CameraSerial,
    ];

    pub fn id(self) -> u16 {
        match self {
            Tag::CaptureTimestamp => 1,
            Tag::Location => 2,
            Tag::Orientation => 3,
            Tag::Extension => 4,
            Tag::GroundDistance => 5,
            Tag::Speed => 6,
            Tag::ExposureTime => 7,
            Tag::Gain => 8,
            Tag::BatteryPercentage => 9,
            Tag::FlyingState => 10,
            Tag::CameraSerial => 11,
        }
    }

    pub fn from_id(id: u16) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.id() == id)
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Tag::CaptureTimestamp => ValueKind::Timestamp,
            Tag::Location => ValueKind::Location,
            Tag::Orientation => ValueKind::Orientation,
            Tag::Extension => ValueKind::Bytes,
            Tag::GroundDistance => ValueKind::Distance,
            Tag::Speed => ValueKind::Speed,
            Tag::ExposureTime => ValueKind::ExposureTime,
            Tag::Gain => ValueKind::Gain,
            Tag::BatteryPercentage => ValueKind::Percentage,
            Tag::FlyingState => ValueKind::FlyingState,
            Tag::CameraSerial => ValueKind::Text,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::CaptureTimestamp => "capture_timestamp",
            Tag::Location => "location",
            Tag::Orientation => "orientation",
            Tag::Extension => "extension",
            Tag::GroundDistance => "ground_distance",
            Tag::Speed => "speed",
            Tag::ExposureTime => "exposure_time",
            Tag::Gain => "gain",
            Tag::BatteryPercentage => "battery_percentage",
            Tag::FlyingState => "flying_state",
            Tag::CameraSerial => "camera_serial",
        }
    }
}

impl From<Tag> for u16 {
    fn from(tag: Tag) -> u16 {
        tag.id()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
