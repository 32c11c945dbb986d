use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::{FieldKind, Schema, SchemaError};

/// Sensor-only samples
static V1: Lazy<Schema> = Lazy::new(|| {
    Schema::open()
        .require("temperature", FieldKind::Number)
        .require("humidity", FieldKind::Number)
});

/// Temperature plus planar position, closed at both levels
static V2: Lazy<Schema> = Lazy::new(|| {
    Schema::closed()
        .require("temperature", FieldKind::Number)
        .require(
            "position",
            FieldKind::object(
                Schema::closed()
                    .require("x", FieldKind::Number)
                    .require("y", FieldKind::Number),
            ),
        )
});

/// Full sensor suite with heading and device timestamp
static V3: Lazy<Schema> = Lazy::new(|| {
    Schema::open()
        .require("temperature", FieldKind::Number)
        .require("humidity", FieldKind::Number)
        .require("distance_cm", FieldKind::Number)
        .require(
            "pose",
            FieldKind::object(
                Schema::open()
                    .require("x", FieldKind::Number)
                    .require("y", FieldKind::Number)
                    .require("theta_deg", FieldKind::Number),
            ),
        )
        .require("timestamp_ms", FieldKind::Number)
});

/// Contracts the device firmware has shipped with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl SchemaVersion {
    pub const CURRENT: SchemaVersion = SchemaVersion::V3;
    pub const ALL: [SchemaVersion; 3] = [SchemaVersion::V1, SchemaVersion::V2, SchemaVersion::V3];

    pub fn schema(self) -> &'static Schema {
        match self {
            SchemaVersion::V1 => &*V1,
            SchemaVersion::V2 => &*V2,
            SchemaVersion::V3 => &*V3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVersion::V1 => "v1",
            SchemaVersion::V2 => "v2",
            SchemaVersion::V3 => "v3",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaVersion::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchemaError::UnknownVersion(s.to_owned()))
    }
}
