#![allow(dead_code)]
// Each test binary only uses some of these

/// Current (v3) firmware sample
pub const VALID_V3: &str = r#"
{
    "temperature": 23.4,
    "humidity": 51.2,
    "distance_cm": 87.0,
    "pose": {
        "x": 1.204,
        "y": -0.35,
        "theta_deg": 182.5
    },
    "timestamp_ms": 1718000004512
}
"#;

pub const VALID_V3_LATER: &str = r#"
{
    "temperature": 23.9,
    "humidity": 50.8,
    "distance_cm": 42.5,
    "pose": {
        "x": 1.5,
        "y": -0.2,
        "theta_deg": 175.0
    },
    "timestamp_ms": 1718000005512,
    "firmware": "3.1.4"
}
"#;

/// Heading reported as a boolean by a buggy build
pub const BOOLEAN_THETA_V3: &str = r#"
{
    "temperature": 23.4,
    "humidity": 51.2,
    "distance_cm": 87.0,
    "pose": {"x": 1.204, "y": -0.35, "theta_deg": true},
    "timestamp_ms": 1718000004512
}
"#;

pub const MISSING_POSE_V3: &str = r#"
{
    "temperature": 23.4,
    "humidity": 51.2,
    "distance_cm": 87.0,
    "timestamp_ms": 1718000004512
}
"#;

pub const VALID_V2: &str = r#"{"temperature": 22.5, "position": {"x": 1.0, "y": -2.0}}"#;

pub const EXTRA_FIELDS_V2: &str =
    r#"{"temperature": 1, "position": {"x": 1, "y": 2}, "voltage": 12.1, "rssi": -70}"#;

/// Definition equivalent to the built-in v2 schema plus an optional battery level
pub const SCHEMA_DEFINITION: &str = r#"
{
    "required": [
        {"name": "temperature", "kind": "number"},
        {
            "name": "position",
            "kind": {
                "object": {
                    "required": [
                        {"name": "x", "kind": "number"},
                        {"name": "y", "kind": "number"}
                    ],
                    "allowed": ["x", "y"]
                }
            }
        }
    ],
    "optional": [{"name": "battery", "kind": "number"}],
    "allowed": ["temperature", "position", "battery"]
}
"#;

pub const BAD_SCHEMA_DEFINITION: &str = r#"
{
    "required": [
        {"name": "temperature", "kind": "number"},
        {"name": "temperature", "kind": "number"}
    ]
}
"#;
