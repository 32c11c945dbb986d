pub const API_KEY: &str = "TELEMETRY_API_KEY";
pub const SCHEMA: &str = "TELEMETRY_SCHEMA";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
