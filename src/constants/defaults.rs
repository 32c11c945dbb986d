pub const API_KEY: &str = "Liquid-Team";
pub const SCHEMA: &str = "v3";
pub const LOG_LEVEL: &str = "info";
