mod latest_sample;
mod record;

pub use latest_sample::LatestSample;
pub use record::TelemetryRecord;
