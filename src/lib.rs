pub mod constants;
pub mod data_mgmt;
pub mod schema;
pub mod service;
pub mod settings;
pub mod validate;

pub use data_mgmt::{LatestSample, TelemetryRecord};
pub use schema::{FieldKind, FieldSpec, Schema, SchemaError, SchemaVersion};
pub use service::{Reply, TelemetryService};
pub use settings::{ConfigError, Settings};
pub use validate::{validate, Rejection, ValidationOutcome};
