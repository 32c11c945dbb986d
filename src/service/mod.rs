//! Transport-neutral telemetry endpoints
//!
//! [`TelemetryService`] ties the API key, the active schema and the latest
//! sample store together. Each operation returns a [`Reply`] that an HTTP
//! layer can emit as-is; routing and headers stay with that layer.
use std::sync::Arc;

use serde_json::{json, Value};

use crate::data_mgmt::{LatestSample, TelemetryRecord};
use crate::schema::Schema;
use crate::validate::{validate, Rejection};

mod reply;

pub use reply::{Reply, STATUS_BAD_REQUEST, STATUS_NOT_FOUND, STATUS_OK, STATUS_UNAUTHORIZED};

const SERVICE_NAME: &str = "Robot Telemetry API";
const MSG_UNAUTHORIZED: &str = "Unauthorized - Invalid API Key";
const MSG_ACCEPTED: &str = "Data received and validated";
const MSG_NO_DATA: &str = "No data received yet";

pub struct TelemetryService {
    api_key: String,
    schema: Schema,
    store: Arc<LatestSample>,
}

impl TelemetryService {
    pub fn new(api_key: impl Into<String>, schema: Schema, store: Arc<LatestSample>) -> Self {
        Self {
            api_key: api_key.into(),
            schema,
            store,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &Arc<LatestSample> {
        &self.store
    }

    /// Validate a parsed payload and, if accepted, make it the latest sample.
    /// The store is left untouched on rejection.
    pub fn ingest(&self, input: Option<Value>) -> Result<Arc<TelemetryRecord>, Rejection> {
        let record = validate(input, &self.schema)?;
        log::info!("Received telemetry: {}", summarize(&record));
        Ok(self.store.put(record))
    }

    /// Handle a raw submission from the device
    pub fn submit(&self, api_key: Option<&str>, body: &[u8]) -> Reply {
        if api_key != Some(self.api_key.as_str()) {
            log::warn!("Refused telemetry submission with missing or invalid API key");
            return Reply::error(STATUS_UNAUTHORIZED, MSG_UNAUTHORIZED);
        }

        match self.ingest(parse_body(body)) {
            Ok(_) => Reply::ok(json!({ "status": "success", "message": MSG_ACCEPTED })),
            Err(rejection) => {
                log::warn!("Rejected telemetry: {rejection}");
                Reply::error(STATUS_BAD_REQUEST, rejection.reason())
            }
        }
    }

    pub fn latest(&self) -> Reply {
        match self.store.get() {
            Some(record) => Reply::ok(record.as_ref().clone().into_value()),
            None => Reply::not_found(MSG_NO_DATA),
        }
    }

    pub fn health(&self) -> Reply {
        Reply::ok(json!({ "status": "healthy", "has_data": self.store.has_data() }))
    }

    pub fn info(&self) -> Reply {
        Reply::ok(json!({
            "name": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "POST /telemetry": "Submit telemetry data (requires X-API-Key header)",
                "GET /telemetry/latest": "Get latest telemetry data",
                "GET /health": "Health check"
            }
        }))
    }
}

/// Parse a request body. Empty or malformed bodies become `None`, which the
/// validator reports as "No data provided".
pub fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    serde_json::from_slice(body)
        .map_err(|e| log::debug!("Could not parse telemetry body as JSON: {e}"))
        .ok()
}

/// One-line description of the headline readings, for the log
fn summarize(record: &TelemetryRecord) -> String {
    let mut parts = Vec::new();
    if let Some(t) = record.number("temperature") {
        parts.push(format!("T={t}°C"));
    }
    let position = ["pose", "position"].into_iter().find_map(|key| {
        let x = record.number(&format!("{key}.x"))?;
        let y = record.number(&format!("{key}.y"))?;
        Some((key, x, y))
    });
    if let Some((key, x, y)) = position {
        parts.push(format!("Pos=({x:.3}, {y:.3})"));
        if let Some(theta) = record.number(&format!("{key}.theta_deg")) {
            parts.push(format!("θ={theta:.1}°"));
        }
    }
    if parts.is_empty() {
        format!("{} field(s)", record.fields().len())
    } else {
        parts.join(", ")
    }
}
