use serde::Serialize;
use serde_json::{Map, Value};

/// A telemetry sample that satisfied its schema when it was accepted.
///
/// Only the validator creates these, so holding one is proof that the payload
/// passed. The fields are exactly those submitted; nothing is coerced or
/// defaulted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TelemetryRecord {
    fields: Map<String, Value>,
}

impl TelemetryRecord {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a value by dotted path, e.g. `pose.theta_deg`
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = self.fields.get(parts.next()?)?;
        parts.try_fold(first, |value, part| value.as_object()?.get(part))
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        self.lookup(path).and_then(Value::as_f64)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<TelemetryRecord> for Value {
    fn from(record: TelemetryRecord) -> Self {
        record.into_value()
    }
}
