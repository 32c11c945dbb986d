//! Schema validation of incoming telemetry
//!
//! Each schema level is checked in a fixed order, stopping at the first
//! violation:
//!
//! 1. every required field is present (declaration order)
//! 2. a closed schema has no undeclared keys (all of them reported, sorted)
//! 3. each present required, then optional, field holds its declared kind,
//!    recursing into nested objects with a dotted path prefix
//!
//! Validation is a pure function of its arguments and may run from any number
//! of threads at once.
use serde_json::{Map, Value};

use crate::data_mgmt::TelemetryRecord;
use crate::schema::{field_path, FieldKind, Schema};

mod rejection;

pub use rejection::{ExpectedKind, Rejection};

/// Path used in reasons when the payload as a whole has the wrong shape
const ROOT_PATH: &str = "data";

pub type ValidationOutcome = Result<TelemetryRecord, Rejection>;

/// Validate a parsed payload against `schema`.
///
/// `None` stands for a missing or unparsable body. It is treated the same as
/// JSON `null` or an empty object.
pub fn validate(input: Option<Value>, schema: &Schema) -> ValidationOutcome {
    let fields = match input {
        None | Some(Value::Null) => return Err(Rejection::EmptyInput),
        Some(Value::Object(fields)) if fields.is_empty() => return Err(Rejection::EmptyInput),
        Some(Value::Object(fields)) => fields,
        Some(_) => return Err(Rejection::NestedStructureInvalid(ROOT_PATH.to_owned())),
    };

    check_level(&fields, schema, "")?;
    Ok(TelemetryRecord::new(fields))
}

fn check_level(fields: &Map<String, Value>, schema: &Schema, prefix: &str) -> Result<(), Rejection> {
    if let Some(missing) = schema
        .required_fields()
        .iter()
        .find(|spec| !fields.contains_key(&spec.name))
    {
        return Err(Rejection::MissingField(field_path(prefix, &missing.name)));
    }

    if let Some(allowed) = schema.allowed_fields() {
        let mut unexpected: Vec<String> = fields
            .keys()
            .filter(|key| !allowed.contains(key.as_str()))
            .map(|key| field_path(prefix, key))
            .collect();
        if !unexpected.is_empty() {
            unexpected.sort();
            return Err(Rejection::UnexpectedFields(unexpected));
        }
    }

    for spec in schema.required_fields().iter().chain(schema.optional_fields()) {
        if let Some(value) = fields.get(&spec.name) {
            check_kind(value, &spec.kind, &field_path(prefix, &spec.name))?;
        }
    }
    Ok(())
}

fn check_kind(value: &Value, kind: &FieldKind, path: &str) -> Result<(), Rejection> {
    match kind {
        FieldKind::Number if is_number(value) => Ok(()),
        FieldKind::Number => Err(Rejection::WrongType {
            path: path.to_owned(),
            expected: ExpectedKind::Number,
        }),
        FieldKind::Object(nested) => match value {
            Value::Object(fields) => check_level(fields, nested, path),
            _ => Err(Rejection::NestedStructureInvalid(path.to_owned())),
        },
    }
}

fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        // true/false stay booleans even where they would equal 1/0
        Value::Bool(_) => false,
        _ => false,
    }
}
