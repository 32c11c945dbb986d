//! Declarative description of an accepted telemetry shape
//!
//! A [`Schema`] is plain data: the validator walks it, it never encodes a
//! particular payload layout itself. Switching the device to a different
//! contract is therefore a matter of loading a different schema (see
//! [`load`] and [`SchemaVersion`]).
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod load;
mod versions;

pub use versions::SchemaVersion;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema contains a field with an empty name")]
    EmptyFieldName,
    #[error("field name '{0}' must not contain '.'")]
    DottedFieldName(String),
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("field '{0}' is declared but missing from the allowed fields")]
    NotAllowed(String),
    #[error("unknown schema version '{0}' (expected one of v1, v2, v3)")]
    UnknownVersion(String),
    #[error("could not read schema file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse schema definition: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// What a declared field must hold
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Integer or floating point. Booleans never qualify.
    Number,
    /// A mapping validated against its own schema
    Object(Box<Schema>),
}

impl FieldKind {
    pub fn object(schema: Schema) -> Self {
        FieldKind::Object(Box::new(schema))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One level of a telemetry contract.
///
/// Required and optional fields are kept in declaration order, which is also
/// the order the validator checks them in. When `allowed` is set the schema is
/// closed and any other key is rejected; when it is `None` unknown keys pass.
///
/// Deserialising yields an unchecked schema. Definitions coming from outside
/// the program should go through [`load`], which also runs [`Schema::check`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    required: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    optional: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed: Option<BTreeSet<String>>,
}

impl Schema {
    /// Schema that tolerates keys it does not declare
    pub fn open() -> Self {
        Self::default()
    }

    /// Schema that rejects every key it does not declare
    pub fn closed() -> Self {
        Self {
            allowed: Some(BTreeSet::new()),
            ..Self::default()
        }
    }

    pub fn require(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        let spec = FieldSpec::new(name, kind);
        self.permit(&spec.name);
        self.required.push(spec);
        self
    }

    pub fn optional(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        let spec = FieldSpec::new(name, kind);
        self.permit(&spec.name);
        self.optional.push(spec);
        self
    }

    /// Permit a key without attaching a type contract to it.
    /// Has no effect on open schemas.
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.permit(&name.into());
        self
    }

    fn permit(&mut self, name: &str) {
        if let Some(allowed) = self.allowed.as_mut() {
            allowed.insert(name.to_owned());
        }
    }

    pub fn required_fields(&self) -> &[FieldSpec] {
        &self.required
    }

    pub fn optional_fields(&self) -> &[FieldSpec] {
        &self.optional
    }

    pub fn allowed_fields(&self) -> Option<&BTreeSet<String>> {
        self.allowed.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.allowed.is_some()
    }

    /// Check the definition itself, recursing into nested schemas.
    ///
    /// A failure here is a configuration mistake and should stop the program
    /// at startup rather than surface as a request-time rejection.
    pub fn check(&self) -> Result<(), SchemaError> {
        self.check_at("")
    }

    fn check_at(&self, prefix: &str) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for spec in self.required.iter().chain(&self.optional) {
            let path = field_path(prefix, &spec.name);
            if spec.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if spec.name.contains('.') {
                return Err(SchemaError::DottedFieldName(path));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateField(path));
            }
            if let Some(allowed) = &self.allowed {
                if !allowed.contains(&spec.name) {
                    return Err(SchemaError::NotAllowed(path));
                }
            }
            if let FieldKind::Object(nested) = &spec.kind {
                nested.check_at(&path)?;
            }
        }
        if let Some(allowed) = &self.allowed {
            if let Some(name) = allowed.iter().find(|name| name.contains('.')) {
                return Err(SchemaError::DottedFieldName(field_path(prefix, name)));
            }
        }
        Ok(())
    }
}

/// Dotted path of `name` below `prefix`; the top level has an empty prefix
pub(crate) fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}
