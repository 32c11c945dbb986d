//! Loading schema definitions from configuration
use std::fs;
use std::path::Path;

use super::{Schema, SchemaError, SchemaVersion};

/// Parse and check a JSON schema definition
pub fn from_str(schema_raw: &str) -> Result<Schema, SchemaError> {
    let schema: Schema = serde_json::from_str(schema_raw)?;
    schema.check()?;
    Ok(schema)
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    let path = path.as_ref();
    let schema_raw = fs::read_to_string(path).map_err(|source| SchemaError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&schema_raw)
}

/// Resolve a schema source: a built-in version name, or else a path to a
/// definition file
pub fn resolve(source: &str) -> Result<Schema, SchemaError> {
    match source.parse::<SchemaVersion>() {
        Ok(version) => {
            log::debug!("Using built-in schema {version}");
            Ok(version.schema().clone())
        }
        Err(_) => {
            log::debug!("Loading schema definition from {source}");
            from_file(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::schema::FieldKind;

    const POSITION_SCHEMA: &str = r#"
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

    #[test]
    fn parse_nested_definition() {
        let schema = from_str(POSITION_SCHEMA).unwrap();
        let expected = Schema::closed()
            .require("temperature", FieldKind::Number)
            .require(
                "position",
                FieldKind::object(
                    Schema::closed()
                        .require("x", FieldKind::Number)
                        .require("y", FieldKind::Number),
                ),
            )
            .optional("battery", FieldKind::Number);
        assert_eq!(schema, expected);
    }

    #[test]
    fn serialized_builtin_loads_back_identically() {
        let schema = SchemaVersion::V2.schema();
        let raw = serde_json::to_string(schema).unwrap();
        assert_eq!(&from_str(&raw).unwrap(), schema);
    }

    #[test]
    fn unknown_keys_in_definition_are_refused() {
        let raw = r#"{"required": [], "closed": true}"#;
        assert!(matches!(from_str(raw), Err(SchemaError::ParseJson(_))));
    }

    #[test]
    fn unknown_kind_is_refused() {
        let raw = r#"{"required": [{"name": "temperature", "kind": "string"}]}"#;
        assert!(matches!(from_str(raw), Err(SchemaError::ParseJson(_))));
    }

    #[test]
    fn invalid_definition_fails_check() {
        let raw = r#"{
            "required": [{"name": "x", "kind": "number"}],
            "optional": [{"name": "x", "kind": "number"}]
        }"#;
        assert!(matches!(from_str(raw), Err(SchemaError::DuplicateField(name)) if name == "x"));
    }

    #[test]
    fn resolve_prefers_builtin_versions() {
        assert_eq!(&resolve("v1").unwrap(), SchemaVersion::V1.schema());
    }

    #[test]
    fn resolve_reads_definition_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(POSITION_SCHEMA.as_bytes()).unwrap();

        let schema = resolve(file.path().to_str().unwrap()).unwrap();
        assert!(schema.is_closed());
        assert_eq!(schema.optional_fields().len(), 1);
    }

    #[test]
    fn resolve_reports_missing_file() {
        assert!(matches!(
            resolve("/nonexistent/schema.json"),
            Err(SchemaError::ReadFile { .. })
        ));
    }
}
