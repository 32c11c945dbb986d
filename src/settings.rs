use std::env::{self, VarError};

use thiserror::Error;

use crate::constants::{defaults, envvars};
use crate::schema::{load, Schema, SchemaError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Runtime settings, taken from the environment and optionally overridden on
/// the command line
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    api_key: String,
    schema_source: String,
}

impl Settings {
    pub fn new(api_key: impl Into<String>, schema_source: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            schema_source: schema_source.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env_or_default(envvars::API_KEY, defaults::API_KEY)?,
            schema_source: env_or_default(envvars::SCHEMA, defaults::SCHEMA)?,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = api_key;
        }
        self
    }

    pub fn with_schema_source(mut self, schema_source: Option<String>) -> Self {
        if let Some(schema_source) = schema_source {
            self.schema_source = schema_source;
        }
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn schema_source(&self) -> &str {
        &self.schema_source
    }

    /// Resolve the configured schema. Fails on an unknown version name or a
    /// malformed definition file.
    pub fn load_schema(&self) -> Result<Schema, ConfigError> {
        if self.schema_source.is_empty() {
            return Err(ConfigError::EmptyValue(envvars::SCHEMA));
        }
        Ok(load::resolve(&self.schema_source)?)
    }
}

fn env_or_default(var: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if value.is_empty() => Err(ConfigError::EmptyValue(var)),
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Ok(default.to_owned()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
    }
}
