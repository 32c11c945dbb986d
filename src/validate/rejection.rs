use std::fmt;

use thiserror::Error;

/// Kind a field was expected to hold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedKind {
    Number,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Number => f.write_str("a number"),
        }
    }
}

/// Why a telemetry payload was refused.
///
/// Only the first violation found is reported. `Display` renders the reason
/// that is handed back to the submitting client.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("No data provided")]
    EmptyInput,
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("{path} must be {expected}")]
    WrongType { path: String, expected: ExpectedKind },
    /// Keys outside a closed schema, sorted
    #[error("Unexpected fields: {}", .0.join(", "))]
    UnexpectedFields(Vec<String>),
    #[error("{0} must be an object")]
    NestedStructureInvalid(String),
}

impl Rejection {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
