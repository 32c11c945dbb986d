use serde_json::{json, Value};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Status code and JSON body, ready for whatever transport carries them
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    pub fn error(status: u16, message: impl AsRef<str>) -> Self {
        Self {
            status,
            body: json!({ "error": message.as_ref() }),
        }
    }

    pub fn not_found(message: impl AsRef<str>) -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            body: json!({ "message": message.as_ref() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
