//! Error body shape returned by the backend on non-success statuses.
//!
//! The backend answers errors with `{"detail": ...}` where `detail` is
//! either a plain message or a list of field-validation entries.

use serde::{Deserialize, Serialize};

/// Top-level error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field: a message, or per-field validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<FieldError>),
}

/// One field-validation failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ErrorDetail {
    /// Collapse the detail into one human-readable message.
    ///
    /// Validation lists join each entry's message with `", "`.
    pub fn to_message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Validation(errors) => errors
                .iter()
                .map(|e| e.msg.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
