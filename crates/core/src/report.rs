use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// JSON kind of an override value, used when describing a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the kind of the provided JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an override entry was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidType { expected: ValueKind, found: ValueKind },
    UnknownKey,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::UnknownKey => f.write_str("unknown key"),
        }
    }
}

/// A single override entry that did not make it into the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Dotted path inside the override document; `$` is the document itself.
    pub path: String,
    pub reason: RejectionReason,
}

/// Entries discarded while applying an override document.
///
/// Reporting is purely diagnostic: the resolved configuration is identical
/// whether or not the report is inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayReport {
    pub domain: &'static str,
    pub rejections: Vec<Rejection>,
}

impl OverlayReport {
    pub fn new(domain: &'static str) -> Self {
        Self {
            domain,
            rejections: Vec::new(),
        }
    }

    /// Returns `true` when every entry of the override document was applied.
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn invalid_type(&mut self, path: impl Into<String>, expected: ValueKind, found: &Value) {
        self.rejections.push(Rejection {
            path: path.into(),
            reason: RejectionReason::InvalidType {
                expected,
                found: ValueKind::of(found),
            },
        });
    }

    pub fn unknown_key(&mut self, path: impl Into<String>) {
        self.rejections.push(Rejection {
            path: path.into(),
            reason: RejectionReason::UnknownKey,
        });
    }
}
