//! Coded values: a `(code, description)` pair drawn from an external code table.
//!
//! On the wire a coded field is an object holding the code under `value` and
//! the description under a companion key, `desc` unless the schema names
//! another one for that field:
//!
//! ```text
//! "gender": { "value": "F", "desc": "Female" }
//! ```

use crate::document::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Key holding the code inside a coded field.
pub const CODE_KEY: &str = "value";

/// Default key holding the description inside a coded field.
pub const DEFAULT_DESC_KEY: &str = "desc";

/// A code plus its informational description.
///
/// Equality and hashing look at `code` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueObject {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ValueObject {}

impl Hash for ValueObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.code, self.description)
        }
    }
}

impl ValueObject {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Read `field` using the default description key.
    pub fn read(doc: &Document, field: &str) -> Self {
        Self::read_with(doc, field, DEFAULT_DESC_KEY)
    }

    /// Read `field` with an explicit description key.
    ///
    /// A bare string at `field` is taken as the code with no description.
    pub fn read_with(doc: &Document, field: &str, desc_key: &str) -> Self {
        match doc.lookup(field) {
            Some(Value::Object(map)) => Self {
                code: map.get(CODE_KEY).map(scalar_text).unwrap_or_default(),
                description: map.get(desc_key).map(scalar_text).unwrap_or_default(),
            },
            Some(Value::String(code)) => Self::new(code.as_str(), ""),
            _ => Self::default(),
        }
    }

    /// Write `code` and `description` under `field`.
    pub fn write(doc: &mut Document, field: &str, code: &str, description: &str) {
        Self::write_with(doc, field, DEFAULT_DESC_KEY, code, description);
    }

    /// Write with an explicit description key.
    ///
    /// Only the code and description sub-fields are touched. An empty
    /// description removes the description key.
    pub fn write_with(
        doc: &mut Document,
        field: &str,
        desc_key: &str,
        code: &str,
        description: &str,
    ) {
        doc.set(&format!("{field}.{CODE_KEY}"), code);
        let desc_path = format!("{field}.{desc_key}");
        if description.is_empty() {
            doc.remove(&desc_path);
        } else {
            doc.set(&desc_path, description);
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
