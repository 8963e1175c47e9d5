//! Ordered JSON object records loaded from and written back to disk.
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::SyncError;

/// A top-level JSON object with its keys kept in file order.
///
/// Backed by [`serde_json::Map`] built with `preserve_order`, so replacing
/// an existing field keeps it at its original position and every other
/// field is written back exactly where it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRecord {
    fields: Map<String, Value>,
}

impl JsonRecord {
    /// Read and parse the JSON object stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Io`] if the file cannot be read, and
    /// [`SyncError::Parse`] or [`SyncError::NotAnObject`] if its contents
    /// are not a JSON object.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let bytes = std::fs::read(path).map_err(|e| SyncError::io(path, e))?;
        Self::from_json_slice(path, &bytes)
    }

    /// Parse `bytes` as a JSON object; `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Parse`] for malformed JSON or invalid UTF-8 and
    /// [`SyncError::NotAnObject`] when the top-level value is not an object.
    pub fn from_json_slice(path: &Path, bytes: &[u8]) -> Result<Self, SyncError> {
        match serde_json::from_slice::<Value>(bytes).map_err(|e| SyncError::parse(path, e))? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SyncError::NotAnObject {
                path: path.to_path_buf(),
                found: kind_name(&other),
            }),
        }
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set `key` to `value` and return the previous value.
    ///
    /// An existing key keeps its position; a missing key is appended last.
    pub fn replace_field(&mut self, key: &str, value: Value) -> Option<Value> {
        self.fields.insert(key.to_string(), value)
    }

    /// Serialize with two-space indentation and a trailing newline.
    ///
    /// Strings, integers and decimals are written as read; exponents are
    /// normalized (`1E3` becomes `1e+3`) without changing the value.
    #[must_use]
    pub fn into_json_text(self) -> String {
        format!("{:#}\n", Value::Object(self.fields))
    }
}

/// Human-readable name of a JSON value's kind.
const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
