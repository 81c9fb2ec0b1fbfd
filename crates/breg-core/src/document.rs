//! # Filing Document — Permissive Tree Access
//!
//! Filings arrive as schemaless JSON trees. Rather than re-deriving nested
//! defaulting logic inside every rule, this module layers one path-accessor
//! abstraction over `serde_json::Value`: optional lookups return `Option`,
//! required lookups return a structural [`DocumentError`] naming the absent
//! path. Rules stay free of ad hoc `get().and_then()` chains and the
//! missing-required-field taxonomy stays distinct from domain violations.
//!
//! Paths are JSON pointers (`/filing/incorporationApplication/offices`),
//! matching the `path` field reported on validation issues.

use serde_json::{Map, Value};

use crate::error::DocumentError;

/// A filing submission wrapped for uniform pointer-based access.
///
/// The wrapper never mutates the tree and enforces no schema; each rule
/// checks exactly the paths it cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingDocument {
    root: Value,
}

impl FilingDocument {
    /// Wrap a parsed filing tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Whether the submission is effectively absent: null, or an object
    /// with no keys. Such a document fails the top-level precondition
    /// before any rule runs.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Optional lookup. Absent paths and explicit `null` both read as
    /// `None`.
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        match self.root.pointer(pointer) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v),
        }
    }

    /// Optional string lookup. Non-string values read as `None`.
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.get(pointer).and_then(Value::as_str)
    }

    /// Optional object lookup. An empty object reads as `None`, matching
    /// the presence checks rules apply to sub-sections like `cooperative`.
    pub fn get_object(&self, pointer: &str) -> Option<&Map<String, Value>> {
        self.get(pointer)
            .and_then(Value::as_object)
            .filter(|m| !m.is_empty())
    }

    /// Required lookup.
    ///
    /// # Errors
    ///
    /// [`DocumentError::MissingField`] if the path is absent or null.
    pub fn require(&self, pointer: &str) -> Result<&Value, DocumentError> {
        self.get(pointer).ok_or_else(|| DocumentError::MissingField {
            path: pointer.to_string(),
        })
    }

    /// Required string lookup.
    ///
    /// # Errors
    ///
    /// [`DocumentError::MissingField`] if the path is absent or null;
    /// [`DocumentError::WrongKind`] if the value is not a string.
    pub fn require_str(&self, pointer: &str) -> Result<&str, DocumentError> {
        self.require(pointer)?
            .as_str()
            .ok_or(DocumentError::WrongKind {
                path: pointer.to_string(),
                expected: "string",
            })
    }

    /// Required array lookup.
    ///
    /// # Errors
    ///
    /// [`DocumentError::MissingField`] if the path is absent or null;
    /// [`DocumentError::WrongKind`] if the value is not an array.
    pub fn require_array(&self, pointer: &str) -> Result<&Vec<Value>, DocumentError> {
        self.require(pointer)?
            .as_array()
            .ok_or(DocumentError::WrongKind {
                path: pointer.to_string(),
                expected: "array",
            })
    }
}

impl From<Value> for FilingDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
