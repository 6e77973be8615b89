//! Opaque domain records and load payload shapes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

/// A single domain record. The engine never looks inside one; renderers and
/// filters read fields by name.
pub type Record = Value;

/// Shape of a section load.
///
/// Endpoints return either a bare array or an object wrapping the array in
/// `items`; both are accepted. Extra envelope fields (totals, cursors) are
/// ignored since paging is client-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LoadPayload {
    /// `[ {...}, {...} ]`
    Bare(Vec<Record>),
    /// `{ "items": [ {...}, {...} ] }`
    Envelope {
        /// Wrapped records.
        items: Vec<Record>,
    },
}

impl LoadPayload {
    /// Parse a payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(LoadError::decode)
    }

    /// Interpret an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        serde_json::from_value(value).map_err(LoadError::decode)
    }

    /// Number of records carried.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the payload carries no records.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Borrow the records regardless of shape.
    pub fn items(&self) -> &[Record] {
        match self {
            Self::Bare(items) | Self::Envelope { items } => items,
        }
    }

    /// Unwrap into the ordered record list.
    pub fn into_items(self) -> Vec<Record> {
        match self {
            Self::Bare(items) | Self::Envelope { items } => items,
        }
    }
}

impl From<Vec<Record>> for LoadPayload {
    fn from(items: Vec<Record>) -> Self {
        Self::Bare(items)
    }
}

/// Read a top-level field as display text.
///
/// Strings are returned as-is, numbers and booleans formatted. Nulls,
/// missing fields, arrays and objects yield `None`.
pub fn field_text(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
