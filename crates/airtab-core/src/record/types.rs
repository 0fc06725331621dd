//! Record operation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::RecordId;

/// A record's field map: field name to loosely typed value.
///
/// Airtable omits empty fields entirely, so absence and emptiness are the
/// same thing on the wire.
pub type Fields = serde_json::Map<String, Value>;

/// A record from a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The record id.
    pub id: RecordId,

    /// The record's non-empty fields.
    ///
    /// Schema-agnostic; interpretation is left to higher layers.
    #[serde(default)]
    pub fields: Fields,

    /// Creation timestamp as reported by the source (ISO-8601).
    pub created_time: String,
}

impl Record {
    /// Get a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field value by name if it is a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Parse the creation timestamp.
    ///
    /// Returns `None` if the source sent something that is not RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// One page of a list query.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    /// The records in this page, in source order.
    pub records: Vec<Record>,

    /// Continuation offset for the next page, if more records exist.
    pub offset: Option<String>,
}

/// A field change addressed to one record, for batch writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub id: RecordId,
    pub fields: Fields,
}

impl RecordUpdate {
    pub fn new(id: RecordId, fields: Fields) -> Self {
        Self { id, fields }
    }
}

/// Confirmation that a record was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: RecordId,
    pub deleted: bool,
}
