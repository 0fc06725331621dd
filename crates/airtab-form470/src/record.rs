//! Form 470 domain record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use airtab_core::error::{Error, SchemaError};
use airtab_core::{Record, RecordId};

use crate::fields::Form470Fields;

/// A record of the Form 470 table with its fields validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form470 {
    pub id: RecordId,
    pub fields: Form470Fields,
    pub created_time: String,
}

impl Form470 {
    /// Parse `createdTime`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

impl TryFrom<Record> for Form470 {
    type Error = Error;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let fields = serde_json::from_value(Value::Object(record.fields)).map_err(|e| {
            SchemaError::Fields {
                record: record.id.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: record.id,
            fields,
            created_time: record.created_time,
        })
    }
}
