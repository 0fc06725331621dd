//! Airtable REST request/response types.

use serde::{Deserialize, Serialize};

use airtab_core::{Deleted, Fields, QueryOptions, Record, RecordId, RecordUpdate};

// ============================================================================
// Query Encoding
// ============================================================================

/// Encode list options as Airtable query parameters.
///
/// Sort keys use Airtable's indexed form: `sort[0][field]`,
/// `sort[0][direction]`, and so on, in significance order.
pub fn list_query(options: &QueryOptions, offset: Option<&str>) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if let Some(view) = &options.view {
        query.push(("view".to_string(), view.clone()));
    }
    if let Some(filter) = &options.filter {
        query.push(("filterByFormula".to_string(), filter.render()));
    }
    if let Some(max) = options.max_records {
        query.push(("maxRecords".to_string(), max.to_string()));
    }
    if let Some(size) = options.page_size {
        query.push(("pageSize".to_string(), size.to_string()));
    }
    for (i, sort) in options.sort.iter().enumerate() {
        query.push((format!("sort[{}][field]", i), sort.field.clone()));
        query.push((
            format!("sort[{}][direction]", i),
            sort.direction.as_str().to_string(),
        ));
    }
    if let Some(offset) = offset {
        query.push(("offset".to_string(), offset.to_string()));
    }

    query
}

/// Encode record ids for a batch delete.
pub fn delete_query(ids: &[RecordId]) -> Vec<(&'static str, &str)> {
    ids.iter().map(|id| ("records[]", id.as_str())).collect()
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response from a list request.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Body for a single-record create, update or replace.
#[derive(Debug, Serialize)]
pub struct FieldsRequest<'a> {
    pub fields: &'a Fields,
}

/// One entry of a batch create.
#[derive(Debug, Serialize)]
pub struct NewRecord<'a> {
    pub fields: &'a Fields,
}

/// Body for a batch create.
#[derive(Debug, Serialize)]
pub struct CreateRecordsRequest<'a> {
    pub records: Vec<NewRecord<'a>>,
}

/// Body for a batch update or replace.
#[derive(Debug, Serialize)]
pub struct UpdateRecordsRequest<'a> {
    pub records: &'a [RecordUpdate],
}

/// Response from a batch write.
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<Record>,
}

/// Response from a batch delete.
#[derive(Debug, Deserialize)]
pub struct DeletedRecordsResponse {
    pub records: Vec<Deleted>,
}

/// Airtable error response format.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Airtable reports errors either as an object or as a bare code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Detailed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        message: Option<String>,
    },
    Code(String),
}

impl ErrorBody {
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            ErrorBody::Detailed { kind, message } => (Some(kind), message),
            ErrorBody::Code(code) => (Some(code), None),
        }
    }
}
