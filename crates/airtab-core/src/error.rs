//! Error types for the airtab toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! transport, query, lookup, schema and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for airtab operations.
///
/// Callers can match on the variant to distinguish a failed query from a
/// missing record. Domain layers wrap errors in [`Error::Context`] without
/// changing their kind; use [`Error::root`] or the `is_*` helpers to look
/// through the annotation.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, unreadable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The source rejected the request (auth, malformed formula, unknown table).
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// A record fetched by id does not exist.
    #[error("{0}")]
    NotFound(#[from] RecordNotFoundError),

    /// Input validation errors (invalid ids, URLs, batch sizes).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A record does not fit the expected domain schema.
    #[error("schema mismatch: {0}")]
    Schema(#[from] SchemaError),

    /// An error annotated with the operation that produced it.
    #[error("{context}: {inner}")]
    Context { context: String, inner: Box<Error> },
}

impl Error {
    /// Wrap this error with a description of the failing operation.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            inner: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any context annotations.
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { inner, .. } => inner.root(),
            other => other,
        }
    }

    /// Returns true if a record lookup by id found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Error::NotFound(_))
    }

    /// Returns the source-side query error, if that is what this is.
    pub fn query_error(&self) -> Option<&QueryError> {
        match self.root() {
            Error::Query(e) => Some(e),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The response body could not be read or decoded.
    #[error("invalid response body: {message}")]
    Body { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A request the source answered with a non-success status.
#[derive(Debug)]
pub struct QueryError {
    /// HTTP status code.
    pub status: u16,
    /// Airtable error type (e.g. `INVALID_FILTER_BY_FORMULA`), if present.
    pub kind: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref kind) = self.kind {
            write!(f, " [{}]", kind)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    /// Create a new query error.
    pub fn new(status: u16, kind: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    /// Check if the key was rejected or lacks access to the base.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self.kind.as_deref() == Some("AUTHENTICATION_REQUIRED")
            || self.kind.as_deref() == Some("NOT_AUTHORIZED")
            || self.kind.as_deref() == Some("INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND")
    }

    /// Check if the filter formula was rejected.
    pub fn is_invalid_formula(&self) -> bool {
        self.kind.as_deref() == Some("INVALID_FILTER_BY_FORMULA")
    }
}

/// A single-record fetch for an id the table does not contain.
#[derive(Debug, Error)]
#[error("record {id} not found in table {table}")]
pub struct RecordNotFoundError {
    pub table: String,
    pub id: String,
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base id format.
    #[error("invalid base id '{value}': {reason}")]
    BaseId { value: String, reason: String },

    /// Invalid table id or name.
    #[error("invalid table '{value}': {reason}")]
    Table { value: String, reason: String },

    /// Invalid record id format.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },

    /// Invalid API root URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Missing or blank API key.
    #[error("invalid API key: {reason}")]
    ApiKey { reason: String },

    /// A batch write larger than the source accepts in one request.
    #[error("batch of {len} records exceeds the limit of {max} per request")]
    Batch { len: usize, max: usize },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// A record whose fields do not match the expected shape.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The field map could not be read as the domain type.
    #[error("record {record}: {reason}")]
    Fields { record: String, reason: String },

    /// An embedded JSON-encoded field could not be decoded.
    #[error("field '{field}' holds malformed JSON: {reason}")]
    EmbeddedJson { field: String, reason: String },
}
