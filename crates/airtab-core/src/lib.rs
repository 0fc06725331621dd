//! airtab-core - Core Airtable types and traits.

pub mod api_key;
pub mod error;
pub mod query;
pub mod record;
pub mod traits;
pub mod types;

pub use api_key::ApiKey;
pub use error::Error;
pub use query::{Direction, Formula, Literal, QueryOptions, SortField};
pub use record::{Deleted, Fields, Record, RecordPage, RecordUpdate};
pub use traits::{MAX_BATCH_SIZE, RecordPages, RecordSource};
pub use types::{ApiUrl, BaseId, RecordId, TableRef};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
