//! airtab-http - Airtable REST API backed record source.
//!
//! # Example
//!
//! ```no_run
//! use airtab_core::{ApiKey, BaseId, QueryOptions, RecordSource, TableRef};
//! use airtab_http::{AirtableClient, ClientConfig};
//!
//! # async fn example() -> Result<(), airtab_core::Error> {
//! let config = ClientConfig::new(ApiKey::new("pat..."), BaseId::new("app742LUED30ISmmF")?);
//! let client = AirtableClient::new(config)?;
//!
//! let table = TableRef::new("tblPRqxmCUOo09XCP")?;
//! let records = client
//!     .list_records(&table, &QueryOptions::new().max_records(10))
//!     .await?;
//!
//! for record in records {
//!     println!("{}: {:?}", record.id, record.fields);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoints;
mod schema;
mod source;

pub use config::ClientConfig;
pub use schema::{BaseSchema, FieldSchema, TableSchema, ViewSchema};
pub use source::AirtableClient;
