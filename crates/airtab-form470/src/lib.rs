//! airtab-form470 - Typed access to the E-Rate Form 470 table.
//!
//! [`Form470Table`] wraps any [`RecordSource`](airtab_core::RecordSource)
//! and turns the generic records of the Form 470 table into [`Form470`]
//! values with a fixed schema.
//!
//! # Example
//!
//! ```no_run
//! use airtab_core::{ApiKey, BaseId};
//! use airtab_form470::{DEFAULT_BASE, Form470Table};
//! use airtab_http::{AirtableClient, ClientConfig};
//!
//! # async fn example() -> Result<(), airtab_core::Error> {
//! let config = ClientConfig::new(ApiKey::new("pat..."), BaseId::new(DEFAULT_BASE)?);
//! let forms = Form470Table::new(AirtableClient::new(config)?);
//!
//! if let Some(form) = forms.get_by_application_number("251042800").await? {
//!     println!("{:?}", form.fields.buyer);
//! }
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod prefill;
pub mod record;
pub mod table;

pub use fields::{Attachment, Form470Fields, LineItems, Thumbnail, Thumbnails};
pub use prefill::{ContactForm, DealRegistration, PrefillError};
pub use record::Form470;
pub use table::{DEFAULT_BASE, DEFAULT_TABLE, DEFAULT_VIEW, Form470Table};
