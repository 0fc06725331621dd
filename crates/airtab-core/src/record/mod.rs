//! Record types.
//!
//! This module defines the shapes records take on the way in and out of a
//! source. The operations themselves are methods on
//! [`RecordSource`](crate::RecordSource).

mod types;

pub use types::{Deleted, Fields, Record, RecordPage, RecordUpdate};
