//! Core traits for record source behavior.

mod pages;
mod source;

pub use pages::RecordPages;
pub use source::{MAX_BATCH_SIZE, RecordSource, check_batch};
