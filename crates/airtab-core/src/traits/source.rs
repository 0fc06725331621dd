//! Record source trait.

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::error::InvalidInputError;
use crate::query::{Formula, QueryOptions};
use crate::record::{Deleted, Fields, Record, RecordPage, RecordUpdate};
use crate::types::{BaseId, RecordId, TableRef};
use crate::Result;

use super::pages::{self, RecordPages};

/// Largest number of records Airtable accepts in one write request.
pub const MAX_BATCH_SIZE: usize = 10;

/// Reject a batch write the source would refuse, before sending anything.
///
/// Batches are never split: a split batch could half-apply, and no
/// compensation is attempted for writes that did land.
pub fn check_batch(len: usize) -> Result<()> {
    if len > MAX_BATCH_SIZE {
        return Err(InvalidInputError::Batch {
            len,
            max: MAX_BATCH_SIZE,
        }
        .into());
    }
    Ok(())
}

/// A table store holding records for one base.
///
/// Implementations provide the single-request primitives. Pagination and the
/// `find_*` helpers are provided on top of [`list_page`](Self::list_page) so
/// every source pages the same way.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns the base this source reads and writes.
    fn base(&self) -> &BaseId;

    /// Fetch one page of a list query, continuing from `offset`.
    async fn list_page(
        &self,
        table: &TableRef,
        options: &QueryOptions,
        offset: Option<&str>,
    ) -> Result<RecordPage>;

    /// Fetch a single record by id.
    ///
    /// Fails with [`Error::NotFound`](crate::Error::NotFound) if the table
    /// has no such record.
    async fn get_record(&self, table: &TableRef, id: &RecordId) -> Result<Record>;

    /// Create one record.
    async fn create_record(&self, table: &TableRef, fields: Fields) -> Result<Record>;

    /// Create up to [`MAX_BATCH_SIZE`] records in one request.
    async fn create_records(&self, table: &TableRef, records: Vec<Fields>) -> Result<Vec<Record>>;

    /// Merge `fields` into a record; fields not named are left untouched.
    async fn update_record(&self, table: &TableRef, id: &RecordId, fields: Fields)
    -> Result<Record>;

    /// Merge fields into up to [`MAX_BATCH_SIZE`] records in one request.
    async fn update_records(
        &self,
        table: &TableRef,
        updates: Vec<RecordUpdate>,
    ) -> Result<Vec<Record>>;

    /// Replace a record's fields; fields not named are cleared.
    async fn replace_record(
        &self,
        table: &TableRef,
        id: &RecordId,
        fields: Fields,
    ) -> Result<Record>;

    /// Replace the fields of up to [`MAX_BATCH_SIZE`] records in one request.
    async fn replace_records(
        &self,
        table: &TableRef,
        updates: Vec<RecordUpdate>,
    ) -> Result<Vec<Record>>;

    /// Delete one record.
    async fn delete_record(&self, table: &TableRef, id: &RecordId) -> Result<Deleted>;

    /// Delete up to [`MAX_BATCH_SIZE`] records in one request.
    async fn delete_records(&self, table: &TableRef, ids: Vec<RecordId>) -> Result<Vec<Deleted>>;

    /// Stream the pages of a list query.
    fn record_pages<'a>(
        &'a self,
        table: &'a TableRef,
        options: &'a QueryOptions,
    ) -> RecordPages<'a> {
        pages::walk(self, table, options)
    }

    /// List every record matching `options`, following pagination.
    ///
    /// Records keep source order. The result never exceeds
    /// `options.max_records`.
    async fn list_records(&self, table: &TableRef, options: &QueryOptions) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut pages = self.record_pages(table, options);
        let mut page_count = 0usize;

        while let Some(page) = pages.next().await {
            records.extend(page?.records);
            page_count += 1;
        }

        debug!(%table, pages = page_count, records = records.len(), "Listed records");
        Ok(records)
    }

    /// Find the first record whose `field` equals `value`.
    ///
    /// The value is escaped into the formula, so quotes are safe. Zero
    /// matches is `Ok(None)`, not an error.
    async fn find_record_by_field(
        &self,
        table: &TableRef,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>> {
        let options = QueryOptions::new()
            .filter(Formula::eq(field, value))
            .max_records(1);
        let records = self.list_records(table, &options).await?;
        Ok(records.into_iter().next())
    }

    /// List every record matching `formula`.
    async fn find_records_by_formula(
        &self,
        table: &TableRef,
        formula: &Formula,
    ) -> Result<Vec<Record>> {
        let options = QueryOptions::new().filter(formula.clone());
        self.list_records(table, &options).await
    }
}
