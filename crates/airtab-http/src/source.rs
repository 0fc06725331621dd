//! Airtable-backed record source.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use airtab_core::error::RecordNotFoundError;
use airtab_core::traits::check_batch;
use airtab_core::{
    ApiUrl, BaseId, Deleted, Error, Fields, QueryOptions, Record, RecordId, RecordPage,
    RecordSource, RecordUpdate, Result, TableRef,
};

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::endpoints::*;
use crate::schema::BaseSchema;

/// A record source backed by the Airtable REST API.
///
/// Cheap to clone; clones share one connection pool. Every operation is a
/// single attempt: failures are returned as-is, never retried.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    base: BaseId,
    api: ApiUrl,
    http: HttpClient,
}

impl AirtableClient {
    /// Create a client for the configured base.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or cannot be sent as a
    /// header, or if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(&config.api_key)?;
        Ok(Self {
            base: config.base,
            api: config.api_url,
            http,
        })
    }

    /// Returns the API root this client talks to.
    pub fn api_url(&self) -> &ApiUrl {
        &self.api
    }

    /// Fetch the base's table, field and view definitions.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn base_schema(&self) -> Result<BaseSchema> {
        debug!("Fetching base schema");
        let url = self.api.meta_tables_url(&self.base);
        self.http.get(url, &[] as &[(&str, &str)]).await
    }

    /// Send a single-record write with the given method.
    async fn write_one(
        &self,
        method: Method,
        table: &TableRef,
        id: &RecordId,
        fields: &Fields,
    ) -> Result<Record> {
        let url = self.api.record_url(&self.base, table, id);
        self.http
            .send(method, url, &FieldsRequest { fields })
            .await
            .map_err(|e| not_found(e, table, id))
    }

    /// Send a batch write of existing records with the given method.
    async fn write_many(
        &self,
        method: Method,
        table: &TableRef,
        updates: &[RecordUpdate],
    ) -> Result<Vec<Record>> {
        check_batch(updates.len())?;
        if updates.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.api.table_url(&self.base, table);
        let response: RecordsResponse = self
            .http
            .send(method, url, &UpdateRecordsRequest { records: updates })
            .await?;
        Ok(response.records)
    }
}

/// Turn a 404 for a specific record into a not-found error.
fn not_found(err: Error, table: &TableRef, id: &RecordId) -> Error {
    match err {
        Error::Query(ref q) if q.status == 404 => RecordNotFoundError {
            table: table.to_string(),
            id: id.to_string(),
        }
        .into(),
        other => other,
    }
}

#[async_trait]
impl RecordSource for AirtableClient {
    fn base(&self) -> &BaseId {
        &self.base
    }

    #[instrument(skip(self, options), fields(base = %self.base, %table))]
    async fn list_page(
        &self,
        table: &TableRef,
        options: &QueryOptions,
        offset: Option<&str>,
    ) -> Result<RecordPage> {
        debug!("Listing records page");

        let url = self.api.table_url(&self.base, table);
        let query = list_query(options, offset);
        let response: ListRecordsResponse = self.http.get(url, &query).await?;

        Ok(RecordPage {
            records: response.records,
            offset: response.offset,
        })
    }

    #[instrument(skip(self), fields(base = %self.base, %table, %id))]
    async fn get_record(&self, table: &TableRef, id: &RecordId) -> Result<Record> {
        debug!("Getting record");

        let url = self.api.record_url(&self.base, table, id);
        self.http
            .get(url, &[] as &[(&str, &str)])
            .await
            .map_err(|e| not_found(e, table, id))
    }

    #[instrument(skip(self, fields), fields(base = %self.base, %table))]
    async fn create_record(&self, table: &TableRef, fields: Fields) -> Result<Record> {
        debug!("Creating record");

        let url = self.api.table_url(&self.base, table);
        self.http
            .send(Method::POST, url, &FieldsRequest { fields: &fields })
            .await
    }

    #[instrument(skip(self, records), fields(base = %self.base, %table, count = records.len()))]
    async fn create_records(&self, table: &TableRef, records: Vec<Fields>) -> Result<Vec<Record>> {
        debug!("Creating records");

        check_batch(records.len())?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.api.table_url(&self.base, table);
        let request = CreateRecordsRequest {
            records: records.iter().map(|fields| NewRecord { fields }).collect(),
        };
        let response: RecordsResponse = self.http.send(Method::POST, url, &request).await?;
        Ok(response.records)
    }

    #[instrument(skip(self, fields), fields(base = %self.base, %table, %id))]
    async fn update_record(
        &self,
        table: &TableRef,
        id: &RecordId,
        fields: Fields,
    ) -> Result<Record> {
        debug!("Updating record");
        self.write_one(Method::PATCH, table, id, &fields).await
    }

    #[instrument(skip(self, updates), fields(base = %self.base, %table, count = updates.len()))]
    async fn update_records(
        &self,
        table: &TableRef,
        updates: Vec<RecordUpdate>,
    ) -> Result<Vec<Record>> {
        debug!("Updating records");
        self.write_many(Method::PATCH, table, &updates).await
    }

    #[instrument(skip(self, fields), fields(base = %self.base, %table, %id))]
    async fn replace_record(
        &self,
        table: &TableRef,
        id: &RecordId,
        fields: Fields,
    ) -> Result<Record> {
        debug!("Replacing record");
        self.write_one(Method::PUT, table, id, &fields).await
    }

    #[instrument(skip(self, updates), fields(base = %self.base, %table, count = updates.len()))]
    async fn replace_records(
        &self,
        table: &TableRef,
        updates: Vec<RecordUpdate>,
    ) -> Result<Vec<Record>> {
        debug!("Replacing records");
        self.write_many(Method::PUT, table, &updates).await
    }

    #[instrument(skip(self), fields(base = %self.base, %table, %id))]
    async fn delete_record(&self, table: &TableRef, id: &RecordId) -> Result<Deleted> {
        debug!("Deleting record");

        let url = self.api.record_url(&self.base, table, id);
        self.http
            .delete(url, &[] as &[(&str, &str)])
            .await
            .map_err(|e| not_found(e, table, id))
    }

    #[instrument(skip(self, ids), fields(base = %self.base, %table, count = ids.len()))]
    async fn delete_records(&self, table: &TableRef, ids: Vec<RecordId>) -> Result<Vec<Deleted>> {
        debug!("Deleting records");

        check_batch(ids.len())?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.api.table_url(&self.base, table);
        let response: DeletedRecordsResponse =
            self.http.delete(url, &delete_query(&ids)).await?;
        Ok(response.records)
    }
}
