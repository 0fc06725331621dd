//! Form 470 table accessor.

use tracing::{debug, instrument};

use airtab_core::{Formula, QueryOptions, RecordSource, Result, TableRef};

use crate::record::Form470;

/// Base holding the Form 470 table.
pub const DEFAULT_BASE: &str = "app742LUED30ISmmF";

/// The Form 470 table id.
pub const DEFAULT_TABLE: &str = "tblPRqxmCUOo09XCP";

/// Grid view used for surveying the table.
pub const DEFAULT_VIEW: &str = "viwxQMzxTvYjB3mGX";

/// Typed queries against the Form 470 table of any [`RecordSource`].
///
/// Lookups are equality filters built with [`Formula`], so values are
/// escaped. Comparisons are done by the source and are case-sensitive:
/// `get_by_state("or")` does not match records with state `OR`.
///
/// Errors keep their kind but gain the name of the failing lookup, e.g.
/// `Failed to get Form 470s by state: query error: HTTP 401 ...`.
#[derive(Debug, Clone)]
pub struct Form470Table<S> {
    source: S,
    table: TableRef,
}

impl<S: RecordSource> Form470Table<S> {
    /// Access the default Form 470 table.
    pub fn new(source: S) -> Self {
        let table = TableRef::new(DEFAULT_TABLE).expect("default table id is valid");
        Self::with_table(source, table)
    }

    /// Access a table with the Form 470 schema other than the default.
    pub fn with_table(source: S, table: TableRef) -> Self {
        Self { source, table }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// Get the Form 470 with the given application number.
    ///
    /// Returns `Ok(None)` if there is none.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn get_by_application_number(
        &self,
        application_number: &str,
    ) -> Result<Option<Form470>> {
        let options = QueryOptions::new()
            .filter(Formula::eq("Application Number", application_number))
            .max_records(1);

        let forms = self
            .query(&options, "Failed to get Form 470 by application number")
            .await?;
        Ok(forms.into_iter().next())
    }

    /// Get every Form 470 for a state abbreviation such as `OR`.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn get_by_state(&self, state: &str) -> Result<Vec<Form470>> {
        let options = QueryOptions::new().filter(Formula::eq("State", state));
        self.query(&options, "Failed to get Form 470s by state")
            .await
    }

    /// Get every Form 470 for a funding year such as `2025`.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn get_by_funding_year(&self, funding_year: &str) -> Result<Vec<Form470>> {
        let options = QueryOptions::new().filter(Formula::eq("Funding Year", funding_year));
        self.query(&options, "Failed to get Form 470s by funding year")
            .await
    }

    /// Get every Form 470 with a status such as `Committed`.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn get_by_status(&self, status: &str) -> Result<Vec<Form470>> {
        let options = QueryOptions::new().filter(Formula::eq("Status", status));
        self.query(&options, "Failed to get Form 470s by status")
            .await
    }

    async fn query(&self, options: &QueryOptions, context: &str) -> Result<Vec<Form470>> {
        let records = self
            .source
            .list_records(&self.table, options)
            .await
            .map_err(|e| e.context(context))?;

        let forms = records
            .into_iter()
            .map(Form470::try_from)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.context(context))?;

        debug!(count = forms.len(), "Fetched Form 470s");
        Ok(forms)
    }
}
