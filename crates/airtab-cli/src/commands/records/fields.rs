//! Field survey command implementation.
//!
//! Airtable leaves empty cells out of responses, so the fields of one record
//! are not the table's fields. Sampling several records gets closer.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Args;

use airtab_core::{QueryOptions, Record, RecordSource, TableRef};
use airtab_http::AirtableClient;

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::parse_table;

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Sample from a view
    #[arg(long)]
    pub view: Option<String>,

    /// Number of records to sample
    #[arg(long, default_value_t = 10)]
    pub max_records: u32,
}

/// Field names seen across a sample of records.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldSurvey {
    pub sampled: usize,
    /// Every field name seen, sorted.
    pub fields: BTreeSet<String>,
    /// Names seen in some record but absent from the first.
    pub missing_from_first: Vec<String>,
}

impl FieldSurvey {
    pub fn from_records(records: &[Record]) -> Self {
        let fields: BTreeSet<String> = records
            .iter()
            .flat_map(|r| r.fields.keys().cloned())
            .collect();

        let missing_from_first = match records.first() {
            Some(first) => fields
                .iter()
                .filter(|name| !first.fields.contains_key(*name))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Self {
            sampled: records.len(),
            fields,
            missing_from_first,
        }
    }

    pub fn print(&self) {
        output::field("Records sampled", &self.sampled.to_string());
        println!();
        output::heading("Fields");
        for name in &self.fields {
            println!("- {}", name);
        }

        if !self.missing_from_first.is_empty() {
            println!();
            output::heading("Not present in the first record (likely empty)");
            for name in &self.missing_from_first {
                println!("- {}", name);
            }
        }
    }
}

/// Sample a table and survey its fields.
pub async fn survey(
    client: &AirtableClient,
    table: &TableRef,
    view: Option<String>,
    max_records: u32,
) -> Result<FieldSurvey> {
    let mut options = QueryOptions::new().max_records(max_records);
    options.view = view;

    let records = client
        .list_records(table, &options)
        .await
        .context("Failed to fetch records")?;
    Ok(FieldSurvey::from_records(&records))
}

pub async fn run(args: FieldsArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;

    let survey = survey(&client, &table, args.view, args.max_records).await?;
    if survey.sampled == 0 {
        output::nothing("No records found in the specified table/view.");
        return Ok(());
    }

    survey.print();
    Ok(())
}
