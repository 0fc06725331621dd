//! List records command implementation.

use anyhow::{Context, Result};
use clap::Args;
use futures_util::StreamExt;

use airtab_core::{Formula, QueryOptions, RecordSource, SortField};

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::parse_table;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Restrict to a view
    #[arg(long)]
    pub view: Option<String>,

    /// Filter formula, sent as written
    #[arg(long)]
    pub filter: Option<String>,

    /// Maximum number of records across all pages
    #[arg(long)]
    pub max_records: Option<u32>,

    /// Records per request
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Sort key as Field or Field:desc (repeatable, most significant first)
    #[arg(long = "sort")]
    pub sort: Vec<SortField>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ListArgs {
    fn options(&self) -> QueryOptions {
        let mut options = QueryOptions::new();
        options.view = self.view.clone();
        options.filter = self.filter.clone().map(Formula::raw);
        options.max_records = self.max_records;
        options.page_size = self.page_size;
        options.sort = self.sort.clone();
        options
    }
}

pub async fn run(args: ListArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;
    let options = args.options();

    // Print page by page so large tables stream.
    let mut pages = client.record_pages(&table, &options);
    let mut count = 0usize;
    while let Some(page) = pages.next().await {
        let page = page.context("Failed to list records")?;
        output::json_each(&page.records, args.pretty)?;
        count += page.records.len();
    }

    if count == 0 {
        output::nothing("No records found.");
    }

    Ok(())
}
