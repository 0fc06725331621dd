//! Find records command implementation.

use anyhow::{Context, Result};
use clap::Args;

use airtab_core::{Formula, RecordSource};

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::parse_table;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Field to match; returns the first record whose value equals --value
    #[arg(long, requires = "value", conflicts_with = "formula")]
    pub field: Option<String>,

    /// Value to match, compared exactly
    #[arg(long, requires = "field")]
    pub value: Option<String>,

    /// Filter formula, sent as written; returns every match
    #[arg(long, required_unless_present = "field")]
    pub formula: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: FindArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;

    let records = match (&args.field, &args.value, &args.formula) {
        (Some(field), Some(value), _) => client
            .find_record_by_field(&table, field, value)
            .await
            .context("Failed to find record")?
            .into_iter()
            .collect(),
        (_, _, Some(formula)) => client
            .find_records_by_formula(&table, &Formula::raw(formula.as_str()))
            .await
            .context("Failed to find records")?,
        _ => anyhow::bail!("Pass --field with --value, or --formula"),
    };

    if records.is_empty() {
        output::nothing("No matching records.");
        return Ok(());
    }

    output::json_each(&records, args.pretty)
}
