//! Get record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use airtab_core::RecordSource;

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::{parse_record_id, parse_table};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Record id (rec...)
    pub id: String,
}

pub async fn run(args: GetArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;
    let id = parse_record_id(&args.id)?;

    let record = client
        .get_record(&table, &id)
        .await
        .context("Failed to get record")?;

    output::json_pretty(&record)?;

    Ok(())
}
