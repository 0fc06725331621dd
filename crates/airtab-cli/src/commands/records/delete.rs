//! Delete record command implementation.

use anyhow::{Context, Result};
use clap::Args;

use airtab_core::RecordSource;

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::{parse_record_id, parse_table};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Record ids; more than one is sent as a single batch
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub async fn run(args: DeleteArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;
    let mut ids = args
        .ids
        .iter()
        .map(|id| parse_record_id(id))
        .collect::<Result<Vec<_>>>()?;

    let deleted = if ids.len() == 1 {
        let id = ids.remove(0);
        vec![
            client
                .delete_record(&table, &id)
                .await
                .context("Failed to delete record")?,
        ]
    } else {
        client
            .delete_records(&table, ids)
            .await
            .context("Failed to delete records")?
    };

    output::json_each(&deleted, false)?;
    for result in &deleted {
        output::success(&format!("Deleted record: {}", result.id));
    }

    Ok(())
}
