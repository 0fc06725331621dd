//! Create record command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use airtab_core::{Fields, RecordSource};

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::{parse_table, read_json};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Fields as a JSON object, or an array of objects for a batch
    /// (inline JSON, a file path, or - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: CreateArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;

    let records = match read_json::<Value>(&args.json)? {
        Value::Array(items) => {
            let batch: Vec<Fields> = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<_, _>>()
                .context("Every batch entry must be a JSON object of fields")?;
            client
                .create_records(&table, batch)
                .await
                .context("Failed to create records")?
        }
        Value::Object(fields) => vec![
            client
                .create_record(&table, fields)
                .await
                .context("Failed to create record")?,
        ],
        _ => anyhow::bail!("Fields must be a JSON object or an array of objects"),
    };

    output::json_each(&records, false)?;
    for record in &records {
        output::success(&format!("Created record: {}", record.id));
    }

    Ok(())
}
