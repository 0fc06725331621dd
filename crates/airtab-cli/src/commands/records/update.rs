//! Update and replace command implementation.

use anyhow::{Context, Result};
use clap::Args;

use airtab_core::{Fields, RecordSource, RecordUpdate};

use crate::cli::ConnectionArgs;
use crate::{config, output};

use super::{parse_record_id, parse_table, read_json};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Table id (tbl...) or name
    pub table: String,

    /// Record id; omit to send a batch of {"id", "fields"} objects
    pub id: Option<String>,

    /// Fields as JSON (inline, a file path, or - for stdin)
    #[arg(long)]
    pub json: String,
}

/// How the new fields combine with the old ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// PATCH: fields not named are kept.
    Merge,
    /// PUT: fields not named are cleared.
    Replace,
}

pub async fn run(args: UpdateArgs, conn: &ConnectionArgs, mode: Mode) -> Result<()> {
    let client = config::client(conn, None)?;
    let table = parse_table(&args.table)?;

    let records = match &args.id {
        Some(id) => {
            let id = parse_record_id(id)?;
            let fields: Fields = read_json(&args.json)?;
            let record = match mode {
                Mode::Merge => client.update_record(&table, &id, fields).await,
                Mode::Replace => client.replace_record(&table, &id, fields).await,
            };
            vec![record.context("Failed to write record")?]
        }
        None => {
            let updates: Vec<RecordUpdate> = read_json(&args.json)
                .context("Without a record id, expected an array of {\"id\", \"fields\"} objects")?;
            let records = match mode {
                Mode::Merge => client.update_records(&table, updates).await,
                Mode::Replace => client.replace_records(&table, updates).await,
            };
            records.context("Failed to write records")?
        }
    };

    output::json_each(&records, false)?;
    let verb = match mode {
        Mode::Merge => "Updated",
        Mode::Replace => "Replaced",
    };
    for record in &records {
        output::success(&format!("{} record: {}", verb, record.id));
    }

    Ok(())
}
