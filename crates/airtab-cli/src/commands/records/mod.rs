//! Generic record subcommands.

mod create;
mod delete;
pub mod fields;
mod find;
mod get;
mod list;
mod update;

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;

use airtab_core::{RecordId, TableRef};

use crate::cli::ConnectionArgs;

#[derive(Args, Debug)]
pub struct RecordsCommand {
    #[command(subcommand)]
    pub command: RecordsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RecordsSubcommand {
    /// List records, following pagination
    List(list::ListArgs),

    /// Fetch a single record
    Get(get::GetArgs),

    /// Create one record, or a batch from a JSON array
    Create(create::CreateArgs),

    /// Merge fields into a record (unnamed fields are kept)
    Update(update::UpdateArgs),

    /// Replace a record's fields (unnamed fields are cleared)
    Replace(update::UpdateArgs),

    /// Delete one or more records
    Delete(delete::DeleteArgs),

    /// Find records by field value or formula
    Find(find::FindArgs),

    /// Survey the field names used by a sample of records
    Fields(fields::FieldsArgs),
}

pub async fn handle(cmd: RecordsCommand, conn: &ConnectionArgs) -> Result<()> {
    match cmd.command {
        RecordsSubcommand::List(args) => list::run(args, conn).await,
        RecordsSubcommand::Get(args) => get::run(args, conn).await,
        RecordsSubcommand::Create(args) => create::run(args, conn).await,
        RecordsSubcommand::Update(args) => update::run(args, conn, update::Mode::Merge).await,
        RecordsSubcommand::Replace(args) => update::run(args, conn, update::Mode::Replace).await,
        RecordsSubcommand::Delete(args) => delete::run(args, conn).await,
        RecordsSubcommand::Find(args) => find::run(args, conn).await,
        RecordsSubcommand::Fields(args) => fields::run(args, conn).await,
    }
}

pub(crate) fn parse_table(table: &str) -> Result<TableRef> {
    TableRef::new(table).context("Invalid table")
}

pub(crate) fn parse_record_id(id: &str) -> Result<RecordId> {
    RecordId::new(id).context("Invalid record id")
}

/// Read JSON from inline text, a file, or stdin (`-`).
pub(crate) fn read_json<T: DeserializeOwned>(source: &str) -> Result<T> {
    let trimmed = source.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return serde_json::from_str(source).context("Invalid inline JSON");
    }

    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")
    } else {
        let content = std::fs::read_to_string(source).context("Failed to read JSON file")?;
        serde_json::from_str(&content).context("Invalid JSON in file")
    }
}
