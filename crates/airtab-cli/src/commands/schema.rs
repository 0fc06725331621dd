//! Base schema command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use airtab_http::TableSchema;

use crate::cli::ConnectionArgs;
use crate::{config, output};

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Only show this table (id or name)
    #[arg(long)]
    pub table: Option<String>,

    /// Print the raw metadata as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SchemaArgs, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, None)?;
    let schema = client
        .base_schema()
        .await
        .context("Failed to fetch base schema (the key needs the schema.bases:read scope)")?;

    let tables: Vec<&TableSchema> = match &args.table {
        Some(wanted) => vec![
            schema
                .table(wanted)
                .with_context(|| format!("No table '{}' in this base", wanted))?,
        ],
        None => schema.tables.iter().collect(),
    };

    if args.json {
        return output::json_pretty(&tables);
    }

    for table in tables {
        output::heading(&format!("{} ({})", table.name, table.id));
        for field in &table.fields {
            println!("  - {} {}", field.name, field.kind.dimmed());
        }
        if !table.views.is_empty() {
            let views: Vec<_> = table
                .views
                .iter()
                .map(|v| format!("{} ({})", v.name, v.id))
                .collect();
            output::field("  Views", &views.join(", "));
        }
        println!();
    }

    Ok(())
}
