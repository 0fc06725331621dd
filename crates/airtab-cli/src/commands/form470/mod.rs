//! Form 470 subcommands.

mod lookup;
mod prefill;

use anyhow::Result;
use clap::{Args, Subcommand};

use airtab_form470::{DEFAULT_BASE, DEFAULT_VIEW, Form470Table};
use airtab_http::AirtableClient;

use crate::cli::ConnectionArgs;
use crate::commands::records::{fields, parse_table};
use crate::config;

#[derive(Args, Debug)]
pub struct Form470Command {
    /// Table with the Form 470 schema (defaults to the Form 470 table)
    #[arg(long, global = true)]
    pub table: Option<String>,

    #[command(subcommand)]
    pub command: Form470Subcommand,
}

#[derive(Subcommand, Debug)]
pub enum Form470Subcommand {
    /// Look up a Form 470 by application number
    Get(lookup::GetArgs),

    /// List Form 470s for a state abbreviation (case-sensitive)
    ByState(lookup::ByStateArgs),

    /// List Form 470s for a funding year
    ByYear(lookup::ByYearArgs),

    /// List Form 470s with a status
    ByStatus(lookup::ByStatusArgs),

    /// Survey the fields used in the Form 470 view
    Fields(SurveyArgs),

    /// Build an outreach payload from a Form 470
    Prefill(prefill::PrefillArgs),
}

#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// Number of records to sample
    #[arg(long, default_value_t = 10)]
    pub max_records: u32,
}

pub async fn handle(cmd: Form470Command, conn: &ConnectionArgs) -> Result<()> {
    let client = config::client(conn, Some(DEFAULT_BASE))?;
    let forms = match &cmd.table {
        Some(table) => Form470Table::with_table(client, parse_table(table)?),
        None => Form470Table::new(client),
    };

    match cmd.command {
        Form470Subcommand::Get(args) => lookup::get(args, &forms).await,
        Form470Subcommand::ByState(args) => lookup::by_state(args, &forms).await,
        Form470Subcommand::ByYear(args) => lookup::by_year(args, &forms).await,
        Form470Subcommand::ByStatus(args) => lookup::by_status(args, &forms).await,
        Form470Subcommand::Prefill(args) => prefill::run(args, &forms).await,
        Form470Subcommand::Fields(args) => {
            // The default view only exists on the default table.
            let view = cmd.table.is_none().then(|| DEFAULT_VIEW.to_string());
            let survey =
                fields::survey(forms.source(), forms.table(), view, args.max_records).await?;
            survey.print();
            Ok(())
        }
    }
}

type Forms = Form470Table<AirtableClient>;
