//! Form 470 lookup commands.

use anyhow::{Context, Result};
use clap::Args;

use airtab_form470::Form470;

use crate::output;

use super::Forms;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Application number, e.g. 251042800
    pub application_number: String,

    /// Also decode the Line Items JSON field
    #[arg(long)]
    pub line_items: bool,
}

#[derive(Args, Debug)]
pub struct ByStateArgs {
    /// State abbreviation, e.g. OR
    pub state: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct ByYearArgs {
    /// Funding year, e.g. 2025
    pub year: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct ByStatusArgs {
    /// Status, e.g. Committed
    pub status: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn get(args: GetArgs, forms: &Forms) -> Result<()> {
    let form = forms
        .get_by_application_number(&args.application_number)
        .await?
        .with_context(|| {
            format!(
                "No Form 470 found with application number: {}",
                args.application_number
            )
        })?;

    output::json_pretty(&form)?;

    if args.line_items {
        match form.fields.line_items()? {
            Some(items) => {
                println!();
                output::heading("Line items");
                output::json_pretty(&items)?;
            }
            None => output::nothing("No line items."),
        }
    }

    Ok(())
}

pub async fn by_state(args: ByStateArgs, forms: &Forms) -> Result<()> {
    let found = forms.get_by_state(&args.state).await?;
    print_all(&found, args.pretty)
}

pub async fn by_year(args: ByYearArgs, forms: &Forms) -> Result<()> {
    let found = forms.get_by_funding_year(&args.year).await?;
    print_all(&found, args.pretty)
}

pub async fn by_status(args: ByStatusArgs, forms: &Forms) -> Result<()> {
    let found = forms.get_by_status(&args.status).await?;
    print_all(&found, args.pretty)
}

fn print_all(found: &[Form470], pretty: bool) -> Result<()> {
    if found.is_empty() {
        output::nothing("No Form 470s found.");
        return Ok(());
    }
    output::json_each(found, pretty)
}
