//! Prefill payload command.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use airtab_form470::{ContactForm, DealRegistration};

use crate::output;

use super::Forms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Payload {
    /// General contact form
    Contact,
    /// Partner deal registration
    Deal,
}

#[derive(Args, Debug)]
pub struct PrefillArgs {
    /// Which payload to build
    #[arg(value_enum)]
    pub payload: Payload,

    /// Application number of the Form 470
    pub application_number: String,
}

pub async fn run(args: PrefillArgs, forms: &Forms) -> Result<()> {
    let form = forms
        .get_by_application_number(&args.application_number)
        .await?
        .with_context(|| {
            format!(
                "No Form 470 found with application number: {}",
                args.application_number
            )
        })?;

    match args.payload {
        Payload::Contact => output::json_pretty(&ContactForm::from_form470(&form)),
        Payload::Deal => {
            let deal = DealRegistration::from_form470(&form)
                .context("Form 470 cannot be used for a deal registration")?;
            output::json_pretty(&deal)
        }
    }
}
