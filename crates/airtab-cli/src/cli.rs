//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::form470::Form470Command;
use crate::commands::records::RecordsCommand;
use crate::commands::schema::SchemaArgs;
use crate::commands::settings::ConfigCommand;

/// Airtable CLI tool for exploring bases and the Form 470 table.
#[derive(Parser, Debug)]
#[command(name = "airtab")]
#[command(author, version = env!("AIRTAB_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect. Unset values fall back to the stored config.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Airtable personal access token
    #[arg(long, env = "AIRTABLE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base id (app...)
    #[arg(long, env = "AIRTABLE_BASE_ID", global = true)]
    pub base: Option<String>,

    /// API root URL
    #[arg(long, env = "AIRTABLE_API_URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generic record operations on any table
    Records(RecordsCommand),

    /// Form 470 lookups and prefill payloads
    #[command(name = "form470")]
    Form470(Form470Command),

    /// Show the base schema (needs the schema.bases:read scope)
    Schema(SchemaArgs),

    /// Manage stored connection settings
    Config(ConfigCommand),
}
