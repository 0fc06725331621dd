//! Config subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use airtab_core::{ApiUrl, BaseId};

use crate::config::storage::{self, StoredConfig};
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Store a connection setting
    Set(SetArgs),

    /// Show the stored settings
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Key {
    ApiKey,
    Base,
    ApiUrl,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting to store
    #[arg(value_enum)]
    pub key: Key,

    /// New value
    pub value: String,
}

pub fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Set(args) => set(args),
        ConfigSubcommand::Show => show(),
    }
}

fn set(args: SetArgs) -> Result<()> {
    let mut update = StoredConfig::default();
    match args.key {
        Key::ApiKey => update.api_key = Some(args.value),
        Key::Base => {
            BaseId::new(&args.value).context("Invalid base id")?;
            update.base = Some(args.value);
        }
        Key::ApiUrl => {
            ApiUrl::new(&args.value).context("Invalid API URL")?;
            update.api_url = Some(args.value);
        }
    }

    let mut stored = storage::load_config().context("Failed to load config")?;
    stored.merge(update);
    let path = storage::save_config(&stored).context("Failed to save config")?;

    output::success(&format!("Saved to {}", path.display()));
    Ok(())
}

fn show() -> Result<()> {
    let stored = storage::load_config().context("Failed to load config")?;

    output::field("Config file", &storage::config_path()?.display().to_string());
    output::field(
        "API key",
        &stored.api_key.as_deref().map(mask).unwrap_or_else(|| "(not set)".to_string()),
    );
    output::field("Base", stored.base.as_deref().unwrap_or("(not set)"));
    output::field(
        "API URL",
        stored.api_url.as_deref().unwrap_or("(default) https://api.airtable.com"),
    );

    Ok(())
}

/// Keep only the last four characters of a secret.
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("********{}", tail)
}
