//! Connection settings resolution.
//!
//! Each value comes from the first of: command-line flag, environment
//! variable (both handled by clap), stored config file, built-in default.
//! Commands tied to one base (Form 470) pin it ahead of the stored config.

pub mod storage;

use anyhow::{Context, Result};

use airtab_core::{ApiKey, ApiUrl, BaseId};
use airtab_http::{AirtableClient, ClientConfig};

use crate::cli::ConnectionArgs;
use storage::StoredConfig;

/// Build client settings from flags and the stored config.
///
/// `pinned_base` outranks the stored base but not `--base` or
/// `AIRTABLE_BASE_ID`.
pub fn resolve(
    args: &ConnectionArgs,
    stored: StoredConfig,
    pinned_base: Option<&str>,
) -> Result<ClientConfig> {
    let api_key = args
        .api_key
        .clone()
        .or(stored.api_key)
        .context("No API key. Pass --api-key, set AIRTABLE_API_KEY, or run 'airtab config set api-key ...'.")?;

    let base = args
        .base
        .clone()
        .or_else(|| pinned_base.map(str::to_string))
        .or(stored.base)
        .context("No base id. Pass --base, set AIRTABLE_BASE_ID, or run 'airtab config set base ...'.")?;
    let base = BaseId::new(base).context("Invalid base id")?;

    let config = ClientConfig::new(ApiKey::new(api_key), base);
    match args.api_url.clone().or(stored.api_url) {
        Some(url) => Ok(config.with_api_url(ApiUrl::new(url).context("Invalid API URL")?)),
        None => Ok(config),
    }
}

/// Create a client from flags, environment and stored config.
pub fn client(args: &ConnectionArgs, pinned_base: Option<&str>) -> Result<AirtableClient> {
    let stored = storage::load_config().context("Failed to load config")?;
    let config = resolve(args, stored, pinned_base)?;
    tracing::info!(
        base = config.base.as_str(),
        api_url = config.api_url.as_str(),
        "Resolved connection settings"
    );
    AirtableClient::new(config).context("Failed to create Airtable client")
}
