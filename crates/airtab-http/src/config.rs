//! Client configuration.

use airtab_core::{ApiKey, ApiUrl, BaseId};

/// Everything an [`AirtableClient`](crate::AirtableClient) needs to talk to
/// one base. Fixed for the lifetime of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Personal access token.
    pub api_key: ApiKey,
    /// The base every request is addressed to.
    pub base: BaseId,
    /// API root; the public Airtable API unless overridden.
    pub api_url: ApiUrl,
}

impl ClientConfig {
    /// Configuration for the public Airtable API.
    pub fn new(api_key: ApiKey, base: BaseId) -> Self {
        Self {
            api_key,
            base,
            api_url: ApiUrl::default(),
        }
    }

    /// Point the client at a different API root (a proxy or a mock server).
    pub fn with_api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = api_url;
        self
    }
}
