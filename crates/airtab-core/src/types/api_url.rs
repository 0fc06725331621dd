//! API root URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::{BaseId, RecordId, TableRef};

/// The public Airtable API root.
const AIRTABLE_API: &str = "https://api.airtable.com";

/// A validated Airtable API root URL.
///
/// Endpoint URLs are built by appending percent-encoded path segments, so
/// table names containing spaces or slashes are addressed correctly.
///
/// # Network URLs
///
/// The root must use HTTPS; plain HTTP is accepted only for localhost so
/// tests can point the client at a mock server.
///
/// # Example
///
/// ```
/// use airtab_core::{ApiUrl, BaseId, TableRef};
///
/// let api = ApiUrl::default();
/// let base = BaseId::new("app742LUED30ISmmF").unwrap();
/// let table = TableRef::new("Form 470").unwrap();
/// assert_eq!(
///     api.table_url(&base, &table).as_str(),
///     "https://api.airtable.com/v0/app742LUED30ISmmF/Form%20470"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of a table's record collection.
    pub fn table_url(&self, base: &BaseId, table: &TableRef) -> Url {
        self.endpoint(&[base.as_str(), table.as_str()])
    }

    /// Returns the URL of a single record.
    pub fn record_url(&self, base: &BaseId, table: &TableRef, id: &RecordId) -> Url {
        self.endpoint(&[base.as_str(), table.as_str(), id.as_str()])
    }

    /// Returns the metadata URL listing a base's tables.
    pub fn meta_tables_url(&self, base: &BaseId) -> Url {
        self.endpoint(&["meta", "bases", base.as_str(), "tables"])
    }

    /// Returns the root URL as a string, without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if this points at the local machine.
    pub fn is_localhost(&self) -> bool {
        self.0
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]")
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Validated at construction: the URL can be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("v0").extend(segments);
        }
        url.set_query(None);
        url
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must have a host
        let Some(host) = url.host_str() else {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        };

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = host == "localhost" || host == "127.0.0.1" || host == "[::1]";
        let scheme = url.scheme();

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(AIRTABLE_API).expect("static API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
