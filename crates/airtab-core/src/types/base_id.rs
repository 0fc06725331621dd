//! Base identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated Airtable base id (`app` followed by 14 alphanumerics).
///
/// # Example
///
/// ```
/// use airtab_core::BaseId;
///
/// let base = BaseId::new("app742LUED30ISmmF").unwrap();
/// assert_eq!(base.as_str(), "app742LUED30ISmmF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseId(String);

impl BaseId {
    /// Create a new base id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a base id.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        super::check_airtable_id(&s, "app").map_err(|reason| InvalidInputError::BaseId {
            value: s.clone(),
            reason,
        })?;
        Ok(Self(s))
    }

    /// Returns the base id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BaseId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BaseId> for String {
    fn from(base: BaseId) -> Self {
        base.0
    }
}

impl AsRef<str> for BaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
