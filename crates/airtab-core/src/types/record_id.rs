//! Record identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated Airtable record id (`rec` followed by 14 alphanumerics).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Create a new record id from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a record id.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        super::check_airtable_id(&s, "rec").map_err(|reason| InvalidInputError::RecordId {
            value: s.clone(),
            reason,
        })?;
        Ok(Self(s))
    }

    /// Returns the record id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record_id() {
        let id = RecordId::new("recz72i7hdynmk6r").unwrap_err();
        assert!(id.to_string().contains("14 characters"));

        let id = RecordId::new("recz72i7hdynmk6r2").unwrap();
        assert_eq!(id.as_str(), "recz72i7hdynmk6r2");
    }

    #[test]
    fn invalid_prefix() {
        assert!(RecordId::new("app742LUED30ISmmF").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(RecordId::new("rec742LUED30IS/mF").is_err());
    }
}
