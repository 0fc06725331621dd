//! Table reference type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A table within a base, addressed by id (`tbl…`) or by name.
///
/// Airtable accepts either form in record URLs. Ids survive table renames,
/// so prefer them for anything long-lived.
///
/// # Example
///
/// ```
/// use airtab_core::TableRef;
///
/// let by_id = TableRef::new("tblPRqxmCUOo09XCP").unwrap();
/// assert!(by_id.is_id());
///
/// let by_name = TableRef::new("Form 470").unwrap();
/// assert!(!by_name.is_id());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableRef(String);

impl TableRef {
    /// Create a new table reference, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();

        if s.trim().is_empty() {
            return Err(InvalidInputError::Table {
                value: s,
                reason: "must be non-empty".to_string(),
            }
            .into());
        }

        if s.chars().any(char::is_control) {
            return Err(InvalidInputError::Table {
                value: s,
                reason: "must not contain control characters".to_string(),
            }
            .into());
        }

        Ok(Self(s))
    }

    /// Returns true if this looks like a table id rather than a name.
    pub fn is_id(&self) -> bool {
        super::check_airtable_id(&self.0, "tbl").is_ok()
    }

    /// Returns the table id or name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TableRef {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<TableRef> for String {
    fn from(table: TableRef) -> Self {
        table.0
    }
}

impl AsRef<str> for TableRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
