//! List query options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

use super::Formula;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(InvalidInputError::Other {
                message: format!("unknown sort direction '{}'", s),
            }
            .into()),
        }
    }
}

/// One key of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SortField {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    /// Parses `Field` or `Field:desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((field, dir)) if !field.is_empty() => {
                Ok(SortField::new(field, dir.parse::<Direction>()?))
            }
            _ if !s.is_empty() => Ok(SortField::new(s, Direction::Asc)),
            _ => Err(InvalidInputError::Other {
                message: "sort field must be non-empty".to_string(),
            }
            .into()),
        }
    }
}

/// Options for listing records.
///
/// Every option is independently optional; an unset option leaves the
/// source's default in place. Options are forwarded to the source as-is and
/// never re-applied locally.
///
/// # Example
///
/// ```
/// use airtab_core::{Direction, Formula, QueryOptions};
///
/// let options = QueryOptions::new()
///     .filter(Formula::eq("State", "OR"))
///     .sort("Funding Year", Direction::Desc)
///     .page_size(50);
/// assert_eq!(options.page_size, Some(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Restrict to the records (and order) of a named view.
    pub view: Option<String>,
    /// Server-side filter.
    pub filter: Option<Formula>,
    /// Upper bound on the total number of records returned across pages.
    pub max_records: Option<u32>,
    /// Records per page requested from the source.
    pub page_size: Option<u32>,
    /// Sort keys, most significant first.
    pub sort: Vec<SortField>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn filter(mut self, formula: Formula) -> Self {
        self.filter = Some(formula);
        self
    }

    pub fn max_records(mut self, max: u32) -> Self {
        self.max_records = Some(max);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.sort.push(SortField::new(field, direction));
        self
    }

    /// Returns true if the cap has been met by `count` records.
    pub(crate) fn cap_reached(&self, count: usize) -> bool {
        self.max_records.is_some_and(|max| count >= max as usize)
    }
}
