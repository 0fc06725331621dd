//! Query construction: list options and filter formulas.

mod formula;
mod options;

pub use formula::{Formula, Literal};
pub use options::{Direction, QueryOptions, SortField};
