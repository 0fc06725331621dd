//! Subcommand implementations.

pub mod form470;
pub mod records;
pub mod schema;
pub mod settings;
