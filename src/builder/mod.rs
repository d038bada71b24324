//! Builder API for transition table construction.
//!
//! Tables are authored sparsely: only the cells that lead somewhere other
//! than trap are written, either through the fluent [`TableBuilder`] or as
//! a serialized [`TableDefinition`]. Both paths run the audit in
//! [`crate::audit`] before a table is handed out.

pub mod config;
pub mod error;
pub mod macros;
pub mod table;

pub use config::{load_table, TableDefinition};
pub use error::BuildError;
pub use table::TableBuilder;
