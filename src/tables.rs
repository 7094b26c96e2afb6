//! Declarative tables module.
//!
//! This module provides access to the table binding layer: [`Table`]
//! configuration, typed column constructors, row and bulk actions, the
//! renderable view model, and (behind the `export` feature) CSV/JSON
//! export.
//!
//! # Examples
//!
//! ```rust
//! use datagrid::tables::{Table, TableConfig, column};
//!
//! let mut table: Table<(String, bool)> = Table::new(TableConfig::new("entry").plural("entries"));
//! table.add_column(Box::new(column::text("name", "Name", |e: &(String, bool)| {
//!     e.0.clone()
//! })));
//! ```
//!
//! [`Table`]: datagrid_tables::Table

pub use datagrid_tables::*;
