//! # Datagrid
//!
//! A declarative, headless data table engine for Rust.
//!
//! Datagrid turns a plain `Vec<R>` of domain rows plus a set of column
//! definitions into a fully managed table: text/select/date/boolean
//! filtering, tri-state sorting with null-last ordering, grouping,
//! 1-indexed pagination, row selection with bulk actions, and a
//! renderable view model. It is headless: no rendering framework is
//! assumed, the output is plain data a UI layer can draw.
//!
//! ## Core Principles
//!
//! - **Declarative columns**: each column owns its extractor, renderer
//!   and capability flags; the engines never inspect rows directly
//! - **Type Safety**: rows stay as your domain type end to end, cell
//!   values are extracted through typed closures
//! - **Derived, not stored**: the filtered and sorted row set is
//!   recomputed (and memoized) from state, never duplicated
//! - **Graceful degradation**: event-style state changes on a
//!   misconfigured column log and no-op instead of failing the table
//!
//! ## Feature Flags
//!
//! - `export` - CSV and JSON export of the filtered, sorted row set
//!
//! ## Quick Example
//!
//! ```rust
//! use datagrid::prelude::*;
//!
//! #[derive(Debug)]
//! struct Product {
//!     id: i64,
//!     name: String,
//!     price: Option<f64>,
//!     active: bool,
//! }
//!
//! let config = TableConfig::new("product").primary_key(|p: &Product| Some(p.id.to_string()));
//! let mut table = Table::with_rows(config, vec![
//!     Product { id: 1, name: "Anvil".into(), price: Some(9.99), active: true },
//!     Product { id: 2, name: "Bolt".into(), price: None, active: false },
//! ]);
//! table.add_column(Box::new(column::text("name", "Name", |p: &Product| p.name.clone())));
//! table.add_column(Box::new(column::number("price", "Price", |p: &Product| p.price)));
//! table.add_column(Box::new(column::boolean("active", "Active", |p: &Product| p.active)));
//!
//! table.sort_by("price", SortOrder::Ascending)?;
//! // Null prices sort last regardless of direction.
//! assert_eq!(table.visible_rows().last().unwrap().id, 2);
//!
//! table.set_filter("active", "true");
//! assert_eq!(table.filtered_rows_count(), 1);
//! # Ok::<(), datagrid::TableError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

// Module re-exports, one per workspace member
pub mod core;
pub mod tables;

// Re-export engine types
pub use datagrid_core::{
	CellValue, Column, FilterKind, FilterOption, FilterState, PaginationState, Result, RowGroup,
	SelectionState, SortOrder, SortState, TableError, TableState,
};

// Re-export table binding types
pub use datagrid_tables::{
	BulkActions, GroupedRows, RowActions, Table, TableConfig, TableView, column,
};

/// Commonly used types, importable in one line.
pub mod prelude {
	pub use crate::{
		BulkActions,
		CellValue,
		Column,
		FilterKind,
		FilterOption,
		PaginationState,
		RowActions,
		SortOrder,
		Table,
		TableConfig,
		TableError,
		TableView,
		// Typed column constructors
		column,
	};
}
