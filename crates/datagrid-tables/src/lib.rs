//! Declarative data tables over `datagrid-core`
//!
//! This crate binds the headless engines from `datagrid-core` into a
//! [`Table`] instance: rows plus column definitions plus table state, with
//! memoized recomputation, row/bulk action dispatch, a renderable view
//! model, and optional CSV/JSON export.
//!
//! # Architecture
//!
//! ```text
//! Table ──▶ columns (BaseColumn + typed constructors)
//!   │  ───▶ TableState (filters, sort, group, pagination, selection)
//!   │  ───▶ memoized filtered+sorted index cache
//!   ├──▶ view()   TableView: Loading | Error | Empty | Rows | Grouped
//!   ├──▶ actions  RowActions / BulkActions dispatch
//!   └──▶ export   CSV / JSON (feature "export")
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagrid_tables::{Table, TableConfig, column};
//! use datagrid_core::SortOrder;
//!
//! #[derive(Debug)]
//! struct User {
//!     id: i32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let config = TableConfig::new("user").primary_key(|u: &User| Some(u.id.to_string()));
//! let mut table = Table::with_rows(config, vec![
//!     User { id: 1, name: "Alice".into(), active: true },
//!     User { id: 2, name: "Bob".into(), active: false },
//! ]);
//! table.add_column(Box::new(column::text("name", "Name", |u: &User| u.name.clone())));
//! table.add_column(Box::new(column::boolean("active", "Active", |u: &User| u.active)));
//!
//! table.sort_by("name", SortOrder::Descending).unwrap();
//! assert_eq!(table.visible_rows()[0].name, "Bob");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod column;
#[cfg(feature = "export")]
pub mod export;
pub mod table;
pub mod view;

// Re-exports for convenience
pub use actions::{BulkActions, RowActions};
pub use datagrid_core::{Result, SortOrder, TableError};
pub use table::{GroupedRows, Table, TableConfig};
pub use view::TableView;
