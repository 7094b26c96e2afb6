//! Headless data table engine
//!
//! This crate provides the framework-agnostic core of a data table: pure
//! filter, sort, group and pagination engines over an in-memory row
//! collection, plus the aggregate state that drives them. Rendering,
//! actions and export live in `datagrid-tables`; nothing in this crate
//! performs I/O or depends on a UI framework.
//!
//! # Architecture
//!
//! ```text
//! rows + columns
//!     │
//!     ▼
//! Filter Engine ──▶ Sort Engine ──▶ Group Engine
//!                        │               (bypasses pagination)
//!                        ▼
//!                 Pagination Engine
//!                        │
//!                        ▼
//!                  visible rows
//! ```
//!
//! Selection and bulk-action dispatch operate orthogonally on the
//! post-processing row set.
//!
//! # Example
//!
//! ```rust
//! use datagrid_core::column::BaseColumn;
//!
//! #[derive(Debug)]
//! struct Product {
//!     sku: String,
//!     price: f64,
//! }
//!
//! let sku = BaseColumn::new("sku", "SKU", |p: &Product| p.sku.clone().into());
//! let price = BaseColumn::new("price", "Price", |p: &Product| p.price.into());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod filter;
pub mod group;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod state;
pub mod value;

// Re-exports for convenience
pub use column::Column;
pub use error::{Result, TableError};
pub use filter::{FilterKind, FilterOption, FilterState};
pub use group::RowGroup;
pub use pagination::PaginationState;
pub use selection::SelectionState;
pub use sort::{SortOrder, SortState};
pub use state::TableState;
pub use value::CellValue;
