//! Headless table engines module.
//!
//! This module provides access to the engine layer: cell values, column
//! definitions, filter/sort/group/pagination/selection state and the
//! reducer-style [`TableState`](datagrid_core::TableState).
//!
//! # Examples
//!
//! ```rust
//! use datagrid::core::{CellValue, SortOrder};
//!
//! let price = CellValue::from(9.99);
//! assert_eq!(price.to_string(), "9.99");
//! let _ = SortOrder::Ascending;
//! ```

pub use datagrid_core::*;
