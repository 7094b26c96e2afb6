//! Column definitions
//!
//! A column is a declared projection over a row type: it knows how to
//! extract a raw [`CellValue`](crate::value::CellValue) for the engines
//! and how to render a display string for the view layer.

mod base;

pub use base::{BaseColumn, Column};
