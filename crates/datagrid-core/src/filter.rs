//! Filter engine
//!
//! Applies per-column predicates across all declared filterable columns.
//! Active predicates combine with AND semantics: a row survives only when
//! it passes every active filter. Filters referencing unknown or
//! non-filterable columns are skipped, keeping stale state harmless.

use crate::column::Column;
use crate::value::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Predicate kind applied by a column's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
	/// Case-insensitive substring match (the default).
	#[default]
	Text,
	/// Exact match against an enumerated option value.
	Select,
	/// Substring match over the date's display form.
	Date,
	/// Literal `true`/`false` match against the value's truthiness.
	Boolean,
}

/// One value/label pair offered by a select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Submitted filter value.
	pub value: String,
	/// Display label.
	pub label: String,
}

impl FilterOption {
	/// Creates a new option.
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Active filters, keyed by column name.
///
/// At most one filter value per column; an absent or empty entry means
/// "no filter on this column".
pub type FilterState = HashMap<String, String>;

/// Tests a single cell value against a filter query.
///
/// Null values fail every active filter. A select filter without options
/// falls back to text semantics; the caller is expected to have logged
/// the degradation.
pub fn matches(value: &CellValue, kind: FilterKind, has_options: bool, query: &str) -> bool {
	if value.is_null() {
		return false;
	}
	match kind {
		FilterKind::Select if has_options => value.to_string() == query,
		FilterKind::Boolean => match query.parse::<bool>() {
			Ok(wanted) => value.truthy() == wanted,
			// Unparseable boolean query: treat the filter as inactive
			Err(_) => true,
		},
		_ => value
			.to_string()
			.to_lowercase()
			.contains(&query.to_lowercase()),
	}
}

/// Applies all active filters to `rows`, returning surviving row indices.
///
/// Indices come back in input order; downstream engines (sort, group,
/// pagination) operate on them without cloning rows.
pub fn apply_filters<R>(
	rows: &[R],
	columns: &[Box<dyn Column<Row = R>>],
	filters: &FilterState,
) -> Vec<usize> {
	// Resolve filters to columns once, not per row
	let mut active: Vec<(&dyn Column<Row = R>, FilterKind, bool, &str)> = Vec::new();
	for (name, query) in filters {
		if query.is_empty() {
			continue;
		}
		let Some(column) = columns.iter().find(|c| c.name() == name) else {
			continue;
		};
		if !column.filterable() {
			continue;
		}
		let mut kind = column.filter_kind();
		let has_options = !column.filter_options().is_empty();
		if kind == FilterKind::Select && !has_options {
			warn!(column = name.as_str(), "select filter without options, falling back to text");
			kind = FilterKind::Text;
		}
		active.push((column.as_ref(), kind, has_options, query.as_str()));
	}

	if active.is_empty() {
		return (0..rows.len()).collect();
	}

	(0..rows.len())
		.filter(|&idx| {
			active
				.iter()
				.all(|(column, kind, has_options, query)| {
					matches(&column.value(&rows[idx]), *kind, *has_options, query)
				})
		})
		.collect()
}
