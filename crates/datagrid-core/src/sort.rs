//! Sort engine
//!
//! Single-column sorting with type-aware comparison (dates, then numbers,
//! then case-insensitive text) and null-last placement under both
//! directions. The tri-state cycle (none → ascending → descending → none)
//! lives here as a pure transition; the comparator itself is
//! direction-agnostic about nulls.

use crate::column::Column;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	/// Smallest value first.
	Ascending,
	/// Largest value first.
	Descending,
}

/// Active sort descriptor: at most one per table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	/// Column name being sorted.
	pub field: String,
	/// Sort direction.
	pub order: SortOrder,
}

impl SortState {
	/// Creates a new sort descriptor.
	pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
		Self {
			field: field.into(),
			order,
		}
	}
}

/// Advances the tri-state sort cycle for a column activation.
///
/// Repeated activation of the same column cycles
/// none → ascending → descending → none; activating a different column
/// starts over at ascending.
pub fn cycle(current: Option<&SortState>, column: &str) -> Option<SortState> {
	match current {
		Some(state) if state.field == column => match state.order {
			SortOrder::Ascending => Some(SortState::new(column, SortOrder::Descending)),
			SortOrder::Descending => None,
		},
		_ => Some(SortState::new(column, SortOrder::Ascending)),
	}
}

/// Sorts row indices by the given column.
///
/// Rows with a null value in the sort column always come last, in both
/// directions; among themselves they keep their relative order. The sort
/// is stable, so an absent or equal comparison preserves input order.
pub fn sort_rows<R>(
	rows: &[R],
	indices: &mut [usize],
	column: &dyn Column<Row = R>,
	order: SortOrder,
) {
	indices.sort_by(|&a, &b| {
		let va = column.value(&rows[a]);
		let vb = column.value(&rows[b]);
		match (va.is_null(), vb.is_null()) {
			(true, true) => Ordering::Equal,
			(true, false) => Ordering::Greater,
			(false, true) => Ordering::Less,
			(false, false) => {
				let ordering = va.compare(&vb);
				match order {
					SortOrder::Ascending => ordering,
					SortOrder::Descending => ordering.reverse(),
				}
			}
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycle_starts_ascending() {
		let next = cycle(None, "name").unwrap();
		assert_eq!(next, SortState::new("name", SortOrder::Ascending));
	}

	#[test]
	fn cycle_same_column_goes_descending_then_clears() {
		let asc = SortState::new("name", SortOrder::Ascending);
		let desc = cycle(Some(&asc), "name").unwrap();
		assert_eq!(desc.order, SortOrder::Descending);
		assert!(cycle(Some(&desc), "name").is_none());
	}

	#[test]
	fn cycle_other_column_resets_to_ascending() {
		let desc = SortState::new("name", SortOrder::Descending);
		let next = cycle(Some(&desc), "price").unwrap();
		assert_eq!(next, SortState::new("price", SortOrder::Ascending));
	}
}
