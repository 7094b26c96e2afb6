//! Group engine
//!
//! Partitions the filtered+sorted row sequence into named buckets keyed by
//! a column's stringified value. Bucket order is first-seen order within
//! the sorted sequence, not alphabetical. While a group is active the
//! table bypasses pagination entirely.

use crate::column::Column;
use std::collections::HashMap;

/// Bucket key used for rows with a null value in the group column.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// One bucket of grouped rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
	/// Stringified group key.
	pub key: String,
	/// Member row indices, in filtered+sorted order.
	pub indices: Vec<usize>,
}

impl RowGroup {
	/// Number of rows in this group.
	pub fn count(&self) -> usize {
		self.indices.len()
	}
}

/// Partitions row indices into groups keyed by the column's value.
///
/// Every input index lands in exactly one group; null values bucket under
/// [`UNKNOWN_GROUP`].
pub fn group_rows<R>(
	rows: &[R],
	indices: &[usize],
	column: &dyn Column<Row = R>,
) -> Vec<RowGroup> {
	let mut groups: Vec<RowGroup> = Vec::new();
	let mut positions: HashMap<String, usize> = HashMap::new();

	for &idx in indices {
		let value = column.value(&rows[idx]);
		let key = if value.is_null() {
			UNKNOWN_GROUP.to_string()
		} else {
			value.to_string()
		};

		match positions.get(&key) {
			Some(&pos) => groups[pos].indices.push(idx),
			None => {
				positions.insert(key.clone(), groups.len());
				groups.push(RowGroup {
					key,
					indices: vec![idx],
				});
			}
		}
	}

	groups
}
