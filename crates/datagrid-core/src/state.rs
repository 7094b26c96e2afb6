//! Aggregate table state and its transitions
//!
//! [`TableState`] owns the four pieces of derived-view state (filters,
//! sort, group, pagination) plus the selection, with reducer-style
//! transition methods. Transitions replace whole values rather than
//! mutating partially, and degrade silently: a transition referencing a
//! column that no longer exists is dropped, never an error. The
//! validating counterparts of these operations live on the table facade.

use crate::filter::FilterState;
use crate::pagination::PaginationState;
use crate::selection::SelectionState;
use crate::sort::{self, SortOrder, SortState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// All ephemeral state owned by one table instance.
///
/// Recomputed views derive from this state plus the row collection; none
/// of it is persisted. `pagination` is `None` until pagination is enabled,
/// in which case the whole filtered row set is a single visible page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
	/// Active per-column filters.
	pub filters: FilterState,
	/// Active sort descriptor, if any.
	pub sort: Option<SortState>,
	/// Active group-by column, if any.
	pub group_by: Option<String>,
	/// Pagination, if enabled.
	pub pagination: Option<PaginationState>,
	/// Selected row identifiers.
	pub selection: SelectionState,
}

impl TableState {
	/// Creates a fresh state with no filters, sort, group or pagination.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets or clears one column's filter value.
	///
	/// An empty value removes the entry. Any filter change resets
	/// pagination to the first page.
	pub fn set_filter(&mut self, column: impl Into<String>, value: impl Into<String>) {
		let column = column.into();
		let value = value.into();
		if value.is_empty() {
			self.filters.remove(&column);
		} else {
			self.filters.insert(column, value);
		}
		self.reset_page();
	}

	/// Removes one column's filter.
	pub fn clear_filter(&mut self, column: &str) {
		if self.filters.remove(column).is_some() {
			self.reset_page();
		}
	}

	/// Removes all filters.
	pub fn clear_filters(&mut self) {
		if !self.filters.is_empty() {
			self.filters.clear();
			self.reset_page();
		}
	}

	/// Advances the tri-state sort cycle for a column activation.
	pub fn cycle_sort(&mut self, column: &str) {
		self.sort = sort::cycle(self.sort.as_ref(), column);
	}

	/// Sets the sort descriptor directly.
	pub fn set_sort(&mut self, column: impl Into<String>, order: SortOrder) {
		self.sort = Some(SortState::new(column, order));
	}

	/// Clears the sort, restoring input order.
	pub fn clear_sort(&mut self) {
		self.sort = None;
	}

	/// Sets or clears the group-by column.
	pub fn set_group(&mut self, column: Option<String>) {
		self.group_by = column;
	}

	/// Enables pagination with the given page size, starting at page 1.
	pub fn enable_pagination(&mut self, per_page: u64) {
		self.pagination = Some(PaginationState {
			page: 1,
			per_page: per_page.max(1),
		});
	}

	/// Disables pagination; all filtered rows become visible.
	pub fn disable_pagination(&mut self) {
		self.pagination = None;
	}

	/// Changes the page size, resetting to page 1.
	pub fn set_page_size(&mut self, per_page: u64) {
		match self.pagination.as_mut() {
			Some(pagination) => pagination.set_per_page(per_page),
			None => self.enable_pagination(per_page),
		}
	}

	/// Resets pagination to the first page.
	pub fn reset_page(&mut self) {
		if let Some(pagination) = self.pagination.as_mut() {
			pagination.first();
		}
	}

	/// Drops filter, sort and group state referencing unknown columns.
	///
	/// Columns may be added and removed between renders; stale references
	/// are discarded silently so the table stays renderable.
	pub fn sync_columns(&mut self, known: &[&str]) {
		let stale: Vec<String> = self
			.filters
			.keys()
			.filter(|name| !known.contains(&name.as_str()))
			.cloned()
			.collect();
		for name in stale {
			debug!(column = name.as_str(), "dropping filter for removed column");
			self.filters.remove(&name);
		}

		if let Some(sort) = &self.sort
			&& !known.contains(&sort.field.as_str())
		{
			debug!(column = sort.field.as_str(), "dropping sort for removed column");
			self.sort = None;
		}

		if let Some(group) = &self.group_by
			&& !known.contains(&group.as_str())
		{
			debug!(column = group.as_str(), "dropping group for removed column");
			self.group_by = None;
		}
	}
}
