//! Pagination engine
//!
//! Slices the filtered+sorted row sequence into 1-based pages. All
//! navigation clamps rather than errors: an out-of-range target lands on
//! the nearest valid page, and an empty collection still has a valid
//! (empty) page 1.

use crate::error::{Result, TableError};
use serde::{Deserialize, Serialize};

/// Default page size, matching the usual admin list view.
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
	/// Page number (1-indexed)
	pub page: u64,
	/// Items per page
	pub per_page: u64,
}

impl Default for PaginationState {
	fn default() -> Self {
		Self {
			page: 1,
			per_page: DEFAULT_PAGE_SIZE,
		}
	}
}

impl PaginationState {
	/// Creates a pagination state, rejecting a page or page size below 1.
	pub fn new(page: u64, per_page: u64) -> Result<Self> {
		if page < 1 || per_page < 1 {
			return Err(TableError::InvalidPagination);
		}
		Ok(Self { page, per_page })
	}

	/// Total number of pages for `row_count` rows, never less than 1.
	pub fn total_pages(&self, row_count: usize) -> u64 {
		let pages = (row_count as u64).div_ceil(self.per_page);
		pages.max(1)
	}

	/// Clamps the current page into `1..=total_pages`.
	pub fn clamp(&mut self, row_count: usize) {
		self.page = self.page.clamp(1, self.total_pages(row_count));
	}

	/// Half-open slice bounds of the current page within `row_count` rows.
	pub fn slice_bounds(&self, row_count: usize) -> (usize, usize) {
		let start = ((self.page - 1) * self.per_page) as usize;
		let start = start.min(row_count);
		let end = (start + self.per_page as usize).min(row_count);
		(start, end)
	}

	/// Jumps to the first page.
	pub fn first(&mut self) {
		self.page = 1;
	}

	/// Jumps to the last page.
	pub fn last(&mut self, row_count: usize) {
		self.page = self.total_pages(row_count);
	}

	/// Moves one page back, stopping at page 1.
	pub fn previous(&mut self) {
		self.page = self.page.saturating_sub(1).max(1);
	}

	/// Moves one page forward, stopping at the last page.
	pub fn next(&mut self, row_count: usize) {
		self.page = (self.page + 1).min(self.total_pages(row_count));
	}

	/// Changes the page size, resetting to page 1.
	///
	/// Reset avoids landing on a page that no longer exists under the new
	/// size. A size below 1 is clamped to 1.
	pub fn set_per_page(&mut self, per_page: u64) {
		self.per_page = per_page.max(1);
		self.page = 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_zero_page_or_size() {
		assert!(PaginationState::new(0, 10).is_err());
		assert!(PaginationState::new(1, 0).is_err());
		assert!(PaginationState::new(1, 1).is_ok());
	}

	#[test]
	fn total_pages_is_at_least_one() {
		let state = PaginationState::new(1, 10).unwrap();
		assert_eq!(state.total_pages(0), 1);
		assert_eq!(state.total_pages(10), 1);
		assert_eq!(state.total_pages(11), 2);
		assert_eq!(state.total_pages(25), 3);
	}

	#[test]
	fn slice_bounds_clamp_to_row_count() {
		let state = PaginationState::new(3, 10).unwrap();
		assert_eq!(state.slice_bounds(25), (20, 25));
		let beyond = PaginationState::new(9, 10).unwrap();
		assert_eq!(beyond.slice_bounds(25), (25, 25));
	}

	#[test]
	fn navigation_clamps() {
		let mut state = PaginationState::new(1, 10).unwrap();
		state.previous();
		assert_eq!(state.page, 1);
		state.next(25);
		assert_eq!(state.page, 2);
		state.last(25);
		assert_eq!(state.page, 3);
		state.next(25);
		assert_eq!(state.page, 3);
		state.first();
		assert_eq!(state.page, 1);
	}

	#[test]
	fn page_size_change_resets_page() {
		let mut state = PaginationState::new(3, 10).unwrap();
		state.set_per_page(50);
		assert_eq!(state.page, 1);
		assert_eq!(state.per_page, 50);
	}
}
