//! Selection controller
//!
//! Tracks the set of row identifiers marked for bulk action. Identifiers
//! are kept in selection order (the order bulk handlers receive them) with
//! membership deduplicated.

use serde::{Deserialize, Serialize};

/// Set of selected row identifiers, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
	ids: Vec<String>,
}

impl SelectionState {
	/// Creates an empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Selected identifiers, in selection order.
	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	/// Whether the given identifier is selected.
	pub fn contains(&self, id: &str) -> bool {
		self.ids.iter().any(|existing| existing == id)
	}

	/// Number of selected identifiers.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Whether nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Adds the identifier if absent, removes it if present.
	pub fn toggle(&mut self, id: &str) {
		match self.ids.iter().position(|existing| existing == id) {
			Some(pos) => {
				self.ids.remove(pos);
			}
			None => self.ids.push(id.to_string()),
		}
	}

	/// Toggles select-all against the visible identifier set.
	///
	/// If every visible identifier is already selected the selection is
	/// cleared; otherwise the selection becomes exactly the visible set,
	/// in visible order.
	pub fn toggle_all(&mut self, visible: &[String]) {
		if visible.is_empty() {
			return;
		}
		let all_selected = visible.iter().all(|id| self.contains(id));
		if all_selected {
			self.ids.clear();
		} else {
			self.ids = visible.to_vec();
		}
	}

	/// Clears the selection.
	pub fn clear(&mut self) {
		self.ids.clear();
	}

	/// Drops identifiers no longer present in the row collection.
	pub fn retain_known<F>(&mut self, known: F)
	where
		F: Fn(&str) -> bool,
	{
		self.ids.retain(|id| known(id));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(values: &[&str]) -> Vec<String> {
		values.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn toggle_adds_then_removes() {
		let mut selection = SelectionState::new();
		selection.toggle("1");
		assert!(selection.contains("1"));
		selection.toggle("1");
		assert!(selection.is_empty());
	}

	#[test]
	fn toggle_all_from_empty_selects_visible_set() {
		let mut selection = SelectionState::new();
		selection.toggle_all(&ids(&["1", "2", "3"]));
		assert_eq!(selection.ids(), ids(&["1", "2", "3"]).as_slice());
	}

	#[test]
	fn toggle_all_clears_fully_selected_set() {
		let mut selection = SelectionState::new();
		let visible = ids(&["1", "2"]);
		selection.toggle_all(&visible);
		selection.toggle_all(&visible);
		assert!(selection.is_empty());
	}

	#[test]
	fn toggle_all_from_partial_selects_everything() {
		let mut selection = SelectionState::new();
		selection.toggle("2");
		selection.toggle_all(&ids(&["1", "2", "3"]));
		assert_eq!(selection.len(), 3);
	}

	#[test]
	fn toggle_all_on_empty_visible_set_is_noop() {
		let mut selection = SelectionState::new();
		selection.toggle("9");
		selection.toggle_all(&[]);
		// "9" is not visible, so nothing qualifies as fully selected
		assert_eq!(selection.ids(), ids(&["9"]).as_slice());
	}

	#[test]
	fn retain_known_prunes_stale_ids() {
		let mut selection = SelectionState::new();
		selection.toggle("1");
		selection.toggle("2");
		selection.retain_known(|id| id == "2");
		assert_eq!(selection.ids(), ids(&["2"]).as_slice());
	}
}
