//! Row and bulk action dispatch
//!
//! Actions are pure callback forwards: the table performs no business
//! logic for any action and awaits nothing from the handlers. A failed
//! bulk handler leaves the selection untouched; clearing or retaining it
//! is the caller's decision based on the outcome.

use datagrid_core::error::{Result, TableError};
use std::fmt;

/// Reserved key for the view row action.
pub const ACTION_VIEW: &str = "view";
/// Reserved key for the edit row action.
pub const ACTION_EDIT: &str = "edit";
/// Reserved key for the delete row action.
pub const ACTION_DELETE: &str = "delete";

type RowHandler<R> = Box<dyn Fn(&R)>;

struct CustomAction<R> {
	key: String,
	label: String,
	handler: RowHandler<R>,
}

/// Per-row action callbacks: view, edit, delete, plus custom actions.
pub struct RowActions<R> {
	on_view: Option<RowHandler<R>>,
	on_edit: Option<RowHandler<R>>,
	on_delete: Option<RowHandler<R>>,
	custom: Vec<CustomAction<R>>,
}

impl<R> RowActions<R> {
	/// Creates an empty action set.
	pub fn new() -> Self {
		Self {
			on_view: None,
			on_edit: None,
			on_delete: None,
			custom: Vec::new(),
		}
	}

	/// Sets the view handler.
	pub fn on_view(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.on_view = Some(Box::new(handler));
		self
	}

	/// Sets the edit handler.
	pub fn on_edit(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.on_edit = Some(Box::new(handler));
		self
	}

	/// Sets the delete handler.
	pub fn on_delete(mut self, handler: impl Fn(&R) + 'static) -> Self {
		self.on_delete = Some(Box::new(handler));
		self
	}

	/// Registers a custom action under the given key.
	pub fn custom(
		mut self,
		key: impl Into<String>,
		label: impl Into<String>,
		handler: impl Fn(&R) + 'static,
	) -> Self {
		self.custom.push(CustomAction {
			key: key.into(),
			label: label.into(),
			handler: Box::new(handler),
		});
		self
	}

	/// Keys and labels of all registered actions, menu order.
	pub fn entries(&self) -> Vec<(&str, &str)> {
		let mut entries = Vec::new();
		if self.on_view.is_some() {
			entries.push((ACTION_VIEW, "View"));
		}
		if self.on_edit.is_some() {
			entries.push((ACTION_EDIT, "Edit"));
		}
		if self.on_delete.is_some() {
			entries.push((ACTION_DELETE, "Delete"));
		}
		for action in &self.custom {
			entries.push((action.key.as_str(), action.label.as_str()));
		}
		entries
	}

	/// Forwards the action to its handler.
	pub fn dispatch(&self, action: &str, row: &R) -> Result<()> {
		let handler = match action {
			ACTION_VIEW => self.on_view.as_ref(),
			ACTION_EDIT => self.on_edit.as_ref(),
			ACTION_DELETE => self.on_delete.as_ref(),
			other => self
				.custom
				.iter()
				.find(|c| c.key == other)
				.map(|c| &c.handler),
		};
		match handler {
			Some(handler) => {
				handler(row);
				Ok(())
			}
			None => Err(TableError::UnknownAction(action.to_string())),
		}
	}
}

impl<R> Default for RowActions<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> fmt::Debug for RowActions<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowActions")
			.field("entries", &self.entries())
			.finish()
	}
}

type BulkHandler = Box<dyn Fn(&[String]) -> std::result::Result<(), String>>;

struct BulkAction {
	key: String,
	label: String,
	handler: BulkHandler,
}

/// Named bulk actions dispatched over the current selection.
pub struct BulkActions {
	actions: Vec<BulkAction>,
}

impl BulkActions {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			actions: Vec::new(),
		}
	}

	/// Registers a bulk action under the given key.
	///
	/// The handler receives the selected identifiers in selection order
	/// and reports failure as a message.
	pub fn register(
		mut self,
		key: impl Into<String>,
		label: impl Into<String>,
		handler: impl Fn(&[String]) -> std::result::Result<(), String> + 'static,
	) -> Self {
		self.actions.push(BulkAction {
			key: key.into(),
			label: label.into(),
			handler: Box::new(handler),
		});
		self
	}

	/// Keys and labels of all registered actions, registration order.
	pub fn entries(&self) -> Vec<(&str, &str)> {
		self.actions
			.iter()
			.map(|a| (a.key.as_str(), a.label.as_str()))
			.collect()
	}

	/// Forwards the identifiers to the named action's handler.
	pub fn dispatch(&self, key: &str, ids: &[String]) -> Result<()> {
		let action = self
			.actions
			.iter()
			.find(|a| a.key == key)
			.ok_or_else(|| TableError::UnknownAction(key.to_string()))?;
		(action.handler)(ids).map_err(|message| TableError::ActionFailed {
			action: key.to_string(),
			message,
		})
	}
}

impl Default for BulkActions {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for BulkActions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BulkActions")
			.field("entries", &self.entries())
			.finish()
	}
}

impl<R> crate::table::Table<R> {
	/// Dispatches a bulk action over the current selection.
	///
	/// The selection is not rolled back on failure.
	pub fn dispatch_bulk(&self, actions: &BulkActions, key: &str) -> Result<()> {
		actions.dispatch(key, self.selected_ids())
	}
}
