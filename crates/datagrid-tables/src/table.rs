//! Table facade
//!
//! [`Table`] owns the row collection, the column definitions and the
//! table state, and derives the visible row set through the core engines.
//! The filtered+sorted index sequence is memoized against a revision
//! counter bumped by every mutation that can change it, so unrelated
//! state changes (selection, page moves) never trigger recomputation.

use datagrid_core::column::Column;
use datagrid_core::error::{Result, TableError};
use datagrid_core::filter::{FilterState, apply_filters};
use datagrid_core::group::group_rows;
use datagrid_core::pagination::PaginationState;
use datagrid_core::sort::{SortOrder, SortState, sort_rows};
use datagrid_core::state::TableState;
use std::cell::RefCell;
use std::fmt;
use tracing::debug;

/// Display configuration for one table instance.
pub struct TableConfig<R> {
	entity_name: String,
	entity_name_plural: String,
	primary_key: Option<Box<dyn Fn(&R) -> Option<String>>>,
}

impl<R> TableConfig<R> {
	/// Creates a config for the given entity name.
	///
	/// The plural defaults to the name plus "s".
	pub fn new(entity_name: impl Into<String>) -> Self {
		let entity_name = entity_name.into();
		let entity_name_plural = format!("{entity_name}s");
		Self {
			entity_name,
			entity_name_plural,
			primary_key: None,
		}
	}

	/// Overrides the plural display name.
	pub fn plural(mut self, plural: impl Into<String>) -> Self {
		self.entity_name_plural = plural.into();
		self
	}

	/// Sets the primary-key extractor.
	///
	/// Rows for which the extractor returns `None` (and tables with no
	/// extractor at all) fall back to the row's position as its
	/// identifier, keeping the table renderable under misconfiguration.
	pub fn primary_key(mut self, extractor: impl Fn(&R) -> Option<String> + 'static) -> Self {
		self.primary_key = Some(Box::new(extractor));
		self
	}

	/// Singular entity display name.
	pub fn entity_name(&self) -> &str {
		&self.entity_name
	}

	/// Plural entity display name.
	pub fn entity_name_plural(&self) -> &str {
		&self.entity_name_plural
	}
}

impl<R> fmt::Debug for TableConfig<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableConfig")
			.field("entity_name", &self.entity_name)
			.field("entity_name_plural", &self.entity_name_plural)
			.field("has_primary_key", &self.primary_key.is_some())
			.finish()
	}
}

/// One bucket of grouped rows, resolved to row references.
#[derive(Debug)]
pub struct GroupedRows<'a, R> {
	/// Stringified group key ("Unknown" for null values).
	pub key: String,
	/// Member rows, in filtered+sorted order.
	pub rows: Vec<&'a R>,
}

impl<R> GroupedRows<'_, R> {
	/// Number of rows in this group.
	pub fn count(&self) -> usize {
		self.rows.len()
	}
}

struct IndexCache {
	revision: u64,
	indices: Vec<usize>,
}

/// A data table: rows, columns, state and the derived visible view.
pub struct Table<R> {
	rows: Vec<R>,
	columns: Vec<Box<dyn Column<Row = R>>>,
	config: TableConfig<R>,
	state: TableState,
	loading: bool,
	error: Option<String>,
	revision: u64,
	cache: RefCell<Option<IndexCache>>,
}

impl<R> Table<R> {
	/// Creates an empty table.
	pub fn new(config: TableConfig<R>) -> Self {
		Self::with_rows(config, Vec::new())
	}

	/// Creates a table over the given rows.
	pub fn with_rows(config: TableConfig<R>, rows: Vec<R>) -> Self {
		Self {
			rows,
			columns: Vec::new(),
			config,
			state: TableState::new(),
			loading: false,
			error: None,
			revision: 0,
			cache: RefCell::new(None),
		}
	}

	/// Display configuration.
	pub fn config(&self) -> &TableConfig<R> {
		&self.config
	}

	/// Current table state (filters, sort, group, pagination, selection).
	pub fn state(&self) -> &TableState {
		&self.state
	}

	/// All rows, in input order.
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	/// Total number of rows before filtering.
	pub fn total_rows(&self) -> usize {
		self.rows.len()
	}

	/// Replaces the row collection.
	///
	/// Selection is pruned to identifiers still present and the current
	/// page is clamped, so state referencing now-absent rows never
	/// faults.
	pub fn set_rows(&mut self, rows: Vec<R>) {
		self.rows = rows;
		self.invalidate();
		let known: Vec<String> = (0..self.rows.len()).map(|i| self.row_id(i)).collect();
		self.state
			.selection
			.retain_known(|id| known.iter().any(|k| k == id));
		self.clamp_page();
	}

	/// Marks the table as waiting for data.
	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	/// Whether the table is waiting for data.
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Sets or clears the data-source error surfaced by the view.
	pub fn set_error(&mut self, error: Option<String>) {
		self.error = error;
	}

	/// Data-source error, if any.
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	// -- columns ---------------------------------------------------------

	/// Appends a column definition.
	pub fn add_column(&mut self, column: Box<dyn Column<Row = R>>) {
		self.columns.push(column);
		self.invalidate();
	}

	/// Replaces all column definitions.
	///
	/// Filter, sort and group state referencing a removed column is
	/// dropped silently.
	pub fn set_columns(&mut self, columns: Vec<Box<dyn Column<Row = R>>>) {
		self.columns = columns;
		let known: Vec<&str> = self.columns.iter().map(|c| c.name()).collect();
		self.state.sync_columns(&known);
		self.invalidate();
	}

	/// Declared columns.
	pub fn columns(&self) -> &[Box<dyn Column<Row = R>>] {
		&self.columns
	}

	/// Looks up a column by name.
	pub fn column(&self, name: &str) -> Option<&dyn Column<Row = R>> {
		self.columns
			.iter()
			.find(|c| c.name() == name)
			.map(|c| c.as_ref())
	}

	// -- filtering -------------------------------------------------------

	/// Replaces the whole filter map, validating every referenced column.
	///
	/// Errors on unknown or non-filterable columns; the event-style
	/// [`set_filter`](Table::set_filter) degrades silently instead.
	pub fn filter(&mut self, filters: FilterState) -> Result<()> {
		for name in filters.keys() {
			let column = self
				.column(name)
				.ok_or_else(|| TableError::UnknownColumn(name.clone()))?;
			if !column.filterable() {
				return Err(TableError::NotFilterable(name.clone()));
			}
		}
		self.state.filters = filters;
		self.state.reset_page();
		self.invalidate();
		Ok(())
	}

	/// Sets or clears one column's filter value.
	///
	/// Unknown columns are ignored, matching the engine's promise that
	/// stale UI state never faults.
	pub fn set_filter(&mut self, column: &str, value: impl Into<String>) {
		if self.column(column).is_none() {
			debug!(column, "ignoring filter for unknown column");
			return;
		}
		self.state.set_filter(column, value);
		self.invalidate();
	}

	/// Active filters.
	pub fn filters(&self) -> &FilterState {
		&self.state.filters
	}

	// -- sorting ---------------------------------------------------------

	/// Sorts by the given column and direction.
	pub fn sort_by(&mut self, column: &str, order: SortOrder) -> Result<()> {
		let found = self
			.column(column)
			.ok_or_else(|| TableError::UnknownColumn(column.to_string()))?;
		if !found.sortable() {
			return Err(TableError::NotSortable(column.to_string()));
		}
		self.state.set_sort(column, order);
		self.invalidate();
		Ok(())
	}

	/// Advances the tri-state sort cycle for a column activation.
	///
	/// Unknown or non-sortable columns are ignored.
	pub fn cycle_sort(&mut self, column: &str) {
		match self.column(column) {
			Some(found) if found.sortable() => {
				self.state.cycle_sort(column);
				self.invalidate();
			}
			_ => debug!(column, "ignoring sort on unknown or non-sortable column"),
		}
	}

	/// Clears the sort, restoring input order.
	pub fn clear_sort(&mut self) {
		self.state.clear_sort();
		self.invalidate();
	}

	/// Active sort descriptor.
	pub fn sort_config(&self) -> Option<&SortState> {
		self.state.sort.as_ref()
	}

	// -- grouping --------------------------------------------------------

	/// Sets or clears the group-by column.
	///
	/// While a group is active, pagination is bypassed: all groups and
	/// all their members are visible regardless of page size.
	pub fn group_by(&mut self, column: Option<&str>) -> Result<()> {
		if let Some(name) = column {
			let found = self
				.column(name)
				.ok_or_else(|| TableError::UnknownColumn(name.to_string()))?;
			if !found.groupable() {
				return Err(TableError::NotGroupable(name.to_string()));
			}
		}
		self.state.set_group(column.map(String::from));
		Ok(())
	}

	/// Active group-by column.
	pub fn group_key(&self) -> Option<&str> {
		self.state.group_by.as_deref()
	}

	/// The filtered+sorted rows partitioned into groups.
	///
	/// Empty when no group is active.
	pub fn groups(&self) -> Vec<GroupedRows<'_, R>> {
		self.grouped_indices()
			.into_iter()
			.map(|(key, indices)| GroupedRows {
				key,
				rows: indices.iter().map(|&i| &self.rows[i]).collect(),
			})
			.collect()
	}

	// -- pagination ------------------------------------------------------

	/// Enables pagination at the given page and page size.
	///
	/// Errors when page or page size is below 1; an in-range page beyond
	/// the last is clamped.
	pub fn paginate(&mut self, page: u64, per_page: u64) -> Result<()> {
		let pagination = PaginationState::new(page, per_page)?;
		self.state.pagination = Some(pagination);
		self.clamp_page();
		Ok(())
	}

	/// Disables pagination; all filtered rows become visible.
	pub fn clear_pagination(&mut self) {
		self.state.disable_pagination();
	}

	/// Current pagination, if enabled.
	pub fn pagination_config(&self) -> Option<&PaginationState> {
		self.state.pagination.as_ref()
	}

	/// Jumps to a page, clamped into range. No-op when pagination is off.
	pub fn goto_page(&mut self, page: u64) {
		if let Some(pagination) = self.state.pagination.as_mut() {
			pagination.page = page.max(1);
		}
		self.clamp_page();
	}

	/// Jumps to the first page.
	pub fn first_page(&mut self) {
		if let Some(pagination) = self.state.pagination.as_mut() {
			pagination.first();
		}
	}

	/// Jumps to the last page.
	pub fn last_page(&mut self) {
		let count = self.filtered_rows_count();
		if let Some(pagination) = self.state.pagination.as_mut() {
			pagination.last(count);
		}
	}

	/// Moves one page back, stopping at page 1.
	pub fn previous_page(&mut self) {
		if let Some(pagination) = self.state.pagination.as_mut() {
			pagination.previous();
		}
	}

	/// Moves one page forward, stopping at the last page.
	pub fn next_page(&mut self) {
		let count = self.filtered_rows_count();
		if let Some(pagination) = self.state.pagination.as_mut() {
			pagination.next(count);
		}
	}

	/// Changes the page size, resetting to page 1.
	pub fn set_page_size(&mut self, per_page: u64) {
		self.state.set_page_size(per_page);
	}

	/// Total number of pages for the filtered row set, never less than 1.
	pub fn total_pages(&self) -> u64 {
		match &self.state.pagination {
			Some(pagination) => pagination.total_pages(self.filtered_rows_count()),
			None => 1,
		}
	}

	// -- derived views ---------------------------------------------------

	/// Number of rows surviving the active filters.
	pub fn filtered_rows_count(&self) -> usize {
		self.with_indices(|indices| indices.len())
	}

	/// The filtered+sorted rows, ignoring pagination.
	pub fn filtered_rows(&self) -> Vec<&R> {
		self.with_indices(|indices| indices.iter().map(|&i| &self.rows[i]).collect())
	}

	/// The rows currently rendered.
	///
	/// Filtered and sorted, then paginated — unless a group is active, in
	/// which case pagination is bypassed and the whole filtered set is
	/// visible.
	pub fn visible_rows(&self) -> Vec<&R> {
		self.with_indices(|indices| {
			self.visible_slice(indices)
				.iter()
				.map(|&i| &self.rows[i])
				.collect()
		})
	}

	/// Identifiers of the currently rendered rows, in render order.
	pub fn visible_ids(&self) -> Vec<String> {
		self.visible_indices()
			.into_iter()
			.map(|i| self.row_id(i))
			.collect()
	}

	pub(crate) fn visible_indices(&self) -> Vec<usize> {
		self.with_indices(|indices| self.visible_slice(indices).to_vec())
	}

	pub(crate) fn grouped_indices(&self) -> Vec<(String, Vec<usize>)> {
		let Some(column) = self.group_key().and_then(|name| self.column(name)) else {
			return Vec::new();
		};
		self.with_indices(|indices| {
			group_rows(&self.rows, indices, column)
				.into_iter()
				.map(|group| (group.key, group.indices))
				.collect()
		})
	}

	/// Identifier for the row at `index` in the raw collection.
	///
	/// Uses the configured primary-key extractor, falling back to the row
	/// position when no key can be derived.
	pub fn row_id(&self, index: usize) -> String {
		self.config
			.primary_key
			.as_ref()
			.and_then(|pk| pk(&self.rows[index]))
			.unwrap_or_else(|| index.to_string())
	}

	// -- selection -------------------------------------------------------

	/// Selected identifiers, in selection order.
	pub fn selected_ids(&self) -> &[String] {
		self.state.selection.ids()
	}

	/// Whether the given identifier is selected.
	pub fn is_selected(&self, id: &str) -> bool {
		self.state.selection.contains(id)
	}

	/// Adds the identifier to the selection if absent, removes it if
	/// present.
	pub fn toggle_selection(&mut self, id: &str) {
		self.state.selection.toggle(id);
	}

	/// Toggles select-all against the currently rendered rows.
	pub fn toggle_select_all(&mut self) {
		let visible = self.visible_ids();
		self.state.selection.toggle_all(&visible);
	}

	/// Clears the selection.
	pub fn clear_selection(&mut self) {
		self.state.selection.clear();
	}

	// -- internals -------------------------------------------------------

	fn invalidate(&mut self) {
		self.revision = self.revision.wrapping_add(1);
	}

	fn clamp_page(&mut self) {
		let count = self.filtered_rows_count();
		if let Some(pagination) = self.state.pagination.as_mut() {
			let before = pagination.page;
			pagination.clamp(count);
			if pagination.page != before {
				debug!(from = before, to = pagination.page, "clamped out-of-range page");
			}
		}
	}

	fn visible_slice<'a>(&self, indices: &'a [usize]) -> &'a [usize] {
		if self.state.group_by.is_some() {
			return indices;
		}
		match &self.state.pagination {
			Some(pagination) => {
				let (start, end) = pagination.slice_bounds(indices.len());
				&indices[start..end]
			}
			None => indices,
		}
	}

	fn with_indices<T>(&self, f: impl FnOnce(&[usize]) -> T) -> T {
		{
			let mut cache = self.cache.borrow_mut();
			let stale = match cache.as_ref() {
				Some(existing) => existing.revision != self.revision,
				None => true,
			};
			if stale {
				*cache = Some(IndexCache {
					revision: self.revision,
					indices: self.compute_indices(),
				});
			}
		}
		let cache = self.cache.borrow();
		f(cache.as_ref().map(|c| c.indices.as_slice()).unwrap_or(&[]))
	}

	fn compute_indices(&self) -> Vec<usize> {
		let mut indices = apply_filters(&self.rows, &self.columns, &self.state.filters);
		if let Some(sort) = &self.state.sort
			&& let Some(column) = self.column(&sort.field)
			&& column.sortable()
		{
			sort_rows(&self.rows, &mut indices, column, sort.order);
		}
		indices
	}
}

impl<R> fmt::Debug for Table<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("config", &self.config)
			.field("rows", &self.rows.len())
			.field("columns", &self.columns.len())
			.field("state", &self.state)
			.field("loading", &self.loading)
			.finish()
	}
}
