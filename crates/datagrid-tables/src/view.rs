//! Renderable view model
//!
//! [`Table::view`] projects the current table into a framework-agnostic
//! view model: a loading placeholder, a data-source error, an explicit
//! "no records" state, a paginated row list, or the full grouped
//! listing. Cell text comes from
//! the columns' renderers; null values show as a dash.

use crate::table::Table;
use datagrid_core::sort::SortOrder;

/// One header cell with its sort affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
	/// Column name.
	pub name: String,
	/// Header display text.
	pub label: String,
	/// Whether the column accepts sort activation.
	pub sortable: bool,
	/// Active sort direction on this column, if any.
	pub sort: Option<SortOrder>,
}

/// One rendered row.
#[derive(Debug)]
pub struct RowView<'a, R> {
	/// Row identifier (primary key or position fallback).
	pub id: String,
	/// Whether the row is in the current selection.
	pub selected: bool,
	/// Rendered cell text, one entry per column.
	pub cells: Vec<String>,
	/// The underlying row.
	pub row: &'a R,
}

/// One rendered group of rows.
#[derive(Debug)]
pub struct GroupView<'a, R> {
	/// Group key ("Unknown" for null values).
	pub key: String,
	/// Rendered member rows.
	pub rows: Vec<RowView<'a, R>>,
}

impl<R> GroupView<'_, R> {
	/// Number of rows in this group.
	pub fn count(&self) -> usize {
		self.rows.len()
	}
}

/// Pagination summary for the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
	/// Current page (1-indexed).
	pub page: u64,
	/// Items per page.
	pub per_page: u64,
	/// Total pages, never less than 1.
	pub total_pages: u64,
	/// Rows surviving the active filters.
	pub total_rows: usize,
}

/// The table rendered as data.
#[derive(Debug)]
pub enum TableView<'a, R> {
	/// Data is still on its way.
	Loading,
	/// The data source failed; carries the error message.
	Error {
		/// Human-readable failure description.
		message: String,
	},
	/// Nothing to show; carries the "no records" message.
	Empty {
		/// Display message, e.g. "No products found".
		message: String,
	},
	/// Flat (optionally paginated) listing.
	Rows {
		/// Header cells, one per column.
		headers: Vec<HeaderCell>,
		/// Rendered rows for the current page.
		rows: Vec<RowView<'a, R>>,
		/// Pagination summary, when pagination is enabled.
		page: Option<PageInfo>,
	},
	/// Grouped listing; pagination bypassed.
	Grouped {
		/// Header cells, one per column.
		headers: Vec<HeaderCell>,
		/// All groups with all their members.
		groups: Vec<GroupView<'a, R>>,
	},
}

impl<R> Table<R> {
	/// Renders the table into a view model.
	///
	/// Loading takes precedence over everything, then a data-source
	/// error; an empty visible set renders the explicit "no records"
	/// state rather than an empty grid.
	pub fn view(&self) -> TableView<'_, R> {
		if self.is_loading() {
			return TableView::Loading;
		}

		if let Some(message) = self.error() {
			return TableView::Error { message: message.to_string() };
		}

		if self.filtered_rows_count() == 0 {
			return TableView::Empty {
				message: format!("No {} found", self.config().entity_name_plural()),
			};
		}

		let headers = self.header_cells();

		if self.group_key().is_some() {
			let groups = self
				.grouped_indices()
				.into_iter()
				.map(|(key, indices)| GroupView {
					key,
					rows: self.render_rows(&indices),
				})
				.collect();
			return TableView::Grouped { headers, groups };
		}

		let page = self.pagination_config().map(|pagination| PageInfo {
			page: pagination.page,
			per_page: pagination.per_page,
			total_pages: self.total_pages(),
			total_rows: self.filtered_rows_count(),
		});

		TableView::Rows {
			headers,
			rows: self.render_rows(&self.visible_indices()),
			page,
		}
	}

	fn header_cells(&self) -> Vec<HeaderCell> {
		self.columns()
			.iter()
			.map(|column| HeaderCell {
				name: column.name().to_string(),
				label: column.header().to_string(),
				sortable: column.sortable(),
				sort: self
					.sort_config()
					.filter(|sort| sort.field == column.name())
					.map(|sort| sort.order),
			})
			.collect()
	}

	fn render_rows(&self, indices: &[usize]) -> Vec<RowView<'_, R>> {
		indices
			.iter()
			.map(|&index| {
				let row = &self.rows()[index];
				let id = self.row_id(index);
				RowView {
					selected: self.is_selected(&id),
					cells: self
						.columns()
						.iter()
						.map(|column| column.render(row))
						.collect(),
					id,
					row,
				}
			})
			.collect()
	}
}
