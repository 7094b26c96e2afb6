//! Base column trait and implementation

use crate::filter::{FilterKind, FilterOption};
use crate::value::CellValue;
use std::fmt::Debug;

/// Trait for table column definitions
///
/// This trait defines how a column extracts and renders data from a row.
/// Each column is responsible for:
/// - Providing a name and header text
/// - Extracting the raw value from a row (feeds filtering, sorting, grouping)
/// - Rendering the value as a string (for display or export)
/// - Declaring its behavior flags and filter kind
///
/// A custom renderer affects display only; the filter, sort and group
/// engines always read the raw extracted value.
pub trait Column: Debug {
	/// The type of rows this column operates on
	type Row;

	/// Returns the name of this column
	///
	/// This is used as the identifier for sorting, filtering and grouping
	fn name(&self) -> &str;

	/// Returns the header text for this column
	fn header(&self) -> &str;

	/// Extracts the raw value for the given row
	fn value(&self, row: &Self::Row) -> CellValue;

	/// Renders the column value for the given row
	///
	/// Default: the raw value's display form (nulls render as a dash)
	fn render(&self, row: &Self::Row) -> String {
		self.value(row).to_string()
	}

	/// Returns whether this column can be sorted
	///
	/// Default: true
	fn sortable(&self) -> bool {
		true
	}

	/// Returns whether this column can be filtered
	///
	/// Default: true
	fn filterable(&self) -> bool {
		true
	}

	/// Returns whether this column can be grouped by
	///
	/// Default: true
	fn groupable(&self) -> bool {
		true
	}

	/// Returns the filter predicate kind for this column
	///
	/// Default: [`FilterKind::Text`]
	fn filter_kind(&self) -> FilterKind {
		FilterKind::Text
	}

	/// Returns the enumerated options for a select filter
	///
	/// Only meaningful when [`filter_kind`](Column::filter_kind) is
	/// [`FilterKind::Select`]; a select column with no options degrades to
	/// a text filter.
	fn filter_options(&self) -> &[FilterOption] {
		&[]
	}
}

/// A basic column implementation using a function to extract values
///
/// # Example
///
/// ```rust
/// use datagrid_core::column::BaseColumn;
///
/// #[derive(Debug)]
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// let name_column = BaseColumn::new(
///     "name",
///     "User Name",
///     |user: &User| user.name.clone().into(),
/// );
/// ```
pub struct BaseColumn<R> {
	name: String,
	header: String,
	extractor: Box<dyn Fn(&R) -> CellValue>,
	renderer: Option<Box<dyn Fn(&R) -> String>>,
	sortable: bool,
	filterable: bool,
	groupable: bool,
	filter_kind: FilterKind,
	filter_options: Vec<FilterOption>,
}

impl<R> BaseColumn<R> {
	/// Creates a new base column
	pub fn new(
		name: impl Into<String>,
		header: impl Into<String>,
		extractor: impl Fn(&R) -> CellValue + 'static,
	) -> Self {
		Self {
			name: name.into(),
			header: header.into(),
			extractor: Box::new(extractor),
			renderer: None,
			sortable: true,
			filterable: true,
			groupable: true,
			filter_kind: FilterKind::Text,
			filter_options: Vec::new(),
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column is filterable
	pub fn filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	/// Sets whether this column is groupable
	pub fn groupable(mut self, groupable: bool) -> Self {
		self.groupable = groupable;
		self
	}

	/// Sets the filter kind for this column
	pub fn filter_kind(mut self, kind: FilterKind) -> Self {
		self.filter_kind = kind;
		self
	}

	/// Sets the select filter options for this column
	pub fn filter_options(mut self, options: Vec<FilterOption>) -> Self {
		self.filter_options = options;
		self
	}

	/// Sets a custom display renderer
	///
	/// The renderer overrides display output only; filtering and sorting
	/// keep reading the raw extracted value.
	pub fn renderer(mut self, renderer: impl Fn(&R) -> String + 'static) -> Self {
		self.renderer = Some(Box::new(renderer));
		self
	}
}

impl<R> Debug for BaseColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BaseColumn")
			.field("name", &self.name)
			.field("header", &self.header)
			.field("sortable", &self.sortable)
			.field("filterable", &self.filterable)
			.field("groupable", &self.groupable)
			.field("filter_kind", &self.filter_kind)
			.finish_non_exhaustive()
	}
}

impl<R> Column for BaseColumn<R> {
	type Row = R;

	fn name(&self) -> &str {
		&self.name
	}

	fn header(&self) -> &str {
		&self.header
	}

	fn value(&self, row: &Self::Row) -> CellValue {
		(self.extractor)(row)
	}

	fn render(&self, row: &Self::Row) -> String {
		match &self.renderer {
			Some(renderer) => renderer(row),
			None => self.value(row).to_string(),
		}
	}

	fn sortable(&self) -> bool {
		self.sortable
	}

	fn filterable(&self) -> bool {
		self.filterable
	}

	fn groupable(&self) -> bool {
		self.groupable
	}

	fn filter_kind(&self) -> FilterKind {
		self.filter_kind
	}

	fn filter_options(&self) -> &[FilterOption] {
		&self.filter_options
	}
}
