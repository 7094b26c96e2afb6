//! Typed column constructors
//!
//! Convenience constructors over [`BaseColumn`] for the common column
//! types, wiring the matching filter kind so callers do not have to.

use datagrid_core::column::BaseColumn;
use datagrid_core::filter::{FilterKind, FilterOption};
use datagrid_core::value::CellValue;

/// A free-text column with substring filtering.
pub fn text<R>(
	name: impl Into<String>,
	header: impl Into<String>,
	extract: impl Fn(&R) -> String + 'static,
) -> BaseColumn<R> {
	BaseColumn::new(name, header, move |row| extract(row).into())
}

/// A numeric column; sorts numerically, filters as text.
pub fn number<R, V>(
	name: impl Into<String>,
	header: impl Into<String>,
	extract: impl Fn(&R) -> V + 'static,
) -> BaseColumn<R>
where
	V: Into<CellValue>,
{
	BaseColumn::new(name, header, move |row| extract(row).into())
}

/// A boolean column filtered by the literals `true`/`false`.
pub fn boolean<R>(
	name: impl Into<String>,
	header: impl Into<String>,
	extract: impl Fn(&R) -> bool + 'static,
) -> BaseColumn<R> {
	BaseColumn::new(name, header, move |row| extract(row).into())
		.filter_kind(FilterKind::Boolean)
}

/// A date column; sorts chronologically, filters by date substring.
///
/// The extractor may return a [`chrono::NaiveDate`], an ISO-prefixed
/// string, or anything else convertible to a cell value.
pub fn date<R, V>(
	name: impl Into<String>,
	header: impl Into<String>,
	extract: impl Fn(&R) -> V + 'static,
) -> BaseColumn<R>
where
	V: Into<CellValue>,
{
	BaseColumn::new(name, header, move |row| extract(row).into()).filter_kind(FilterKind::Date)
}

/// An enumerated column filtered by exact option match.
pub fn select<R>(
	name: impl Into<String>,
	header: impl Into<String>,
	options: Vec<FilterOption>,
	extract: impl Fn(&R) -> String + 'static,
) -> BaseColumn<R> {
	BaseColumn::new(name, header, move |row| extract(row).into())
		.filter_kind(FilterKind::Select)
		.filter_options(options)
}
