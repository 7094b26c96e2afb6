//! Cell value domain
//!
//! Columns project rows into [`CellValue`]s, the heterogeneous value domain
//! the engines operate on. The variants cover the semantic types a table
//! cell can hold; everything else is stringified by the caller's extractor.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// Placeholder rendered for null cells.
pub const NULL_PLACEHOLDER: &str = "-";

/// A single cell value as seen by the filter, sort and group engines.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
	/// Free text.
	Text(String),
	/// Numeric value (integers are represented exactly up to 2^53).
	Number(f64),
	/// Boolean flag.
	Bool(bool),
	/// Calendar date.
	Date(NaiveDate),
	/// Missing or absent value.
	Null,
}

impl CellValue {
	/// Returns whether this value is null.
	pub fn is_null(&self) -> bool {
		matches!(self, CellValue::Null)
	}

	/// Interprets this value as a date, if possible.
	///
	/// Text values qualify when they start with an ISO `YYYY-MM-DD` prefix,
	/// so datetime strings like `2024-01-15T10:30:00Z` compare by their
	/// date component.
	pub fn as_date(&self) -> Option<NaiveDate> {
		match self {
			CellValue::Date(d) => Some(*d),
			CellValue::Text(s) => s
				.get(..10)
				.and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()),
			_ => None,
		}
	}

	/// Interprets this value as a number, if possible.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			CellValue::Number(n) => Some(*n),
			CellValue::Text(s) => s.trim().parse().ok(),
			_ => None,
		}
	}

	/// Coerces this value to a boolean.
	///
	/// Null is false, numbers are true when non-zero, text is true when
	/// non-empty. Mirrors the truthiness rules admin UIs apply to
	/// loosely-typed row data.
	pub fn truthy(&self) -> bool {
		match self {
			CellValue::Bool(b) => *b,
			CellValue::Number(n) => *n != 0.0,
			CellValue::Text(s) => !s.is_empty(),
			CellValue::Date(_) => true,
			CellValue::Null => false,
		}
	}

	/// Compares two non-null values with type-aware semantics.
	///
	/// Dates compare chronologically, numbers numerically, and everything
	/// else case-insensitively as text. Null placement is the sort
	/// engine's concern, not this comparator's; nulls compare equal here.
	pub fn compare(&self, other: &CellValue) -> Ordering {
		if self.is_null() || other.is_null() {
			return Ordering::Equal;
		}
		if let (Some(a), Some(b)) = (self.as_date(), other.as_date()) {
			return a.cmp(&b);
		}
		if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
			return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
		}
		self.to_string()
			.to_lowercase()
			.cmp(&other.to_string().to_lowercase())
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellValue::Text(s) => f.write_str(s),
			CellValue::Number(n) => {
				// Render whole numbers without the trailing ".0"
				if n.fract() == 0.0 && n.abs() < 1e15 {
					write!(f, "{}", *n as i64)
				} else {
					write!(f, "{n}")
				}
			}
			CellValue::Bool(b) => write!(f, "{b}"),
			CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			CellValue::Null => f.write_str(NULL_PLACEHOLDER),
		}
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		CellValue::Text(value)
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		CellValue::Text(value.to_string())
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		CellValue::Number(value)
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		CellValue::Number(value as f64)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		CellValue::Number(value as f64)
	}
}

impl From<u64> for CellValue {
	fn from(value: u64) -> Self {
		CellValue::Number(value as f64)
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		CellValue::Bool(value)
	}
}

impl From<NaiveDate> for CellValue {
	fn from(value: NaiveDate) -> Self {
		CellValue::Date(value)
	}
}

impl<T> From<Option<T>> for CellValue
where
	T: Into<CellValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(CellValue::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn date_detection_requires_iso_prefix() {
		assert!(CellValue::Text("2024-01-15".into()).as_date().is_some());
		assert!(
			CellValue::Text("2024-01-15T10:30:00Z".into())
				.as_date()
				.is_some()
		);
		assert!(CellValue::Text("15/01/2024".into()).as_date().is_none());
		assert!(CellValue::Text("not a date".into()).as_date().is_none());
	}

	#[test]
	fn numeric_strings_compare_numerically() {
		let a = CellValue::Text("9.99".into());
		let b = CellValue::Text("10.00".into());
		assert_eq!(a.compare(&b), Ordering::Less);
	}

	#[test]
	fn text_comparison_is_case_insensitive() {
		let a = CellValue::Text("alice".into());
		let b = CellValue::Text("Bob".into());
		assert_eq!(a.compare(&b), Ordering::Less);
	}

	#[test]
	fn null_renders_as_placeholder() {
		assert_eq!(CellValue::Null.to_string(), NULL_PLACEHOLDER);
	}

	#[test]
	fn whole_numbers_render_without_fraction() {
		assert_eq!(CellValue::Number(42.0).to_string(), "42");
		assert_eq!(CellValue::Number(9.99).to_string(), "9.99");
	}
}
