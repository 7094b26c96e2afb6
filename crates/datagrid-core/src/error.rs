//! Error types for the table engine

use thiserror::Error;

/// Table engine error type
#[derive(Debug, Error)]
pub enum TableError {
	/// No column with the given name is declared
	#[error("Unknown column '{0}'")]
	UnknownColumn(String),

	/// The column exists but is not sortable
	#[error("Column '{0}' is not sortable")]
	NotSortable(String),

	/// The column exists but is not filterable
	#[error("Column '{0}' is not filterable")]
	NotFilterable(String),

	/// The column exists but is not groupable
	#[error("Column '{0}' is not groupable")]
	NotGroupable(String),

	/// Page number or page size below 1
	#[error("Invalid pagination: page and page size must be at least 1")]
	InvalidPagination,

	/// No bulk or row action registered under the given key
	#[error("Unknown action '{0}'")]
	UnknownAction(String),

	/// An action handler reported failure
	#[error("Action '{action}' failed: {message}")]
	ActionFailed {
		/// Key of the failed action
		action: String,
		/// Handler-supplied failure message
		message: String,
	},

	/// Export serialization failed
	#[error("Export failed: {0}")]
	ExportFailed(String),
}

/// Result type for table engine operations
pub type Result<T> = std::result::Result<T, TableError>;
