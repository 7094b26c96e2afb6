//! CSV and JSON export
//!
//! Exports the filtered+sorted row set — all pages, not just the visible
//! one — with headers taken from the column definitions. Available behind
//! the `export` feature.

use crate::table::Table;
use datagrid_core::error::{Result, TableError};
use datagrid_core::value::CellValue;

/// Serializes the filtered+sorted rows as CSV.
///
/// The first record holds the column headers; cells use the columns'
/// display renderers.
pub fn to_csv<R>(table: &Table<R>) -> Result<String> {
	let mut writer = csv::Writer::from_writer(Vec::new());

	let headers: Vec<&str> = table.columns().iter().map(|c| c.header()).collect();
	writer
		.write_record(&headers)
		.map_err(|e| TableError::ExportFailed(e.to_string()))?;

	for row in table.filtered_rows() {
		let record: Vec<String> = table.columns().iter().map(|c| c.render(row)).collect();
		writer
			.write_record(&record)
			.map_err(|e| TableError::ExportFailed(e.to_string()))?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| TableError::ExportFailed(e.to_string()))?;
	String::from_utf8(bytes).map_err(|e| TableError::ExportFailed(e.to_string()))
}

/// Serializes the filtered+sorted rows as a JSON array of objects.
///
/// Objects are keyed by column name and carry the raw typed values, not
/// the rendered display text; dates serialize as ISO strings and nulls
/// as JSON null.
pub fn to_json<R>(table: &Table<R>) -> Result<String> {
	let objects: Vec<serde_json::Value> = table
		.filtered_rows()
		.into_iter()
		.map(|row| {
			let fields: serde_json::Map<String, serde_json::Value> = table
				.columns()
				.iter()
				.map(|column| (column.name().to_string(), json_value(column.value(row))))
				.collect();
			serde_json::Value::Object(fields)
		})
		.collect();

	serde_json::to_string_pretty(&objects).map_err(|e| TableError::ExportFailed(e.to_string()))
}

fn json_value(value: CellValue) -> serde_json::Value {
	match value {
		CellValue::Text(s) => serde_json::Value::String(s),
		CellValue::Number(n) => serde_json::Number::from_f64(n)
			.map(serde_json::Value::Number)
			.unwrap_or(serde_json::Value::Null),
		CellValue::Bool(b) => serde_json::Value::Bool(b),
		CellValue::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
		CellValue::Null => serde_json::Value::Null,
	}
}
