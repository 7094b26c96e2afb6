#![cfg(feature = "export")]


use datagrid_tables::{SortOrder, export};
use fixtures::*;
use rstest::*;
use std::collections::HashMap;

#[rstest]
fn csv_export_includes_headers_and_all_filtered_rows() {
	let mut table = table_over(sample_products());
	table.paginate(1, 2).unwrap();

	let csv = export::to_csv(&table).unwrap();
	let lines: Vec<&str> = csv.lines().collect();

	// Header plus every filtered row, pagination ignored
	assert_eq!(lines.len(), 5);
	assert_eq!(
		lines[0],
		"ID,SKU,Name,Price,Active,Status,Created At"
	);
	assert!(lines[1].starts_with("1,A1,Anvil,9.99,true,active"));
}

#[rstest]
fn csv_export_respects_filter_and_sort() {
	let mut table = table_over(sample_products());
	let mut filters = HashMap::new();
	filters.insert("status".to_string(), "active".to_string());
	table.filter(filters).unwrap();
	table.sort_by("price", SortOrder::Descending).unwrap();

	let csv = export::to_csv(&table).unwrap();
	let lines: Vec<&str> = csv.lines().collect();

	assert_eq!(lines.len(), 3);
	assert!(lines[1].starts_with("1,A1,Anvil"));
	assert!(lines[2].starts_with("3,B1,Crate"));
}

#[rstest]
fn json_export_carries_typed_values() {
	let table = table_over(sample_products());
	let json = export::to_json(&table).unwrap();
	let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

	let rows = parsed.as_array().unwrap();
	assert_eq!(rows.len(), 4);
	assert_eq!(rows[0]["name"], serde_json::json!("Anvil"));
	assert_eq!(rows[0]["price"], serde_json::json!(9.99));
	assert_eq!(rows[0]["active"], serde_json::json!(true));
	// Bolt's missing price is a JSON null, not a dash
	assert!(rows[1]["price"].is_null());
}

#[rstest]
fn csv_export_round_trips_through_a_file() {
	let table = table_over(sample_products());
	let csv = export::to_csv(&table).unwrap();

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("products.csv");
	std::fs::write(&path, &csv).unwrap();

	let read_back = std::fs::read_to_string(&path).unwrap();
	assert_eq!(read_back, csv);
}
