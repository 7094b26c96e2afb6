
use datagrid_core::column::Column;
use datagrid_core::filter::{FilterState, apply_filters};
use fixtures::*;
use rstest::*;

fn filters(pairs: &[(&str, &str)]) -> FilterState {
	pairs
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

#[rstest]
fn no_filters_keeps_all_rows(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(&sample_products, &product_columns, &FilterState::new());
	assert_eq!(kept, vec![0, 1, 2, 3]);
}

#[rstest]
fn text_filter_is_case_insensitive_substring(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("name", "RAT")]),
	);
	assert_eq!(kept.len(), 1);
	assert_eq!(sample_products[kept[0]].name, "Crate");
}

#[rstest]
fn active_filters_combine_with_and(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	// sku substring "A" matches A1 and A2; status narrows to A1 only
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("sku", "A"), ("status", "active")]),
	);
	assert_eq!(kept.len(), 1);
	assert_eq!(sample_products[kept[0]].sku, "A1");
}

#[rstest]
fn boolean_filter_matches_literal_true(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("active", "true")]),
	);
	assert_eq!(kept.len(), 3);
	assert!(kept.iter().all(|&i| sample_products[i].active));

	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("active", "false")]),
	);
	assert_eq!(kept.len(), 1);
	assert_eq!(sample_products[kept[0]].id, 2);
}

#[rstest]
fn select_filter_is_exact_match(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	// "active" is a prefix of "inactive" under substring semantics, but
	// the select filter must match the option value exactly
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("status", "active")]),
	);
	assert_eq!(kept.len(), 2);
	assert!(kept.iter().all(|&i| sample_products[i].status == "active"));
}

#[rstest]
fn null_value_fails_active_filter(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	// Bolt has a null price; any price filter excludes it
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("price", "9")]),
	);
	assert!(kept.iter().all(|&i| sample_products[i].price.is_some()));
}

#[rstest]
fn empty_filter_value_is_inactive(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("name", "")]),
	);
	assert_eq!(kept.len(), 4);
}

#[rstest]
fn unknown_column_filter_is_ignored(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("nonexistent", "x")]),
	);
	assert_eq!(kept.len(), 4);
}

#[rstest]
fn date_filter_matches_date_substring(
	sample_products: Vec<Product>,
	product_columns: Vec<Box<dyn Column<Row = Product>>>,
) {
	let kept = apply_filters(
		&sample_products,
		&product_columns,
		&filters(&[("created_at", "2024-0")]),
	);
	assert_eq!(kept.len(), 3);
}
