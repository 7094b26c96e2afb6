use datagrid::prelude::*;
use rstest::*;

#[derive(Debug)]
struct Order {
	id: i64,
	customer: String,
	total: f64,
	shipped: bool,
}

fn orders() -> Vec<Order> {
	vec![
		Order { id: 1, customer: "Acme".into(), total: 120.0, shipped: true },
		Order { id: 2, customer: "Globex".into(), total: 75.5, shipped: false },
		Order { id: 3, customer: "Initech".into(), total: 240.0, shipped: true },
	]
}

fn order_table() -> Table<Order> {
	let config = TableConfig::new("order").primary_key(|o: &Order| Some(o.id.to_string()));
	let mut table = Table::with_rows(config, orders());
	table.add_column(Box::new(column::text("customer", "Customer", |o: &Order| {
		o.customer.clone()
	})));
	table.add_column(Box::new(column::number("total", "Total", |o: &Order| o.total)));
	table.add_column(Box::new(column::boolean("shipped", "Shipped", |o: &Order| o.shipped)));
	table
}

#[rstest]
fn prelude_covers_the_common_flow() {
	let mut table = order_table();

	table.set_filter("shipped", "true");
	table.sort_by("total", SortOrder::Descending).unwrap();

	let ids: Vec<i64> = table.visible_rows().iter().map(|o| o.id).collect();
	assert_eq!(ids, vec![3, 1]);

	table.toggle_select_all();
	assert_eq!(table.selected_ids(), ["3", "1"]);

	match table.view() {
		TableView::Rows { rows, .. } => assert_eq!(rows.len(), 2),
		other => panic!("expected rows view, got {other:?}"),
	}
}

#[rstest]
fn engine_types_are_reachable_from_the_root() {
	let pagination = PaginationState::new(1, 10).unwrap();
	assert_eq!(pagination.total_pages(3), 1);

	let cell = CellValue::from(Option::<f64>::None);
	assert!(cell.is_null());
}
