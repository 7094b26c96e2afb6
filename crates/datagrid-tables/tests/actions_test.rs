
use datagrid_tables::actions::{ACTION_DELETE, ACTION_VIEW};
use datagrid_tables::{BulkActions, RowActions, Table, TableError};
use fixtures::*;
use rstest::*;
use std::cell::RefCell;
use std::rc::Rc;

#[rstest]
fn row_actions_forward_to_handlers(sample_products: Vec<Product>) {
	let viewed: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
	let deleted: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

	let viewed_ref = Rc::clone(&viewed);
	let deleted_ref = Rc::clone(&deleted);
	let actions = RowActions::new()
		.on_view(move |p: &Product| viewed_ref.borrow_mut().push(p.id))
		.on_delete(move |p: &Product| deleted_ref.borrow_mut().push(p.id));

	actions.dispatch(ACTION_VIEW, &sample_products[0]).unwrap();
	actions.dispatch(ACTION_DELETE, &sample_products[2]).unwrap();

	assert_eq!(*viewed.borrow(), vec![1]);
	assert_eq!(*deleted.borrow(), vec![3]);
}

#[rstest]
fn unregistered_row_action_is_an_error(sample_products: Vec<Product>) {
	let actions: RowActions<Product> = RowActions::new();
	let result = actions.dispatch("edit", &sample_products[0]);
	assert!(matches!(result, Err(TableError::UnknownAction(_))));
}

#[rstest]
fn custom_row_actions_dispatch_by_key(sample_products: Vec<Product>) {
	let archived: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
	let archived_ref = Rc::clone(&archived);

	let actions = RowActions::new().custom("archive", "Archive", move |p: &Product| {
		archived_ref.borrow_mut().push(p.id)
	});

	assert_eq!(actions.entries(), vec![("archive", "Archive")]);
	actions.dispatch("archive", &sample_products[1]).unwrap();
	assert_eq!(*archived.borrow(), vec![2]);
}

#[rstest]
fn bulk_action_receives_selection_in_order(mut product_table: Table<Product>) {
	let received: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
	let received_ref = Rc::clone(&received);

	let actions = BulkActions::new().register("delete", "Delete selected", move |ids| {
		received_ref.borrow_mut().extend(ids.iter().cloned());
		Ok(())
	});

	product_table.toggle_selection("3");
	product_table.toggle_selection("1");

	product_table.dispatch_bulk(&actions, "delete").unwrap();
	assert_eq!(*received.borrow(), vec!["3".to_string(), "1".to_string()]);
}

#[rstest]
fn failed_bulk_action_keeps_selection(mut product_table: Table<Product>) {
	let actions =
		BulkActions::new().register("delete", "Delete selected", |_ids| Err("backend down".into()));

	product_table.toggle_selection("1");
	product_table.toggle_selection("2");

	let result = product_table.dispatch_bulk(&actions, "delete");
	assert!(matches!(
		result,
		Err(TableError::ActionFailed { .. })
	));

	// Selection is untouched; clearing is the caller's call
	assert_eq!(product_table.selected_ids().len(), 2);
}

#[rstest]
fn unknown_bulk_action_is_an_error(product_table: Table<Product>) {
	let actions = BulkActions::new();
	let result = product_table.dispatch_bulk(&actions, "publish");
	assert!(matches!(result, Err(TableError::UnknownAction(_))));
}
