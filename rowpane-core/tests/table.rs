use rowpane_core::{Record, SortDirection, StoreEvent, TableStore};
use serde_json::{Value, json};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => panic!("test records must be JSON objects"),
    }
}

fn records(values: Vec<Value>) -> Vec<Record> {
    values.into_iter().map(record).collect()
}

fn ids(store: &TableStore) -> Vec<i64> {
    store
        .sorted_view()
        .map(|row| row.get("id").and_then(Value::as_i64).unwrap())
        .collect()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_and_clear() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![json!({"id": 1}), json!({"id": 2})]));

    let row = store.row_at(1).unwrap().clone();
    store.select_row(row, 1);
    assert_eq!(store.selected_index(), Some(1));
    assert_eq!(
        store.selected_row().and_then(|r| r.get("id")),
        Some(&json!(2))
    );

    store.clear_selection();
    assert_eq!(store.selected_row(), None);
    assert_eq!(store.selected_index(), None);
}

#[test]
fn test_replace_rows_always_clears_selection() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![json!({"id": 1}), json!({"id": 2})]));
    store.select_row(record(json!({"id": 3})), 2);
    assert!(store.selected_row().is_some());

    store.replace_rows(records(vec![json!({"id": 10})]));
    assert_eq!(store.selected_row(), None);
    assert_eq!(store.selected_index(), None);
}

#[test]
fn test_select_row_trusts_caller_pair() {
    // The store does not validate the index against the row; the pair is
    // stored as given.
    let mut store = TableStore::new();
    store.replace_rows(records(vec![json!({"id": 1})]));
    store.select_row(record(json!({"id": 99})), 42);
    assert_eq!(store.selected_index(), Some(42));
    assert_eq!(
        store.selected_row().and_then(|r| r.get("id")),
        Some(&json!(99))
    );
}

#[test]
fn test_clear_selection_on_empty_is_a_noop() {
    let mut store = TableStore::new();
    store.clear_selection();
    assert_eq!(store.selected_row(), None);
    assert!(store.drain_events().is_empty());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_ascending_descending_then_clear() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "name": "B"}),
        json!({"id": 2, "name": "A"}),
    ]));

    store.set_sort(Some("name"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![2, 1]);

    store.set_sort(Some("name"), SortDirection::Descending);
    assert_eq!(ids(&store), vec![1, 2]);

    // Absent key clears the sort regardless of direction.
    store.set_sort(None, SortDirection::Descending);
    assert_eq!(ids(&store), vec![1, 2]);
    assert!(store.sort().is_none());
}

#[test]
fn test_sort_is_stable_on_ties() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "group": "x"}),
        json!({"id": 2, "group": "x"}),
        json!({"id": 3, "group": "a"}),
        json!({"id": 4, "group": "x"}),
    ]));

    store.set_sort(Some("group"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![3, 1, 2, 4]);

    // Re-sorting on unrelated state changes must not jitter tied rows.
    store.set_loading(true);
    store.set_sort(Some("group"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![3, 1, 2, 4]);
}

#[test]
fn test_descending_keeps_tie_order() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "group": "x"}),
        json!({"id": 2, "group": "x"}),
        json!({"id": 3, "group": "a"}),
    ]));

    // Equal values yield Equal regardless of direction, so descending
    // keeps insertion order within the tie.
    store.set_sort(Some("group"), SortDirection::Descending);
    assert_eq!(ids(&store), vec![1, 2, 3]);
}

#[test]
fn test_numeric_sort_is_not_lexicographic() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "count": 10}),
        json!({"id": 2, "count": 2}),
    ]));
    store.set_sort(Some("count"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![2, 1]);
}

#[test]
fn test_missing_sort_key_sorts_lowest() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "name": "A"}),
        json!({"id": 2}),
        json!({"id": 3, "name": null}),
    ]));
    store.set_sort(Some("name"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![2, 3, 1]);
}

#[test]
fn test_sort_never_mutates_rows() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 3, "name": "C"}),
        json!({"id": 1, "name": "A"}),
    ]));
    store.set_sort(Some("name"), SortDirection::Ascending);
    assert_eq!(ids(&store), vec![1, 3]);
    // The cached view is a permutation; position 0 of the view differs
    // from position 0 of the dataset.
    assert_eq!(store.view_indices(), &[1, 0]);
}

#[test]
fn test_toggle_sort_cycles_direction() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "name": "B"}),
        json!({"id": 2, "name": "A"}),
    ]));

    store.toggle_sort("name");
    assert_eq!(
        store.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
    store.toggle_sort("name");
    assert_eq!(
        store.sort().map(|s| s.direction),
        Some(SortDirection::Descending)
    );
    // A different column starts ascending again.
    store.toggle_sort("id");
    assert_eq!(store.sort().map(|s| s.key.as_str()), Some("id"));
    assert_eq!(
        store.sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_sort_applies_to_replaced_rows() {
    let mut store = TableStore::new();
    store.set_sort(Some("name"), SortDirection::Ascending);
    store.replace_rows(records(vec![
        json!({"id": 1, "name": "Z"}),
        json!({"id": 2, "name": "A"}),
    ]));
    assert_eq!(ids(&store), vec![2, 1]);
}

// ============================================================================
// Loading flag
// ============================================================================

#[test]
fn test_loading_flag_does_not_touch_rows_or_selection() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![json!({"id": 1})]));
    let row = store.row_at(0).unwrap().clone();
    store.select_row(row, 0);

    store.set_loading(true);
    assert!(store.is_loading());
    assert_eq!(store.len(), 1);
    assert_eq!(store.selected_index(), Some(0));

    store.set_loading(false);
    assert!(!store.is_loading());
}

// ============================================================================
// Event queue
// ============================================================================

#[test]
fn test_events_are_emitted_in_order() {
    let mut store = TableStore::new();
    store.replace_rows(records(vec![
        json!({"id": 1, "name": "B"}),
        json!({"id": 2, "name": "A"}),
    ]));
    store.set_sort(Some("name"), SortDirection::Ascending);
    let row = store.row_at(0).unwrap().clone();
    store.select_row(row, 0);
    store.clear_selection();
    store.set_loading(true);
    store.set_loading(true); // no change, no event

    let events = store.drain_events();
    assert_eq!(events.len(), 5);
    assert_eq!(events[0], StoreEvent::RowsReplaced { count: 2 });
    assert!(matches!(events[1], StoreEvent::SortChanged { .. }));
    assert_eq!(events[2], StoreEvent::RowSelected { index: 0 });
    assert_eq!(events[3], StoreEvent::SelectionCleared);
    assert_eq!(events[4], StoreEvent::LoadingChanged(true));

    // Draining empties the queue.
    assert!(store.drain_events().is_empty());
}
