use rowpane_core::{SortDirection, SplitPane, TableStore, ViewerConfig};
use serde_json::json;

use rowpane_tui::buffer::Buffer;
use rowpane_tui::layout::{Rect, split_panes};
use rowpane_tui::views::{SELECTED_BG, detail, status, table};

fn config() -> ViewerConfig {
    serde_json::from_str(
        r#"{
            "title": "People",
            "columns": [
                { "key": "name", "title": "Name", "width": 10 },
                { "key": "age", "title": "Age", "width": 5 }
            ]
        }"#,
    )
    .unwrap()
}

fn store_with_rows() -> TableStore {
    let mut store = TableStore::new();
    let rows = [json!({"name": "Ada", "age": 36}), json!({"name": "Bo", "age": 3})]
        .into_iter()
        .map(|v| match v {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        })
        .collect();
    store.replace_rows(rows);
    store
}

// ============================================================================
// Table pane
// ============================================================================

#[test]
fn test_table_renders_header_and_rows() {
    let mut buffer = Buffer::new(40, 6);
    let store = store_with_rows();
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 6),
        &config(),
        &store,
        0,
        "",
    );

    assert!(buffer.row_text(0).contains("Name"));
    assert!(buffer.row_text(0).contains("Age"));
    assert!(buffer.row_text(1).contains("Ada"));
    assert!(buffer.row_text(1).contains("36"));
    assert!(buffer.row_text(2).contains("Bo"));
}

#[test]
fn test_table_shows_sort_indicator() {
    let mut buffer = Buffer::new(40, 6);
    let mut store = store_with_rows();
    store.set_sort(Some("name"), SortDirection::Descending);
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 6),
        &config(),
        &store,
        0,
        "",
    );

    assert!(buffer.row_text(0).contains("Name ▼"));
    // Descending by name puts Bo first.
    assert!(buffer.row_text(1).contains("Bo"));
    assert!(buffer.row_text(2).contains("Ada"));
}

#[test]
fn test_table_highlights_selected_row() {
    let mut buffer = Buffer::new(40, 6);
    let mut store = store_with_rows();
    let row = store.row_at(1).unwrap().clone();
    store.select_row(row, 1);
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 6),
        &config(),
        &store,
        0,
        "",
    );

    let selected_cell = buffer.get(0, 2).unwrap();
    assert_eq!(selected_cell.bg, SELECTED_BG);
    let unselected_cell = buffer.get(0, 1).unwrap();
    assert_ne!(unselected_cell.bg, SELECTED_BG);
}

#[test]
fn test_table_empty_fallback() {
    let mut buffer = Buffer::new(40, 6);
    let store = TableStore::new();
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 6),
        &config(),
        &store,
        0,
        "",
    );
    assert!(buffer.row_text(1).contains("No data"));
}

#[test]
fn test_table_loading_fallback() {
    let mut buffer = Buffer::new(40, 6);
    let mut store = TableStore::new();
    store.set_loading(true);
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 6),
        &config(),
        &store,
        0,
        "⠋",
    );
    assert!(buffer.row_text(1).contains("Loading"));
}

#[test]
fn test_table_respects_scroll_offset() {
    let mut buffer = Buffer::new(40, 3);
    let store = store_with_rows();
    // One visible row, scrolled past the first.
    table::render(
        &mut buffer,
        Rect::new(0, 0, 40, 2),
        &config(),
        &store,
        1,
        "",
    );
    assert!(buffer.row_text(1).contains("Bo"));
    assert!(!buffer.row_text(1).contains("Ada"));
}

// ============================================================================
// Detail pane
// ============================================================================

#[test]
fn test_detail_shows_selected_fields() {
    let mut buffer = Buffer::new(40, 6);
    let mut store = store_with_rows();
    let row = store.row_at(0).unwrap().clone();
    store.select_row(row, 0);
    detail::render(&mut buffer, Rect::new(0, 0, 40, 6), &config(), &store);

    assert!(buffer.row_text(0).contains("Name"));
    assert!(buffer.row_text(0).contains("Ada"));
    assert!(buffer.row_text(1).contains("Age"));
    assert!(buffer.row_text(1).contains("36"));
}

#[test]
fn test_detail_no_selection_fallback() {
    let mut buffer = Buffer::new(40, 6);
    let store = store_with_rows();
    detail::render(&mut buffer, Rect::new(0, 0, 40, 6), &config(), &store);
    assert!(buffer.row_text(1).contains("No selection"));
}

// ============================================================================
// Split layout on screen
// ============================================================================

#[test]
fn test_divider_separates_panes() {
    let area = Rect::new(0, 0, 50, 10);
    let layout = split_panes(area, &SplitPane::default());
    let mut buffer = Buffer::new(50, 10);
    let store = store_with_rows();

    table::render(&mut buffer, layout.left, &config(), &store, 0, "");
    for y in 0..10 {
        buffer.set(
            layout.divider_x,
            y,
            rowpane_tui::buffer::Cell {
                ch: '│',
                ..Default::default()
            },
        );
    }
    detail::render(&mut buffer, layout.right, &config(), &store);

    assert_eq!(buffer.get(layout.divider_x, 4).unwrap().ch, '│');
    // Panes do not bleed across the divider.
    assert!(layout.left.right() <= layout.divider_x);
    assert!(layout.right.x > layout.divider_x);
}

// ============================================================================
// Status line
// ============================================================================

#[test]
fn test_status_renders_summary() {
    let mut buffer = Buffer::new(60, 1);
    let store = store_with_rows();
    status::render(
        &mut buffer,
        Rect::new(0, 0, 60, 1),
        &config(),
        &store,
        None,
    );
    assert!(buffer.row_text(0).contains("People: 2 rows"));
}
