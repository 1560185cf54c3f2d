//! Status line: title, row count, sort description, load errors, keys.

use crossterm::style::Color;

use rowpane_core::{SortDirection, TableStore, ViewerConfig};

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::views::MUTED;

const KEY_HELP: &str = "↑/↓ select  click header: sort  drag │: resize  r reload  q quit";

/// One-line status summary rendered at the bottom of the screen.
pub fn line(config: &ViewerConfig, store: &TableStore, load_error: Option<&str>) -> String {
    if let Some(error) = load_error {
        return format!("load failed: {error}");
    }

    let title = config.title.as_deref().unwrap_or("rowpane");
    let mut parts = vec![format!("{title}: {} rows", store.len())];

    if let Some(spec) = store.sort() {
        let arrow = match spec.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        parts.push(format!("sort {} {arrow}", spec.key));
    }
    if store.is_loading() {
        parts.push("loading".into());
    }

    parts.join("  |  ")
}

pub fn render(
    buffer: &mut Buffer,
    area: Rect,
    config: &ViewerConfig,
    store: &TableStore,
    load_error: Option<&str>,
) {
    if area.is_empty() {
        return;
    }
    let text = line(config, store, load_error);
    buffer.put_str(area.x, area.y, &text, area.width, Color::Reset, Color::Reset, false);

    // Right-align the key help when there is room left over.
    let used = text.chars().count() as u16;
    let help_len = KEY_HELP.chars().count() as u16;
    if area.width > used + help_len + 2 {
        buffer.put_str(
            area.right() - help_len,
            area.y,
            KEY_HELP,
            help_len,
            MUTED,
            Color::Reset,
            false,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ViewerConfig {
        serde_json::from_str(r#"{ "title": "Users", "columns": [{ "key": "name" }] }"#).unwrap()
    }

    #[test]
    fn test_line_shows_count_and_sort() {
        let mut store = TableStore::new();
        store.set_sort(Some("name"), SortDirection::Descending);
        let text = line(&config(), &store, None);
        assert!(text.contains("Users: 0 rows"));
        assert!(text.contains("sort name ▼"));
    }

    #[test]
    fn test_line_prefers_error() {
        let store = TableStore::new();
        let text = line(&config(), &store, Some("no such file"));
        assert_eq!(text, "load failed: no such file");
    }

    #[test]
    fn test_line_shows_loading() {
        let mut store = TableStore::new();
        store.set_loading(true);
        assert!(line(&config(), &store, None).contains("loading"));
    }
}
