//! Detail pane: labeled fields of the primary selection.

use crossterm::style::Color;

use rowpane_core::{TableStore, ViewerConfig};

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::views::{MUTED, format_value};

/// Render the detail pane for the current selection.
///
/// Shows "No selection" when the store has no primary selection - the
/// empty-selection state is a rendering fallback, not an error.
pub fn render(buffer: &mut Buffer, area: Rect, config: &ViewerConfig, store: &TableStore) {
    if area.is_empty() {
        return;
    }

    let Some(row) = store.selected_row() else {
        buffer.put_str(
            area.x + 1,
            area.y + 1,
            "No selection",
            area.width.saturating_sub(1),
            MUTED,
            Color::Reset,
            false,
        );
        return;
    };

    let fields = config.effective_detail_fields();
    let label_width = fields
        .iter()
        .map(|f| f.label().chars().count())
        .max()
        .unwrap_or(0) as u16;

    for (i, field) in fields.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }

        buffer.put_str(area.x, y, field.label(), label_width, MUTED, Color::Reset, false);

        let value_x = area.x + label_width + 2;
        if value_x < area.right() {
            let value = format_value(row.get(&field.key));
            buffer.put_str(
                value_x,
                y,
                &value,
                area.right() - value_x,
                Color::Reset,
                Color::Reset,
                false,
            );
        }
    }
}
