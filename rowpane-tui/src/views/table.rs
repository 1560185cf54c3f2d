//! Table pane: header with sort indicators, data rows, selection
//! highlight, and hit helpers for mouse dispatch.

use crossterm::style::Color;

use rowpane_core::{Align, ColumnConfig, SortDirection, TableStore, ViewerConfig};

use crate::buffer::{Buffer, fit_width};
use crate::layout::Rect;
use crate::views::{ACCENT, MUTED, SELECTED_BG, SELECTED_FG, format_value};

/// Gap between columns in terminal cells.
const COLUMN_GAP: u16 = 1;

/// Render the table into `area`: one header row, then the sorted view
/// starting at `scroll`.
pub fn render(
    buffer: &mut Buffer,
    area: Rect,
    config: &ViewerConfig,
    store: &TableStore,
    scroll: usize,
    spinner_frame: &str,
) {
    if area.is_empty() {
        return;
    }

    render_header(buffer, area, config, store);

    if store.is_empty() {
        let message = if store.is_loading() {
            format!("{spinner_frame} Loading...")
        } else {
            "No data".to_string()
        };
        if area.height > 1 {
            buffer.put_str(area.x + 1, area.y + 1, &message, area.width, MUTED, Color::Reset, false);
        }
        return;
    }

    let visible = area.height.saturating_sub(1) as usize;
    let selected = store.selected_index();
    for (line, view_index) in (scroll..store.len()).take(visible).enumerate() {
        let Some(row) = store.row_at(view_index) else {
            break;
        };
        let y = area.y + 1 + line as u16;
        let is_selected = selected == Some(view_index);
        let (fg, bg) = if is_selected {
            (SELECTED_FG, SELECTED_BG)
        } else {
            (Color::Reset, Color::Reset)
        };

        if is_selected {
            buffer.fill_row(
                area.x,
                y,
                area.width,
                crate::buffer::Cell {
                    ch: ' ',
                    fg,
                    bg,
                    bold: false,
                },
            );
        }

        let mut x = area.x;
        for column in &config.columns {
            if x >= area.right() {
                break;
            }
            let width = column.width.min(area.right() - x);
            let text = align_text(&format_value(row.get(&column.key)), width, column.align);
            buffer.put_str(x, y, &text, width, fg, bg, false);
            x = x.saturating_add(column.width + COLUMN_GAP);
        }
    }
}

fn render_header(buffer: &mut Buffer, area: Rect, config: &ViewerConfig, store: &TableStore) {
    let sort = store.sort();
    let mut x = area.x;
    for column in &config.columns {
        if x >= area.right() {
            break;
        }
        let width = column.width.min(area.right() - x);

        let mut title = column.title().to_string();
        let mut fg = Color::Reset;
        if let Some(spec) = sort
            && spec.key == column.key
        {
            let arrow = match spec.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            };
            title.push_str(arrow);
            fg = ACCENT;
        }

        let text = align_text(&title, width, column.align);
        buffer.put_str(x, area.y, &text, width, fg, Color::Reset, true);
        x = x.saturating_add(column.width + COLUMN_GAP);
    }
}

/// Fit `text` to `width` cells honoring the column alignment.
pub fn align_text(text: &str, width: u16, align: Align) -> String {
    let fitted = fit_width(text, width);
    let trimmed = fitted.trim_end();
    let pad = width as usize - trimmed.chars().count().min(width as usize);
    match align {
        Align::Left => fitted,
        Align::Right => format!("{}{}", " ".repeat(pad), trimmed),
        Align::Center => {
            let left = pad / 2;
            format!(
                "{}{}{}",
                " ".repeat(left),
                trimmed,
                " ".repeat(pad - left)
            )
        }
    }
}

/// Which column a click at pane-relative `x` lands in.
///
/// Accounts for the inter-column gap; clicks in a gap belong to no
/// column.
pub fn column_at_x(columns: &[ColumnConfig], x: u16) -> Option<usize> {
    let mut col_x = 0u16;
    for (i, column) in columns.iter().enumerate() {
        if x >= col_x && x < col_x + column.width {
            return Some(i);
        }
        col_x = col_x.saturating_add(column.width + COLUMN_GAP);
    }
    None
}

/// Which sorted-view row a click at pane-relative `y` lands on, given
/// the current scroll offset. Row 0 is the header.
pub fn row_at_y(y: u16, scroll: usize, row_count: usize) -> Option<usize> {
    if y == 0 {
        return None;
    }
    let index = scroll + (y - 1) as usize;
    (index < row_count).then_some(index)
}

/// Scroll offset that keeps `index` visible in a viewport of `visible`
/// data rows.
pub fn scroll_into_view(scroll: usize, index: usize, visible: usize) -> usize {
    if visible == 0 {
        return scroll;
    }
    if index < scroll {
        index
    } else if index >= scroll + visible {
        index + 1 - visible
    } else {
        scroll
    }
}
