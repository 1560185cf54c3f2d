//! Cell grid double buffer.
//!
//! The viewer renders each frame into a [`Buffer`], then the terminal
//! diffs it against the previous frame and writes only changed cells.

use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
        }
    }
}

/// Fixed-size grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a string starting at `(x, y)`, clipped to `max_width` cells
    /// and the buffer edge. Returns the number of cells written.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Color,
        bg: Color,
        bold: bool,
    ) -> u16 {
        let mut cursor = x;
        let limit = x.saturating_add(max_width).min(self.width);
        for ch in text.chars() {
            if cursor >= limit {
                break;
            }
            self.set(
                cursor,
                y,
                Cell {
                    ch,
                    fg,
                    bg,
                    bold,
                },
            );
            cursor += 1;
        }
        cursor - x
    }

    /// Fill a horizontal span with a single cell.
    pub fn fill_row(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        let end = x.saturating_add(width).min(self.width);
        for cx in x..end {
            self.set(cx, y, cell);
        }
    }

    /// Cells that differ from `other`, in row-major order.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The row's text content, for assertions in tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

/// Truncate or pad `text` to exactly `width` display cells.
///
/// Wide characters that would straddle the boundary are dropped and the
/// remainder padded with spaces.
pub fn fit_width(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    while out.width() < width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_reports_only_changed_cells() {
        let previous = Buffer::new(4, 2);
        let mut current = Buffer::new(4, 2);
        current.set(2, 1, Cell::new_char('x'));

        let changes: Vec<_> = current.diff(&previous).collect();
        assert_eq!(changes.len(), 1);
        assert_eq!((changes[0].0, changes[0].1), (2, 1));
        assert_eq!(changes[0].2.ch, 'x');
    }

    #[test]
    fn put_str_clips_to_max_width() {
        let mut buffer = Buffer::new(10, 1);
        buffer.put_str(1, 0, "hello", 3, Color::Reset, Color::Reset, false);
        assert_eq!(buffer.row_text(0), " hel      ");
    }

    #[test]
    fn fit_width_truncates_and_pads() {
        assert_eq!(fit_width("hello", 3), "hel");
        assert_eq!(fit_width("hi", 4), "hi  ");
        assert_eq!(fit_width("", 2), "  ");
    }

    impl Cell {
        fn new_char(ch: char) -> Self {
            Self {
                ch,
                ..Default::default()
            }
        }
    }
}
