//! Terminal ownership: raw mode, alternate screen, mouse capture, and
//! diff-based frame flushing. Restores the terminal on drop.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;

pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Resize the buffers, forcing a full repaint on the next frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.current = Buffer::new(width, height);
        self.previous = Buffer::new(width, height);
        // A cleared previous buffer still equals a cleared frame, so
        // clear the screen here to drop stale content.
        let _ = execute!(self.stdout, terminal::Clear(terminal::ClearType::All));
    }

    /// Hand out the frame buffer for this render pass.
    pub fn frame(&mut self) -> &mut Buffer {
        self.current.clear();
        &mut self.current
    }

    /// Diff the frame against the previous one and write the changes.
    pub fn flush(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_fg = None;
        let mut last_bg = None;
        let mut last_bold = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if y != last_y || x != last_x.wrapping_add(1) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(cell.fg))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(cell.bg))?;
                last_bg = Some(cell.bg);
            }
            if cell.bold != last_bold {
                let attr = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attr))?;
                last_bold = cell.bold;
            }

            write!(self.stdout, "{}", cell.ch)?;
            last_x = x;
            last_y = y;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
