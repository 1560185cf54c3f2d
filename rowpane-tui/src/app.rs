//! The viewer application: render loop, input dispatch, state wiring.
//!
//! All state mutation happens on this task, in event-delivery order.
//! The background loader only reaches the store through its `Shared`
//! handle and signals completion over the wakeup channel.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use log::{debug, info};

use rowpane_core::{Shared, SplitPane, StoreEvent, TableStore, ViewerConfig};

use crate::buffer::Cell;
use crate::data;
use crate::error::AppError;
use crate::layout::{PaneLayout, Rect, split_panes};
use crate::term::Terminal;
use crate::views::{ACCENT, MUTED, detail, spinner, status, table};
use crate::wakeup;

pub struct App {
    config: ViewerConfig,
    data_path: PathBuf,
    store: Shared<TableStore>,
    load_error: Shared<Option<String>>,
    split: SplitPane,
    /// First visible data row of the table viewport.
    scroll: usize,
    tick: u64,
    quit: bool,
}

impl App {
    pub fn new(config: ViewerConfig, data_path: PathBuf) -> Self {
        let split = SplitPane::new(&config.split);
        Self {
            config,
            data_path,
            store: Shared::default(),
            load_error: Shared::default(),
            split,
            scroll: 0,
            tick: 0,
            quit: false,
        }
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = Terminal::new()?;
        let (wakeup_tx, mut wakeup_rx) = wakeup::channel();

        data::spawn_load(
            self.data_path.clone(),
            self.store.clone(),
            self.load_error.clone(),
            wakeup_tx.clone(),
        );

        let mut events = crossterm::event::EventStream::new();

        while !self.quit {
            self.render(&mut terminal)?;

            let loading = self.store.with(|s| s.is_loading());
            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event, &mut terminal, &wakeup_tx),
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
                _ = wakeup_rx.recv() => {}
                _ = tokio::time::sleep(Duration::from_millis(spinner::FRAME_MS)), if loading => {
                    self.tick += 1;
                }
            }

            self.forward_store_events();
        }

        Ok(())
    }

    /// Screen regions for the current terminal size: the pane area and
    /// the status line.
    fn regions(size: (u16, u16)) -> (Rect, Rect) {
        let (width, height) = size;
        let pane_height = height.saturating_sub(1);
        (
            Rect::new(0, 0, width, pane_height),
            Rect::new(0, pane_height, width, height.min(1)),
        )
    }

    fn pane_layout(&self, terminal: &Terminal) -> PaneLayout {
        let (panes, _) = Self::regions(terminal.size());
        split_panes(panes, &self.split)
    }

    fn render(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        let (panes, status_area) = Self::regions(terminal.size());
        let layout = split_panes(panes, &self.split);
        let dragging = self.split.is_dragging();
        let scroll = self.scroll;
        let tick = self.tick;

        let config = &self.config;
        let store = &self.store;
        let load_error = self.load_error.get();

        let frame = terminal.frame();
        store.with(|s| {
            table::render(frame, layout.left, config, s, scroll, spinner::frame(tick));

            // Divider column; highlighted while dragging as drag feedback.
            let divider = Cell {
                ch: '│',
                fg: if dragging { ACCENT } else { MUTED },
                bg: crossterm::style::Color::Reset,
                bold: dragging,
            };
            for y in panes.y..panes.bottom() {
                frame.set(layout.divider_x, y, divider);
            }

            detail::render(frame, layout.right, config, s);
            status::render(frame, status_area, config, s, load_error.as_deref());
        });
        store.clear_dirty();

        terminal.flush()?;
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: Event,
        terminal: &mut Terminal,
        wakeup: &wakeup::WakeupSender,
    ) {
        match event {
            Event::Key(key) => self.handle_key(key, terminal, wakeup),
            Event::Mouse(mouse) => self.handle_mouse(mouse, terminal),
            Event::Resize(width, height) => {
                terminal.resize(width, height);
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, terminal: &Terminal, wakeup: &wakeup::WakeupSender) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc => self.store.update(|s| s.clear_selection()),
            KeyCode::Char('r') => {
                info!("reload requested");
                data::spawn_load(
                    self.data_path.clone(),
                    self.store.clone(),
                    self.load_error.clone(),
                    wakeup.clone(),
                );
            }
            KeyCode::Up => self.move_selection(-1, terminal),
            KeyCode::Down => self.move_selection(1, terminal),
            KeyCode::Left => self.nudge_divider(-1, terminal),
            KeyCode::Right => self.nudge_divider(1, terminal),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, terminal: &Terminal) {
        let layout = self.pane_layout(terminal);
        let (panes, _) = Self::regions(terminal.size());

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.split.is_resizable() && layout.hits_divider(mouse.column, mouse.row) {
                    if self.split.begin_drag() {
                        debug!("divider drag started");
                    }
                } else if layout.left.contains(mouse.column, mouse.row) {
                    self.click_table(
                        mouse.column - layout.left.x,
                        mouse.row - layout.left.y,
                        layout.left,
                    );
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let before = self.split.ratio();
                if let Some(after) = self.split.update_drag(
                    f64::from(mouse.column),
                    f64::from(panes.x),
                    f64::from(panes.width),
                ) && after != before
                {
                    debug!("ratio changed: {after:.3}");
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.split.is_dragging() {
                    self.split.end_drag();
                    debug!("divider drag ended at ratio {:.3}", self.split.ratio());
                }
            }
            MouseEventKind::ScrollUp if layout.left.contains(mouse.column, mouse.row) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            MouseEventKind::ScrollDown if layout.left.contains(mouse.column, mouse.row) => {
                let len = self.store.with(|s| s.len());
                if self.scroll + 1 < len {
                    self.scroll += 1;
                }
            }
            _ => {}
        }
    }

    /// A click inside the table pane: header toggles sort, data rows
    /// become the primary selection.
    fn click_table(&mut self, x: u16, y: u16, pane: Rect) {
        if y == 0 {
            let Some(col) = table::column_at_x(&self.config.columns, x) else {
                return;
            };
            let column = &self.config.columns[col];
            if !column.sortable {
                return;
            }
            let key = column.key.clone();
            self.store.update(|s| s.toggle_sort(&key));
            return;
        }

        let clicked = self.store.update(|s| {
            table::row_at_y(y, self.scroll, s.len()).map(|index| {
                // Pair taken from the current sorted view, keeping the
                // row/index contract intact.
                let row = s.row_at(index).cloned();
                if let Some(row) = row {
                    s.select_row(row, index);
                }
                index
            })
        });

        if let Some(index) = clicked {
            let visible = pane.height.saturating_sub(1) as usize;
            self.scroll = table::scroll_into_view(self.scroll, index, visible);
        }
    }

    /// Move the primary selection through the sorted view.
    fn move_selection(&mut self, delta: i64, terminal: &Terminal) {
        let layout = self.pane_layout(terminal);
        let scroll = self.scroll;

        let moved = self.store.update(|s| {
            if s.is_empty() {
                return None;
            }
            let target = match s.selected_index() {
                Some(index) => {
                    let next = index as i64 + delta;
                    next.clamp(0, s.len() as i64 - 1) as usize
                }
                // No selection yet: start at the top of the viewport.
                None => scroll.min(s.len() - 1),
            };
            let row = s.row_at(target).cloned()?;
            s.select_row(row, target);
            Some(target)
        });

        if let Some(index) = moved {
            let visible = layout.left.height.saturating_sub(1) as usize;
            self.scroll = table::scroll_into_view(self.scroll, index, visible);
        }
    }

    /// Keyboard resize: move the divider one column through the same
    /// clamping path as a pointer drag.
    fn nudge_divider(&mut self, delta: i32, terminal: &Terminal) {
        if !self.split.begin_drag() {
            return;
        }
        let layout = self.pane_layout(terminal);
        let (panes, _) = Self::regions(terminal.size());
        let target = i64::from(layout.divider_x) + i64::from(delta);
        self.split.update_drag(
            target as f64,
            f64::from(panes.x),
            f64::from(panes.width),
        );
        self.split.end_drag();
    }

    /// Forward drained store notifications to the log - the stand-in
    /// for a parent component consuming row-selected / sort-changed.
    fn forward_store_events(&mut self) {
        let events = self.store.update(|s| s.drain_events());
        for event in &events {
            match event {
                StoreEvent::RowSelected { index } => debug!("row selected at view index {index}"),
                StoreEvent::SelectionCleared => debug!("selection cleared"),
                StoreEvent::SortChanged { sort } => debug!("sort changed: {sort:?}"),
                StoreEvent::RowsReplaced { count } => {
                    // Keep the viewport in range after a smaller dataset.
                    self.scroll = self.scroll.min(count.saturating_sub(1));
                    info!("rows replaced: {count}");
                }
                StoreEvent::LoadingChanged(loading) => debug!("loading: {loading}"),
            }
        }
    }
}
