//! Table state store: rows, selection, sort, loading.
//!
//! The store is the single source of truth shared by the table pane and
//! the detail pane. Presentation components read derived state (the
//! sorted view, the primary selection) and call the mutators here; no
//! component mutates rows or selection directly. Mutations push
//! notifications onto an explicit queue that the host drains.

use serde_json::Value;

use crate::value::compare_values;

/// One opaque record in the dataset. Field schema is defined by the
/// viewer configuration, not by this crate.
pub type Record = serde_json::Map<String, Value>;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort specification: which field, which way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Outward notification pushed by the store's mutators.
///
/// Consumed by the parent component via [`TableStore::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A row became the primary selection at the given sorted-view index.
    RowSelected { index: usize },
    /// The selection was cleared.
    SelectionCleared,
    /// The sort specification changed (`None` means insertion order).
    SortChanged { sort: Option<SortSpec> },
    /// The dataset was replaced wholesale.
    RowsReplaced { count: usize },
    /// The loading flag changed.
    LoadingChanged(bool),
}

/// The primary selection: the row and its position in the sorted view
/// at selection time. Stored as a pair so row and index are set and
/// cleared together, never one without the other.
#[derive(Debug, Clone)]
struct Selection {
    row: Record,
    index: usize,
}

/// Single source of truth for row data, sort, selection, and loading.
///
/// One store per viewer instance, explicitly constructed and passed to
/// the panes that consume it (no process-wide global). The sorted view
/// is a cached permutation recomputed on each mutating call; the
/// underlying rows are never reordered.
#[derive(Debug, Default)]
pub struct TableStore {
    rows: Vec<Record>,
    /// Permutation into `rows` in sorted order.
    view: Vec<usize>,
    selected: Option<Selection>,
    sort: Option<SortSpec>,
    loading: bool,
    events: Vec<StoreEvent>,
}

impl TableStore {
    /// Create an empty store: no rows, no selection, insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the dataset wholesale.
    ///
    /// Unconditionally clears the selection: indices from the old
    /// dataset are meaningless against new data, and a stale selection
    /// would show detail for a row that may no longer exist.
    pub fn replace_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.selected = None;
        self.resort();
        self.events.push(StoreEvent::RowsReplaced {
            count: self.rows.len(),
        });
    }

    /// Set the primary selection.
    ///
    /// `index` is the row's position in the current sorted view. The
    /// store does not verify that the pair is consistent; callers that
    /// take both from the same view read are responsible for that.
    pub fn select_row(&mut self, row: Record, index: usize) {
        self.selected = Some(Selection { row, index });
        self.events.push(StoreEvent::RowSelected { index });
    }

    /// Clear the selection. Always succeeds; emits an event only when
    /// there was something to clear.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.events.push(StoreEvent::SelectionCleared);
        }
    }

    /// The selected row, if any.
    pub fn selected_row(&self) -> Option<&Record> {
        self.selected.as_ref().map(|s| &s.row)
    }

    /// Sorted-view index of the selection at selection time, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().map(|s| s.index)
    }

    /// Set or clear the sort specification.
    ///
    /// An absent key clears the sort entirely regardless of `direction`,
    /// restoring insertion order. The direction is not validated against
    /// the column's data type; comparison adapts to the runtime values.
    pub fn set_sort(&mut self, key: Option<&str>, direction: SortDirection) {
        self.sort = key.map(|key| SortSpec {
            key: key.to_string(),
            direction,
        });
        self.resort();
        self.events.push(StoreEvent::SortChanged {
            sort: self.sort.clone(),
        });
    }

    /// Header-click behavior: sort a new column ascending, flip the
    /// direction when the column is already sorted.
    pub fn toggle_sort(&mut self, key: &str) {
        let direction = match &self.sort {
            Some(spec) if spec.key == key => spec.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.set_sort(Some(key), direction);
    }

    /// Current sort specification, `None` for insertion order.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Toggle the loading flag. Has no effect on rows or selection.
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.events.push(StoreEvent::LoadingChanged(loading));
        }
    }

    /// Whether a data load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Row indices in sorted-view order.
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// Rows in sorted-view order. Never mutates the underlying dataset.
    pub fn sorted_view(&self) -> impl Iterator<Item = &Record> {
        self.view.iter().map(|&i| &self.rows[i])
    }

    /// Row at the given sorted-view position.
    pub fn row_at(&self, view_index: usize) -> Option<&Record> {
        self.view.get(view_index).map(|&i| &self.rows[i])
    }

    /// Drain pending outward notifications in emission order.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Recompute the cached sorted view.
    ///
    /// `Vec::sort_by` is stable, so rows with equal keys keep their
    /// insertion order across repeated re-sorts.
    fn resort(&mut self) {
        self.view = (0..self.rows.len()).collect();
        if let Some(spec) = &self.sort {
            let rows = &self.rows;
            let key = spec.key.as_str();
            self.view.sort_by(|&a, &b| {
                let ord = compare_values(rows[a].get(key), rows[b].get(key));
                match spec.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
    }
}
