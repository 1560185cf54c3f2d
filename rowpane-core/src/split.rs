//! Split-ratio engine for a two-pane resizable layout.
//!
//! Converts pointer drag positions into a clamped split ratio between two
//! adjacent panes, given the container width and per-side minimum widths.
//! The engine owns the drag lifecycle (`begin_drag` / `update_drag` /
//! `end_drag`); no other component mutates the dragging flag.

use log::warn;

use crate::config::SplitConfig;

/// Resizable split between two side-by-side panes.
///
/// The ratio is the fraction of the container width allocated to the
/// left pane, always kept in `[0, 1]`. Widths and pointer coordinates
/// are in whatever unit the host uses (pixels, terminal columns); the
/// engine only requires them to be consistent.
#[derive(Debug, Clone)]
pub struct SplitPane {
    ratio: f64,
    min_left: f64,
    min_right: f64,
    resizable: bool,
    dragging: bool,
    /// Set while the container is too narrow for both minimums, so the
    /// conflict is warned about once per episode instead of per event.
    narrow_warned: bool,
}

impl SplitPane {
    /// Create an engine seeded from configuration.
    ///
    /// The initial ratio is clamped into `[0, 1]`; negative minimum
    /// widths are treated as zero.
    pub fn new(config: &SplitConfig) -> Self {
        Self {
            ratio: config.initial_ratio.clamp(0.0, 1.0),
            min_left: config.min_left.max(0.0),
            min_right: config.min_right.max(0.0),
            resizable: config.resizable,
            dragging: false,
            narrow_warned: false,
        }
    }

    /// Current split ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether resizing is enabled at all.
    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Start a drag.
    ///
    /// Returns true when the drag started, so the host can apply drag
    /// feedback (cursor change, divider highlight). No-op returning
    /// false when resizing is disabled.
    pub fn begin_drag(&mut self) -> bool {
        if !self.resizable {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Recompute the ratio from the current pointer position.
    ///
    /// Returns the resulting ratio, or `None` when ignored (not
    /// dragging, or non-positive container width). Calling this twice
    /// with identical arguments yields the same ratio both times.
    pub fn update_drag(
        &mut self,
        pointer_x: f64,
        container_left: f64,
        container_width: f64,
    ) -> Option<f64> {
        if !self.dragging || container_width <= 0.0 {
            return None;
        }

        let raw = (pointer_x - container_left) / container_width;
        let min_ratio = self.min_left / container_width;
        let max_ratio = 1.0 - self.min_right / container_width;

        self.ratio = if min_ratio > max_ratio {
            // Container cannot satisfy both minimums. Settle on the
            // midpoint of the infeasible band rather than failing.
            if !self.narrow_warned {
                warn!(
                    "container width {container_width} too narrow for minimums \
                     {} + {}; clamping split to midpoint",
                    self.min_left, self.min_right
                );
                self.narrow_warned = true;
            }
            ((min_ratio + max_ratio) / 2.0).clamp(0.0, 1.0)
        } else {
            self.narrow_warned = false;
            raw.clamp(min_ratio, max_ratio)
        };

        Some(self.ratio)
    }

    /// End the drag, committing the current ratio.
    ///
    /// Idempotent: safe to call regardless of prior state. There is no
    /// rollback to the pre-drag ratio.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Set the ratio directly (keyboard resize, programmatic seeding).
    /// Clamped into `[0, 1]`. Ignored when resizing is disabled.
    pub fn set_ratio(&mut self, ratio: f64) {
        if !self.resizable {
            return;
        }
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    /// Width of the left pane as a percentage of the container.
    pub fn left_percent(&self) -> f64 {
        self.ratio * 100.0
    }

    /// Width of the right pane as a percentage of the container.
    ///
    /// Computed as the exact complement of [`left_percent`](Self::left_percent)
    /// so the pair always sums to 100.
    pub fn right_percent(&self) -> f64 {
        100.0 - self.left_percent()
    }
}

impl Default for SplitPane {
    fn default() -> Self {
        Self::new(&SplitConfig::default())
    }
}
