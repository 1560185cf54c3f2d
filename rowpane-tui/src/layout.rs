//! Pane geometry: rectangles and the ratio-driven split.

use rowpane_core::SplitPane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The three regions of the split: left pane, one divider column, right
/// pane. The divider column belongs to neither pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub left: Rect,
    pub divider_x: u16,
    pub right: Rect,
}

impl PaneLayout {
    /// Whether a point lands on (or immediately beside) the divider.
    ///
    /// One column of slack on each side keeps the divider grabbable on
    /// coarse terminal mouse coordinates.
    pub fn hits_divider(&self, x: u16, y: u16) -> bool {
        y >= self.left.y
            && y < self.left.bottom()
            && x + 1 >= self.divider_x
            && x <= self.divider_x + 1
    }
}

/// Split `area` into left pane, divider, right pane per the engine's
/// current ratio.
///
/// The left width is the rounded ratio share of the full area width,
/// kept in range so the divider and both panes stay on screen even when
/// a narrow container has forced a degenerate ratio.
pub fn split_panes(area: Rect, split: &SplitPane) -> PaneLayout {
    let total = area.width;
    let left_width = if total <= 1 {
        0
    } else {
        let cells = (split.ratio() * f64::from(total)).round() as u16;
        cells.min(total - 1)
    };
    let divider_x = area.x + left_width;
    let right_x = divider_x.saturating_add(1).min(area.right());
    PaneLayout {
        left: Rect::new(area.x, area.y, left_width, area.height),
        divider_x,
        right: Rect::new(right_x, area.y, area.right() - right_x, area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowpane_core::SplitConfig;

    fn split_with_ratio(ratio: f64) -> SplitPane {
        SplitPane::new(&SplitConfig {
            initial_ratio: ratio,
            min_left: 0.0,
            min_right: 0.0,
            resizable: true,
        })
    }

    #[test]
    fn test_even_split() {
        let layout = split_panes(Rect::new(0, 0, 101, 20), &split_with_ratio(0.5));
        assert_eq!(layout.left, Rect::new(0, 0, 51, 20));
        assert_eq!(layout.divider_x, 51);
        assert_eq!(layout.right, Rect::new(52, 0, 49, 20));
    }

    #[test]
    fn test_panes_and_divider_cover_the_area() {
        for ratio in [0.0, 0.1, 0.33, 0.5, 0.75, 1.0] {
            let area = Rect::new(0, 0, 80, 24);
            let layout = split_panes(area, &split_with_ratio(ratio));
            assert_eq!(
                layout.left.width + 1 + layout.right.width,
                area.width,
                "ratio {ratio}"
            );
        }
    }

    #[test]
    fn test_full_ratio_keeps_divider_on_screen() {
        let layout = split_panes(Rect::new(0, 0, 80, 24), &split_with_ratio(1.0));
        assert_eq!(layout.divider_x, 79);
        assert!(layout.right.is_empty());
    }

    #[test]
    fn test_offset_area() {
        let layout = split_panes(Rect::new(5, 2, 40, 10), &split_with_ratio(0.5));
        assert_eq!(layout.left.x, 5);
        assert_eq!(layout.divider_x, 25);
        assert_eq!(layout.right.x, 26);
        assert_eq!(layout.right.right(), 45);
    }

    #[test]
    fn test_divider_hit_zone_has_slack() {
        let layout = split_panes(Rect::new(0, 0, 80, 24), &split_with_ratio(0.5));
        assert!(layout.hits_divider(40, 5));
        assert!(layout.hits_divider(39, 5));
        assert!(layout.hits_divider(41, 5));
        assert!(!layout.hits_divider(42, 5));
        assert!(!layout.hits_divider(40, 30));
    }

    #[test]
    fn test_degenerate_width() {
        let layout = split_panes(Rect::new(0, 0, 1, 5), &split_with_ratio(0.5));
        assert!(layout.left.is_empty());
        assert_eq!(layout.divider_x, 0);
    }
}
