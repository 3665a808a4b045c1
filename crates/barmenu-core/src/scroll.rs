//! Scroll window of the sub-option panel.

use std::ops::Range;

/// Window of `visible` rows over a list of `total` rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub offset: usize,
    /// Total number of rows.
    pub total: usize,
    /// Number of rows the window can show.
    pub visible: usize,
}

impl Viewport {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            offset: 0,
            total,
            visible: visible.max(1),
        }
    }

    /// Rows actually drawn: the window height capped by the row count.
    pub fn height(&self) -> usize {
        self.total.min(self.visible)
    }

    pub fn is_scrolling(&self) -> bool {
        self.total > self.visible
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.height()).min(self.total)
    }

    /// Move the window so that `highlighted` stays visible.
    ///
    /// The window moves one row per call in the direction of the
    /// highlight and snaps back to the top when the first row is
    /// highlighted.
    pub fn follow(&mut self, highlighted: usize) {
        self.offset = follow(self.offset, highlighted, self.total, self.visible);
    }
}

/// Next scroll offset for a window of `visible` rows over `total` rows when
/// row `highlighted` is selected and the window currently starts at
/// `offset`.
///
/// The result always satisfies
/// `result <= highlighted <= result + visible - 1`.
pub fn follow(offset: usize, highlighted: usize, total: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if total <= visible || highlighted == 0 {
        return 0;
    }

    let mut offset = offset;
    if highlighted >= offset + visible {
        offset += 1;
    } else if highlighted < offset {
        offset -= 1;
    }

    let max_offset = total - visible;
    let lowest = (highlighted + 1).saturating_sub(visible);
    offset.clamp(lowest, highlighted.min(max_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(offset: usize, highlighted: usize, visible: usize) -> bool {
        offset <= highlighted && highlighted < offset + visible
    }

    #[test]
    fn test_short_list_never_scrolls() {
        assert_eq!(follow(0, 3, 4, 8), 0);
        assert_eq!(follow(2, 7, 8, 8), 0);
    }

    #[test]
    fn test_steps_down_one_row_at_a_time() {
        let mut offset = 0;
        for sub in 0..12 {
            offset = follow(offset, sub, 12, 8);
            assert!(holds(offset, sub, 8));
            assert_eq!(offset, sub.saturating_sub(7));
        }
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_steps_up_one_row_at_a_time() {
        let mut offset = 4;
        let mut expected = Vec::new();
        for sub in (1..=11).rev() {
            offset = follow(offset, sub, 12, 8);
            assert!(holds(offset, sub, 8));
            expected.push(offset);
        }
        // Window stays put until the highlight reaches its top row.
        assert_eq!(expected, vec![4, 4, 4, 4, 4, 4, 4, 4, 3, 2, 1]);
    }

    #[test]
    fn test_first_row_resets_offset() {
        assert_eq!(follow(4, 0, 12, 8), 0);
    }

    #[test]
    fn test_jumps_are_clamped_into_window() {
        let offset = follow(0, 11, 12, 8);
        assert_eq!(offset, 4);
        let offset = follow(4, 2, 12, 8);
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_invariant_exhaustive() {
        for total in 1..=12 {
            for visible in 1..=8 {
                for start in 0..total {
                    for highlighted in 0..total {
                        let offset = follow(start, highlighted, total, visible);
                        assert!(holds(offset, highlighted, visible.min(total).max(1)) || total <= visible);
                        if highlighted == 0 {
                            assert_eq!(offset, 0);
                        }
                        assert!(offset + visible.min(total) <= total);
                    }
                }
            }
        }
    }

    #[test]
    fn test_viewport_range() {
        let mut viewport = Viewport::new(12, 8);
        assert_eq!(viewport.height(), 8);
        assert!(viewport.is_scrolling());
        for sub in 0..=9 {
            viewport.follow(sub);
        }
        assert_eq!(viewport.visible_range(), 2..10);

        let viewport = Viewport::new(3, 8);
        assert_eq!(viewport.height(), 3);
        assert_eq!(viewport.visible_range(), 0..3);
    }
}
