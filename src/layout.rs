//! Where everything goes on screen, and what's under the cursor.
//!
//! The board is two panes of circles, [`NB_TRIALS`] rows tall and [`CODE_LENGTH`] columns wide, either side of the
//! window's vertical centerline. The left pane holds guesses; the right pane holds the feedback for each. Trials
//! fill rows from the bottom up, so trial 0 is the bottom row.
//!
//! Guess pegs are laid out from the centerline outward, i.e. right to left. Slot 0 is the one nearest the middle,
//! which holds the *last* peg of the guess.

use mastermind_iosys::{Rect, XY};

use crate::{
    constants::{
        gameplay::{CODE_LENGTH, NB_COLORS, NB_TRIALS},
        graphics::{
            BANNER_SIZE, BUTTON_HEIGHT, BUTTON_WIDTH, CIRCLE_RADIUS, MARGIN, PADDING, RULES_WIDTH, SWATCH_SIZE,
        },
    },
    Error, Result,
};

/// Distance between the centers of neighboring pegs, in either direction.
const STEP: i32 = 2 * CIRCLE_RADIUS + PADDING;

/// Positions of everything, for one window size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    width: i32,
    height: i32,
}

impl Layout {
    /// Lay things out for a window of the given size, or complain if the board wouldn't fit.
    pub fn new(window: XY) -> Result<Self> {
        let (width, height) = (window.x() as i32, window.y() as i32);
        let pane_width = STEP * CODE_LENGTH as i32;
        let pane_height = STEP * NB_TRIALS as i32;
        if width < 2 * pane_width + MARGIN || height < pane_height + MARGIN {
            return Err(Error::Layout(format!(
                "a {}x{} board needs at least {}x{} pixels, but the window is {}",
                CODE_LENGTH,
                NB_TRIALS,
                2 * pane_width + MARGIN,
                pane_height + MARGIN,
                window,
            )));
        }
        Ok(Self { width, height })
    }

    /// The size this layout was made for.
    pub fn window(&self) -> XY {
        XY(self.width as usize, self.height as usize)
    }

    fn button_at(&self, y: i32) -> Rect {
        let x = (self.width - BUTTON_WIDTH as i32).max(0) / 2;
        Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT)
    }

    /// The button a quarter of the way down.
    pub fn top_button(&self) -> Rect {
        self.button_at(self.height / 4)
    }

    /// The button three quarters of the way down. Every screen but the home screen has only this one.
    pub fn bottom_button(&self) -> Rect {
        self.button_at(3 * self.height / 4)
    }

    /// The rules text, above the bottom button.
    pub fn rules(&self) -> Rect {
        let x = (self.width - RULES_WIDTH as i32).max(0) / 2;
        let h = self.bottom_button().y - MARGIN;
        Rect::new(x, 0, RULES_WIDTH, h.max(0) as u32)
    }

    /// The win/lose banner laid over the board.
    pub fn banner(&self) -> Rect {
        let x = (self.width - BANNER_SIZE as i32).max(0) / 2;
        let h = (self.bottom_button().y - MARGIN).clamp(0, BANNER_SIZE as i32);
        Rect::new(x, MARGIN, BANNER_SIZE, h as u32)
    }

    /// The inner edge of the guess pane: slot 0's circle touches it.
    fn right_edge(&self) -> i32 {
        (self.width - MARGIN) / 2
    }

    /// The vertical center of a row, counted from the top.
    pub fn row_y(&self, row: usize) -> i32 {
        MARGIN + CIRCLE_RADIUS + row as i32 * STEP
    }

    /// The row which holds a trial.
    pub fn row_of(trial: usize) -> usize {
        NB_TRIALS - 1 - trial
    }

    /// The center of a guess peg, by row and slot.
    pub fn peg_center(&self, row: usize, slot: usize) -> (i32, i32) {
        (self.right_edge() - CIRCLE_RADIUS - slot as i32 * STEP, self.row_y(row))
    }

    /// The center of the `i`th feedback peg in a row, counting left to right from the centerline.
    ///
    /// The feedback pane mirrors the guess pane, so this is [`Self::peg_center`] flipped horizontally.
    pub fn feedback_center(&self, row: usize, i: usize) -> (i32, i32) {
        let (x, y) = self.peg_center(row, i);
        (self.width - x, y)
    }

    /// The square a peg's color swatch is drawn into.
    pub fn peg_rect(&self, row: usize, slot: usize) -> Rect {
        let (cx, cy) = self.peg_center(row, slot);
        let d = 2 * CIRCLE_RADIUS as u32;
        Rect::new(cx - CIRCLE_RADIUS, cy - CIRCLE_RADIUS, d, d)
    }

    /// Which slot of the current trial's row, if any, has a peg under (`x`, `y`).
    ///
    /// Only the circle itself counts. The corners of a peg's square are outside the circle, and miss.
    pub fn locate_peg(&self, x: i32, y: i32, trial: usize) -> Option<usize> {
        if trial >= NB_TRIALS {
            return None;
        }
        let cy = self.row_y(Self::row_of(trial));
        if y < cy - CIRCLE_RADIUS || y > cy + CIRCLE_RADIUS {
            return None;
        }
        let d = self.right_edge() - x;
        if d < 0 {
            return None;
        }
        let slot = (d / STEP) as usize;
        if slot >= CODE_LENGTH {
            return None;
        }
        let (cx, _) = self.peg_center(Self::row_of(trial), slot);
        let (dx, dy) = (x - cx, y - cy);
        if dx * dx + dy * dy <= CIRCLE_RADIUS * CIRCLE_RADIUS {
            Some(slot)
        } else {
            None
        }
    }

    /// The slot a guess peg is drawn in.
    pub const fn slot_of(index: usize) -> usize {
        CODE_LENGTH - 1 - index
    }

    /// The guess peg drawn in a slot. Slots run right to left, so this is its own inverse.
    pub const fn index_of(slot: usize) -> usize {
        CODE_LENGTH - 1 - slot
    }

    /// Where a color's swatch is in the colors sheet: a grid two swatches wide, filled row by row.
    pub fn swatch(color: usize) -> Rect {
        debug_assert!(color < NB_COLORS);
        let (col, row) = (color % 2, color / 2);
        Rect::new(
            col as i32 * SWATCH_SIZE as i32,
            row as i32 * SWATCH_SIZE as i32,
            SWATCH_SIZE,
            SWATCH_SIZE,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::graphics::WINDOW_SIZE;

    fn layout() -> Layout {
        Layout::new(WINDOW_SIZE).unwrap()
    }

    #[test]
    fn buttons_match_the_window() {
        let l = layout();
        assert_eq!(l.top_button(), Rect::new(220, 160, 200, 50));
        assert_eq!(l.bottom_button(), Rect::new(220, 480, 200, 50));
        assert_eq!(l.rules(), Rect::new(70, 0, 500, 455));
        assert_eq!(l.banner(), Rect::new(120, 25, 400, 400));
    }

    #[test]
    fn board_positions() {
        let l = layout();
        assert_eq!(l.peg_center(0, 0), (297, 35));
        assert_eq!(l.peg_center(9, 3), (222, 260));
        assert_eq!(l.feedback_center(0, 0), (343, 35));
        assert_eq!(l.feedback_center(0, 3), (418, 35));
        assert_eq!(Layout::row_of(0), 9);
        assert_eq!(l.peg_rect(0, 0), Rect::new(287, 25, 20, 20));
    }

    #[test]
    fn centers_always_hit() {
        let l = layout();
        for trial in 0..NB_TRIALS {
            for slot in 0..CODE_LENGTH {
                let (cx, cy) = l.peg_center(Layout::row_of(trial), slot);
                assert_eq!(l.locate_peg(cx, cy, trial), Some(slot), "missed the center of {}/{}", trial, slot);
            }
        }
    }

    #[test]
    fn corners_never_hit() {
        let l = layout();
        let r = CIRCLE_RADIUS;
        for trial in 0..NB_TRIALS {
            for slot in 0..CODE_LENGTH {
                let (cx, cy) = l.peg_center(Layout::row_of(trial), slot);
                for (dx, dy) in [(-r, -r), (r, -r), (-r, r), (r, r)] {
                    assert_eq!(l.locate_peg(cx + dx, cy + dy, trial), None, "hit a corner of {}/{}", trial, slot);
                }
            }
        }
    }

    #[test]
    fn edges_of_the_circle_hit() {
        let l = layout();
        let (cx, cy) = l.peg_center(Layout::row_of(4), 2);
        let r = CIRCLE_RADIUS;
        for (dx, dy) in [(r, 0), (-r, 0), (0, r), (0, -r)] {
            assert_eq!(l.locate_peg(cx + dx, cy + dy, 4), Some(2));
        }
    }

    #[test]
    fn other_rows_miss() {
        let l = layout();
        let (cx, cy) = l.peg_center(Layout::row_of(3), 1);
        assert_eq!(l.locate_peg(cx, cy, 3), Some(1));
        assert_eq!(l.locate_peg(cx, cy, 2), None);
        assert_eq!(l.locate_peg(cx, cy, 4), None);
        assert_eq!(l.locate_peg(cx, cy, NB_TRIALS), None);
    }

    #[test]
    fn feedback_pane_misses() {
        let l = layout();
        let (fx, fy) = l.feedback_center(Layout::row_of(0), 0);
        assert_eq!(l.locate_peg(fx, fy, 0), None);
        let (px, py) = l.peg_center(Layout::row_of(0), CODE_LENGTH - 1);
        assert_eq!(l.locate_peg(px - STEP, py, 0), None);
    }

    #[test]
    fn slots_run_backwards() {
        assert_eq!(Layout::slot_of(0), CODE_LENGTH - 1);
        for i in 0..CODE_LENGTH {
            assert_eq!(Layout::index_of(Layout::slot_of(i)), i);
        }
    }

    #[test]
    fn swatches_tile_the_sheet() {
        assert_eq!(Layout::swatch(0), Rect::new(0, 0, 100, 100));
        assert_eq!(Layout::swatch(1), Rect::new(100, 0, 100, 100));
        assert_eq!(Layout::swatch(2), Rect::new(0, 100, 100, 100));
        assert_eq!(Layout::swatch(3), Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn tiny_windows_are_rejected() {
        assert!(matches!(Layout::new(XY(100, 640)), Err(Error::Layout(_))));
        assert!(matches!(Layout::new(XY(640, 200)), Err(Error::Layout(_))));
    }
}
