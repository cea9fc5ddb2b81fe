/// An axis-aligned rectangle in pixel space. The position may be negative, so partially offscreen rectangles can be
/// described; drawing clips them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// The column just past the right edge.
    pub const fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    /// The row just past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    /// Whether the point is inside, counting all four edges as inside.
    ///
    /// Note that means the right and bottom edges are `right()` and `bottom()` themselves. This is what hit-testing
    /// buttons wants: a click on the outline of a button counts.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(220, 480, 200, 50);
        assert!(r.contains(220, 480));
        assert!(r.contains(420, 530));
        assert!(r.contains(300, 500));
        assert!(!r.contains(219, 500));
        assert!(!r.contains(421, 500));
        assert!(!r.contains(300, 531));
    }
}
