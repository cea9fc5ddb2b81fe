//! Just the `XY` type.

use core::fmt;

/// A pixel position or size: X across, Y down, from the top left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY(pub usize, pub usize);

impl XY {
    pub const fn x(&self) -> usize {
        self.0
    }

    pub const fn y(&self) -> usize {
        self.1
    }

    /// How many pixels an area of this size holds.
    pub const fn area(&self) -> usize {
        self.0 * self.1
    }

    /// As signed coordinates, for drawing and hit-testing math that can go offscreen.
    pub const fn signed(&self) -> (i32, i32) {
        (self.0 as i32, self.1 as i32)
    }
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl fmt::Debug for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XY({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basics() {
        assert_eq!(XY(640, 480).area(), 307_200);
        assert_eq!(XY(3, 7).signed(), (3, 7));
        assert_eq!(XY(640, 480).to_string(), "640x480");
    }
}
