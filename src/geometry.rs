//! Circles, drawn with the integer midpoint algorithm.
//!
//! The algorithm walks one octant of the circle, from (r - 1, 0) until x and y meet, and mirrors every step into
//! the other seven. There's no floating point anywhere, and the result is symmetric across both axes and both
//! diagonals by construction.

use mastermind_iosys::{Frame, Rgb};

/// Walk the first octant of a circle of `radius` centered on the origin, calling `plot(x, y)` with `x >= y` at each
/// step.
fn octant(radius: i32, mut plot: impl FnMut(i32, i32)) {
    let mut x = radius - 1;
    let mut y = 0;
    let mut dx = 1;
    let mut dy = 1;
    let mut err = dx - (radius << 1);

    while x >= y {
        plot(x, y);

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        }

        if err > 0 {
            x -= 1;
            dx += 2;
            err += dx - (radius << 1);
        }
    }
}

/// Draw the outline of a circle.
pub fn draw_outline(frame: &mut Frame, cx: i32, cy: i32, radius: i32, color: Rgb) {
    octant(radius, |x, y| {
        frame.point(cx + x, cy + y, color);
        frame.point(cx + y, cy + x, color);
        frame.point(cx - y, cy + x, color);
        frame.point(cx - x, cy + y, color);
        frame.point(cx - x, cy - y, color);
        frame.point(cx - y, cy - x, color);
        frame.point(cx + y, cy - x, color);
        frame.point(cx + x, cy - y, color);
    });
}

/// Draw a filled circle, as horizontal spans between the mirrored outline points.
pub fn draw_filled(frame: &mut Frame, cx: i32, cy: i32, radius: i32, color: Rgb) {
    octant(radius, |x, y| {
        frame.hline(cx - x, cx + x, cy + y, color);
        frame.hline(cx - y, cx + y, cy + x, color);
        frame.hline(cx - x, cx + x, cy - y, color);
        frame.hline(cx - y, cx + y, cy - x, color);
    });
}
