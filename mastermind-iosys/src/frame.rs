//! The pixel framebuffer everything draws onto.

use crate::{Rect, Rgb, Sprite, XY};

/// A pixel framebuffer.
///
/// Allows you to render things onto it, then it can be presented through an [`IoSystem`](crate::IoSystem). This
/// strategy avoids flickering and partial renders: the display only ever sees whole frames.
///
/// Every drawing method clips silently, so callers can hand in coordinates that are partly (or entirely) offscreen.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u32>,
    size: XY,
}

impl Frame {
    /// Create a new, black `Frame` of the given size.
    pub fn new(size: XY) -> Self {
        Self {
            pixels: vec![Rgb::BLACK.to_u32(); size.area()],
            size,
        }
    }

    /// How big this frame is, in pixels.
    pub fn size(&self) -> XY {
        self.size
    }

    /// All of the pixels, row by row, packed as `0x00RRGGBB`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> &[u32] {
        let start = y * self.size.x();
        &self.pixels[start..start + self.size.x()]
    }

    /// The color at a position, or `None` if it's outside the frame.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| Rgb::from_u32(self.pixels[i]))
    }

    /// Fill the entire frame with one color.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_u32());
    }

    /// Set a single pixel.
    pub fn point(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_u32();
        }
    }

    /// Draw a horizontal span from `x0` to `x1`, both ends included, in either order.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        if y < 0 || y as usize >= self.size.y() {
            return;
        }
        let (lo, hi) = (x0.min(x1).max(0), x0.max(x1).min(self.size.x() as i32 - 1));
        if lo > hi {
            return;
        }
        let start = y as usize * self.size.x();
        self.pixels[start + lo as usize..=start + hi as usize].fill(color.to_u32());
    }

    /// Copy the `src` region of a sprite (or all of it, for `None`) into `dst`, scaling with nearest-neighbor
    /// sampling. Transparent sprite pixels leave the frame untouched.
    pub fn blit(&mut self, sprite: &Sprite, src: Option<Rect>, dst: Rect) {
        let src = src.unwrap_or_else(|| sprite.bounds());
        if dst.w == 0 || dst.h == 0 || src.w == 0 || src.h == 0 {
            return;
        }
        // only walk the part of dst that's actually onscreen
        let y_lo = dst.y.max(0);
        let y_hi = dst.bottom().min(self.size.y() as i32);
        let x_lo = dst.x.max(0);
        let x_hi = dst.right().min(self.size.x() as i32);
        for y in y_lo..y_hi {
            let sy = src.y + ((y - dst.y) as i64 * src.h as i64 / dst.h as i64) as i32;
            for x in x_lo..x_hi {
                let sx = src.x + ((x - dst.x) as i64 * src.w as i64 / dst.w as i64) as i32;
                if let Some(color) = sprite.pixel(sx, sy) {
                    self.point(x, y, color);
                }
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.size.x() || y as usize >= self.size.y() {
            None
        } else {
            Some(y as usize * self.size.x() + x as usize)
        }
    }
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Frame({:?})", self.size)
    }
}
