use crate::{Rect, Rgb, XY};

/// Anything with less alpha than this is not drawn.
const ALPHA_CUTOFF: u32 = 0x80;

/// A decoded image, ready to be copied (and scaled) onto a [`Frame`](crate::Frame).
///
/// Pixels are stored as `0xAARRGGBB`. Alpha isn't blended, only thresholded: a pixel is either drawn or it isn't.
#[derive(Clone, PartialEq, Eq)]
pub struct Sprite {
    pixels: Vec<u32>,
    size: XY,
}

impl Sprite {
    /// Build a sprite from tightly packed RGBA bytes, as image decoders hand them out.
    ///
    /// Returns `None` if `rgba` doesn't hold exactly `size.area()` pixels.
    pub fn from_rgba8(size: XY, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != size.area() * 4 {
            return None;
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| (px[3] as u32) << 24 | (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
            .collect();
        Some(Self { pixels, size })
    }

    /// A fully opaque sprite of a single color.
    pub fn solid(size: XY, color: Rgb) -> Self {
        Self {
            pixels: vec![0xFF00_0000 | color.to_u32(); size.area()],
            size,
        }
    }

    /// Make every pixel of exactly `key`'s color transparent.
    pub fn with_color_key(mut self, key: Rgb) -> Self {
        let key = key.to_u32();
        for px in &mut self.pixels {
            if *px & 0x00FF_FFFF == key {
                *px &= 0x00FF_FFFF;
            }
        }
        self
    }

    /// How big the sprite is, in pixels.
    pub fn size(&self) -> XY {
        self.size
    }

    /// The whole sprite, as a source rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size.x() as u32, self.size.y() as u32)
    }

    /// The color of a pixel, or `None` if it's transparent or out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x as usize >= self.size.x() || y as usize >= self.size.y() {
            return None;
        }
        let px = self.pixels[y as usize * self.size.x() + x as usize];
        if px >> 24 < ALPHA_CUTOFF {
            None
        } else {
            Some(Rgb::from_u32(px))
        }
    }
}

impl core::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sprite({:?})", self.size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(Sprite::from_rgba8(XY(2, 2), &[0; 15]).is_none());
        assert!(Sprite::from_rgba8(XY(2, 2), &[0; 16]).is_some());
    }

    #[test]
    fn alpha_and_color_key_hide_pixels() {
        #[rustfmt::skip]
        let data = [
            0xFF, 0x00, 0x00, 0xFF,   0x00, 0xFF, 0xFF, 0xFF,
            0x00, 0x00, 0xFF, 0x00,   0x10, 0x20, 0x30, 0xFF,
        ];
        let sprite = Sprite::from_rgba8(XY(2, 2), &data).unwrap();
        assert_eq!(sprite.pixel(0, 0), Some(Rgb(0xFF, 0, 0)));
        assert_eq!(sprite.pixel(1, 0), Some(Rgb(0, 0xFF, 0xFF)));
        assert_eq!(sprite.pixel(0, 1), None, "zero alpha should be transparent");
        assert_eq!(sprite.pixel(2, 0), None, "out of bounds should be transparent");

        let keyed = sprite.with_color_key(Rgb(0, 0xFF, 0xFF));
        assert_eq!(keyed.pixel(1, 0), None, "color key wasn't applied");
        assert_eq!(keyed.pixel(1, 1), Some(Rgb(0x10, 0x20, 0x30)));
    }
}
