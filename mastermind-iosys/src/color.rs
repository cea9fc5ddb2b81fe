/// An opaque 8-bit-per-channel color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

    /// A shade of grey, with all three channels at `level`.
    pub const fn grey(level: u8) -> Rgb {
        Rgb(level, level, level)
    }

    /// Packed as `0x00RRGGBB`, which is what softbuffer (and [`Frame`](crate::Frame)) stores.
    pub const fn to_u32(self) -> u32 {
        (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }

    /// Unpack from `0x??RRGGBB`, ignoring the top byte.
    pub const fn from_u32(packed: u32) -> Rgb {
        Rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}
