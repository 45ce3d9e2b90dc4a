//! 24-bit RGB colours
//!
//! The controller receives one byte per channel in blue, green, red order.
//! With an 18-bit or smaller interface format the low bits of each byte are
//! ignored by the controller; no conversion happens on this side.

/// A 24-bit RGB colour (`0xRRGGBB`)
///
/// Only the low 24 bits of the source value are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::new(0x000000);
    pub const GREY: Color = Color::new(0x808080);
    pub const WHITE: Color = Color::new(0xFFFFFF);
    pub const RED: Color = Color::new(0xFF0000);
    pub const ORANGE: Color = Color::new(0xFF8C00);
    pub const YELLOW: Color = Color::new(0xFFFF00);
    pub const GREEN: Color = Color::new(0x00FF00);
    pub const BLUE: Color = Color::new(0x0000FF);
    pub const INDIGO: Color = Color::new(0x4B0082);
    pub const VIOLET: Color = Color::new(0x9400D3);

    /// Create a colour from a `0xRRGGBB` value, discarding bits above 23
    pub const fn new(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    /// Create a colour from separate channels
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// The `0xRRGGBB` value
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Bytes as transmitted for one pixel: blue, green, red
    pub const fn to_wire(self) -> [u8; 3] {
        [self.blue(), self.green(), self.red()]
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.raw()
    }
}
