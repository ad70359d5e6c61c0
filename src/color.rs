//! RGB565 color type
//!
//! The ST77XX is driven in 16 bits per pixel. This module defines [`Color`],
//! a packed RGB565 value, and the byte order it takes on the wire.
//!
//! ## Color Representation
//!
//! | Bits  | Channel |
//! |-------|---------|
//! | 15-11 | Red     |
//! | 10-5  | Green   |
//! | 4-0   | Blue    |
//!
//! Each pixel is sent as two data bytes, high byte first.
//!
//! ## Example
//!
//! ```
//! use st77xx::Color;
//!
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
//! assert_eq!(Color::new(0x07E0), Color::GREEN);
//! ```

/// Packed RGB565 color
///
/// Comparisons are exact integer equality on the packed value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(pub u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);

    /// Wrap a raw RGB565 value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels, dropping the low bits of each
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire order: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        embedded_graphics_core::pixelcolor::raw::RawU16::new(color.0).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_pack_as_rgb565() {
        assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::from_rgb(255, 255, 0), Color::YELLOW);
        assert_eq!(Color::from_rgb(255, 0, 255), Color::MAGENTA);
        assert_eq!(Color::from_rgb(0, 255, 255), Color::CYAN);
        assert_eq!(Color::from_rgb(0, 0, 0), Color::BLACK);
    }

    #[test]
    fn test_wire_order_is_high_byte_first() {
        assert_eq!(Color(0x1234).to_be_bytes(), [0x12, 0x34]);
        assert_eq!(Color::BLUE.to_be_bytes(), [0x00, 0x1F]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_rgb565_conversion_keeps_raw_value() {
        use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};

        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Color::from(Rgb565::CYAN), Color::CYAN);
        assert_eq!(Rgb565::from(Color::MAGENTA), Rgb565::MAGENTA);
        assert_eq!(Rgb565::from(Color(0xABCD)), Rgb565::from(Color(0xABCD)));
        assert_eq!(Color::from(Rgb565::from(Color(0xABCD))), Color(0xABCD));
    }
}
