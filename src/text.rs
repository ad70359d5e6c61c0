//! Text rendering with the built-in 5x8 font
//!
//! Characters occupy a 6x8 cell: five glyph columns plus one blank column.
//! Strings wrap to the left edge when the next cell would run past the right
//! edge of the panel, and stop silently at the bottom.
//!
//! Passing the same color as foreground and background draws only the glyph
//! pixels and leaves whatever is behind them untouched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st77xx::{Builder, Color, Display, DisplayInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _c: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _d: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _d: &mut D) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_backlight(&mut self, _on: bool) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let config = match Builder::new().build() { Ok(c) => c, Err(_) => return };
//! let mut display = Display::new(MockInterface, config);
//!
//! // Chain two draws on the same line
//! if let Ok(cursor) = display.draw_string(0, 0, "Temp: ", Color::WHITE, Color::BLACK) {
//!     let _ = display.draw_string(cursor.x, cursor.y, "21C", Color::YELLOW, Color::BLACK);
//! }
//! ```

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::font::{CELL_HEIGHT, CELL_WIDTH, GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::interface::DisplayInterface;

/// Where the next character of a string would be drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column
    pub x: u16,
    /// Row
    pub y: u16,
}

impl Cursor {
    /// Pack as `(y << 8) | x`
    ///
    /// Only lossless while both coordinates fit in 8 bits.
    pub const fn pack(self) -> u16 {
        (self.y << 8) | self.x
    }

    /// Inverse of [`pack`](Self::pack)
    pub const fn unpack(packed: u16) -> Self {
        Self {
            x: packed & 0xFF,
            y: packed >> 8,
        }
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw one character with its top-left corner at (x, y)
    ///
    /// Characters outside printable ASCII are drawn as a hollow box.
    pub fn draw_char(&mut self, x: i16, y: i16, c: char, color: Color, background: Color) -> DisplayResult<I> {
        let (x, y) = (i32::from(x), i32::from(y));
        if x >= i32::from(self.width())
            || y >= i32::from(self.height())
            || x + (GLYPH_WIDTH as i32) < 0
            || y + (GLYPH_HEIGHT as i32 - 1) < 0
        {
            return Ok(());
        }

        let glyph = glyph(c);
        for col in 0..i32::from(CELL_WIDTH) {
            let mut bits = glyph.get(col as usize).copied().unwrap_or(0);
            for row in 0..GLYPH_HEIGHT as i32 {
                if bits & 0x01 != 0 {
                    self.plot(x + col, y + row, color)?;
                } else if background != color {
                    self.plot(x + col, y + row, background)?;
                }
                bits >>= 1;
            }
        }
        Ok(())
    }

    /// Draw a string starting at (x, y), wrapping at the right edge
    ///
    /// A character wraps only when its 6-pixel cell would run past the edge,
    /// so a cell ending exactly on the last column is still used. Code
    /// written for drivers that wrap one cell early may lay out differently.
    ///
    /// Returns where the next character would go, so draws can be chained.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
        background: Color,
    ) -> Result<Cursor, Error<I>> {
        let (width, height) = (self.width(), self.height());
        let (mut x, mut y) = (x, y);
        for c in text.chars() {
            if x.saturating_add(CELL_WIDTH) > width {
                x = 0;
                y = y.saturating_add(CELL_HEIGHT);
                if y >= height {
                    break;
                }
            }
            let row = i16::try_from(y).unwrap_or(i16::MAX);
            self.draw_char(x as i16, row, c, color, background)?;
            x += CELL_WIDTH;
        }
        Ok(Cursor { x, y })
    }

    /// Filled button with a centered label
    ///
    /// The label is drawn on the fill color.
    pub fn fill_button_with_text(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        fill: Color,
        text_color: Color,
        label: &str,
    ) -> DisplayResult<I> {
        self.fill_rect(x, y, width, height, fill)?;
        let (tx, ty) = label_origin(x, y, width, height, label);
        self.draw_string(tx, ty, label, text_color, fill).map(|_| ())
    }

    /// Outlined button with a centered label on `background`
    pub fn draw_button_with_text(
        &mut self,
        x: i16,
        y: i16,
        width: i16,
        height: i16,
        border: Color,
        text_color: Color,
        background: Color,
        label: &str,
    ) -> DisplayResult<I> {
        self.draw_rect(x, y, width, height, border)?;
        let (tx, ty) = label_origin(x, y, width, height, label);
        self.draw_string(tx, ty, label, text_color, background).map(|_| ())
    }
}

/// Top-left of a label centered horizontally in a button
///
/// The label sits 6px above the vertical center. Negative positions clamp
/// to the panel edge.
fn label_origin(x: i16, y: i16, width: i16, height: i16, label: &str) -> (u16, u16) {
    let len = i32::try_from(label.chars().count()).unwrap_or(i32::MAX / 8);
    let tx = i32::from(x) + (i32::from(width) - len * i32::from(CELL_WIDTH)) / 2;
    let ty = i32::from(y) + i32::from(height) / 2 - 6;
    let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
    (clamp(tx), clamp(ty))
}
