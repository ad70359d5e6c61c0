//! Core display operations
//!
//! [`Display`] owns the interface and the configuration. It brings the
//! controller up, programs address windows and streams RGB565 pixels into
//! them. The drawing primitives in [`raster`](crate::raster) and
//! [`text`](crate::text) are built on these operations.
//!
//! ## Window state
//!
//! A memory write only lands where the last CASET/RASET window points, so the
//! driver tracks that window explicitly. After [`Display::init`], or after any
//! other command, no window is open and [`Display::write_pixels`] refuses to
//! stream until [`Display::set_window`] is called again.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{CASET, DISPOFF, DISPON, INVOFF, INVON, MADCTL, RAMWR, RASET, SLPIN, SLPOUT};
use crate::config::{Config, Dimensions, Offset, Rotation};
use crate::error::Error;
use crate::init::{INIT_SETTLE_MS, replay};
use crate::interface::DisplayInterface;
use crate::rotation::madctl;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Settle time after entering or leaving sleep, in milliseconds
pub const SLEEP_SETTLE_MS: u32 = 120;

/// Pixels buffered per SPI transfer when streaming a solid color
const CHUNK_PIXELS: usize = 32;

/// Address window, inclusive, in logical (rotated) coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column
    pub x1: u16,
    /// Last row
    pub y1: u16,
}

impl Window {
    /// Number of pixels covered by the window
    pub fn pixel_count(&self) -> u32 {
        (u32::from(self.x1.saturating_sub(self.x0)) + 1)
            * (u32::from(self.y1.saturating_sub(self.y0)) + 1)
    }
}

/// Core display driver for ST77XX controllers
///
/// Framebuffer-less: every drawing call is sent to the controller
/// immediately. For embedded-graphics support, enable the `graphics` feature.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    config: Config,
    /// Logical dimensions after rotation
    dimensions: Dimensions,
    /// RAM offset after rotation
    offset: Offset,
    /// Window opened by the last RAMWR, if it is still open
    window: Option<Window>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            dimensions: config.rotated_dimensions(),
            offset: config.rotated_offset(),
            config,
            window: None,
        }
    }

    /// Reset the panel, switch the backlight on and replay the init sequence
    ///
    /// Finishes by writing MADCTL for the configured rotation and color
    /// order. Leaves no address window open.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("st77xx: hardware reset");
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.interface.set_backlight(true).map_err(Error::Interface)?;

        log::debug!(
            "st77xx: replaying {} init commands",
            self.config.init_sequence.len()
        );
        replay(&mut self.interface, self.config.init_sequence, delay).map_err(Error::Interface)?;
        delay.delay_ms(INIT_SETTLE_MS);

        let madctl = madctl(self.config.rotation, self.config.color_order);
        log::debug!(
            "st77xx: {}x{} ready, MADCTL {:#04x}",
            self.dimensions.width,
            self.dimensions.height,
            madctl
        );
        self.command(MADCTL, &[madctl])
    }

    /// Program the address window and open a memory write
    ///
    /// Coordinates are logical and inclusive; the configured offset is added
    /// before they are sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` unless `x0 <= x1 < width` and
    /// `y0 <= y1 < height`.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        let Dimensions { width, height } = self.dimensions;
        if x0 > x1 || y0 > y1 || x1 >= width || y1 >= height {
            return Err(Error::InvalidWindow { x0, y0, x1, y1 });
        }

        let [xs_hi, xs_lo] = (x0 + self.offset.x).to_be_bytes();
        let [xe_hi, xe_lo] = (x1 + self.offset.x).to_be_bytes();
        self.send_command(CASET)?;
        self.send_data(&[xs_hi, xs_lo, xe_hi, xe_lo])?;

        let [ys_hi, ys_lo] = (y0 + self.offset.y).to_be_bytes();
        let [ye_hi, ye_lo] = (y1 + self.offset.y).to_be_bytes();
        self.send_command(RASET)?;
        self.send_data(&[ys_hi, ys_lo, ye_hi, ye_lo])?;

        self.send_command(RAMWR)?;
        self.window = Some(Window { x0, y0, x1, y1 });
        Ok(())
    }

    /// Stream pixels into the open window
    ///
    /// The controller advances through the window row by row and wraps back
    /// to its start when more pixels are sent than it holds.
    ///
    /// # Errors
    ///
    /// Returns `Error::WindowNotSet` when no window is open.
    pub fn write_pixels<P>(&mut self, pixels: P) -> DisplayResult<I>
    where
        P: IntoIterator<Item = Color>,
    {
        if self.window.is_none() {
            return Err(Error::WindowNotSet);
        }
        let mut buf = [0u8; CHUNK_PIXELS * 2];
        let mut len = 0;
        for color in pixels {
            buf[len..len + 2].copy_from_slice(&color.to_be_bytes());
            len += 2;
            if len == buf.len() {
                self.send_data(&buf)?;
                len = 0;
            }
        }
        self.send_data(&buf[..len])
    }

    /// Program a window and fill it with one color
    pub(crate) fn fill_window(&mut self, window: Window, color: Color) -> DisplayResult<I> {
        self.set_window(window.x0, window.y0, window.x1, window.y1)?;
        self.stream_color(color, window.pixel_count())
    }

    /// Send `count` copies of `color` to the open window
    fn stream_color(&mut self, color: Color, count: u32) -> DisplayResult<I> {
        let [hi, lo] = color.to_be_bytes();
        let mut buf = [0u8; CHUNK_PIXELS * 2];
        for pair in buf.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }
        let mut remaining = count as usize;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            self.send_data(&buf[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Turn the panel output on or off (DISPON/DISPOFF)
    ///
    /// Display RAM is kept either way.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.command(if on { DISPON } else { DISPOFF }, &[])
    }

    /// Enable or disable color inversion (INVON/INVOFF)
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.command(if inverted { INVON } else { INVOFF }, &[])
    }

    /// Enter sleep mode (SLPIN)
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.command(SLPIN, &[])?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Leave sleep mode (SLPOUT)
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.command(SLPOUT, &[])?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        Ok(())
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Send a command with parameters, closing any open window
    fn command(&mut self, cmd: u8, params: &[u8]) -> DisplayResult<I> {
        self.window = None;
        self.send_command(cmd)?;
        self.send_data(params)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data_slice(data).map_err(Error::Interface)
    }

    /// Get the logical dimensions (after rotation)
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.dimensions.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.dimensions.height
    }

    /// Get the display rotation
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    /// Get the display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The open address window, or `None` if pixels cannot be streamed yet
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}
