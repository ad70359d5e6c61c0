//! ST77XX TFT Display Driver
//!
//! A framebuffer-less driver for ST77XX-family TFT controllers (ST7735S,
//! ST7789 and compatibles) over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable panel size, RAM offset, rotation and color order
//! - Built-in init sequences for generic ST77XX and ST7735S panels
//! - Software lines, rectangles, circles, polygons and 5x8 text
//!
//! Every drawing call is streamed to the controller immediately through a
//! CASET/RASET address window followed by RAMWR and RGB565 pixel data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st77xx::{Builder, Color, Display, Interface, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let bl = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, bl);
//! let config = match Builder::st7735s().rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//! let _ = display.fill_screen(Color::BLACK);
//! let _ = display.draw_string(4, 4, "Hello", Color::WHITE, Color::BLACK);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST77XX command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Fixed 5x8 bitmap font
pub mod font;
/// Power-on command sequences
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Software rasterizer
pub mod raster;
/// Rotation and MADCTL utilities
pub mod rotation;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod testing;

pub use color::Color;
pub use config::{Builder, ColorOrder, Config, Dimensions, Offset, Rotation};
pub use display::{Display, SLEEP_SETTLE_MS, Window};
pub use error::{BuilderError, Error, MAX_ADDRESS};
pub use init::{InitCommand, ST7735S_INIT, ST77XX_INIT};
pub use interface::{DisplayInterface, Interface, InterfaceError, RESET_SEQUENCE};
pub use raster::Point;
pub use text::Cursor;
