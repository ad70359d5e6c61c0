//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Out-of-panel drawing is not an error: pixels outside the panel are dropped
//! silently, and filling a polygon with fewer than three vertices does nothing.
//!
//! ## Example
//!
//! ```
//! use st77xx::{Builder, BuilderError};
//!
//! // Zero-sized panel
//! let result = Builder::new().dimensions(0, 160).build();
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Offset pushes the panel past the controller RAM
//! let result = Builder::new().dimensions(240, 320).offset(0, 80).build();
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Largest column or row address (exclusive) the ST77XX family can address
///
/// ST7789 drives up to 240x320; ST7735S up to 132x162. The configured RAM
/// size must stay within this bound on both axes.
pub const MAX_ADDRESS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Pixel data was streamed before an address window was programmed
    ///
    /// Returned by [`Display::write_pixels`](crate::Display::write_pixels)
    /// right after [`Display::init`](crate::Display::init).
    WindowNotSet,
    /// Address window is empty, inverted or extends past the panel
    InvalidWindow {
        /// First column
        x0: u16,
        /// First row
        y0: u16,
        /// Last column
        x1: u16,
        /// Last row
        y1: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::WindowNotSet => write!(f, "Address window not set"),
            Self::InvalidWindow { x0, y0, x1, y1 } => {
                write!(f, "Invalid address window: ({x0}, {y0})..=({x1}, {y1})")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// Width and height must be non-zero and, including the offset, fit
    /// within the controller RAM, itself at most [`MAX_ADDRESS`] per side.
    InvalidDimensions {
        /// Panel width in pixels
        width: u16,
        /// Panel height in pixels
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (non-zero, fitting controller RAM of at most {MAX_ADDRESS} including offset)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
