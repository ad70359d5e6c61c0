//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to an ST77XX controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST77XX requires:
//! - SPI bus (MOSI + SCK), with CS handled by the [`SpiDevice`]
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!   - **BL**: Backlight enable (output, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st77xx::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command
//! let _ = interface.send_command(0x29); // Display on
//!
//! // Send data
//! let _ = interface.send_data(0x05);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Reset line levels and hold times in milliseconds, applied in order
///
/// The panel's power-on timing requires this exact pulse train:
/// high 5ms, low 5ms, high 120ms, low 10ms, high 120ms.
pub const RESET_SEQUENCE: [(bool, u32); 5] =
    [(true, 5), (false, 5), (true, 120), (false, 10), (true, 120)];

/// Trait for hardware interface to an ST77XX controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus or an I/O expander driving the
/// control lines), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Assert CS, send the byte, deassert CS
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a single data byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Assert CS, send the byte, deassert CS
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a run of data bytes to the controller
    ///
    /// The default sends each byte with [`send_data`](Self::send_data).
    /// Implementations may stream the slice in a single transaction; the
    /// controller sees the same byte sequence either way.
    fn send_data_slice(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &byte in data {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Perform hardware reset
    ///
    /// Drives the reset line through [`RESET_SEQUENCE`].
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for ST77XX controllers
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
/// Chip select belongs to the [`SpiDevice`], so every byte is framed by its
/// own CS assert/deassert.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST, BL> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight enable pin (active high)
    bl: BL,
}

impl<SPI, DC, RST, BL> Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `bl` - Backlight pin (output, active high)
    pub fn new(spi: SPI, dc: DC, rst: RST, bl: BL) -> Self {
        Self { spi, dc, rst, bl }
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BL) {
        (self.spi, self.dc, self.rst, self.bl)
    }
}

impl<SPI, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)
    }

    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(&[data]).map_err(InterfaceError::Spi)
    }

    fn send_data_slice(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        for (high, hold_ms) in RESET_SEQUENCE {
            if high {
                self.rst.set_high().map_err(InterfaceError::Pin)?;
            } else {
                self.rst.set_low().map_err(InterfaceError::Pin)?;
            }
            delay.delay_ms(hold_ms);
        }
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on {
            self.bl.set_high().map_err(InterfaceError::Pin)
        } else {
            self.bl.set_low().map_err(InterfaceError::Pin)
        }
    }
}
