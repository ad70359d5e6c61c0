//! ST77XX command definitions
//!
//! Command bytes understood by the ST77XX family (ST7735S, ST7789 and
//! compatibles). Commands are sent with the DC pin low, parameters follow
//! with the DC pin high.
//!
//! ## Command Structure
//!
//! Every byte on the wire is its own transaction:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command) or high (data)
//! 3. Send one byte
//! 4. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st77xx::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPON);
//!
//! // Select 16-bit RGB565 pixels
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(0x05);
//! ```

// System function commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Resets registers to their default values. Wait 120ms before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep in and booster off (0x10)
pub const SLPIN: u8 = 0x10;

/// Sleep out and booster on (0x11)
///
/// The controller needs 120ms before it accepts SLPIN again.
pub const SLPOUT: u8 = 0x11;

/// Partial mode on (0x12)
pub const PTLON: u8 = 0x12;

/// Partial mode off, normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Gamma curve select (0x26)
///
/// Requires 1 byte selecting one of the predefined curves.
pub const GAMSET: u8 = 0x26;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory and addressing commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Every data byte after this command lands in the window programmed by
/// [`CASET`] and [`RASET`], two bytes per RGB565 pixel.
pub const RAMWR: u8 = 0x2C;

/// Partial area start/end address set (0x30)
pub const PTLAR: u8 = 0x30;

/// Scroll area set (0x33)
pub const SCRLAR: u8 = 0x33;

/// Tearing effect line off (0x34)
pub const TEOFF: u8 = 0x34;

/// Memory data access control (0x36)
///
/// Requires 1 byte:
/// - Bit 7 (MY): row address order
/// - Bit 6 (MX): column address order
/// - Bit 5 (MV): row/column exchange
/// - Bit 4 (ML): vertical refresh order
/// - Bit 3 (RGB): 0 = RGB, 1 = BGR
/// - Bit 2 (MH): horizontal refresh order
pub const MADCTL: u8 = 0x36;

/// Vertical scroll start address of RAM (0x37)
pub const VSCSAD: u8 = 0x37;

/// Idle mode off (0x38)
pub const IDMOFF: u8 = 0x38;

/// Idle mode on (0x39)
pub const IDMON: u8 = 0x39;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte. 0x05 / 0x65 select 16-bit RGB565.
pub const COLMOD: u8 = 0x3A;

// Panel function commands

/// Frame rate control in normal mode, full colors (0xB1)
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control in idle mode, 8 colors (0xB2)
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control in partial mode, full colors (0xB3)
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control (0xB4)
pub const INVCTR: u8 = 0xB4;

/// Power control 1 (0xC0)
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
pub const PWCTR2: u8 = 0xC1;

/// Power control 3, normal mode (0xC2)
pub const PWCTR3: u8 = 0xC2;

/// Power control 4, idle mode (0xC3)
pub const PWCTR4: u8 = 0xC3;

/// Power control 5, partial mode (0xC4)
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 (0xC5)
pub const VMCTR1: u8 = 0xC5;

/// NVM control status (0xD9)
pub const NVFCTR1: u8 = 0xD9;

/// NVM write command action code (0xDF)
pub const NVFCTR3: u8 = 0xDF;

/// Gamma adjustment, positive polarity (0xE0)
///
/// Requires 16 bytes.
pub const GAMCTRP1: u8 = 0xE0;

/// Gamma adjustment, negative polarity (0xE1)
///
/// Requires 16 bytes.
pub const GAMCTRN1: u8 = 0xE1;

/// Gate pump clock frequency variable (0xFC)
pub const GCV: u8 = 0xFC;

// MADCTL bits

/// MADCTL row address order bit
pub const MADCTL_MY: u8 = 0x80;

/// MADCTL column address order bit
pub const MADCTL_MX: u8 = 0x40;

/// MADCTL row/column exchange bit
pub const MADCTL_MV: u8 = 0x20;

/// MADCTL BGR color order bit
pub const MADCTL_BGR: u8 = 0x08;
