//! Power-on command sequences
//!
//! An init sequence is an immutable, ordered list of [`InitCommand`]s that
//! [`replay`] sends exactly once, in order, to bring the controller out of
//! reset into an addressable state.
//!
//! The built-in sequences stop after `SLPOUT`. They do not program an address
//! window or open a memory write; the driver does that on the first draw.
//!
//! ## Example
//!
//! ```
//! use st77xx::command;
//! use st77xx::init::InitCommand;
//!
//! // A minimal sequence for a well-behaved ST7789 module
//! static MINIMAL: &[InitCommand] = &[
//!     InitCommand::new(command::SWRESET, &[], 150),
//!     InitCommand::new(command::SLPOUT, &[], 10),
//!     InitCommand::new(command::COLMOD, &[0x55], 10),
//!     InitCommand::new(command::DISPON, &[], 10),
//! ];
//! assert_eq!(MINIMAL[2].params(), &[0x55]);
//! ```

use embedded_hal::delay::DelayNs;

use crate::command::{
    COLMOD, DISPOFF, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GAMCTRN1, GAMCTRP1, GAMSET, GCV, IDMOFF,
    IDMON, INVCTR, INVOFF, INVON, NOP, NORON, NVFCTR1, NVFCTR3, PTLAR, PTLON, PWCTR1, PWCTR2,
    PWCTR3, PWCTR4, PWCTR5, SCRLAR, SLPIN, SLPOUT, SWRESET, TEOFF, VMCTR1, VSCSAD,
};
use crate::interface::DisplayInterface;

/// Maximum number of parameter bytes carried by one [`InitCommand`]
pub const MAX_INIT_PARAMS: usize = 16;

/// Settle time after the last command of a sequence, in milliseconds
pub const INIT_SETTLE_MS: u32 = 120;

/// One entry of an init sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitCommand {
    opcode: u8,
    params: &'static [u8],
    delay_ms: u16,
}

impl InitCommand {
    /// Create an init command
    ///
    /// Fails to compile in a `const`/`static` context when more than
    /// [`MAX_INIT_PARAMS`] parameter bytes are given.
    pub const fn new(opcode: u8, params: &'static [u8], delay_ms: u16) -> Self {
        assert!(
            params.len() <= MAX_INIT_PARAMS,
            "init command carries more than 16 parameter bytes"
        );
        Self {
            opcode,
            params,
            delay_ms,
        }
    }

    /// Command byte
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Parameter bytes, sent in order after the opcode
    pub const fn params(&self) -> &'static [u8] {
        self.params
    }

    /// Delay after the command, in milliseconds (0 = none)
    pub const fn delay_ms(&self) -> u16 {
        self.delay_ms
    }
}

const GAMMA_FLAT: [u8; 16] = [0x00; 16];

/// Init sequence for generic ST77XX panels (ST7789-class, 240x240 by default)
///
/// Selects pixel format 0x65 and leaves display inversion on.
pub static ST77XX_INIT: &[InitCommand] = &[
    InitCommand::new(NOP, &[], 120),
    InitCommand::new(SWRESET, &[], 120),
    InitCommand::new(SLPIN, &[], 120),
    InitCommand::new(PTLON, &[], 120),
    InitCommand::new(NORON, &[], 120),
    InitCommand::new(INVON, &[], 120),
    InitCommand::new(GAMSET, &[0x01], 10),
    InitCommand::new(DISPOFF, &[], 10),
    InitCommand::new(DISPON, &[], 10),
    InitCommand::new(PTLAR, &[0x00, 0x9F, 0x83, 0xA1], 10),
    InitCommand::new(SCRLAR, &[0x00, 0x00, 0x00, 0xA2, 0x00, 0x00], 10),
    InitCommand::new(TEOFF, &[], 10),
    InitCommand::new(SCRLAR, &[0x00], 10),
    InitCommand::new(VSCSAD, &[0x00, 0x00], 10),
    InitCommand::new(IDMON, &[], 10),
    InitCommand::new(IDMOFF, &[], 10),
    InitCommand::new(COLMOD, &[0x65], 10),
    InitCommand::new(FRMCTR1, &[0x05, 0x3A, 0x3A], 10),
    InitCommand::new(FRMCTR2, &[0x05, 0x3A, 0x3A], 10),
    InitCommand::new(FRMCTR3, &[0x05, 0x3A, 0x3A, 0x05, 0x3A, 0x3A], 10),
    InitCommand::new(INVCTR, &[0xB4], 10),
    InitCommand::new(PWCTR1, &[0xA8, 0x08, 0x84], 10),
    InitCommand::new(PWCTR2, &[0xC1], 10),
    InitCommand::new(PWCTR3, &[0x0A, 0x00], 10),
    InitCommand::new(PWCTR4, &[0x8A, 0x26], 10),
    InitCommand::new(PWCTR5, &[0x8A, 0xEE], 10),
    InitCommand::new(VMCTR1, &[0xC5], 10),
    InitCommand::new(VMCTR1, &[0xC7], 10),
    InitCommand::new(NVFCTR1, &[0xD9], 10),
    InitCommand::new(NVFCTR3, &[0x3A, 0xC5], 10),
    InitCommand::new(GAMCTRP1, &GAMMA_FLAT, 10),
    InitCommand::new(GAMCTRN1, &GAMMA_FLAT, 10),
    InitCommand::new(GCV, &[0xFC], 10),
    InitCommand::new(SLPOUT, &[], 10),
];

/// Init sequence for ST7735S panels (128x160)
///
/// Selects pixel format 0x05 and switches inversion on, then off again.
pub static ST7735S_INIT: &[InitCommand] = &[
    InitCommand::new(NOP, &[], 120),
    InitCommand::new(SWRESET, &[], 120),
    InitCommand::new(SLPIN, &[], 120),
    InitCommand::new(PTLON, &[], 120),
    InitCommand::new(NORON, &[], 120),
    InitCommand::new(INVON, &[], 120),
    InitCommand::new(INVOFF, &[], 120),
    InitCommand::new(GAMSET, &[0x01], 10),
    InitCommand::new(DISPOFF, &[], 10),
    InitCommand::new(DISPON, &[], 10),
    InitCommand::new(PTLAR, &[0x00, 0x9F, 0x83, 0xA1], 10),
    InitCommand::new(SCRLAR, &[0x00, 0x00, 0x00, 0xA2, 0x00, 0x00], 10),
    InitCommand::new(TEOFF, &[], 10),
    InitCommand::new(SCRLAR, &[0x00], 10),
    InitCommand::new(VSCSAD, &[0x00, 0x00], 10),
    InitCommand::new(IDMON, &[], 10),
    InitCommand::new(IDMOFF, &[], 10),
    InitCommand::new(COLMOD, &[0x05], 10),
    InitCommand::new(FRMCTR1, &[0x05, 0x3A, 0x3A], 10),
    InitCommand::new(FRMCTR2, &[0x05, 0x3A, 0x3A], 10),
    InitCommand::new(FRMCTR3, &[0x05, 0x3A, 0x3A, 0x05, 0x3A, 0x3A], 10),
    InitCommand::new(INVCTR, &[0xB4], 10),
    InitCommand::new(PWCTR1, &[0xA8, 0x08, 0x84], 10),
    InitCommand::new(PWCTR2, &[0xC1], 10),
    InitCommand::new(PWCTR3, &[0x0A, 0x00], 10),
    InitCommand::new(PWCTR4, &[0x8A, 0x26], 10),
    InitCommand::new(PWCTR5, &[0x8A, 0xEE], 10),
    InitCommand::new(VMCTR1, &[0xC5], 10),
    InitCommand::new(VMCTR1, &[0xC7], 10),
    InitCommand::new(NVFCTR1, &[0xD9], 10),
    InitCommand::new(NVFCTR3, &[0x3A, 0xC5], 10),
    InitCommand::new(GAMCTRP1, &GAMMA_FLAT, 10),
    InitCommand::new(GAMCTRN1, &GAMMA_FLAT, 10),
    InitCommand::new(GCV, &[0xFC], 10),
    InitCommand::new(SLPOUT, &[], 10),
];

/// Send every command of `sequence` in order
///
/// For each entry: the opcode, each parameter byte in order, then a blocking
/// delay when the entry's delay is non-zero.
pub fn replay<I, D>(interface: &mut I, sequence: &[InitCommand], delay: &mut D) -> Result<(), I::Error>
where
    I: DisplayInterface,
    D: DelayNs,
{
    for cmd in sequence {
        log::trace!(
            "init: cmd {:#04x}, {} params, {}ms",
            cmd.opcode,
            cmd.params.len(),
            cmd.delay_ms
        );
        interface.send_command(cmd.opcode)?;
        for &byte in cmd.params {
            interface.send_data(byte)?;
        }
        if cmd.delay_ms > 0 {
            delay.delay_ms(u32::from(cmd.delay_ms));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COLMOD, RAMWR};
    use crate::testing::{Event, MockDelay, MockInterface};
    use alloc::vec::Vec;

    #[test]
    fn test_replay_sends_commands_params_and_delays_in_order() {
        static SEQ: &[InitCommand] = &[
            InitCommand::new(0x01, &[], 120),
            InitCommand::new(0x3A, &[0x05], 0),
            InitCommand::new(0xB1, &[0x01, 0x02, 0x03], 10),
        ];
        let mut iface = MockInterface::new();
        let mut delay = MockDelay::default();
        replay(&mut iface, SEQ, &mut delay).unwrap();

        assert_eq!(
            iface.events,
            [
                Event::Command(0x01),
                Event::Command(0x3A),
                Event::Data(0x05),
                Event::Command(0xB1),
                Event::Data(0x01),
                Event::Data(0x02),
                Event::Data(0x03),
            ]
        );
        assert_eq!(delay.calls, [120, 10]);
    }

    #[test]
    fn test_builtin_sequences_fit_parameter_limit() {
        for seq in [ST77XX_INIT, ST7735S_INIT] {
            assert!(seq.iter().all(|c| c.params().len() <= MAX_INIT_PARAMS));
        }
    }

    #[test]
    fn test_builtin_sequences_do_not_open_memory_write() {
        for seq in [ST77XX_INIT, ST7735S_INIT] {
            assert!(seq.iter().all(|c| c.opcode() != RAMWR));
            assert_eq!(seq.last().map(InitCommand::opcode), Some(SLPOUT));
        }
    }

    #[test]
    fn test_pixel_formats_differ_between_panels() {
        let colmod = |seq: &[InitCommand]| -> Vec<u8> {
            seq.iter()
                .filter(|c| c.opcode() == COLMOD)
                .flat_map(|c| c.params().iter().copied())
                .collect()
        };
        assert_eq!(colmod(ST77XX_INIT), [0x65]);
        assert_eq!(colmod(ST7735S_INIT), [0x05]);
    }

    #[test]
    fn test_st7735s_turns_inversion_back_off() {
        let ops: Vec<u8> = ST7735S_INIT.iter().map(InitCommand::opcode).collect();
        let on = ops.iter().position(|&op| op == INVON);
        let off = ops.iter().position(|&op| op == INVOFF);
        assert!(matches!((on, off), (Some(a), Some(b)) if a < b));
        assert!(!ST77XX_INIT.iter().any(|c| c.opcode() == INVOFF));
    }
}
