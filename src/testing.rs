//! Test doubles shared by the unit tests
//!
//! [`MockInterface`] records every byte it is given and also behaves like a
//! tiny panel: it decodes CASET/RASET/RAMWR and stores the streamed pixels by
//! controller RAM address, so geometry can be asserted on what would actually
//! light up.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{CASET, RAMWR, RASET};
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Command(u8),
    Data(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    /// Commands and data bytes, in wire order
    pub events: Vec<Event>,
    /// Pixel values by RAM address
    pub pixels: BTreeMap<(u16, u16), u16>,
    /// Pixels written, including overwrites
    pub pixel_writes: usize,
    pub resets: usize,
    pub backlight: Option<bool>,
    /// Fail every call once this many bytes have been accepted
    pub fail_after: Option<usize>,
    command: Option<u8>,
    params: Vec<u8>,
    columns: (u16, u16),
    rows: (u16, u16),
    cursor: (u16, u16),
    pending: Option<u8>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(bytes: usize) -> Self {
        Self {
            fail_after: Some(bytes),
            ..Self::default()
        }
    }

    /// Forget everything recorded so far, keeping decoder state
    pub fn clear(&mut self) {
        self.events.clear();
        self.pixels.clear();
        self.pixel_writes = 0;
    }

    pub fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(*c),
                Event::Data(_) => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Data(d) => Some(*d),
                Event::Command(_) => None,
            })
            .collect()
    }

    /// Parameter bytes sent after each occurrence of `command`
    pub fn params_of(&self, command: u8) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in &self.events {
            match *event {
                Event::Command(c) => {
                    out.extend(current.take());
                    if c == command {
                        current = Some(Vec::new());
                    }
                }
                Event::Data(d) => {
                    if let Some(params) = current.as_mut() {
                        params.push(d);
                    }
                }
            }
        }
        out.extend(current);
        out
    }

    /// RAM addresses currently holding `color`
    pub fn lit(&self, color: u16) -> BTreeSet<(u16, u16)> {
        self.pixels
            .iter()
            .filter(|&(_, &c)| c == color)
            .map(|(&p, _)| p)
            .collect()
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<u16> {
        self.pixels.get(&(x, y)).copied()
    }

    fn accept(&mut self) -> Result<(), MockError> {
        match self.fail_after {
            Some(limit) if self.events.len() >= limit => Err(MockError),
            _ => Ok(()),
        }
    }

    fn decode(&mut self, byte: u8) {
        match self.command {
            Some(CASET | RASET) => {
                self.params.push(byte);
                if self.params.len() == 4 {
                    let start = u16::from_be_bytes([self.params[0], self.params[1]]);
                    let end = u16::from_be_bytes([self.params[2], self.params[3]]);
                    if self.command == Some(CASET) {
                        self.columns = (start, end);
                    } else {
                        self.rows = (start, end);
                    }
                }
            }
            Some(RAMWR) => match self.pending.take() {
                None => self.pending = Some(byte),
                Some(high) => self.store(u16::from_be_bytes([high, byte])),
            },
            _ => {}
        }
    }

    fn store(&mut self, color: u16) {
        let (x, y) = self.cursor;
        if y > self.rows.1 {
            return;
        }
        self.pixels.insert((x, y), color);
        self.pixel_writes += 1;
        self.cursor = if x >= self.columns.1 {
            (self.columns.0, y + 1)
        } else {
            (x + 1, y)
        };
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.accept()?;
        self.events.push(Event::Command(command));
        self.command = Some(command);
        self.params.clear();
        self.pending = None;
        if command == RAMWR {
            self.cursor = (self.columns.0, self.rows.0);
        }
        Ok(())
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.accept()?;
        self.events.push(Event::Data(data));
        self.decode(data);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.resets += 1;
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.backlight = Some(on);
        Ok(())
    }
}

/// Records every millisecond delay
#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub calls: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}
