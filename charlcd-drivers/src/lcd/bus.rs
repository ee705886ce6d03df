//! 4-bit parallel bus
//!
//! Six output lines: D4-D7 carry a nibble, RS selects command or data, and
//! a falling edge on E latches the lot. The bus is write-only; nothing is
//! ever read back, so correctness rests entirely on bit order and timing.

use charlcd_core::init::Settle;
use charlcd_core::timing::{INSTRUCTION_US, NIBBLE_SETTLE_US, STROBE_HOLD_US};
use charlcd_core::{Command, Mode, Nibble};
use charlcd_hal::{Delay, OutputPin};

/// The six display lines
pub struct BusPins<P> {
    /// Register select
    pub rs: P,
    /// Enable strobe
    pub en: P,
    /// D4, D5, D6, D7
    pub data: [P; 4],
}

impl<P> BusPins<P> {
    pub fn new(rs: P, en: P, d4: P, d5: P, d6: P, d7: P) -> Self {
        Self {
            rs,
            en,
            data: [d4, d5, d6, d7],
        }
    }
}

/// Nibble and byte transfers over the 4-bit bus
///
/// Owns the pins exclusively and blocks for every mandated settle time
/// before returning.
pub struct FourBitBus<P, D> {
    pins: BusPins<P>,
    delay: D,
}

impl<P: OutputPin, D: Delay> FourBitBus<P, D> {
    pub fn new(pins: BusPins<P>, delay: D) -> Self {
        Self { pins, delay }
    }

    /// Drive every line low
    pub fn release(&mut self) {
        self.pins.rs.set_low();
        self.pins.en.set_low();
        for line in self.pins.data.iter_mut() {
            line.set_low();
        }
    }

    /// Pulse E so the controller latches the data lines
    pub fn strobe(&mut self) {
        self.pins.en.set_high();
        self.delay.delay_us(STROBE_HOLD_US);
        self.pins.en.set_low();
    }

    /// Put a nibble on D4-D7 (bit 0 on D4) and latch it
    pub fn send_nibble(&mut self, nibble: Nibble) {
        for (line, level) in self.pins.data.iter_mut().zip(nibble.lines()) {
            line.set_state(level);
        }
        self.strobe();
        self.delay.delay_us(NIBBLE_SETTLE_US);
    }

    /// Send a full byte, high nibble first, and wait for it to execute
    pub fn send(&mut self, byte: u8, mode: Mode) {
        self.pins.rs.set_state(mode.rs_level());
        for nibble in Nibble::split(byte) {
            self.send_nibble(nibble);
        }
        self.delay.delay_us(INSTRUCTION_US);
    }

    /// Send an instruction
    pub fn command(&mut self, command: Command) {
        self.send(command.encode(), Mode::Command);
    }

    /// Write a byte to DDRAM or CGRAM at the current address
    pub fn write_data(&mut self, byte: u8) {
        self.send(byte, Mode::Data);
    }

    /// Block for an extra settle period
    pub fn settle(&mut self, settle: Settle) {
        match settle {
            Settle::None => {}
            Settle::Micros(us) => self.delay.delay_us(us),
            Settle::Millis(ms) => self.delay.delay_ms(ms),
        }
    }

    pub fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the pins and delay
    pub fn into_parts(self) -> (BusPins<P>, D) {
        (self.pins, self.delay)
    }
}
