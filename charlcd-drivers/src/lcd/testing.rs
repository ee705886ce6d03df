//! Recording fake of the display side of the bus
//!
//! All six pins and the delay share one `Wire`. Every falling edge on E
//! latches RS and D4-D7 the way the controller would, so tests can decode
//! the exact nibble and byte stream plus every wait in between.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use charlcd_core::Mode;
use charlcd_hal::{Delay, OutputPin};

use super::bus::{BusPins, FourBitBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Rs,
    En,
    D4,
    D5,
    D6,
    D7,
}

impl Signal {
    pub const DATA: [Signal; 4] = [Signal::D4, Signal::D5, Signal::D6, Signal::D7];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EnableHigh,
    /// Falling edge on E with what the controller saw
    Latch { rs: bool, nibble: u8 },
    DelayUs(u32),
    DelayMs(u32),
}

/// A decoded byte transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub mode: Mode,
    pub byte: u8,
    /// Time waited since the previous transfer ended, in microseconds
    pub wait_before_us: u64,
}

#[derive(Debug, Default)]
pub struct Wire {
    levels: [bool; 6],
    events: Vec<Event>,
}

impl Wire {
    pub fn levels(&self) -> &[bool; 6] {
        &self.levels
    }

    pub fn level(&self, signal: Signal) -> bool {
        self.levels[signal.index()]
    }

    pub fn force_all_high(&mut self) {
        self.levels = [true; 6];
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn latch_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Latch { .. }))
            .count()
    }

    /// Every latched nibble as (RS, value)
    pub fn nibbles(&self) -> Vec<(bool, u8)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::Latch { rs, nibble } => Some((rs, nibble)),
                _ => None,
            })
            .collect()
    }

    /// Total time spent waiting, in microseconds
    pub fn total_us(&self) -> u64 {
        self.events.iter().map(event_us).sum()
    }

    /// Pair up nibbles into bytes, skipping `lone` single nibbles first
    ///
    /// The init sequence sends two lone nibbles before the controller is in
    /// 4-bit mode. Waits are summed between the end of one byte and the
    /// first nibble of the next.
    pub fn transfers(&self, lone: usize) -> Vec<Transfer> {
        let mut out = Vec::new();
        let mut skipped = 0;
        let mut high: Option<(bool, u8)> = None;
        let mut waited = 0u64;

        for event in &self.events {
            match *event {
                Event::Latch { rs, nibble } => {
                    if skipped < lone {
                        skipped += 1;
                        waited = 0;
                        continue;
                    }
                    match high.take() {
                        None => high = Some((rs, nibble)),
                        Some((high_rs, high_nibble)) => {
                            assert_eq!(high_rs, rs, "RS changed inside a byte");
                            out.push(Transfer {
                                mode: if rs { Mode::Data } else { Mode::Command },
                                byte: (high_nibble << 4) | nibble,
                                wait_before_us: waited,
                            });
                            waited = 0;
                        }
                    }
                }
                Event::EnableHigh => {}
                _ => {
                    if high.is_none() {
                        waited += event_us(event);
                    }
                }
            }
        }

        assert!(high.is_none(), "dangling half byte");
        out
    }

    /// Decoded (mode, byte) pairs with waits dropped
    pub fn bytes(&self, lone: usize) -> Vec<(Mode, u8)> {
        self.transfers(lone)
            .into_iter()
            .map(|t| (t.mode, t.byte))
            .collect()
    }

    /// Millisecond waits in order
    pub fn millis(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                Event::DelayMs(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    fn set(&mut self, signal: Signal, high: bool) {
        if signal == Signal::En {
            let was_high = self.levels[Signal::En.index()];
            if high && !was_high {
                self.events.push(Event::EnableHigh);
            } else if !high && was_high {
                let nibble = Signal::DATA
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (bit, s)| acc | ((self.level(*s) as u8) << bit));
                self.events.push(Event::Latch {
                    rs: self.level(Signal::Rs),
                    nibble,
                });
            }
        }
        self.levels[signal.index()] = high;
    }
}

fn event_us(event: &Event) -> u64 {
    match *event {
        Event::DelayUs(us) => us as u64,
        Event::DelayMs(ms) => ms as u64 * 1000,
        _ => 0,
    }
}

pub type SharedWire = Rc<RefCell<Wire>>;

pub struct FakePin {
    wire: SharedWire,
    signal: Signal,
}

impl OutputPin for FakePin {
    fn set_high(&mut self) {
        self.wire.borrow_mut().set(self.signal, true);
    }

    fn set_low(&mut self) {
        self.wire.borrow_mut().set(self.signal, false);
    }
}

pub struct FakeDelay {
    wire: SharedWire,
}

impl Delay for FakeDelay {
    fn delay_us(&mut self, us: u32) {
        self.wire.borrow_mut().events.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wire.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

pub fn fake_bus() -> (FourBitBus<FakePin, FakeDelay>, SharedWire) {
    let wire = SharedWire::default();
    let pin = |signal| FakePin {
        wire: wire.clone(),
        signal,
    };
    let pins = BusPins::new(
        pin(Signal::Rs),
        pin(Signal::En),
        pin(Signal::D4),
        pin(Signal::D5),
        pin(Signal::D6),
        pin(Signal::D7),
    );
    let delay = FakeDelay { wire: wire.clone() };
    (FourBitBus::new(pins, delay), wire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_only_on_falling_edge() {
        let (_bus, wire) = fake_bus();
        let mut wire = wire.borrow_mut();

        wire.set(Signal::D4, true);
        wire.set(Signal::En, true);
        wire.set(Signal::En, true);
        wire.set(Signal::D5, true);
        wire.set(Signal::En, false);
        wire.set(Signal::En, false);

        assert_eq!(wire.nibbles(), vec![(false, 0b0011)]);
        assert_eq!(wire.events()[0], Event::EnableHigh);
    }

    #[test]
    fn test_transfers_skip_lone_nibbles() {
        let wire = Wire {
            levels: [false; 6],
            events: vec![
                Event::Latch { rs: false, nibble: 3 },
                Event::DelayUs(40),
                Event::Latch { rs: false, nibble: 2 },
                Event::DelayUs(40),
                Event::Latch { rs: true, nibble: 4 },
                Event::DelayUs(5),
                Event::Latch { rs: true, nibble: 8 },
            ],
        };

        let transfers = wire.transfers(2);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].mode, Mode::Data);
        assert_eq!(transfers[0].byte, b'H');
        assert_eq!(transfers[0].wait_before_us, 40);
    }
}
