//! Bus timing contract
//!
//! Minimum waits required by the controller. There is no busy flag on this
//! wiring, so each value is a hard lower bound: waiting less corrupts the
//! display until the next full initialization.

/// E held high for the controller to latch the data lines (µs)
pub const STROBE_HOLD_US: u32 = 2;

/// Settle time after each nibble (µs)
pub const NIBBLE_SETTLE_US: u32 = 5;

/// Instruction execution time after a full byte (µs)
pub const INSTRUCTION_US: u32 = 50;

/// Wait after each initialization step and around CGRAM writes (µs)
pub const INIT_STEP_US: u32 = 40;

/// Clear display execution time (ms)
pub const CLEAR_MS: u32 = 2;

/// Power-on reset window before the first transfer (ms)
pub const POWER_ON_MS: u32 = 60;

/// Minimum animation frame period (ms)
pub const FRAME_MS: u32 = 125;

/// Minimum wait between display shift steps (ms)
pub const SCROLL_STEP_MS: u32 = 500;

/// Pause after a full scroll sweep (ms)
pub const SCROLL_TAIL_MS: u32 = 200;

/// Frame period honouring the minimum
pub const fn frame_period_ms(requested: u32) -> u32 {
    if requested < FRAME_MS {
        FRAME_MS
    } else {
        requested
    }
}

/// Scroll step period honouring the minimum
pub const fn scroll_step_ms(requested: u32) -> u32 {
    if requested < SCROLL_STEP_MS {
        SCROLL_STEP_MS
    } else {
        requested
    }
}
