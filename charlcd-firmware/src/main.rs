//! charlcd - HD44780 character display firmware
//!
//! Main firmware binary for RP2040-based boards. Brings up a 16x2
//! character LCD on six GPIO lines, shows the configured banner (swept
//! sideways when a line is too long) and then plays the sprite animation
//! forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use charlcd_core::AnimationState;
use charlcd_drivers::{BusPins, DriverSettings, FourBitBus, Hd44780};
use charlcd_hal_rp2040::{BusLines, BusyDelay};

mod config;

/// Main entry point
///
/// Everything runs here: every bus transaction busy-waits, so there is
/// nothing for other tasks to overlap with.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("charlcd firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();
    let settings = DriverSettings::from(&config);

    // Pin assignment is board-specific (RS=GP2, E=GP3, D4-D7=GP4-GP7)
    let lines = BusLines::new(
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
    );
    let pins = BusPins::new(lines.rs, lines.en, lines.d4, lines.d5, lines.d6, lines.d7);
    let mut lcd = Hd44780::new(FourBitBus::new(pins, BusyDelay), settings);

    lcd.init();
    info!("Display initialized");

    let text = &config.text;
    if config.scroll.enabled {
        debug!("Showing banner, scrolling over {} columns", text.longest());
        lcd.show_text(&text.line1, &text.line2);
    } else {
        lcd.write_lines(&text.line1, &text.line2);
    }

    if !config.animation.enabled {
        info!("Animation disabled, banner stays up");
        loop {
            Timer::after_secs(60).await;
        }
    }

    lcd.clear();
    let mut state = AnimationState::start(settings.bounds);
    info!(
        "Animation running: {} -> {}, {} ms frames",
        settings.bounds.start, settings.bounds.min, settings.frame_ms
    );

    loop {
        state = lcd.tick(state);
        trace!("frame pos={} offset={}", state.pos, state.sprite_offset.value());
    }
}
