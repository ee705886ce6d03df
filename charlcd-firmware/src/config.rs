//! Configuration loading
//!
//! The configuration is display.toml, embedded at build time. build.rs has
//! already rejected a malformed file, so the fallback here only guards
//! against the two parsers drifting apart.

use charlcd_core::config::{parse_config, DisplayConfig};
use defmt::*;

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> DisplayConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: cursor={}, function set x{}",
                config.display.cursor, config.display.function_set_repeats
            );
            config
        }
        Err(e) => {
            warn!("display.toml rejected ({}), using defaults", e);
            DisplayConfig::default()
        }
    }
}
