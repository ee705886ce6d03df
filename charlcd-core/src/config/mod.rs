//! Configuration
//!
//! Board-agnostic display settings and the parser for the TOML subset the
//! firmware embeds.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
