//! Parser for the display configuration file
//!
//! Handles only the TOML subset the configuration uses, not TOML in
//! general.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings and escapes
//! - Arrays and inline tables
//! - Dotted keys

use heapless::String;

use super::types::{DisplayConfig, MAX_FUNCTION_SET_REPEATS, MAX_LINE_LEN};
use crate::animation::AnimationBounds;
use crate::command::CursorMode;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or spelling
    InvalidValue,
    /// String longer than a display line
    TooLong,
    /// Number outside the accepted range
    OutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Text,
    Animation,
    Scroll,
}

/// Parse configuration text into a `DisplayConfig`
///
/// Missing keys keep their defaults.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ConfigError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    if AnimationBounds::new(config.animation.start_pos, config.animation.min_pos).is_none() {
        return Err(ConfigError::OutOfRange);
    }

    Ok(config)
}

/// Parse "[name]" including an optional trailing comment
fn parse_section_header(line: &str) -> Result<Section, ConfigError> {
    let end = line.find(']').ok_or(ConfigError::InvalidSection)?;
    let rest = line[end + 1..].trim();
    if !rest.is_empty() && !rest.starts_with('#') {
        return Err(ConfigError::InvalidSection);
    }

    match line[1..end].trim() {
        "display" => Ok(Section::Display),
        "text" => Ok(Section::Text),
        "animation" => Ok(Section::Animation),
        "scroll" => Ok(Section::Scroll),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match comment_start(value) {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Byte index of the first `#` outside a quoted string
fn comment_start(value: &str) -> Option<usize> {
    let mut in_string = false;
    for (i, c) in value.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ConfigError::InvalidValue)
    }
}

/// Parse a string that must fit on one display line
fn parse_line_text(value: &str) -> Result<String<MAX_LINE_LEN>, ConfigError> {
    String::try_from(parse_string(value)?).map_err(|_| ConfigError::TooLong)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse an integer and check it lies in `min..=max`
fn parse_ranged<T>(value: &str, min: T, max: T) -> Result<T, ConfigError>
where
    T: core::str::FromStr + PartialOrd,
{
    let n = parse_int(value)?;
    if n < min || n > max {
        return Err(ConfigError::OutOfRange);
    }
    Ok(n)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_cursor(value: &str) -> Result<CursorMode, ConfigError> {
    CursorMode::from_name(parse_string(value)?).ok_or(ConfigError::InvalidValue)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Display, "function_set_repeats") => {
            config.display.function_set_repeats =
                parse_ranged(value, 1, MAX_FUNCTION_SET_REPEATS)?;
        }
        (Section::Display, "cursor") => config.display.cursor = parse_cursor(value)?,

        (Section::Text, "line1") => config.text.line1 = parse_line_text(value)?,
        (Section::Text, "line2") => config.text.line2 = parse_line_text(value)?,

        (Section::Animation, "enabled") => config.animation.enabled = parse_bool(value)?,
        (Section::Animation, "start_pos") => {
            config.animation.start_pos = parse_ranged(
                value,
                AnimationBounds::MIN_POS_FLOOR,
                AnimationBounds::START_CEILING,
            )?;
        }
        (Section::Animation, "min_pos") => {
            config.animation.min_pos = parse_ranged(
                value,
                AnimationBounds::MIN_POS_FLOOR,
                AnimationBounds::MIN_POS_CEILING,
            )?;
        }
        // Shorter periods are clamped up later rather than rejected
        (Section::Animation, "frame_ms") => config.animation.frame_ms = parse_int(value)?,

        (Section::Scroll, "enabled") => config.scroll.enabled = parse_bool(value)?,
        (Section::Scroll, "step_ms") => config.scroll.step_ms = parse_int(value)?,

        _ => return Err(ConfigError::UnknownKey),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Display configuration
[display]
function_set_repeats = 1
cursor = "underline"   # show where text goes

[text]
line1 = "Temperature # 1"
line2 = "A line long enough to need scrolling"

[animation]
enabled = false
start_pos = 12
min_pos = -4
frame_ms = 200

[scroll]
step_ms = 750
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();

        assert_eq!(config.display.function_set_repeats, 1);
        assert_eq!(config.display.cursor, CursorMode::Underline);
        assert_eq!(config.text.line1.as_str(), "Temperature # 1");
        assert_eq!(config.text.longest(), 36);
        assert!(!config.animation.enabled);
        assert_eq!(config.animation.bounds(), AnimationBounds { start: 12, min: -4 });
        assert_eq!(config.animation.frame_period_ms(), 200);
        assert!(config.scroll.enabled);
        assert_eq!(config.scroll.step_period_ms(), 750);
    }

    #[test]
    fn test_shipped_config_parses() {
        let shipped = include_str!("../../../charlcd-firmware/display.toml");
        assert_eq!(parse_config(shipped).unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_quoted_hash_with_trailing_comment() {
        let config = parse_config("[text]\nline1 = \"Temp # 1\"  # sensor label\n").unwrap();
        assert_eq!(config.text.line1.as_str(), "Temp # 1");
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), DisplayConfig::default());
        assert_eq!(parse_config("# nothing\n\n").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("[display]"), Ok(Section::Display));
        assert_eq!(parse_section_header("[ scroll ] # trailing"), Ok(Section::Scroll));
        assert_eq!(parse_section_header("[stepper]"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_section_header("[text"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_section_header("[text] junk"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_key_value_comments() {
        assert_eq!(parse_key_value("a = 1 # one"), Some(("a", "1")));
        assert_eq!(parse_key_value(r#"a = "x # y""#), Some(("a", r#""x # y""#)));
        assert_eq!(
            parse_key_value(r#"a = "x # y"  # label # more"#),
            Some(("a", r#""x # y""#))
        );
        assert_eq!(parse_key_value("a = # only a comment"), None);
        assert_eq!(parse_key_value("a ="), None);
        assert_eq!(parse_key_value("no equals"), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_config("[display]\ncolour = 3"),
            Err(ConfigError::UnknownKey)
        );
        assert_eq!(parse_config("line1 = \"x\""), Err(ConfigError::UnknownKey));
        assert_eq!(
            parse_config("[display]\ncursor = \"sparkle\""),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nfunction_set_repeats = 9"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(
            parse_config("[animation]\nenabled = yes"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[text]\nline1 = unquoted"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[text]\nline1 = \"0123456789012345678901234567890123456789X\""),
            Err(ConfigError::TooLong)
        );
        assert_eq!(
            parse_config("[animation]\nmin_pos = -1"),
            Err(ConfigError::OutOfRange)
        );
        assert_eq!(parse_config("garbage"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_start_must_exceed_min() {
        assert_eq!(
            parse_config("[animation]\nstart_pos = -5\nmin_pos = -4"),
            Err(ConfigError::OutOfRange)
        );
    }

    #[test]
    fn test_short_periods_parse_and_clamp() {
        let config = parse_config("[animation]\nframe_ms = 5\n[scroll]\nstep_ms = 0").unwrap();
        assert_eq!(config.animation.frame_period_ms(), 125);
        assert_eq!(config.scroll.step_period_ms(), 500);
    }
}
