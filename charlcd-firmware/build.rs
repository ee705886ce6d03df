//! Build script for charlcd-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys and their expected kinds, per section
const SCHEMA: &[(&str, &[(&str, Kind)])] = &[
    (
        "display",
        &[("function_set_repeats", Kind::Int(1, 4)), ("cursor", Kind::Cursor)],
    ),
    ("text", &[("line1", Kind::Text), ("line2", Kind::Text)]),
    (
        "animation",
        &[
            ("enabled", Kind::Bool),
            ("start_pos", Kind::Int(-8, 16)),
            ("min_pos", Kind::Int(-8, -3)),
            ("frame_ms", Kind::Int(0, u32::MAX as i64)),
        ],
    ),
    (
        "scroll",
        &[("enabled", Kind::Bool), ("step_ms", Kind::Int(0, u32::MAX as i64))],
    ),
];

/// Longest text line that fits in one DDRAM line
const MAX_LINE_LEN: usize = 40;

#[derive(Clone, Copy)]
enum Kind {
    Bool,
    Int(i64, i64),
    Text,
    Cursor,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml as its configuration.          ║\n\
            ║  Please create one in the charlcd-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = validate_schema(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check every section and key against the schema
///
/// Mirrors what the on-target parser accepts, so a bad file fails the
/// build instead of silently falling back to defaults at boot.
fn validate_schema(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return errors,
    };

    for (name, section) in root {
        let keys = match SCHEMA.iter().find(|(s, _)| s == name) {
            Some((_, keys)) => *keys,
            None => {
                errors.push(format!("unknown section [{}]", name));
                continue;
            }
        };

        let section = match section.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };

        for (key, value) in section {
            match keys.iter().find(|(k, _)| k == key) {
                Some((_, kind)) => {
                    if let Err(e) = check_value(*kind, value) {
                        errors.push(format!("[{}] {} {}", name, key, e));
                    }
                }
                None => errors.push(format!("[{}] unknown key '{}'", name, key)),
            }
        }
    }

    let start = int_at(config, "animation", "start_pos").unwrap_or(16);
    let min = int_at(config, "animation", "min_pos").unwrap_or(-3);
    if start <= min {
        errors.push("[animation] start_pos must be greater than min_pos".to_string());
    }

    errors
}

fn check_value(kind: Kind, value: &toml::Value) -> Result<(), String> {
    match (kind, value) {
        (Kind::Bool, toml::Value::Boolean(_)) => Ok(()),
        (Kind::Int(min, max), toml::Value::Integer(n)) => {
            if *n < min || *n > max {
                Err(format!("must be {}..={}", min, max))
            } else {
                Ok(())
            }
        }
        (Kind::Text, toml::Value::String(s)) => {
            if s.len() > MAX_LINE_LEN {
                Err(format!("must be at most {} bytes", MAX_LINE_LEN))
            } else {
                Ok(())
            }
        }
        (Kind::Cursor, toml::Value::String(s)) => {
            if ["hidden", "off", "underline", "on", "blink"].contains(&s.as_str()) {
                Ok(())
            } else {
                Err("must be 'hidden', 'underline', or 'blink'".to_string())
            }
        }
        (Kind::Bool, _) => Err("must be a boolean".to_string()),
        (Kind::Int(..), _) => Err("must be an integer".to_string()),
        (Kind::Text, _) | (Kind::Cursor, _) => Err("must be a string".to_string()),
    }
}

fn int_at(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}
