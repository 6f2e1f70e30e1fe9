//! Build script for macropad-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates keymap.json at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Capacities of the firmware keymap model
const MAX_SWITCHES: usize = 16;
const MAX_ENCODERS: usize = 8;
const MAX_LABEL_LEN: usize = 24;
const MAX_COMMAND_LEN: usize = 48;

const SETTINGS: &[&str] = &[
    "idle_ms",
    "poll_interval_ms",
    "switch_settle_ms",
    "button_settle_ms",
    "release_poll_ms",
];

fn main() {
    setup_linker();
    validate_keymap();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate keymap.json against the limits the firmware enforces
fn validate_keymap() {
    println!("cargo:rerun-if-changed=keymap.json");

    let path = Path::new("keymap.json");
    if !path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: keymap.json not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a default keymap from keymap.json.          ║\n\
            ║  Please create one in the macropad-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => panic!("\nERROR: failed to read keymap.json: {}\n", e),
    };

    let keymap: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid JSON in keymap.json                              ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    if !keymap.is_object() {
        errors.push("top level must be an object".to_string());
    }
    validate_group(&keymap, "switches", MAX_SWITCHES, &["cmd"], &mut errors);
    validate_group(&keymap, "encoder_buttons", MAX_ENCODERS, &["cmd"], &mut errors);
    validate_group(&keymap, "encoders", MAX_ENCODERS, &["cw", "ccw", "push"], &mut errors);
    validate_settings(&keymap, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: keymap.json validation failed                            ║\n\
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

    println!("cargo:warning=keymap.json validated successfully");
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

fn validate_group(
    keymap: &Value,
    group: &str,
    max: usize,
    commands: &[&str],
    errors: &mut Vec<String>,
) {
    let entries = match keymap.get(group) {
        None => return,
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            errors.push(format!("'{}' must be an array", group));
            return;
        }
    };

    if entries.len() > max {
        errors.push(format!("'{}' has {} entries (max {})", group, entries.len(), max));
    }

    for (i, entry) in entries.iter().enumerate() {
        let Some(entry) = entry.as_object() else {
            errors.push(format!("{}[{}] must be an object", group, i));
            continue;
        };
        if entry.contains_key("label") && entry.contains_key("name") {
            errors.push(format!("{}[{}] has both 'label' and 'name'", group, i));
        }
        for key in ["label", "name"] {
            check_string(entry.get(key), MAX_LABEL_LEN, group, i, key, errors);
        }
        for key in commands {
            check_string(entry.get(*key), MAX_COMMAND_LEN, group, i, key, errors);
        }
    }
}

fn check_string(
    value: Option<&Value>,
    max: usize,
    group: &str,
    index: usize,
    key: &str,
    errors: &mut Vec<String>,
) {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if s.len() > max => {
            errors.push(format!("{}[{}].{} longer than {} bytes", group, index, key, max));
        }
        Some(Value::String(_)) => {}
        Some(_) => errors.push(format!("{}[{}].{} must be a string", group, index, key)),
    }
}

fn validate_settings(keymap: &Value, errors: &mut Vec<String>) {
    let settings = match keymap.get("settings") {
        None => return,
        Some(Value::Object(settings)) => settings,
        Some(_) => {
            errors.push("'settings' must be an object".to_string());
            return;
        }
    };

    for (key, value) in settings {
        if !SETTINGS.contains(&key.as_str()) {
            errors.push(format!("settings.{} is not a known setting", key));
            continue;
        }
        match value.as_u64() {
            Some(v) if v > u64::from(u32::MAX) => {
                errors.push(format!("settings.{} out of range", key))
            }
            Some(0) if key == "poll_interval_ms" || key == "release_poll_ms" => {
                errors.push(format!("settings.{} must be at least 1", key))
            }
            Some(_) => {}
            None => errors.push(format!("settings.{} must be a non-negative integer", key)),
        }
    }
}
