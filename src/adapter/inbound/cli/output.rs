//! Shared CLI output helpers.
//!
//! Supports a JSON mode for scripting; in JSON mode human-readable lines are
//! suppressed and errors are emitted as JSON on stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the table heading.
pub fn header(title: &str, detail: impl Display) {
    if is_json() {
        return;
    }
    println!(
        "{} {}",
        title.if_supports_color(Stream::Stdout, |t| t.bold()),
        detail
            .to_string()
            .if_supports_color(Stream::Stdout, |t| t.dimmed()),
    );
    println!();
}

/// Print pre-rendered text as-is.
pub fn lines(content: &str) {
    if is_json() {
        return;
    }
    for line in content.lines() {
        println!("{line}");
    }
}

/// Print a JSON document on stdout.
pub fn json_output(value: &serde_json::Value) {
    println!("{value}");
}

/// Print an error line.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "{} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}
