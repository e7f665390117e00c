//! ANSI color helper utilities for terminal output.

use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Colours are dropped when `NO_COLOR` is set (https://no-color.org).
static ENABLED: LazyLock<bool> = LazyLock::new(|| std::env::var_os("NO_COLOR").is_none());

pub fn enabled() -> bool {
    *ENABLED
}

fn paint(code: &str, value: &str) -> String {
    if enabled() {
        format!("{code}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey placeholder for an empty table cell.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        paint(GREY, "--")
    } else {
        value.to_string()
    }
}

/// Negative numbers (a distance that went backwards, a refund) in red.
pub fn colorize_signed(value: &str) -> String {
    if value.trim_start().starts_with('-') {
        paint(RED, value)
    } else {
        value.to_string()
    }
}

/// Full-charge flag in green.
pub fn colorize_flag(value: &str, is_set: bool) -> String {
    if is_set {
        paint(GREEN, value)
    } else {
        colorize_optional(value)
    }
}
