use crate::utils::colors;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint(code: &'static str) -> &'static str {
    if colors::enabled() { code } else { "" }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", paint(FG_BLUE), paint(BOLD), ICON_INFO, paint(RESET), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", paint(FG_GREEN), paint(BOLD), ICON_OK, paint(RESET), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", paint(FG_YELLOW), paint(BOLD), ICON_WARN, paint(RESET), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", paint(FG_RED), paint(BOLD), ICON_ERR, paint(RESET), msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        paint(FG_BLUE),
        paint(BOLD),
        msg,
        paint(RESET)
    );
}

/// One `• label: value` line, as used by `show` and `dashboard`.
pub fn detail<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("{}• {}:{} {}", paint(FG_CYAN), label, paint(RESET), value);
}
