//! Command parsing.
//!
//! The command surface is closed, so a submitted line parses into an
//! exhaustive enum. Matching is case-sensitive and runs on the trimmed line.
//! `/open` and `/theme` without an argument parse with a missing value and
//! get the same usage reply as a malformed one.

use folio_types::config::ThemeMode;

use crate::catalog;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/clear`: wipe the scroll log.
    Clear,
    /// `/projects`: list projects.
    Projects,
    /// `/open <n>`: the 1-based project number, or `None` if the argument is
    /// missing or not a positive integer.
    Open(Option<u64>),
    /// `/skills`: list skill categories.
    Skills,
    /// `/experience`: list work history.
    Experience,
    /// `/theme <value>`: `None` if the value is missing or not `dark` or
    /// `light`.
    Theme(Option<ThemeMode>),
    /// A command answered with a fixed block (`/help`, `/about`, `/contact`).
    Canned(&'static str),
    /// Anything else, carrying the trimmed input.
    Unknown(String),
}

impl Command {
    /// Parse a trimmed, non-empty input line.
    pub fn parse(cmd: &str) -> Self {
        match cmd {
            "/clear" => return Self::Clear,
            "/projects" => return Self::Projects,
            "/skills" => return Self::Skills,
            "/experience" => return Self::Experience,
            "/open" => return Self::Open(None),
            "/theme" => return Self::Theme(None),
            _ => {},
        }
        if let Some(rest) = cmd.strip_prefix("/open ") {
            return Self::Open(parse_project_number(first_arg(rest)));
        }
        if let Some(rest) = cmd.strip_prefix("/theme ") {
            return Self::Theme(ThemeMode::parse(first_arg(rest)));
        }
        match catalog::canned(cmd) {
            Some(text) => Self::Canned(text),
            None => Self::Unknown(cmd.to_string()),
        }
    }
}

/// First space-separated token; empty when the argument starts with a space.
fn first_arg(rest: &str) -> &str {
    rest.split(' ').next().unwrap_or("")
}

/// Lenient integer parse: optional sign, then leading digits.
///
/// Trailing garbage is ignored (`"3abc"` is 3). Returns `None` when there
/// are no digits or the value is not positive. Values too large to fit are
/// clamped, which can only ever resolve to "not found".
pub fn parse_project_number(arg: &str) -> Option<u64> {
    let (negative, digits) = match arg.as_bytes().first() {
        Some(b'-') => (true, &arg[1..]),
        Some(b'+') => (false, &arg[1..]),
        _ => (false, arg),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')));
    if negative || value == 0 {
        None
    } else {
        Some(value)
    }
}
