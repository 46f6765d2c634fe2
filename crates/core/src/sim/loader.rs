//! Trace loading and parsing.
//!
//! A trace is a plain-text file with one retired branch per line:
//! an address (hex with an optional `0x` prefix, or decimal) followed by an
//! outcome token. Accepted outcome tokens are `1`, `t`, `taken` for taken
//! and `0`, `n`, `not-taken` for not taken, case-insensitive. Blank lines
//! and `#` comments are skipped.
//!
//! ```text
//! # address  outcome
//! 0x400a10   1
//! 0x400a2c   n
//! 4196912    taken
//! ```

use std::fs;

use crate::error::TraceError;
use crate::sim::BranchEvent;

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`TraceError::Io`] when the file cannot be read and
/// [`TraceError::Malformed`] for the first unparsable line.
pub fn read_trace(path: &str) -> Result<Vec<BranchEvent>, TraceError> {
    parse_trace(&fs::read_to_string(path)?)
}

/// Parses trace text into branch events.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`] for the first line that does not parse
/// as `<address> <outcome>`.
pub fn parse_trace(input: &str) -> Result<Vec<BranchEvent>, TraceError> {
    let mut events = Vec::new();
    for (number, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(event) => events.push(event),
            None => {
                return Err(TraceError::Malformed {
                    line: number + 1,
                    text: raw.to_string(),
                });
            }
        }
    }
    Ok(events)
}

/// Parses one non-empty, comment-stripped line.
fn parse_line(line: &str) -> Option<BranchEvent> {
    let mut tokens = line.split_whitespace();
    let address = parse_address(tokens.next()?)?;
    let taken = parse_outcome(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some(BranchEvent { address, taken })
}

/// Parses an address token, hex with an optional `0x` prefix or decimal.
fn parse_address(token: &str) -> Option<u64> {
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}

/// Parses an outcome token.
fn parse_outcome(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "1" | "t" | "taken" => Some(true),
        "0" | "n" | "not-taken" => Some(false),
        _ => None,
    }
}
