//! Field parsing and normalization rules.
//!
//! These are the pure rules behind the interactive prompts: required text
//! must be non-blank, duration must be a positive whole number, and the
//! optional release date only accepts one exact digit pattern. Anything
//! that misses a rule yields `None`; nothing here is an error.

use chrono::NaiveDate;

/// Input pattern for release dates: day, month, 4-digit year, no separators.
pub const RELEASE_DATE_FORMAT: &str = "%d%m%Y";

/// Normalize a required text field. Blank input yields `None`.
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a duration in minutes. Only whole numbers above zero pass.
pub fn parse_duration(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}

/// Parse a release date in the exact `ddmmyyyy` pattern.
///
/// Anything else — wrong length, separators, a non-existent calendar date —
/// yields `None` rather than an error; the field is simply absent.
pub fn parse_release_date(input: &str) -> Option<NaiveDate> {
    let digits = input.trim();
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, RELEASE_DATE_FORMAT).ok()
}

/// Normalize an optional text field. Blank input means absent.
pub fn normalize_optional(input: &str) -> Option<String> {
    non_blank(input)
}
