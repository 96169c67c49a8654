//! Fallible parsing of claim date-time values.
//!
//! Date-time claims arrive as strings and come in more than one shape: a
//! token issuer may emit RFC 3339, an upstream JSON serializer may leave the
//! surrounding quotes in place, and hand-authored policy operands often use a
//! plain locale form. Parsing is an explicit fallible step; callers decide
//! what a `None` means.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Formats without a UTC offset; parsed values are assumed UTC.
const OFFSETLESS_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!(
        "[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]:[second]"
    ),
    format_description!(
        "[month padding:none]/[day padding:none]/[year] \
         [hour padding:none repr:12]:[minute]:[second] [period case_sensitive:false]"
    ),
];

const DATE_ONLY: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a date-time from a claim value or policy operand.
///
/// Accepts RFC 3339 / ISO-8601 strings, the same with a space instead of the
/// `T`, offset-less forms (assumed UTC), a date without a time component
/// (midnight UTC), US-style locale forms such as `1/2/2020 3:04:05 PM`, and
/// any of the above wrapped in JSON double quotes.
#[must_use]
pub fn parse_datetime(input: &str) -> Option<OffsetDateTime> {
    let trimmed = input.trim();
    let s = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);

    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt);
    }

    for format in OFFSETLESS_FORMATS {
        if let Ok(dt) = PrimitiveDateTime::parse(s, format) {
            return Some(dt.assume_utc());
        }
    }

    if let Ok(date) = Date::parse(s, DATE_ONLY) {
        return Some(date.midnight().assume_utc());
    }

    None
}

// =============================================================================
// Tests
// =============================================================================
