//! Shared formatting helpers for grid cells and headers.
//!
//! All pure formatting functions (no layout, no rendering surface) live here.

use chrono::{DateTime, Local, TimeZone};

/// Layout used for the time column and headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Cell values
// ---------------------------------------------------------------------------

/// Format epoch seconds as local date and time: `"2024-03-01 12:00:05"`.
///
/// Returns `"----"` when the timestamp cannot be represented.
pub fn format_timestamp(epoch_secs: i64) -> String {
    format_timestamp_in(&Local, epoch_secs)
}

/// Same as [`format_timestamp`] in an explicit time zone.
pub fn format_timestamp_in<Tz>(tz: &Tz, epoch_secs: i64) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(epoch_secs, 0)
        .single()
        .map(|dt: DateTime<Tz>| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "----".to_string())
}

/// Shortest decimal rendering of a measurement: `72.5` -> `"72.5"`, `3.0` -> `"3"`.
pub fn format_measurement(value: f64) -> String {
    format!("{}", value)
}

/// Joins tags with a single space; empty for no tags.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(" ")
}

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Split a dotted field name on its last `.` into `(group, title)`.
///
/// `"engine.oil.temp"` -> `("engine.oil", "temp")`, `"site"` -> `("", "site")`.
pub fn split_field_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => ("", name),
    }
}

// ---------------------------------------------------------------------------
// Text fitting (fixed-width frontends)
// ---------------------------------------------------------------------------

/// Truncate to `max_chars` characters with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

/// Truncate and pad to exactly `width` characters.
pub fn fit(s: &str, width: usize, align_right: bool) -> String {
    let s = truncate(s, width);
    if align_right {
        format!("{:>width$}", s, width = width)
    } else {
        format!("{:<width$}", s, width = width)
    }
}
