//! Conversions between `<input type="datetime-local">` values and UTC instants.
//!
//! The browser input carries no zone; values are interpreted in the local
//! time zone, as the date picker shows them.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `None` for empty input, malformed input, or a local time skipped by a DST jump.
pub fn parse_datetime_input(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), INPUT_FORMAT).ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

pub fn format_datetime_input(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format(INPUT_FORMAT).to_string()
}

/// Human-readable local date and time, e.g. `Fri 10 May 2024, 16:00`.
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%a %-d %b %Y, %H:%M").to_string()
}
