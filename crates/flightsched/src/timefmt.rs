//! Date and timestamp parsing for schedule input.
//!
//! Timestamps are written as `Mon DD YYYY HH:MM ZONE`, for example
//! `Sep 18 2024 15:00 PST`. A comma after the day (`Sep 18, 2024 ...`) and a
//! literal `at` before the time (`... 2024 at 15:00 PST`) are both tolerated,
//! so the same parser serves `--add` and `--edit`.
//!
//! Zones are either a known abbreviation (see [`KNOWN_ZONES`]) or a numeric
//! offset such as `+05:30` or `-0800`. Abbreviations are mapped to fixed
//! offsets; no daylight-saving rules are applied.

use std::sync::OnceLock;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

use crate::error::{Error, Result};
use crate::flight::ZonedTime;

/// Format of the `--search-date` value.
pub const SEARCH_DATE_FORMAT: &str = "%b %d %Y";

/// Format used to render a timestamp, without its zone label.
pub const DISPLAY_FORMAT: &str = "%b %d, %Y at %H:%M";

const TIME_FORMAT: &str = "%H:%M";

const HOUR: i32 = 3600;

/// Zone abbreviations accepted in timestamps, with their UTC offsets in seconds.
pub const KNOWN_ZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("Z", 0),
    ("NST", -(3 * HOUR + HOUR / 2)),
    ("NDT", -(2 * HOUR + HOUR / 2)),
    ("AST", -4 * HOUR),
    ("ADT", -3 * HOUR),
    ("EST", -5 * HOUR),
    ("EDT", -4 * HOUR),
    ("CST", -6 * HOUR),
    ("CDT", -5 * HOUR),
    ("MST", -7 * HOUR),
    ("MDT", -6 * HOUR),
    ("PST", -8 * HOUR),
    ("PDT", -7 * HOUR),
    ("AKST", -9 * HOUR),
    ("AKDT", -8 * HOUR),
    ("HST", -10 * HOUR),
];

fn numeric_offset_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})$").ok())
        .as_ref()
}

// `%d` also takes a single digit; the day must be written as two.
fn is_two_digit_day(day: &str) -> bool {
    day.len() == 2 && day.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a `--search-date` value such as `Sep 18 2024`.
///
/// The day is always two digits: `Sep 08 2024`, not `Sep 8 2024`.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] if the input is not in `Mon DD YYYY` form.
pub fn parse_search_date(input: &str) -> Result<NaiveDate> {
    let err = || Error::DateFormat {
        input: input.to_string(),
    };
    let trimmed = input.trim();
    if !trimmed.split(' ').nth(1).is_some_and(is_two_digit_day) {
        return Err(err());
    }
    NaiveDate::parse_from_str(trimmed, SEARCH_DATE_FORMAT).map_err(|_| err())
}

/// Resolve a zone label to a fixed offset and its canonical label.
///
/// Abbreviations are matched case-insensitively and returned upper-cased.
/// Numeric offsets are returned in `+HH:MM` form.
#[must_use]
pub fn parse_zone(label: &str) -> Option<(FixedOffset, String)> {
    let upper = label.to_ascii_uppercase();
    if let Some((name, secs)) = KNOWN_ZONES.iter().find(|(name, _)| *name == upper) {
        return FixedOffset::east_opt(*secs).map(|offset| (offset, (*name).to_string()));
    }

    let caps = numeric_offset_pattern()?.captures(label)?;
    let hours: i32 = caps[2].parse().ok()?;
    let minutes: i32 = caps[3].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let mut secs = hours * HOUR + minutes * 60;
    if &caps[1] == "-" {
        secs = -secs;
    }
    let offset = FixedOffset::east_opt(secs)?;
    Some((offset, offset.to_string()))
}

/// Parse a departure or arrival timestamp.
///
/// # Errors
///
/// Returns [`Error::TimestampParse`] when the input has the wrong shape, the
/// date or time is invalid, or the zone is not recognised.
pub fn parse_timestamp(input: &str) -> Result<ZonedTime> {
    let tokens: Vec<&str> = input
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("at"))
        .collect();

    let [month, day, year, time, zone] = tokens.as_slice() else {
        return Err(Error::timestamp(
            input,
            "expected 'Mon DD YYYY HH:MM ZONE' (example: 'Sep 18 2024 15:00 PST')",
        ));
    };

    let day = day.trim_end_matches(',');
    if !is_two_digit_day(day) {
        return Err(Error::timestamp(input, "day must be two digits (e.g. 'Sep 08')"));
    }
    let date = NaiveDate::parse_from_str(&format!("{month} {day} {year}"), SEARCH_DATE_FORMAT)
        .map_err(|e| Error::timestamp(input, format!("bad date: {e}")))?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|e| Error::timestamp(input, format!("bad time of day: {e}")))?;
    let (offset, label) = parse_zone(zone)
        .ok_or_else(|| Error::timestamp(input, format!("unknown time zone '{zone}'")))?;

    let at = offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| Error::timestamp(input, "time does not exist in that zone"))?;

    Ok(ZonedTime::new(at, label))
}
