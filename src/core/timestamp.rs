//! Timestamp parsing for ordering, and display formatting in a configurable zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";

// Minute precision with an offset; RFC 3339 requires seconds.
const ZONED_MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Zone used to display timestamps and to interpret timestamps without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Zone of the process running the converter.
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self {
            DisplayZone::Local => instant
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        }
    }

    fn resolve_naive(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        // DST gaps have no instant; overlaps take the earlier one.
        match self {
            DisplayZone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DisplayZone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|_| format!("Unknown time zone '{}'", trimmed))
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Parses a raw published timestamp into an absolute instant.
///
/// Accepts RFC 3339, RFC 2822, ISO 8601 date-times without seconds, naive
/// date-times (read in `zone`) and bare dates (midnight UTC). Anything else
/// yields `None`.
pub fn parse_timestamp(raw: &str, zone: &DisplayZone) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let numeric = with_numeric_utc_offset(raw);
    for format in ZONED_MINUTE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&numeric, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return zone.resolve_naive(&naive);
        }
    }
    parse_date_only(raw).map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD HH:mm:ss` in `zone`, or `None` when `raw` is not a timestamp.
///
/// Bare dates display as midnight of that date, whatever the zone; only
/// their ordering key is pinned to UTC.
pub fn format_timestamp(raw: &str, zone: &DisplayZone) -> Option<String> {
    if let Some(midnight) = parse_date_only(raw) {
        return Some(midnight.format(DISPLAY_FORMAT).to_string());
    }
    parse_timestamp(raw, zone).map(|instant| zone.format(&instant))
}

fn parse_date_only(raw: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Rewrites a trailing `Z` designator as `+00:00`.
fn with_numeric_utc_offset(raw: &str) -> Cow<'_, str> {
    match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(stem) => Cow::Owned(format!("{}+00:00", stem)),
        None => Cow::Borrowed(raw),
    }
}
