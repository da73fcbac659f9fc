use crate::common::types::Timestamp;
use crate::error::{ResampleError, ResampleResult};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a textual timestamp into a [`Timestamp`]. Accepts RFC 3339, the
/// naive `YYYY-MM-DDTHH:MM:SS[.fff]` forms (`T` or space separated) and a bare
/// `YYYY-MM-DD` date (midnight).
pub fn parse_timestamp(arg: &str) -> ResampleResult<Timestamp> {
    let arg = arg.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(arg) {
        return Ok(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(arg, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    Err(ResampleError::InvalidTimestamp(format!(
        "the Date field must be a datetime value, got '{arg}'"
    )))
}

/// Suffix to milliseconds multiplier (order matters: longer suffixes first).
const UNITS: &[(&str, i64)] = &[
    ("ms", 1),
    ("s", 1_000),
    ("m", 60_000),
    ("h", 3_600_000),
    ("d", 86_400_000),
];

/// Parses a bucket width like `90s`, `5m`, `2h` or `1d`. A bare integer is
/// taken as seconds.
pub fn parse_bucket_width(arg: &str) -> ResampleResult<Duration> {
    let arg = arg.trim();
    for (suffix, millis) in UNITS {
        if let Some(num) = arg.strip_suffix(suffix) {
            return match num.parse::<i64>() {
                Ok(v) => Ok(Duration::milliseconds(v.saturating_mul(*millis))),
                Err(_) => Err(ResampleError::InvalidNumber(arg.to_string())),
            };
        }
    }
    match arg.parse::<i64>() {
        Ok(v) => Ok(Duration::seconds(v)),
        Err(_) => Err(ResampleError::InvalidNumber(arg.to_string())),
    }
}
