// UTC offset parsing and rendering

use chrono::FixedOffset;

use super::constants::{MAX_OFFSET_SECONDS, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{Result, TimeError};

/// Build a FixedOffset from seconds east of UTC
///
/// Rejects anything of 24 hours or more in either direction.
pub fn offset_from_seconds(seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(seconds).ok_or_else(|| {
        TimeError::TimezoneUnavailable(format!(
            "offset of {} seconds exceeds {} seconds",
            seconds, MAX_OFFSET_SECONDS
        ))
    })
}

/// Parse a UTC offset
///
/// Accepted forms: `Z`, `UTC`, `+HH:MM`, `-HH:MM`, `+HHMM`, `-HHMM`, `+HH`, `-HH`.
///
/// # Example
/// ```text
/// let offset = parse_utc_offset("+02:00")?;
/// assert_eq!(offset.local_minus_utc(), 7200);
/// ```
pub fn parse_utc_offset(input: &str) -> Result<FixedOffset> {
    let text = input.trim();
    let invalid = || TimeError::TimezoneUnavailable(format!("unrecognized UTC offset '{}'", input));

    if text.eq_ignore_ascii_case("z") || text.eq_ignore_ascii_case("utc") {
        return offset_from_seconds(0);
    }

    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return Err(invalid()),
    };
    if !rest.is_ascii() {
        return Err(invalid());
    }

    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => rest.split_at(2),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return Err(invalid()),
    };

    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= SECONDS_PER_MINUTE {
        return Err(invalid());
    }

    offset_from_seconds(sign * (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE))
}

/// Render an offset as `+HH:MM` / `-HH:MM`
///
/// Sub-minute offsets are truncated to the minute.
pub fn format_utc_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!(
        "{}{:02}:{:02}",
        sign,
        abs / SECONDS_PER_HOUR,
        (abs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    )
}
