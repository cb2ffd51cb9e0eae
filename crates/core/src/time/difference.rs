//! Calendar difference between two timestamps, rendered for humans.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use super::error::TimeError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a datetime, normalizing to naive UTC.
///
/// Accepts RFC 3339 (any offset), `YYYY-MM-DD HH:MM[:SS[.fff]]` with a space
/// or `T`, a bare `YYYY-MM-DD`, and `now`. Inputs without an offset are UTC.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, TimeError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("now") {
        return Ok(Utc::now().naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| TimeError::Parse(input.to_string()))
}

/// Absolute calendar difference between two timestamps.
///
/// Days are split into whole weeks plus the remaining days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarDiff {
    /// Whole years.
    pub years: u64,
    /// Whole months after years.
    pub months: u64,
    /// Whole weeks after months.
    pub weeks: u64,
    /// Days after weeks (0..7).
    pub days: u64,
    /// Hours (0..24).
    pub hours: u64,
    /// Minutes (0..60).
    pub minutes: u64,
    /// Seconds (0..60).
    pub seconds: u64,
}

impl CalendarDiff {
    /// Computes the difference between `a` and `b`, in either order.
    ///
    /// Fields are subtracted from the largest down with borrows. A day borrow
    /// adds the length of the month before the later timestamp's month, and
    /// keeps reaching further back while the day count is still negative.
    #[must_use]
    pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut borrow = i64::from(end.nanosecond() < start.nanosecond());
        let (seconds, borrow_next) = wrap(
            i64::from(end.second()) - i64::from(start.second()) - borrow,
            60,
        );
        borrow = borrow_next;
        let (minutes, borrow_next) = wrap(
            i64::from(end.minute()) - i64::from(start.minute()) - borrow,
            60,
        );
        borrow = borrow_next;
        let (hours, borrow_next) =
            wrap(i64::from(end.hour()) - i64::from(start.hour()) - borrow, 24);
        borrow = borrow_next;

        let mut days = i64::from(end.day()) - i64::from(start.day()) - borrow;
        let mut month_borrow = 0;
        let mut cursor = (end.year(), end.month());
        while days < 0 {
            cursor = previous_month(cursor);
            days += days_in_month(cursor);
            month_borrow += 1;
        }

        let mut months = i64::from(end.month()) - i64::from(start.month()) - month_borrow;
        let mut years = i64::from(end.year()) - i64::from(start.year());
        while months < 0 {
            months += 12;
            years -= 1;
        }

        let days = non_negative(days);
        Self {
            years: non_negative(years),
            months: non_negative(months),
            weeks: days / 7,
            days: days % 7,
            hours: non_negative(hours),
            minutes: non_negative(minutes),
            seconds: non_negative(seconds),
        }
    }

    /// Returns true when every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Nonzero components, largest first, e.g. `["2 years", "1 week"]`.
    #[must_use]
    pub fn units(&self) -> Vec<String> {
        [
            (self.years, "year"),
            (self.months, "month"),
            (self.weeks, "week"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| {
            let plural = if n > 1 { "s" } else { "" };
            format!("{n} {unit}{plural}")
        })
        .collect()
    }

    /// Renders the difference.
    ///
    /// Without `complete` only the largest nonzero unit is kept. With `past`
    /// the text ends in `" ago"`, or reads `"just now"` when there is no
    /// difference; otherwise a zero difference reads `"a moment"`.
    #[must_use]
    pub fn describe(&self, complete: bool, past: bool) -> String {
        let mut units = self.units();
        if !complete {
            units.truncate(1);
        }

        match (units.is_empty(), past) {
            (true, true) => "just now".to_string(),
            (true, false) => "a moment".to_string(),
            (false, true) => format!("{} ago", units.join(", ")),
            (false, false) => units.join(", "),
        }
    }
}

/// Describes the time between `t1` and `t2`, e.g. `"3 days ago"`.
///
/// # Example
///
/// ```
/// use webfuncs_core::time::time_difference;
///
/// let text = time_difference("2024-01-01 00:00:00", "2024-01-02 01:00:00", false, true).unwrap();
/// assert_eq!(text, "1 day ago");
/// ```
pub fn time_difference(
    t1: &str,
    t2: &str,
    complete: bool,
    past: bool,
) -> Result<String, TimeError> {
    let a = parse_datetime(t1)?;
    let b = parse_datetime(t2)?;
    Ok(CalendarDiff::between(a, b).describe(complete, past))
}

/// Brings `value` into `0..modulus`, returning it with the borrow taken.
fn wrap(value: i64, modulus: i64) -> (i64, i64) {
    if value < 0 {
        (value + modulus, 1)
    } else {
        (value, 0)
    }
}

fn previous_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn days_in_month((year, month): (i32, u32)) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days(),
        _ => 30,
    }
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
