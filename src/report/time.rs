use std::fmt::Display;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

/// Reporting interval of a time dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeInterval {
    pub fn from_alias(alias: &str) -> Option<TimeInterval> {
        match alias {
            "hour" => Some(TimeInterval::Hour),
            "day" => Some(TimeInterval::Day),
            "week" => Some(TimeInterval::Week),
            "month" => Some(TimeInterval::Month),
            _ => None,
        }
    }

    /// Last moment (millisecond precision) of the interval identified by the
    /// provider's numeric dimension value: `YYYYMMDDHH`, `YYYYMMDD`,
    /// `YYYYWW` (Sunday-based week of year) or `YYYYMM`.
    pub fn end_of_value(&self, value: &str) -> Option<NaiveDateTime> {
        if !value.is_ascii() {
            return None;
        }

        match self {
            TimeInterval::Hour => {
                if value.len() != 10 {
                    return None;
                }
                let date = NaiveDate::parse_from_str(&value[..8], "%Y%m%d").ok()?;
                let hour: u32 = value[8..].parse().ok()?;
                let time = NaiveTime::from_hms_milli_opt(hour, 59, 59, 999)?;
                Some(date.and_time(time))
            }
            TimeInterval::Day => {
                if value.len() != 8 {
                    return None;
                }
                let date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()?;
                Some(date.and_time(end_of_day()))
            }
            TimeInterval::Week => {
                if value.len() != 6 {
                    return None;
                }
                let year: i32 = value[..4].parse().ok()?;
                let week: i64 = value[4..].parse().ok()?;
                if week == 0 || week > 54 {
                    return None;
                }
                // Week 01 is the Sunday-started week containing January 1.
                let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
                let back_to_sunday = jan_first.weekday().num_days_from_sunday() as i64;
                let week_one_start = jan_first - Duration::days(back_to_sunday);
                let start = week_one_start + Duration::days((week - 1) * 7);
                Some((start + Duration::days(6)).and_time(end_of_day()))
            }
            TimeInterval::Month => {
                if value.len() != 6 {
                    return None;
                }
                let year: i32 = value[..4].parse().ok()?;
                let month: u32 = value[4..].parse().ok()?;
                Some(last_day_of_month(year, month)?.and_time(end_of_day()))
            }
        }
    }

    /// Last moment of the interval containing `cursor`.
    fn end_containing(&self, cursor: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TimeInterval::Hour => {
                let time = NaiveTime::from_hms_milli_opt(cursor.time().hour(), 59, 59, 999)?;
                Some(cursor.date().and_time(time))
            }
            TimeInterval::Day => Some(cursor.date().and_time(end_of_day())),
            TimeInterval::Week => {
                let to_saturday = 6 - cursor.date().weekday().num_days_from_sunday() as i64;
                Some((cursor.date() + Duration::days(to_saturday)).and_time(end_of_day()))
            }
            TimeInterval::Month => {
                let date = cursor.date();
                Some(last_day_of_month(date.year(), date.month())?.and_time(end_of_day()))
            }
        }
    }

    fn advance(&self, cursor: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TimeInterval::Hour => cursor.checked_add_signed(Duration::hours(1)),
            TimeInterval::Day => cursor.checked_add_signed(Duration::days(1)),
            TimeInterval::Week => cursor.checked_add_signed(Duration::days(7)),
            TimeInterval::Month => cursor.checked_add_months(Months::new(1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TimeError {
    InvalidValue(String),
    UnresolvableLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeError::InvalidValue(value) => {
                write!(f, "invalid time dimension value: {}", value)
            }
            TimeError::UnresolvableLocalTime(value) => {
                write!(f, "local time does not exist in the reporting timezone: {}", value)
            }
        }
    }
}

/// Convert a provider time-dimension value to a timestamp string at the end
/// of its interval, rendered with the reporting timezone's UTC offset.
pub fn time_dimension_to_timestamp(
    interval: TimeInterval,
    value: &str,
    timezone: Tz,
) -> Result<String, TimeError> {
    let end = interval
        .end_of_value(value)
        .ok_or_else(|| TimeError::InvalidValue(value.to_string()))?;

    format_local(end, timezone)
}

/// Interval-end timestamps for every interval step from `start` to `end`
/// inclusive.
pub fn interval_series(
    interval: TimeInterval,
    start: NaiveDate,
    end: NaiveDate,
    timezone: Tz,
) -> Result<Vec<String>, TimeError> {
    let end_cursor = end.and_time(NaiveTime::default());
    let mut cursor = start.and_time(NaiveTime::default());
    let mut timestamps = Vec::new();

    while cursor <= end_cursor {
        let interval_end = interval
            .end_containing(cursor)
            .ok_or_else(|| TimeError::InvalidValue(cursor.to_string()))?;

        let timestamp = format_local(interval_end, timezone)?;
        if timestamps.last() != Some(&timestamp) {
            timestamps.push(timestamp);
        }

        cursor = interval
            .advance(cursor)
            .ok_or_else(|| TimeError::InvalidValue(cursor.to_string()))?;
    }

    Ok(timestamps)
}

pub(crate) fn format_local(local: NaiveDateTime, timezone: Tz) -> Result<String, TimeError> {
    let resolved = match timezone.from_local_datetime(&local) {
        chrono::LocalResult::Single(resolved) => resolved,
        // A DST fold has two valid offsets; take the earlier one.
        chrono::LocalResult::Ambiguous(earliest, _) => earliest,
        chrono::LocalResult::None => {
            return Err(TimeError::UnresolvableLocalTime(local.to_string()));
        }
    };

    Ok(resolved.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string())
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default()
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
