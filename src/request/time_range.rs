use chrono::{DateTime, NaiveDate, Utc};

use crate::request::ParamError;

/// Inclusive report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TimeRange {
    /// Range used when the request carries no time parameter: everything
    /// from the deployment's start date to today.
    pub fn defaults(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: Utc::now().date_naive(),
        }
    }

    /// Parse a `<start>,<end>` pair where each side is `null`, an epoch
    /// timestamp in milliseconds, or a `YYYY-MM-DD` date.
    pub fn parse(value: &str, default_start: NaiveDate) -> Result<Self, ParamError> {
        let cleaned: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
        let bounds: Vec<&str> = cleaned.split(',').collect();

        if bounds.len() != 2 {
            return Err(ParamError::InvalidTime(value.to_string()));
        }

        let start_date = match bounds[0] {
            "null" => default_start,
            bound => Self::parse_bound(bound)
                .ok_or_else(|| ParamError::InvalidTime(value.to_string()))?,
        };

        let end_date = match bounds[1] {
            "null" => Utc::now().date_naive(),
            bound => Self::parse_bound(bound)
                .ok_or_else(|| ParamError::InvalidTime(value.to_string()))?,
        };

        Ok(Self { start_date, end_date })
    }

    fn parse_bound(bound: &str) -> Option<NaiveDate> {
        if let Ok(millis) = bound.parse::<i64>() {
            return DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive());
        }

        NaiveDate::parse_from_str(bound, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::request::{ParamError, TimeRange};

    fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2005, 1, 1).unwrap()
    }

    #[test]
    pub fn test_parse_unix_millis() {
        let range = TimeRange::parse("0,86400000", default_start()).expect("Failed to parse time");

        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(range.end_date, NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
    }

    #[test]
    pub fn test_parse_dates() {
        let range =
            TimeRange::parse("2017-01-01,2017-06-30", default_start()).expect("Failed to parse time");

        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
        assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2017, 6, 30).unwrap());
    }

    #[test]
    pub fn test_parse_with_whitespace() {
        let range =
            TimeRange::parse(" 2017-01-01 , 2017-06-30 ", default_start()).expect("Failed to parse time");

        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
    }

    #[test]
    pub fn test_parse_null_start_uses_default() {
        let range = TimeRange::parse("null,2017-06-30", default_start()).expect("Failed to parse time");

        assert_eq!(range.start_date, default_start());
        assert_eq!(range.end_date, NaiveDate::from_ymd_opt(2017, 6, 30).unwrap());
    }

    #[test]
    pub fn test_parse_null_end_uses_today() {
        let range = TimeRange::parse("2017-01-01,null", default_start()).expect("Failed to parse time");

        assert_eq!(range.end_date, chrono::Utc::now().date_naive());
    }

    #[test]
    pub fn test_parse_wrong_arity() {
        match TimeRange::parse("2017-01-01", default_start()) {
            Err(ParamError::InvalidTime(_)) => {}
            _ => panic!(),
        }

        match TimeRange::parse("1,2,3", default_start()) {
            Err(ParamError::InvalidTime(_)) => {}
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_parse_garbage_bound() {
        match TimeRange::parse("soon,later", default_start()) {
            Err(ParamError::InvalidTime(_)) => {}
            _ => panic!(),
        }
    }
}
