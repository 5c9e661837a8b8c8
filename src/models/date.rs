//! Calendar date model
//!
//! A year/month/day value with strict `YYYY-MM-DD` parsing. Month and day
//! are range checked, but there is no days-in-month or leap-year check:
//! "2023-02-30" is a valid `CalendarDate`.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Separator between the date components
pub const DATE_DELIMITER: char = '-';

/// A validated calendar date, ordered by (year, month, day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Earliest representable date
    pub const MIN: CalendarDate = CalendarDate {
        year: i32::MIN,
        month: 1,
        day: 1,
    };

    /// Latest representable date
    pub const MAX: CalendarDate = CalendarDate {
        year: i32::MAX,
        month: 12,
        day: 31,
    };

    /// Create a date, checking month and day bounds
    pub fn new(year: i32, month: u32, day: u32) -> LedgerResult<Self> {
        check_range(i64::from(month), i64::from(day))?;
        Ok(Self { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` string
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Format` unless the text has exactly three
    /// `-`-separated integer components, and `LedgerError::Range` if the
    /// month is outside 1..=12 or the day outside 1..=31.
    pub fn parse(text: &str) -> LedgerResult<Self> {
        let parts = text
            .split(DATE_DELIMITER)
            .map(|segment| {
                segment.parse::<i32>().map_err(|e| {
                    LedgerError::Format(format!(
                        "invalid number '{}' in date '{}': {}",
                        segment, text, e
                    ))
                })
            })
            .collect::<LedgerResult<Vec<i32>>>()?;

        let [year, month, day] = parts[..] else {
            return Err(LedgerError::Format(format!(
                "invalid date '{}', expected YYYY-MM-DD",
                text
            )));
        };

        check_range(i64::from(month), i64::from(day))?;

        // Both values are within 1..=31 after the range check
        Ok(Self {
            year,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

fn check_range(month: i64, day: i64) -> LedgerResult<()> {
    if !(1..=12).contains(&month) {
        return Err(LedgerError::Range(format!(
            "invalid month value {}, expected 1-12",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(LedgerError::Range(format!(
            "invalid day value {}, expected 1-31",
            day
        )));
    }
    Ok(())
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let d = CalendarDate::parse("2023-05-15").unwrap();
        assert_eq!(d.year(), 2023);
        assert_eq!(d.month(), 5);
        assert_eq!(d.day(), 15);
        assert_eq!(d.to_string(), "2023-05-15");
    }

    #[test]
    fn test_parse_unpadded_components() {
        let d = CalendarDate::parse("2024-1-9").unwrap();
        assert_eq!(d, date(2024, 1, 9));
        assert_eq!(d.to_string(), "2024-01-09");
    }

    #[test]
    fn test_year_is_not_padded() {
        assert_eq!(date(7, 3, 4).to_string(), "7-03-04");
        assert_eq!(date(123456, 12, 31).to_string(), "123456-12-31");
    }

    #[test]
    fn test_rejects_wrong_delimiter() {
        let err = CalendarDate::parse("2023/10/25").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = CalendarDate::parse("not-a-date").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_rejects_empty_and_extra_components() {
        assert!(CalendarDate::parse("").unwrap_err().is_format());
        assert!(CalendarDate::parse("2023--01").unwrap_err().is_format());
        assert!(CalendarDate::parse("2023-01-01-01").unwrap_err().is_format());
        assert!(CalendarDate::parse("2023-01").unwrap_err().is_format());
        // A leading minus sign produces an empty first component
        assert!(CalendarDate::parse("-2023-01-01").unwrap_err().is_format());
    }

    #[test]
    fn test_rejects_overflowing_component() {
        let err = CalendarDate::parse("99999999999-01-01").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_rejects_out_of_range_month_and_day() {
        let err = CalendarDate::parse("2023-13-01").unwrap_err();
        assert!(err.is_range());
        assert!(err.to_string().contains("month"));

        let err = CalendarDate::parse("2023-00-10").unwrap_err();
        assert!(err.is_range());

        let err = CalendarDate::parse("2023-01-32").unwrap_err();
        assert!(err.is_range());
        assert!(err.to_string().contains("day"));

        assert!(CalendarDate::new(2023, 1, 0).unwrap_err().is_range());
    }

    #[test]
    fn test_no_calendar_validity_check() {
        let d = CalendarDate::parse("2023-02-30").unwrap();
        assert_eq!(d.to_string(), "2023-02-30");
    }

    #[test]
    fn test_ordering() {
        let d1 = date(2023, 10, 25);
        let d2 = date(2023, 10, 26);
        let d3 = date(2023, 10, 25);
        assert!(d1 < d2);
        assert!(d2 > d1);
        assert_eq!(d1, d3);
        assert_ne!(d1, d2);
        assert!(date(2022, 12, 31) < date(2023, 1, 1));
        assert!(date(2023, 1, 31) < date(2023, 2, 1));
        assert!(CalendarDate::MIN < date(-5000, 1, 1));
        assert!(CalendarDate::MAX > date(99999, 12, 31));
    }

    #[test]
    fn test_round_trip_over_all_month_day_pairs() {
        for year in [0, 1, 1999, 2023, 10000] {
            for month in 1..=12 {
                for day in 1..=31 {
                    let d = date(year, month, day);
                    assert_eq!(CalendarDate::parse(&d.to_string()).unwrap(), d);
                }
            }
        }
    }

    #[test]
    fn test_chrono_conversion() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let d = CalendarDate::from(naive);
        assert_eq!(d, date(2024, 2, 29));
    }

    #[test]
    fn test_serde_as_string() {
        let d = date(2023, 10, 5);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2023-10-05\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2023-13-05\"").is_err());
    }
}
