//! Calendar dates without a time of day.
//!
//! [`Date`] wraps a `chrono::NaiveDate` and adds a zero value that stands for
//! "not set". The zero date orders before every real date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::weekday::Weekday;

/// `YYYY-MM-DD`, the only accepted text layout.
const YMD_FORMAT: &str = "%Y-%m-%d";

/// Length of a `YYYY-MM-DD` string.
const YMD_LEN: usize = 10;

/// A proleptic Gregorian calendar day, or the zero date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Date(Option<NaiveDate>);

impl Date {
    /// The unset date.
    #[must_use]
    pub const fn zero() -> Self {
        Self(None)
    }

    /// Builds a date, normalizing overflowing months and days.
    ///
    /// Month 13 rolls into January of the next year and day 99 rolls into a
    /// later month, so the result is always a real date. Values chrono cannot
    /// represent produce the zero date.
    #[must_use]
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let (Ok(year), Ok(month)) = (
            i32::try_from(months.div_euclid(12)),
            u32::try_from(months.rem_euclid(12) + 1),
        ) else {
            return Self::zero();
        };

        Self(
            NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(|first| first.checked_add_signed(Duration::days(i64::from(day) - 1))),
        )
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    /// The local system date.
    #[must_use]
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Parses `YYYY-MM-DD`, ignoring anything after the first ten characters.
    ///
    /// RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS` strings therefore parse to
    /// their date component.
    pub fn parse(s: &str) -> Result<Self, ScheduleError> {
        let invalid = || ScheduleError::InvalidDateString {
            value: s.to_string(),
        };
        let head = s.get(..YMD_LEN).ok_or_else(invalid)?;
        if !is_ymd_shape(head) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(head, YMD_FORMAT)
            .map(Self::from_naive)
            .map_err(|_| invalid())
    }

    #[must_use]
    pub const fn naive(self) -> Option<NaiveDate> {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0.is_none()
    }

    /// Year, or 0 for the zero date.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.map_or(0, |d| d.year())
    }

    /// Month 1-12, or 0 for the zero date.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.map_or(0, |d| d.month())
    }

    /// Day of month, or 0 for the zero date.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.map_or(0, |d| d.day())
    }

    /// Day of the week. The zero date reports Sunday.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.map_or(Weekday::Sunday, |d| d.weekday().into())
    }

    /// The following day. The zero date has no successor and stays zero.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.and_then(|d| d.succ_opt()))
    }

    /// Adds calendar units with the same overflow rules as [`Date::new`].
    #[must_use]
    pub fn add_date(self, years: i32, months: i32, days: i32) -> Self {
        let Some(date) = self.0 else {
            return self;
        };
        let month = i32::try_from(date.month()).unwrap_or_default();
        let day = i32::try_from(date.day()).unwrap_or_default();
        Self::new(
            date.year().saturating_add(years),
            month.saturating_add(months),
            day.saturating_add(days),
        )
    }

    /// Signed whole days from `other` to `self`.
    ///
    /// `today.days_since(yesterday)` is 1. Returns 0 when either side is zero.
    #[must_use]
    pub fn days_since(self, other: Self) -> i64 {
        match (self.0, other.0) {
            (Some(a), Some(b)) => (a - b).num_days(),
            _ => 0,
        }
    }
}

/// `NNNN-NN-NN`. chrono alone accepts unpadded months and days.
fn is_ymd_shape(s: &str) -> bool {
    s.len() == YMD_LEN
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Earlier of two optional dates, where `None` means "absent" rather than
/// "earliest".
#[must_use]
pub fn min_date(a: Option<Date>, b: Option<Date>) -> Option<Date> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Later of two optional dates, where `None` means "absent".
#[must_use]
pub fn max_date(a: Option<Date>, b: Option<Date>) -> Option<Date> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl FromStr for Date {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `YYYY-MM-DD`, or an empty string for the zero date.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(YMD_FORMAT)),
            None => Ok(()),
        }
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let Some(s) = Option::<String>::deserialize(deserializer)? else {
            return Ok(Self::zero());
        };
        if s.is_empty() {
            return Ok(Self::zero());
        }
        if s.len() < YMD_LEN {
            return Err(serde::de::Error::custom(ScheduleError::InvalidDateString {
                value: s,
            }));
        }
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
