//! Day-of-week values with English-name serialization.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::error::ScheduleError;

/// A day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days in index order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps any integer onto a day, rolling over every seven days.
    ///
    /// `7` is Sunday, `8` is Monday and `-1` is Saturday.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        let wrapped = usize::try_from(index.rem_euclid(7)).unwrap_or_default();
        Self::ALL[wrapped]
    }

    /// Sunday is 0, Saturday is 6.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// The following day, Saturday wraps to Sunday.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sunday => Self::Monday,
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday => Self::Sunday,
        }
    }

    /// Weekday of the local system date.
    #[must_use]
    pub fn today() -> Self {
        Date::today().weekday()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::from_index(i64::from(day.num_days_from_sunday()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    /// Case-insensitive match on the full English day name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScheduleError::InvalidDayName {
                name: s.to_string(),
            })
    }
}

impl Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct WeekdayVisitor;

impl Visitor<'_> for WeekdayVisitor {
    type Value = Weekday;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a weekday name or a day index")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Weekday::from_index(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let v = i64::try_from(v % 7).map_err(E::custom)?;
        Ok(Weekday::from_index(v))
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(WeekdayVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: Weekday = "monday".parse().unwrap();
        let upper: Weekday = "MONDAY".parse().unwrap();
        let title: Weekday = "Monday".parse().unwrap();
        assert_eq!(lower, Weekday::Monday);
        assert_eq!(upper, Weekday::Monday);
        assert_eq!(title, Weekday::Monday);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "Mon".parse::<Weekday>().unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidDayName {
                name: "Mon".to_string()
            }
        );
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_display_roundtrip_all_days() {
        for day in Weekday::ALL {
            let parsed: Weekday = day.to_string().parse().expect("should parse");
            assert_eq!(parsed, day);
            assert_eq!(Weekday::from_index(i64::from(day.index())), day);
        }
    }

    #[test]
    fn test_next_wraps_saturday() {
        assert_eq!(Weekday::Monday.next(), Weekday::Tuesday);
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
    }

    #[test]
    fn test_from_index_rolls_over() {
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(8), Weekday::Monday);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
    }

    #[test]
    fn test_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn test_json_uses_names() {
        let json = serde_json::to_string(&Weekday::Wednesday).unwrap();
        assert_eq!(json, "\"Wednesday\"");
        let parsed: Weekday = serde_json::from_str("\"wednesday\"").unwrap();
        assert_eq!(parsed, Weekday::Wednesday);
    }

    #[test]
    fn test_json_accepts_rolling_integers() {
        let cases = [
            ("0", Weekday::Sunday),
            ("6", Weekday::Saturday),
            ("7", Weekday::Sunday),
            ("8", Weekday::Monday),
        ];
        for (json, expected) in cases {
            let parsed: Weekday = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected, "decoding {json}");
        }
    }

    #[test]
    fn test_json_rejects_bad_names() {
        let result: Result<Weekday, _> = serde_json::from_str("\"Someday\"");
        assert!(result.is_err());
    }
}
