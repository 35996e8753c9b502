//! Minute-of-day clock values.
//!
//! A [`Clock`] is a naive time of day with minute precision and no zone.
//! All arithmetic wraps around midnight.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes since midnight, always in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Clock(u16);

impl Clock {
    /// 00:00, also the zero value.
    pub const MIDNIGHT: Self = Self(0);

    /// Builds a clock from hours and minutes, wrapping into a single day.
    ///
    /// Negative values wrap backwards, so `Clock::new(-1, -1)` is 22:59.
    #[must_use]
    pub fn new(hour: i64, minute: i64) -> Self {
        Self::from_minutes(hour.saturating_mul(60).saturating_add(minute))
    }

    /// Builds a clock from a raw minute count, wrapping into a single day.
    #[must_use]
    pub fn from_minutes(minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
        Self(u16::try_from(wrapped).unwrap_or_default())
    }

    /// Parses `HH:MM`, returning [`Clock::MIDNIGHT`] when there is no `:`.
    ///
    /// Each component that fails to parse counts as zero and out of range
    /// components wrap, so `"25:30"` is 01:30 and `"00:90"` is 01:30.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        let mut parts = s.split(':');
        let (Some(hour), Some(minute)) = (parts.next(), parts.next()) else {
            return Self::MIDNIGHT;
        };
        Self::new(hour.parse().unwrap_or(0), minute.parse().unwrap_or(0))
    }

    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns a new clock moved forward by `minutes`, wrapping at midnight.
    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(i64::from(self.0) + minutes)
    }

    /// Returns a new clock moved backward by `minutes`, wrapping at midnight.
    #[must_use]
    pub fn sub_minutes(self, minutes: i64) -> Self {
        Self::from_minutes(i64::from(self.0) - minutes)
    }

    /// Offset from midnight as a duration.
    #[must_use]
    pub fn to_duration(self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for Clock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Midnight doubles as "unset" and is written as an empty string.
        if self.is_zero() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Clock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map_or(Self::MIDNIGHT, |s| Self::parse_lenient(&s)))
    }
}
