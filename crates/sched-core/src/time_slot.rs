//! Windows of time within a single day.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// A start/end pair of clock values.
///
/// The zero slot (00:00-00:00) means "all day". An end before the start means
/// the window runs past midnight into the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: Clock,
    pub end: Clock,
}

impl TimeSlot {
    /// The all-day slot.
    pub const ALL_DAY: Self = Self {
        start: Clock::MIDNIGHT,
        end: Clock::MIDNIGHT,
    };

    #[must_use]
    pub const fn new(start: Clock, end: Clock) -> Self {
        Self { start, end }
    }

    /// Parses `HH:MM-HH:MM`; anything without exactly one `-` is the zero slot.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s.split_once('-') {
            Some((start, end)) if !end.contains('-') => {
                Self::new(Clock::parse_lenient(start), Clock::parse_lenient(end))
            }
            _ => Self::ALL_DAY,
        }
    }

    /// True only when both start and end are 00:00.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.start.is_zero() && self.end.is_zero()
    }

    /// End minus start in minutes. Negative for slots that cross midnight.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        i64::from(self.end.minutes()) - i64::from(self.start.minutes())
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes())
    }

    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_and_from_string() {
        let slot = TimeSlot::new(Clock::new(8, 0), Clock::new(10, 0));
        assert_eq!(slot.to_string(), "08:00-10:00");
        assert_eq!(TimeSlot::parse_lenient("08:00-10:00"), slot);
    }

    #[test]
    fn test_lenient_parse_falls_back_to_zero() {
        assert!(TimeSlot::parse_lenient("invalid string").is_zero());
        assert!(TimeSlot::parse_lenient("").is_zero());
        assert!(TimeSlot::parse_lenient("08:00-09:00-10:00").is_zero());
    }

    #[test]
    fn test_minutes_keep_sign() {
        assert_eq!(TimeSlot::parse_lenient("01:30-02:15").minutes(), 45);
        assert_eq!(TimeSlot::parse_lenient("23:30-00:30").minutes(), -1380);
        assert_eq!(
            TimeSlot::parse_lenient("01:30-02:15").duration(),
            Duration::minutes(45)
        );
    }

    #[test]
    fn test_crosses_midnight() {
        assert!(TimeSlot::parse_lenient("23:30-00:30").crosses_midnight());
        assert!(!TimeSlot::parse_lenient("06:00-07:00").crosses_midnight());
        assert!(!TimeSlot::ALL_DAY.crosses_midnight());
    }

    #[test]
    fn test_json_shape() {
        let slot = TimeSlot::parse_lenient("08:00-09:45");
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"start":"08:00","end":"09:45"}"#);
        let parsed: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }
}
