//! Inclusive date intervals with an optional open upper bound.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::date::{Date, max_date, min_date};
use crate::error::ScheduleError;

/// Day count reported for ranges without an end (`i32::MAX`, over 5.8
/// million years). Positive so that `day_count() > 0` still means "has days".
pub const INFINITE_DAYS: u32 = 2_147_483_647;

/// A set of consecutive days including both `from` and `until`.
///
/// From Jan 1 until Jan 1 is one day; from Jan 1 until Jan 2 is two. An
/// absent `until` means the range never ends and compares after every date.
/// Construction never fails; call [`DateRange::validate`] to check the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "validFrom")]
    from: Date,
    #[serde(
        rename = "validUntil",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_until"
    )]
    until: Option<Date>,
}

/// `null` and `""` both decode to an open end.
fn deserialize_until<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let until = Option::<Date>::deserialize(deserializer)?;
    Ok(until.filter(|date| !date.is_zero()))
}

impl DateRange {
    #[must_use]
    pub const fn new(from: Date, until: Option<Date>) -> Self {
        Self { from, until }
    }

    /// An open-ended range beginning at `from`.
    #[must_use]
    pub const fn starting(from: Date) -> Self {
        Self::new(from, None)
    }

    #[must_use]
    pub fn starting_today() -> Self {
        Self::starting(Date::today())
    }

    /// The empty range returned by merges that have no days in common.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Date::zero(), Some(Date::zero()))
    }

    #[must_use]
    pub const fn with_from(self, from: Date) -> Self {
        Self { from, ..self }
    }

    #[must_use]
    pub const fn with_until(self, until: Date) -> Self {
        Self {
            until: Some(until),
            ..self
        }
    }

    #[must_use]
    pub const fn without_until(self) -> Self {
        Self {
            until: None,
            ..self
        }
    }

    #[must_use]
    pub const fn from(&self) -> Date {
        self.from
    }

    #[must_use]
    pub const fn until(&self) -> Option<Date> {
        self.until
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.from.is_zero() {
            return Err(ScheduleError::FromRequired);
        }
        match self.until {
            Some(until) if !until.is_zero() && until < self.from => Err(ScheduleError::PastUntil),
            _ => Ok(()),
        }
    }

    /// True when `from` is unset and `until` is unset or zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.from.is_zero() && self.until.is_none_or(Date::is_zero)
    }

    #[must_use]
    pub fn contains_date(&self, date: Date) -> bool {
        self.from <= date && self.until.is_none_or(|until| date <= until)
    }

    /// Whether the two ranges share at least one day. Symmetric.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self == other {
            return true;
        }

        match (self.until, other.until) {
            (None, None) => true,
            (None, Some(until)) => until >= self.from,
            (Some(until), None) => until >= other.from,
            (Some(until), Some(other_until)) => {
                other.contains_date(self.from)
                    || other.contains_date(until)
                    || self.contains_date(other.from)
                    || self.contains_date(other_until)
            }
        }
    }

    /// Whether this range reaches outside `parent` on either side.
    #[must_use]
    pub fn exceeds(&self, parent: &Self) -> bool {
        if self.from < parent.from {
            return true;
        }
        let Some(parent_until) = parent.until else {
            return false;
        };
        self.until.is_none_or(|until| until > parent_until)
    }

    /// Intersection of two ranges, or [`DateRange::zero`] when they share no
    /// days.
    ///
    /// Jan 1-30 merged with Jan 15-forever is Jan 15-30.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if !self.overlaps(other) {
            tracing::trace!(a = %self, b = %other, "date ranges do not overlap");
            return Self::zero();
        }

        let from = max_date(Some(self.from), Some(other.from)).unwrap_or_default();
        let until = min_date(self.until, other.until);

        if until.is_some_and(|until| from > until) {
            return Self::zero();
        }

        Self::new(from, until)
    }

    /// Number of days in the range, [`INFINITE_DAYS`] when open-ended and 0
    /// when `from` is unset or `until` precedes it.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        if self.from.is_zero() {
            return 0;
        }
        let Some(until) = self.until else {
            return INFINITE_DAYS;
        };
        if until < self.from {
            return 0;
        }
        u32::try_from(until.days_since(self.from) + 1).unwrap_or(INFINITE_DAYS)
    }

    #[must_use]
    pub fn has_days(&self) -> bool {
        self.day_count() > 0
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until.filter(|until| !until.is_zero()) {
            Some(until) => write!(f, "from {} until {}", self.from, until),
            None => write!(f, "from {} until forever", self.from),
        }
    }
}
