//! Date ranges paired with recurring weekday slots.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::date_range::DateRange;
use crate::weekday_slot::{WeekdaySlot, merge_weekday_slots};

/// A weekly pattern of [`WeekdaySlot`]s that applies during a [`DateRange`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub date_range: DateRange,
    #[serde(default)]
    pub time_slots: Vec<WeekdaySlot>,
}

impl Schedule {
    #[must_use]
    pub fn new(date_range: DateRange, time_slots: impl IntoIterator<Item = WeekdaySlot>) -> Self {
        Self {
            date_range,
            time_slots: time_slots.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_date_range(self, date_range: DateRange) -> Self {
        Self { date_range, ..self }
    }

    #[must_use]
    pub fn with_from(self, from: Date) -> Self {
        let date_range = self.date_range.with_from(from);
        self.with_date_range(date_range)
    }

    #[must_use]
    pub fn with_until(self, until: Date) -> Self {
        let date_range = self.date_range.with_until(until);
        self.with_date_range(date_range)
    }

    /// Returns the schedule with `slots` appended to its existing slots.
    #[must_use]
    pub fn with_time_slots(mut self, slots: impl IntoIterator<Item = WeekdaySlot>) -> Self {
        self.time_slots.extend(slots);
        self
    }

    #[must_use]
    pub const fn from(&self) -> Date {
        self.date_range.from()
    }

    #[must_use]
    pub const fn until(&self) -> Option<Date> {
        self.date_range.until()
    }

    /// Nothing is on the schedule: no days in range, or no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.date_range.has_days() || !self.has_time_slots()
    }

    #[must_use]
    pub fn has_time_slots(&self) -> bool {
        !self.time_slots.is_empty()
    }

    /// Folds `others` into this schedule, narrowing both dates and slots.
    ///
    /// Intended for a parent schedule merged with a narrower sub-schedule.
    /// Date ranges intersect (Jan 1-30 with Jan 15-Feb 15 is Jan 15-30). Slots
    /// survive only when every schedule has them, except that an all-day slot
    /// yields to specific slots on the same weekday:
    ///
    /// `Mon 7-8, Tue 8-9, Wed` merged with `Mon 7-8, Tue 6-7, Wed 7-8` is
    /// `Mon 7-8, Wed 7-8`.
    ///
    /// The fold stops early once the date range becomes zero (slots are
    /// cleared) or once no slots remain (the date range computed so far is
    /// kept).
    #[must_use]
    pub fn merge(&self, others: &[Self]) -> Self {
        let mut merged = self.clone();

        for (index, other) in others.iter().enumerate() {
            merged.date_range = merged.date_range.merge(&other.date_range);
            if merged.date_range.is_zero() {
                tracing::debug!(index, "schedule merge: date ranges do not intersect");
                merged.time_slots.clear();
                return merged;
            }

            merged.time_slots = merge_weekday_slots(&merged.time_slots, &other.time_slots);
            if merged.time_slots.is_empty() {
                tracing::debug!(index, "schedule merge: no time slots in common");
                return merged;
            }
        }

        merged
    }
}
