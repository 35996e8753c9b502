//! Expansion of schedules into concrete per-date slot listings.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::schedule::Schedule;
use crate::time_slot::TimeSlot;
use crate::weekday_slot::{WeekdaySlot, unique_weekday_slots};

/// A collection of schedules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(default)]
    schedules: Vec<Schedule>,
}

/// Weekday slots that apply on each date, produced by [`Calendar::by_date`].
///
/// Every date in an expanded range has an entry, even when no slot falls on
/// its weekday. Slot lists are deduplicated and sorted by canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CalendarMap(BTreeMap<Date, Vec<WeekdaySlot>>);

impl Calendar {
    #[must_use]
    pub fn new(schedules: impl IntoIterator<Item = Schedule>) -> Self {
        Self::default().with_schedules(schedules)
    }

    /// Returns the calendar with `schedules` appended.
    #[must_use]
    pub fn with_schedules(mut self, schedules: impl IntoIterator<Item = Schedule>) -> Self {
        self.schedules.extend(schedules);
        self
    }

    #[must_use]
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Expands every schedule day by day, up to and including `limit`.
    ///
    /// Open-ended schedules and schedules ending after `limit` are cut off at
    /// `limit`. Schedules without a start date are skipped. Cost is linear in
    /// the total number of expanded days.
    #[must_use]
    pub fn by_date(&self, limit: Date) -> CalendarMap {
        let mut days: BTreeMap<Date, Vec<WeekdaySlot>> = BTreeMap::new();

        for (index, schedule) in self.schedules.iter().enumerate() {
            let range = schedule.date_range;
            let Some(first) = range.from().naive() else {
                tracing::debug!(index, "skipping schedule without a start date");
                continue;
            };
            let last = match range.until() {
                Some(until) if until <= limit => until,
                _ => limit,
            };
            let Some(last) = last.naive() else {
                continue;
            };

            let mut by_weekday: [Vec<WeekdaySlot>; 7] = Default::default();
            for slot in &schedule.time_slots {
                by_weekday[usize::from(slot.weekday().index())].push(*slot);
            }

            for day in first.iter_days().take_while(|day| *day <= last) {
                let date = Date::from_naive(day);
                let weekday = date.weekday();
                days.entry(date)
                    .or_default()
                    .extend_from_slice(&by_weekday[usize::from(weekday.index())]);
            }
        }

        for slots in days.values_mut() {
            *slots = unique_weekday_slots(slots);
        }

        tracing::debug!(
            schedules = self.schedules.len(),
            %limit,
            days = days.len(),
            "expanded calendar"
        );
        CalendarMap(days)
    }
}

impl CalendarMap {
    #[must_use]
    pub fn has_date(&self, date: Date) -> bool {
        self.0.contains_key(&date)
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<&[WeekdaySlot]> {
        self.0.get(&date).map(Vec::as_slice)
    }

    /// Time windows on `date`, empty when the date was not expanded.
    #[must_use]
    pub fn time_slots(&self, date: Date) -> Vec<TimeSlot> {
        self.get(date)
            .unwrap_or_default()
            .iter()
            .map(WeekdaySlot::slot)
            .collect()
    }

    /// Every slot of every date, in date order.
    #[must_use]
    pub fn all_slots(&self) -> Vec<WeekdaySlot> {
        self.0.values().flatten().copied().collect()
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Date, Vec<WeekdaySlot>> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CalendarMap {
    type Item = (&'a Date, &'a Vec<WeekdaySlot>);
    type IntoIter = btree_map::Iter<'a, Date, Vec<WeekdaySlot>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
