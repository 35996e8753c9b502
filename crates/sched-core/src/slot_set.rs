//! Weekday-keyed sets of time slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::time_slot::TimeSlot;
use crate::weekday::Weekday;
use crate::weekday_slot::WeekdaySlot;

/// Canonical unordered form of a weekday slot list.
///
/// A weekday maps to its specific slots with no duplicates. A weekday present
/// with no specific slots means "all day". Serializes as an object keyed by
/// weekday name:
///
/// ```json
/// {"Monday": [{"start": "08:00", "end": "09:45"}], "Saturday": []}
/// ```
///
/// Decoding goes through [`WeekdaySlotSet::insert`], so duplicate and zero
/// slots in the input are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "BTreeMap<Weekday, Vec<TimeSlot>>")]
pub struct WeekdaySlotSet(BTreeMap<Weekday, Vec<TimeSlot>>);

impl WeekdaySlotSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `slots` added to `weekday`.
    ///
    /// Adding no slots marks the weekday as all-day.
    #[must_use]
    pub fn add(mut self, weekday: Weekday, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.insert(weekday, slots);
        self
    }

    #[must_use]
    pub fn add_time_slot(self, weekday: Weekday, start: Clock, end: Clock) -> Self {
        self.add(weekday, [TimeSlot::new(start, end)])
    }

    /// In-place form of [`WeekdaySlotSet::add`], skipping duplicates.
    pub fn insert(&mut self, weekday: Weekday, slots: impl IntoIterator<Item = TimeSlot>) {
        let day_slots = self.0.entry(weekday).or_default();
        for slot in slots {
            if slot.is_zero() || day_slots.contains(&slot) {
                continue;
            }
            day_slots.push(slot);
        }
    }

    #[must_use]
    pub fn contains(&self, weekday: Weekday, slot: &TimeSlot) -> bool {
        self.0.get(&weekday).is_some_and(|slots| slots.contains(slot))
    }

    /// Specific slots for `weekday`.
    ///
    /// `None` when the weekday was never added, an empty slice when it was
    /// added as all-day.
    #[must_use]
    pub fn time_slots(&self, weekday: Weekday) -> Option<&[TimeSlot]> {
        self.0.get(&weekday).map(Vec::as_slice)
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.keys().copied()
    }

    /// Number of weekdays present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens into weekday slots sorted by canonical key.
    ///
    /// Weekdays without specific slots become a single all-day slot.
    #[must_use]
    pub fn to_weekday_slots(&self) -> Vec<WeekdaySlot> {
        let mut flattened = Vec::new();
        for (&weekday, slots) in &self.0 {
            let before = flattened.len();
            flattened.extend(
                slots
                    .iter()
                    .filter(|slot| !slot.is_zero())
                    .map(|&slot| WeekdaySlot::new(weekday, slot)),
            );
            if flattened.len() == before {
                flattened.push(WeekdaySlot::all_day(weekday));
            }
        }
        flattened.sort();
        flattened
    }
}

impl From<BTreeMap<Weekday, Vec<TimeSlot>>> for WeekdaySlotSet {
    fn from(raw: BTreeMap<Weekday, Vec<TimeSlot>>) -> Self {
        let mut set = Self::new();
        for (weekday, slots) in raw {
            set.insert(weekday, slots);
        }
        set
    }
}

impl Serialize for WeekdaySlotSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl FromIterator<WeekdaySlot> for WeekdaySlotSet {
    fn from_iter<I: IntoIterator<Item = WeekdaySlot>>(iter: I) -> Self {
        let mut set = Self::new();
        for slot in iter {
            set.insert(slot.weekday(), [slot.slot()]);
        }
        set
    }
}
