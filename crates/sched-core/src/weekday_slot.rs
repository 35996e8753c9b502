//! Time slots scoped to a weekday, the unit of weekly recurrence.
//!
//! # Canonical key
//!
//! Every [`WeekdaySlot`] packs into a single integer:
//!
//! ```text
//! bits 22..25  weekday (Sunday = 0)
//! bits 11..22  start minute of day
//! bits  0..11  end minute of day
//! ```
//!
//! Minute-of-day values stay below 1440 < 2^11, so the packing is lossless.
//! The key defines equality, ordering and deduplication identity, and is what
//! gets persisted when an integer column is used.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::slot_set::WeekdaySlotSet;
use crate::time_slot::TimeSlot;
use crate::weekday::Weekday;

const MINUTE_BITS: u32 = 11;
const MINUTE_MASK: u32 = (1 << MINUTE_BITS) - 1;
const WEEKDAY_SHIFT: u32 = 2 * MINUTE_BITS;

/// A [`TimeSlot`] on a given [`Weekday`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekdaySlot {
    weekday: Weekday,
    #[serde(rename = "timeSlot")]
    slot: TimeSlot,
}

impl WeekdaySlot {
    #[must_use]
    pub const fn new(weekday: Weekday, slot: TimeSlot) -> Self {
        Self { weekday, slot }
    }

    /// The whole of `weekday`.
    #[must_use]
    pub const fn all_day(weekday: Weekday) -> Self {
        Self::new(weekday, TimeSlot::ALL_DAY)
    }

    /// Parses one of three shapes, never failing:
    ///
    /// - `"Monday 01:30-02:15"`
    /// - `"Monday"` (all day)
    /// - `"01:30-02:15"` (Sunday)
    ///
    /// Unrecognized weekday names fall back to Sunday and unrecognized
    /// windows to the all-day slot, so `"invalid string"` is the zero value.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.is_empty() {
            return Self::default();
        }

        if let Some((day, slot)) = s.split_once(' ') {
            if !slot.contains(' ') {
                return Self::new(day.parse().unwrap_or_default(), TimeSlot::parse_lenient(slot));
            }
        }

        if let Ok(day) = s.parse() {
            return Self::all_day(day);
        }

        Self::new(Weekday::Sunday, TimeSlot::parse_lenient(s))
    }

    /// Decodes a canonical key produced by [`WeekdaySlot::key`].
    #[must_use]
    pub fn from_key(key: u32) -> Self {
        let weekday = Weekday::from_index(i64::from(key >> WEEKDAY_SHIFT));
        let start = Clock::from_minutes(i64::from((key >> MINUTE_BITS) & MINUTE_MASK));
        let end = Clock::from_minutes(i64::from(key & MINUTE_MASK));
        Self::new(weekday, TimeSlot::new(start, end))
    }

    /// Packs the slot into its canonical integer key.
    #[must_use]
    pub fn key(&self) -> u32 {
        (u32::from(self.weekday.index()) << WEEKDAY_SHIFT)
            | (u32::from(self.start().minutes()) << MINUTE_BITS)
            | u32::from(self.end().minutes())
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    #[must_use]
    pub const fn start(&self) -> Clock {
        self.slot.start
    }

    #[must_use]
    pub const fn end(&self) -> Clock {
        self.slot.end
    }

    #[must_use]
    pub fn minutes(&self) -> i64 {
        self.slot.minutes()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.slot.duration()
    }

    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        self.slot.is_zero()
    }

    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.slot.crosses_midnight()
    }

    /// Whether two weekday slots share any time, including spill-over past
    /// midnight into the following day.
    ///
    /// The rules are written against the earlier-keyed slot, so the pair is
    /// sorted first and the result is the same in either argument order.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        let (s0, s1) = if self <= other {
            (self, other)
        } else {
            (other, self)
        };

        if s0.weekday == s1.weekday {
            return s1.start() < s0.end() || s0.crosses_midnight();
        }

        // Monday 23:30-00:30 against Tuesday 00:15-01:15
        if s0.crosses_midnight() && s1.weekday == s0.weekday.next() {
            return s1.start() < s0.end();
        }

        // Sunday 00:15-01:15 against Saturday 23:30-00:30
        if s0.weekday == Weekday::Sunday && s1.weekday == Weekday::Saturday {
            return s0.start() < s1.end() && s1.crosses_midnight();
        }

        false
    }
}

impl PartialEq for WeekdaySlot {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for WeekdaySlot {}

impl Hash for WeekdaySlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for WeekdaySlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeekdaySlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for WeekdaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.slot)
    }
}

/// Returns a sorted copy, leaving the input untouched.
#[must_use]
pub fn sort_weekday_slots(slots: &[WeekdaySlot]) -> Vec<WeekdaySlot> {
    let mut sorted = slots.to_vec();
    sorted.sort();
    sorted
}

/// Sorts and removes duplicates by canonicalizing through [`WeekdaySlotSet`].
///
/// An all-day entry is dropped for any weekday that also has specific slots.
#[must_use]
pub fn unique_weekday_slots(slots: &[WeekdaySlot]) -> Vec<WeekdaySlot> {
    if slots.is_empty() {
        return Vec::new();
    }
    slots
        .iter()
        .copied()
        .collect::<WeekdaySlotSet>()
        .to_weekday_slots()
}

#[must_use]
pub fn slot_keys(slots: &[WeekdaySlot]) -> Vec<u32> {
    slots.iter().map(WeekdaySlot::key).collect()
}

/// Intersects two slot lists, with all-day acting as a wildcard.
///
/// For each weekday present in both inputs:
/// - an all-day slot on one side yields to the specific slots on the other
/// - specific slots survive only when both sides have the identical slot
///
/// Slots whose weekday appears in only one input are dropped.
#[must_use]
pub fn merge_weekday_slots(a: &[WeekdaySlot], b: &[WeekdaySlot]) -> Vec<WeekdaySlot> {
    let a = unique_weekday_slots(a);
    let b = unique_weekday_slots(b);

    let mut merged = Vec::new();
    for a_slot in &a {
        for b_slot in b.iter().filter(|s| s.weekday() == a_slot.weekday()) {
            match (a_slot.is_all_day(), b_slot.is_all_day()) {
                (true, false) => merged.push(*b_slot),
                (false, true) => merged.push(*a_slot),
                _ if a_slot == b_slot => merged.push(*b_slot),
                _ => {}
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wts(s: &str) -> WeekdaySlot {
        WeekdaySlot::parse_lenient(s)
    }

    #[test]
    fn test_accessors_and_text_roundtrip() {
        let cases = [
            ("Sunday 00:00-00:00", Weekday::Sunday, "00:00", 0),
            ("Monday 00:00-00:00", Weekday::Monday, "00:00", 0),
            ("Tuesday 01:30-02:15", Weekday::Tuesday, "01:30", 45),
        ];
        for (text, day, start, minutes) in cases {
            let start = Clock::parse_lenient(start);
            let end = start.add_minutes(minutes);
            let slot = WeekdaySlot::new(day, TimeSlot::new(start, end));

            assert_eq!(slot.weekday(), day);
            assert_eq!(slot.start(), start);
            assert_eq!(slot.end(), end);
            assert_eq!(slot.minutes(), minutes);
            assert_eq!(slot.duration(), Duration::minutes(minutes));
            assert_eq!(slot.to_string(), text);
            assert_eq!(wts(text), slot);
            assert_eq!(WeekdaySlot::from_key(slot.key()), slot);
        }
    }

    #[test]
    fn test_zero_value() {
        let zeros = [
            ("default", WeekdaySlot::default()),
            ("new", WeekdaySlot::new(Weekday::Sunday, TimeSlot::parse_lenient("00:00-00:00"))),
            ("from string", wts("")),
            ("from key", WeekdaySlot::from_key(0)),
            ("garbage", wts("invalid string")),
        ];
        for (name, slot) in zeros {
            assert_eq!(slot.key(), 0, "{name}");
            assert_eq!(slot.weekday(), Weekday::Sunday, "{name}");
            assert_eq!(slot.start(), Clock::MIDNIGHT, "{name}");
            assert_eq!(slot.end(), Clock::MIDNIGHT, "{name}");
            assert_eq!(slot.minutes(), 0, "{name}");
            assert!(slot.is_all_day(), "{name}");
        }
    }

    #[test]
    fn test_parse_shapes() {
        let cases = [
            ("Sunday 00:00-00:00", Weekday::Sunday, "00:00-00:00"),
            ("Sunday", Weekday::Sunday, "00:00-00:00"),
            ("00:00-00:00", Weekday::Sunday, "00:00-00:00"),
            ("Monday 01:30-02:15", Weekday::Monday, "01:30-02:15"),
            ("monday", Weekday::Monday, "00:00-00:00"),
            ("01:30-02:15", Weekday::Sunday, "01:30-02:15"),
        ];
        for (input, day, slot) in cases {
            let expected = WeekdaySlot::new(day, TimeSlot::parse_lenient(slot));
            assert_eq!(wts(input), expected, "{input}");
        }
    }

    #[test]
    fn test_key_roundtrip_across_the_day() {
        for day in Weekday::ALL {
            for start in (0..1440).step_by(97) {
                for end in [0, 1, start, 719, 1439] {
                    let slot = WeekdaySlot::new(
                        day,
                        TimeSlot::new(Clock::from_minutes(start), Clock::from_minutes(end)),
                    );
                    assert_eq!(WeekdaySlot::from_key(slot.key()), slot, "{slot}");
                }
            }
        }
    }

    #[test]
    fn test_key_layout() {
        let slot = wts("Saturday 23:59-23:59");
        assert_eq!(slot.key(), (6 << 22) | (1439 << 11) | 1439);
        assert_eq!(wts("Monday").key(), 1 << 22);
    }

    #[test]
    fn test_sort_orders_by_weekday_start_end() {
        let wts1 = wts("Sunday 08:00-08:30");
        let wts2 = wts("Sunday 08:00-08:45");
        let wts3 = wts("Sunday 08:15-08:30");
        let wts4 = wts("Sunday 08:15-08:45");
        let wts5 = wts("Monday 00:00-08:30");

        assert!(wts1.key() < wts2.key());
        assert!(wts2.key() < wts3.key());
        assert!(wts3.key() < wts4.key());
        assert!(wts4.key() < wts5.key());

        let unsorted = vec![wts5, wts3, wts1, wts2, wts4, wts3];
        let sorted = sort_weekday_slots(&unsorted);
        assert_eq!(sorted, vec![wts1, wts2, wts3, wts3, wts4, wts5]);
        assert_ne!(sorted, unsorted, "input must not be reordered");
        assert_eq!(
            unique_weekday_slots(&unsorted),
            vec![wts1, wts2, wts3, wts4, wts5]
        );
        assert_eq!(
            slot_keys(&[wts1, wts5]),
            vec![wts1.key(), wts5.key()]
        );
    }

    #[test]
    fn test_overlap_same_day() {
        assert!(wts("Monday 06:00-07:00").overlaps_with(&wts("Monday 06:30-07:30")));
        assert!(!wts("Monday 06:00-07:00").overlaps_with(&wts("Monday 07:00-08:00")));
        assert!(!wts("Monday 06:00-07:00").overlaps_with(&wts("Tuesday 06:30-07:30")));
    }

    #[test]
    fn test_overlap_crosses_midnight() {
        let slot1 = wts("Monday 23:30-00:30");
        let slot2 = wts("Monday 23:30-23:45");
        let slot3 = wts("Monday 23:40-00:40");
        let slot4 = wts("Tuesday 00:15-01:15");
        let slot5 = wts("Tuesday 00:30-01:30");
        let slot6 = wts("Tuesday 00:40-01:40");

        assert!(slot1.overlaps_with(&slot2));
        assert!(slot1.overlaps_with(&slot3));
        assert!(slot1.overlaps_with(&slot4));
        assert!(!slot1.overlaps_with(&slot5));
        assert!(!slot1.overlaps_with(&slot6));
        assert!(slot2.overlaps_with(&slot3));
    }

    #[test]
    fn test_overlap_crosses_midnight_on_saturday() {
        let slot1 = wts("Saturday 23:30-00:30");
        let slot2 = wts("Saturday 23:30-23:45");
        let slot3 = wts("Saturday 23:40-00:40");
        let slot4 = wts("Sunday 00:15-01:15");
        let slot5 = wts("Sunday 00:30-01:30");
        let slot6 = wts("Sunday 00:40-01:40");

        assert!(slot1.overlaps_with(&slot2));
        assert!(slot1.overlaps_with(&slot3));
        assert!(slot1.overlaps_with(&slot4));
        assert!(!slot1.overlaps_with(&slot5));
        assert!(!slot1.overlaps_with(&slot6));
        assert!(slot3.overlaps_with(&slot5));
        assert!(!slot2.overlaps_with(&slot4));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let slots: Vec<WeekdaySlot> = [
            "Sunday 00:15-01:15",
            "Sunday 23:00-01:00",
            "Monday",
            "Monday 06:00-07:00",
            "Monday 06:30-07:30",
            "Monday 23:30-00:30",
            "Tuesday 00:15-01:15",
            "Tuesday 00:30-01:30",
            "Friday 12:00-13:00",
            "Saturday 23:30-00:30",
            "Saturday 08:00-09:00",
        ]
        .into_iter()
        .map(wts)
        .collect();

        for a in &slots {
            for b in &slots {
                assert_eq!(a.overlaps_with(b), b.overlaps_with(a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_merge_keeps_specific_over_all_day() {
        let a = [wts("Monday"), wts("Tuesday 08:00-09:00")];
        let b = [wts("Monday 07:00-08:00"), wts("Tuesday 08:00-09:00")];

        let merged = merge_weekday_slots(&a, &b);
        assert_eq!(
            merged,
            vec![wts("Monday 07:00-08:00"), wts("Tuesday 08:00-09:00")]
        );
    }

    #[test]
    fn test_merge_full_week() {
        let a: Vec<WeekdaySlot> = [
            "Sunday",                // all day with nothing in b
            "Monday",                // all day with slots in b
            "Tuesday 07:00-08:00",   // not in b
            "Tuesday 08:00-09:00",   // in both
            "Tuesday 09:00-09:45",   // does not match
            "Tuesday 10:15-11:00",   // does not match
            "Wednesday",             // absorbed by the specific Wednesday slot
            "Wednesday 07:00-08:00", // in both
            "Thursday 07:00-08:00",  // b is all day
            "Saturday",              // both all day
        ]
        .into_iter()
        .map(wts)
        .collect();

        let b: Vec<WeekdaySlot> = [
            "Monday 07:00-08:00",
            "Tuesday 08:00-09:00",
            "Tuesday 09:00-09:30",
            "Tuesday 10:30-11:00",
            "Tuesday 11:00-12:00",
            "Wednesday 07:00-08:00",
            "Wednesday 08:00-09:00",
            "Thursday",
            "Friday",
            "Saturday",
        ]
        .into_iter()
        .map(wts)
        .collect();

        let expected: Vec<WeekdaySlot> = [
            "Monday 07:00-08:00",
            "Tuesday 08:00-09:00",
            "Wednesday 07:00-08:00",
            "Thursday 07:00-08:00",
            "Saturday",
        ]
        .into_iter()
        .map(wts)
        .collect();

        let merged = merge_weekday_slots(&a, &b);
        assert_eq!(merged, expected);
        assert_eq!(sort_weekday_slots(&merge_weekday_slots(&b, &a)), expected);
    }

    #[test]
    fn test_json_shape() {
        let slot = wts("Monday 07:00-08:00");
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(
            json,
            r#"{"weekday":"Monday","timeSlot":{"start":"07:00","end":"08:00"}}"#
        );
        let parsed: WeekdaySlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }

    #[test]
    fn test_json_all_day_slot() {
        let parsed: WeekdaySlot =
            serde_json::from_str(r#"{"weekday":"friday","timeSlot":{"start":"","end":""}}"#)
                .unwrap();
        assert_eq!(parsed, WeekdaySlot::all_day(Weekday::Friday));
    }
}
