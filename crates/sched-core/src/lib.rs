//! Recurring weekly availability.
//!
//! This crate contains the scheduling types and algorithms:
//! - Clock, date and weekday scalars with their text and integer encodings
//! - Weekday slots: daily time windows on a named day, their overlap test
//!   and the all-day aware merge of two slot lists
//! - Date ranges with inclusive bounds and an optional open end
//! - Schedules, their intersection, and calendar expansion into per-date
//!   slot listings

mod calendar;
mod clock;
mod date;
mod date_range;
mod error;
mod schedule;
mod slot_set;
mod sql;
mod time_slot;
mod weekday;
mod weekday_slot;

pub use calendar::{Calendar, CalendarMap};
pub use clock::Clock;
pub use date::{Date, max_date, min_date};
pub use date_range::{DateRange, INFINITE_DAYS};
pub use error::ScheduleError;
pub use schedule::Schedule;
pub use slot_set::WeekdaySlotSet;
pub use time_slot::TimeSlot;
pub use weekday::Weekday;
pub use weekday_slot::{
    WeekdaySlot, merge_weekday_slots, slot_keys, sort_weekday_slots, unique_weekday_slots,
};
