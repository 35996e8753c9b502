//! Merge command for intersecting a calendar's schedules.

use std::io::Write;

use anyhow::{Result, bail};
use sched_core::{Calendar, Schedule};

/// Merges the first schedule with the rest, in order.
pub fn merge_calendar(calendar: &Calendar) -> Result<Schedule> {
    let Some((first, rest)) = calendar.schedules().split_first() else {
        bail!("no schedules to merge");
    };
    Ok(first.merge(rest))
}

pub fn run<W: Write>(writer: &mut W, calendar: &Calendar, json: bool) -> Result<()> {
    let merged = merge_calendar(calendar)?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&merged)?)?;
        return Ok(());
    }

    if merged.date_range.is_zero() {
        writeln!(writer, "Date range: none, the schedules do not overlap")?;
        return Ok(());
    }

    writeln!(writer, "Date range: {}", merged.date_range)?;
    if merged.time_slots.is_empty() {
        writeln!(writer, "Time slots: none")?;
        return Ok(());
    }

    writeln!(writer, "Time slots:")?;
    for slot in &merged.time_slots {
        if slot.is_all_day() {
            writeln!(writer, "- {} all day", slot.weekday())?;
        } else {
            writeln!(writer, "- {slot}")?;
        }
    }

    Ok(())
}
