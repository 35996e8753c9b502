//! Validate command for checking schedule date ranges.

use std::io::Write;

use anyhow::{Result, bail};
use sched_core::Calendar;

/// Writes one line per schedule and fails if any is invalid.
pub fn run<W: Write>(writer: &mut W, calendar: &Calendar) -> Result<()> {
    let schedules = calendar.schedules();
    if schedules.is_empty() {
        writeln!(writer, "No schedules.")?;
        return Ok(());
    }

    let mut invalid = 0;
    for (index, schedule) in schedules.iter().enumerate() {
        let number = index + 1;
        match schedule.date_range.validate() {
            Ok(()) => writeln!(writer, "schedule {number}: ok, {}", schedule.date_range)?,
            Err(err) => {
                invalid += 1;
                writeln!(writer, "schedule {number}: invalid, {err}")?;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} schedules are invalid", schedules.len());
    }
    Ok(())
}
