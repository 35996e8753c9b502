//! Expand command for listing the slots that apply on each date.

use std::io::Write;

use anyhow::{Context, Result, bail};
use sched_core::{Calendar, Date};

use crate::Config;
use crate::commands::util::format_slots;

/// Resolves the last date to expand: `until` when given, otherwise
/// `today` plus the configured horizon.
pub fn resolve_limit(until: Option<Date>, today: Date, config: &Config) -> Result<Date> {
    if let Some(until) = until {
        return Ok(until);
    }
    let horizon = i32::try_from(config.horizon_days).context("horizon_days is too large")?;
    Ok(today.add_date(0, 0, horizon))
}

pub fn run<W: Write>(
    writer: &mut W,
    calendar: &Calendar,
    limit: Date,
    json: bool,
    config: &Config,
) -> Result<()> {
    let earliest = calendar
        .schedules()
        .iter()
        .map(sched_core::Schedule::from)
        .filter(|from| !from.is_zero())
        .min();
    if let Some(earliest) = earliest {
        let span = limit.days_since(earliest) + 1;
        if span > i64::from(config.max_expand_days) {
            bail!(
                "refusing to expand {span} days from {earliest} to {limit}, the limit is {} (max_expand_days)",
                config.max_expand_days
            );
        }
    }

    let days = calendar.by_date(limit);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&days)?)?;
        return Ok(());
    }

    if days.is_empty() {
        writeln!(writer, "No dates on or before {limit}.")?;
        return Ok(());
    }

    for (date, slots) in &days {
        writeln!(writer, "{date} {}: {}", date.weekday(), format_slots(slots))?;
    }

    Ok(())
}
