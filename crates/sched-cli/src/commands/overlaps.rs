//! Overlaps command for comparing two weekday slots.

use std::io::Write;

use anyhow::Result;
use sched_core::WeekdaySlot;

/// Parses both slots leniently and reports whether they overlap.
pub fn run<W: Write>(writer: &mut W, a: &str, b: &str) -> Result<()> {
    let a = WeekdaySlot::parse_lenient(a);
    let b = WeekdaySlot::parse_lenient(b);
    tracing::debug!(a = a.key(), b = b.key(), "comparing slot keys");

    if a.overlaps_with(&b) {
        writeln!(writer, "{a} and {b} overlap")?;
    } else {
        writeln!(writer, "{a} and {b} do not overlap")?;
    }
    Ok(())
}
