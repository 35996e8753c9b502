//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sched_core::{Calendar, WeekdaySlot};

/// Reads a calendar from `path`, or from stdin when `path` is `-`.
pub fn read_calendar(path: &Path) -> Result<Calendar> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_calendar(&json).with_context(|| format!("invalid calendar in {}", path.display()))
}

/// Decodes a calendar from its JSON form.
pub fn parse_calendar(json: &str) -> Result<Calendar> {
    let calendar: Calendar = serde_json::from_str(json)?;
    tracing::debug!(schedules = calendar.schedules().len(), "parsed calendar");
    Ok(calendar)
}

/// Formats slots as `HH:MM-HH:MM, ...`, `all day` for the whole-day slot
/// and `-` for an empty list.
pub fn format_slots<'a>(slots: impl IntoIterator<Item = &'a WeekdaySlot>) -> String {
    let parts: Vec<String> = slots
        .into_iter()
        .map(|slot| {
            if slot.is_all_day() {
                "all day".to_string()
            } else {
                slot.slot().to_string()
            }
        })
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use sched_core::{Date, Weekday};

    #[test]
    fn test_parse_calendar() {
        let calendar = parse_calendar(
            r#"{"schedules": [{
                "dateRange": {"validFrom": "2022-01-01", "validUntil": ""},
                "timeSlots": [{"weekday": "Monday", "timeSlot": {"start": "07:00", "end": "08:00"}}]
            }]}"#,
        )
        .unwrap();

        let schedule = &calendar.schedules()[0];
        assert_eq!(schedule.from(), Date::new(2022, 1, 1));
        assert_eq!(schedule.until(), None);
        assert_eq!(
            schedule.time_slots,
            vec![WeekdaySlot::parse_lenient("Monday 07:00-08:00")]
        );
    }

    #[test]
    fn test_parse_calendar_rejects_bad_dates() {
        let err = parse_calendar(r#"{"schedules": [{"dateRange": {"validFrom": "01/01/2022"}}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("yyyy-mm-dd"), "{err}");
    }

    #[test]
    fn test_read_calendar_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"schedules": []}}"#).unwrap();
        let calendar = read_calendar(file.path()).unwrap();
        assert!(calendar.schedules().is_empty());
    }

    #[test]
    fn test_read_calendar_missing_file() {
        let err = read_calendar(Path::new("/nonexistent/calendar.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"), "{err}");
    }

    #[test]
    fn test_format_slots() {
        let slots = [
            WeekdaySlot::all_day(Weekday::Monday),
            WeekdaySlot::parse_lenient("Monday 07:00-08:00"),
        ];
        assert_eq!(format_slots(&slots), "all day, 07:00-08:00");
        assert_eq!(format_slots(&[] as &[WeekdaySlot]), "-");
    }
}
