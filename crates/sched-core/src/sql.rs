//! SQLite column conversions for the scalar schedule types.
//!
//! Writes always use the text form. Reads accept the text form plus an
//! integer form per type:
//!
//! | type          | integer read            | text read            | write                |
//! |---------------|-------------------------|----------------------|----------------------|
//! | `Clock`       | minutes since midnight  | `HH:MM`, lenient     | `HH:MM`              |
//! | `Date`        | Unix seconds (UTC)      | `YYYY-MM-DD`, strict | `YYYY-MM-DD` or NULL |
//! | `Weekday`     | day index, mod 7        | day name, strict     | day name             |
//! | `WeekdaySlot` | canonical key           | `Monday 07:00-08:00` | `Monday 07:00-08:00` |

use chrono::DateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

use crate::clock::Clock;
use crate::date::Date;
use crate::weekday::Weekday;
use crate::weekday_slot::WeekdaySlot;

/// Reads TEXT, or a BLOB holding UTF-8 text.
fn text(value: ValueRef<'_>) -> FromSqlResult<&str> {
    match value {
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))
        }
        _ => Err(FromSqlError::InvalidType),
    }
}

impl ToSql for Clock {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Clock {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(minutes) => Ok(Self::from_minutes(minutes)),
            _ => text(value).map(Self::parse_lenient),
        }
    }
}

impl ToSql for Date {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        if self.is_zero() {
            return Ok(ToSqlOutput::Owned(Value::Null));
        }
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Date {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::zero()),
            ValueRef::Integer(seconds) => DateTime::from_timestamp(seconds, 0)
                .map(|dt| Self::from_naive(dt.date_naive()))
                .ok_or(FromSqlError::OutOfRange(seconds)),
            _ => Self::parse(text(value)?).map_err(|e| FromSqlError::Other(Box::new(e))),
        }
    }
}

impl ToSql for Weekday {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Weekday {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(index) => Ok(Self::from_index(index)),
            _ => text(value)?
                .parse()
                .map_err(|e| FromSqlError::Other(Box::new(e))),
        }
    }
}

impl ToSql for WeekdaySlot {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for WeekdaySlot {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::default()),
            ValueRef::Integer(key) => u32::try_from(key)
                .map(Self::from_key)
                .map_err(|_| FromSqlError::OutOfRange(key)),
            _ => text(value).map(Self::parse_lenient),
        }
    }
}
