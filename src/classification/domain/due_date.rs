//! Due date parsing and proximity checks.

use super::DueDateError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// Due date of a task, interpreted as naive local time.
///
/// Parsed from `YYYY-MM-DDTHH:MM[:SS]`. A third time component is accepted
/// but never interpreted, so `10:30:00.000Z` is read as `10:30`.
///
/// # Examples
///
/// ```
/// use task_urgency::classification::domain::DueDate;
///
/// let due = DueDate::parse("2024-05-01T10:30:00").expect("valid due date");
/// assert_eq!(due.to_string(), "2024-05-01T10:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDateTime);

impl DueDate {
    /// Parses a due date string.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError`] when the string is not in the expected shape
    /// or names an impossible date or time.
    pub fn parse(raw: &str) -> Result<Self, DueDateError> {
        let (date_part, time_part) = raw
            .split_once('T')
            .filter(|(_, time)| !time.contains('T'))
            .ok_or_else(|| DueDateError::MissingTimeSeparator(raw.to_owned()))?;

        let (year, month, day) = parse_date_part(date_part)
            .ok_or_else(|| DueDateError::InvalidDatePart(raw.to_owned()))?;
        let (hour, minute) = parse_time_part(time_part)
            .ok_or_else(|| DueDateError::InvalidTimePart(raw.to_owned()))?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| (1..=9999).contains(&year))
            .ok_or_else(|| DueDateError::OutOfRange(raw.to_owned()))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| DueDateError::OutOfRange(raw.to_owned()))?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Wraps an existing local date-time.
    #[must_use]
    pub const fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the wrapped local date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns `true` when the due date falls before `now` plus one day.
    ///
    /// Overdue tasks are included.
    #[must_use]
    pub fn is_within_a_day_of(&self, now: NaiveDateTime) -> bool {
        self.0 < now + TimeDelta::days(1)
    }
}

impl FromStr for DueDate {
    type Err = DueDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

fn parse_date_part(part: &str) -> Option<(i32, u32, u32)> {
    let fields: Vec<&str> = part.split('-').collect();
    match fields.as_slice() {
        [year, month, day] => Some((
            year.trim().parse().ok()?,
            month.trim().parse().ok()?,
            day.trim().parse().ok()?,
        )),
        _ => None,
    }
}

fn parse_time_part(part: &str) -> Option<(u32, u32)> {
    let fields: Vec<&str> = part.split(':').collect();
    match fields.as_slice() {
        [hour, minute] | [hour, minute, _] => {
            Some((hour.trim().parse().ok()?, minute.trim().parse().ok()?))
        }
        _ => None,
    }
}
