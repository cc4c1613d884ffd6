//! Time entry model.
//!
//! This module defines the TimeEntry struct for recording worked time.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Divisor from worked seconds to hours.
pub(crate) const SECONDS_PER_HOUR: i64 = 3600;

/// A block of worked time.
///
/// The whole entry is attributed to the calendar date it starts on, even if
/// its end lies after midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    #[serde(default)]
    pub id: String,
    /// The employee who worked this time.
    pub employee_id: String,
    /// When work started.
    pub start: NaiveDateTime,
    /// When work ended.
    pub end: NaiveDateTime,
    /// Unpaid break taken within the entry, in minutes.
    #[serde(default)]
    pub break_duration_minutes: u32,
}

impl TimeEntry {
    /// Calculates the worked hours for the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_balance_engine::models::TimeEntry;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     start: NaiveDateTime::parse_from_str("2024-01-15 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end: NaiveDateTime::parse_from_str("2024-01-15 16:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     break_duration_minutes: 30,
    /// };
    /// assert_eq!(entry.worked_hours(), Decimal::new(8, 0));
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        Decimal::from(self.worked_seconds()) / Decimal::from(SECONDS_PER_HOUR)
    }

    /// The worked time in seconds, break already deducted.
    pub fn worked_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds() - self.break_seconds()
    }

    fn break_seconds(&self) -> i64 {
        i64::from(self.break_duration_minutes) * 60
    }

    /// The calendar date the entry is attributed to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Rejects entries that end before they start or whose break exceeds the entry.
    pub fn validate(&self) -> EngineResult<()> {
        let total_seconds = (self.end - self.start).num_seconds();
        if total_seconds < 0 {
            return Err(EngineError::InvalidTimeEntry {
                entry_id: self.id.clone(),
                message: "end time before start time".to_string(),
            });
        }
        if self.break_seconds() > total_seconds {
            return Err(EngineError::InvalidTimeEntry {
                entry_id: self.id.clone(),
                message: format!(
                    "break of {} minutes exceeds entry duration of {} seconds",
                    self.break_duration_minutes, total_seconds
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_entry(start: (&str, &str), end: (&str, &str), break_minutes: u32) -> TimeEntry {
        TimeEntry {
            id: "te_001".to_string(),
            employee_id: "emp_001".to_string(),
            start: make_datetime(start.0, start.1),
            end: make_datetime(end.0, end.1),
            break_duration_minutes: break_minutes,
        }
    }

    #[test]
    fn test_8_hour_entry_no_break() {
        let entry = create_entry(("2024-01-15", "09:00:00"), ("2024-01-15", "17:00:00"), 0);
        assert_eq!(entry.worked_hours(), Decimal::new(8, 0));
    }

    #[test]
    fn test_break_is_subtracted() {
        let entry = create_entry(("2024-01-15", "09:00:00"), ("2024-01-15", "17:00:00"), 45);
        assert_eq!(entry.worked_hours(), Decimal::from_str("7.25").unwrap());
    }

    #[test]
    fn test_seconds_are_not_truncated() {
        let entry = create_entry(("2024-01-15", "08:00:00"), ("2024-01-15", "08:00:59"), 0);
        assert_eq!(entry.worked_seconds(), 59);
        assert_eq!(entry.worked_hours(), Decimal::new(59, 0) / Decimal::new(3600, 0));
        assert!(entry.worked_hours() > Decimal::ZERO);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_overnight_entry_is_attributed_to_start_date() {
        let entry = create_entry(("2024-01-15", "22:00:00"), ("2024-01-16", "06:00:00"), 0);
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(entry.worked_hours(), Decimal::new(8, 0));
    }

    #[test]
    fn test_validate_rejects_end_before_start() {
        let entry = create_entry(("2024-01-15", "17:00:00"), ("2024-01-15", "09:00:00"), 0);
        match entry.validate() {
            Err(EngineError::InvalidTimeEntry { entry_id, message }) => {
                assert_eq!(entry_id, "te_001");
                assert_eq!(message, "end time before start time");
            }
            other => panic!("Expected InvalidTimeEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_break_longer_than_entry() {
        let entry = create_entry(("2024-01-15", "09:00:00"), ("2024-01-15", "10:00:00"), 90);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults_break_to_zero() {
        let json = r#"{
            "employee_id": "emp_001",
            "start": "2024-01-15T09:00:00",
            "end": "2024-01-15T13:00:00"
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.break_duration_minutes, 0);
        assert_eq!(entry.worked_hours(), Decimal::new(4, 0));
    }
}
