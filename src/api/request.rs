//! Request types for the Time Balance Engine API.
//!
//! Every endpoint takes the employee snapshot plus the parameters of the
//! calculation it runs.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AbsenceRequest, Employee, HolidayCalendar, TimeBalanceAdjustment, TimeEntry};

/// Everything the engine needs to know about one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// The employee, including the contract history.
    pub employee: Employee,
    /// Recorded time entries.
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    /// Absence requests in any status; only approved ones are used.
    #[serde(default)]
    pub absences: Vec<AbsenceRequest>,
    /// Manual balance adjustments.
    #[serde(default)]
    pub adjustments: Vec<TimeBalanceAdjustment>,
    /// Holidays by year. Years not listed are loaded from the configuration.
    #[serde(default)]
    pub holidays: HolidayCalendar,
    /// Holiday region; defaults to the configured region.
    #[serde(default)]
    pub region: Option<String>,
}

impl SnapshotRequest {
    /// Validates the employee and every record of the snapshot.
    pub fn validate(&self) -> EngineResult<()> {
        self.employee.validate()?;
        for entry in &self.time_entries {
            entry.validate()?;
        }
        for absence in &self.absences {
            absence.validate_for(&self.employee.leave_preferences)?;
        }
        for adjustment in &self.adjustments {
            adjustment.validate()?;
        }
        Ok(())
    }

    /// The first calendar year the employee worked in.
    pub fn first_year(&self) -> i32 {
        self.employee.first_work_day.year()
    }
}

/// Request body for the `/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The employee snapshot.
    pub snapshot: SnapshotRequest,
    /// The date the balance is calculated for (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The employee snapshot.
    pub snapshot: SnapshotRequest,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
}

/// Request body for the `/breakdowns/year` and `/entitlement` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRequest {
    /// The employee snapshot.
    pub snapshot: SnapshotRequest,
    /// Calendar year.
    pub year: i32,
}
