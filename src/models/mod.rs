//! Core data models for the Time Balance Engine.
//!
//! This module contains the snapshot records the calculations consume and
//! the report records they produce.

use rust_decimal::Decimal;

mod absence;
mod adjustment;
mod contract;
mod employee;
mod holiday;
mod report;
mod time_entry;

pub use absence::{AbsenceRequest, AbsenceStatus, AbsenceType, DayPortion};
pub use adjustment::TimeBalanceAdjustment;
pub use contract::{Contract, ContractHistory, EmploymentType, TargetHoursModel, WeeklySchedule};
pub use employee::{Employee, LeavePreferences};
pub use holiday::{Holiday, HolidayCalendar};
pub use report::{AnnualEntitlement, MonthlyBreakdown};
pub use time_entry::TimeEntry;
pub(crate) use time_entry::SECONDS_PER_HOUR;

/// The largest magnitude accepted for a single hours or days input value.
pub const MAX_INPUT_MAGNITUDE: i64 = 1_000_000;

pub(crate) fn exceeds_input_limit(value: Decimal) -> bool {
    value.abs() > Decimal::from(MAX_INPUT_MAGNITUDE)
}
