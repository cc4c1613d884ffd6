//! Annual vacation and sick day accounting.
//!
//! Counts leave days independently of the hour balance: a day is a Monday
//! to Friday that is not a public holiday, whatever the contract schedules.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::AnnualEntitlement;

use super::balance::BalanceContext;
use super::calendar::{days_between, is_weekday};
use super::contract_resolver::contract_on;
use super::day_classification::{classify_day, DayClassification};

/// Calculates vacation and sick days taken in `year` and the vacation left.
///
/// Requests spanning a year change only count their days inside `year`.
/// Half-day vacation counts 0.5. The allotment comes from the contract in
/// effect on 1 January.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] if chrono cannot represent `year`.
///
/// # Example
///
/// ```
/// use time_balance_engine::calculation::{calculate_annual_entitlement, BalanceContext};
/// use time_balance_engine::models::{ContractHistory, Employee, HolidayCalendar, LeavePreferences};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: String::new(),
///     first_work_day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     starting_time_balance_hours: Decimal::ZERO,
///     contract_history: ContractHistory::default(),
///     leave_preferences: LeavePreferences::default(),
/// };
/// let holidays = HolidayCalendar::new();
/// let context = BalanceContext::new(&employee, &[], &[], &[], &holidays);
///
/// let entitlement = calculate_annual_entitlement(&context, 2024).unwrap();
/// assert_eq!(entitlement.remaining_vacation_days, Decimal::ZERO);
/// ```
pub fn calculate_annual_entitlement(
    context: &BalanceContext<'_>,
    year: i32,
) -> EngineResult<AnnualEntitlement> {
    let invalid = || EngineError::InvalidPeriod { year, month: 1 };
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;

    let employee = context.employee();
    let vacation_days_per_year = contract_on(employee, first).vacation_days_per_year;

    let mut taken_vacation_days = Decimal::ZERO;
    let mut taken_sick_days = Decimal::ZERO;

    for date in days_between(first, last).filter(|d| is_weekday(*d)) {
        match classify_day(
            date,
            context.approved_absences().iter().copied(),
            context.holidays(),
        ) {
            DayClassification::Vacation(portion) => {
                taken_vacation_days += portion.day_fraction();
            }
            DayClassification::SickLeave => taken_sick_days += Decimal::ONE,
            DayClassification::Holiday | DayClassification::TimeOff | DayClassification::None => {}
        }
    }

    let entitlement = AnnualEntitlement {
        employee_id: employee.id.clone(),
        year: first.year(),
        vacation_days_per_year,
        taken_vacation_days,
        taken_sick_days,
        remaining_vacation_days: vacation_days_per_year - taken_vacation_days,
    };

    debug!(
        employee_id = %entitlement.employee_id,
        year,
        taken_vacation_days = %entitlement.taken_vacation_days,
        taken_sick_days = %entitlement.taken_sick_days,
        "Calculated annual entitlement"
    );
    Ok(entitlement)
}
