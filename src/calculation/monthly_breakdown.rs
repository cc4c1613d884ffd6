//! Monthly breakdown calculation.
//!
//! Produces the itemized report of one calendar month: the balance carried
//! in, the month's credits by source, its target and the balance carried out.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::MonthlyBreakdown;

use super::balance::{balance_before_month, BalanceContext};
use super::calendar::month_end;

/// Calculates the breakdown of `month` (1 to 12) in `year`.
///
/// `previous_balance` is the balance as of the last day of the preceding
/// month; `end_of_month_balance` is that plus the month's own balance, and
/// equals the next month's `previous_balance`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] for a month outside 1 to 12 or a
/// year chrono cannot represent.
///
/// # Example
///
/// ```
/// use time_balance_engine::calculation::{calculate_monthly_breakdown, BalanceContext};
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
/// assert!(calculate_monthly_breakdown(&context, 2024, 13).is_err());
/// let march = calculate_monthly_breakdown(&context, 2024, 3).unwrap();
/// assert_eq!(march.end_of_month_balance, Decimal::ZERO);
/// ```
pub fn calculate_monthly_breakdown(
    context: &BalanceContext<'_>,
    year: i32,
    month: u32,
) -> EngineResult<MonthlyBreakdown> {
    let first = first_of_month(year, month)?;
    let previous_balance = balance_before_month(context, first);
    Ok(build_breakdown(context, first, previous_balance))
}

/// Calculates the breakdowns of all twelve months of `year` in one pass.
///
/// The balance before January is computed once and then carried forward
/// month by month, instead of re-walking the history for each month.
pub fn calculate_year_breakdowns(
    context: &BalanceContext<'_>,
    year: i32,
) -> EngineResult<Vec<MonthlyBreakdown>> {
    let january = first_of_month(year, 1)?;
    let mut previous_balance = balance_before_month(context, january);

    let mut breakdowns = Vec::with_capacity(12);
    for month in 1..=12 {
        let breakdown = build_breakdown(context, first_of_month(year, month)?, previous_balance);
        previous_balance = breakdown.end_of_month_balance;
        breakdowns.push(breakdown);
    }
    Ok(breakdowns)
}

fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { year, month })
}

fn build_breakdown(
    context: &BalanceContext<'_>,
    first: NaiveDate,
    previous_balance: Decimal,
) -> MonthlyBreakdown {
    let totals = context.month_totals(first, month_end(first));
    let monthly_balance = totals.monthly_balance();

    let breakdown = MonthlyBreakdown {
        employee_id: context.employee().id.clone(),
        year: first.year(),
        month: first.month(),
        previous_balance,
        worked_hours: totals.worked_hours,
        adjustments: totals.adjustments,
        vacation_credit_hours: totals.vacation_credit,
        sick_leave_credit_hours: totals.sick_leave_credit,
        holiday_credit_hours: totals.holiday_credit,
        absence_holiday_credit: totals.absence_holiday_credit(),
        total_credited: totals.total_credited(),
        target_hours: totals.target_hours,
        monthly_balance,
        end_of_month_balance: previous_balance + monthly_balance,
    };

    debug!(
        employee_id = %breakdown.employee_id,
        year = breakdown.year,
        month = breakdown.month,
        end_of_month_balance = %breakdown.end_of_month_balance,
        "Calculated monthly breakdown"
    );
    breakdown
}
