//! Cumulative time balance calculation.
//!
//! The balance as of a date is the starting balance plus, for every month of
//! employment up to that date, the month's credited hours minus its target.
//! Credits come from worked time, manual adjustments, holidays and approved
//! paid absences; the target is the month's contractual hours.
//!
//! Each month is evaluated by [`BalanceContext::month_totals`], which the
//! monthly breakdown reuses, so a month's end balance and the following
//! month's previous balance are produced by the same arithmetic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    AbsenceRequest, Employee, HolidayCalendar, SECONDS_PER_HOUR, TimeBalanceAdjustment, TimeEntry,
};

use super::calendar::{days_between, month_end, month_start, month_starts};
use super::contract_resolver::contract_on;
use super::daily_schedule::scheduled_hours;
use super::day_classification::classify_day;

/// An immutable snapshot of everything a calculation needs for one employee.
///
/// Collections may contain records of other employees; only records whose
/// `employee_id` matches are kept, and only approved absences.
#[derive(Debug, Clone)]
pub struct BalanceContext<'a> {
    employee: &'a Employee,
    time_entries: Vec<&'a TimeEntry>,
    absences: Vec<&'a AbsenceRequest>,
    adjustments: Vec<&'a TimeBalanceAdjustment>,
    holidays: &'a HolidayCalendar,
}

/// Aggregated hours of one month (or of a month prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct MonthTotals {
    pub worked_hours: Decimal,
    pub adjustments: Decimal,
    pub vacation_credit: Decimal,
    pub sick_leave_credit: Decimal,
    pub holiday_credit: Decimal,
    pub target_hours: Decimal,
}

impl MonthTotals {
    pub fn absence_holiday_credit(&self) -> Decimal {
        self.vacation_credit + self.sick_leave_credit + self.holiday_credit
    }

    pub fn total_credited(&self) -> Decimal {
        self.worked_hours + self.adjustments + self.absence_holiday_credit()
    }

    pub fn monthly_balance(&self) -> Decimal {
        self.total_credited() - self.target_hours
    }
}

impl<'a> BalanceContext<'a> {
    /// Builds a context for `employee` from the caller's snapshots.
    pub fn new(
        employee: &'a Employee,
        time_entries: &'a [TimeEntry],
        absences: &'a [AbsenceRequest],
        adjustments: &'a [TimeBalanceAdjustment],
        holidays: &'a HolidayCalendar,
    ) -> Self {
        if employee.contract_history.is_empty() {
            warn!(
                employee_id = %employee.id,
                "Employee has no contract history; targets and entitlements fall back to zero"
            );
        }

        let mut time_entries: Vec<&TimeEntry> = time_entries
            .iter()
            .filter(|e| e.employee_id == employee.id)
            .collect();
        time_entries.sort_by_key(|e| e.date());

        let absences = absences
            .iter()
            .filter(|a| a.employee_id == employee.id && a.is_approved())
            .collect();

        let mut adjustments: Vec<&TimeBalanceAdjustment> = adjustments
            .iter()
            .filter(|a| a.employee_id == employee.id)
            .collect();
        adjustments.sort_by_key(|a| a.date);

        Self {
            employee,
            time_entries,
            absences,
            adjustments,
            holidays,
        }
    }

    /// The employee this context belongs to.
    pub fn employee(&self) -> &'a Employee {
        self.employee
    }

    /// The employee's approved absences, in input order.
    pub fn approved_absences(&self) -> &[&'a AbsenceRequest] {
        &self.absences
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &'a HolidayCalendar {
        self.holidays
    }

    /// Aggregates the month starting at `first` up to and including `through`.
    ///
    /// Months that end before the first work day contribute nothing. Records
    /// dated before the first work day are credited to the first month of
    /// employment, so every record up to `through` is counted exactly once
    /// across consecutive months.
    pub(crate) fn month_totals(&self, first: NaiveDate, through: NaiveDate) -> MonthTotals {
        let first_work_day = self.employee.first_work_day;
        if through < first_work_day {
            return MonthTotals::default();
        }

        let records_from = if first <= first_work_day {
            None
        } else {
            Some(first)
        };

        // Summed in seconds and divided once, so short entries do not accumulate rounding.
        let worked_seconds: Decimal = within(&self.time_entries, |e| e.date(), records_from, through)
            .iter()
            .map(|e| Decimal::from(e.worked_seconds()))
            .sum();
        let worked_hours = worked_seconds / Decimal::from(SECONDS_PER_HOUR);

        let adjustments = within(&self.adjustments, |a| a.date, records_from, through)
            .iter()
            .map(|a| a.hours)
            .sum();

        let mut totals = MonthTotals {
            worked_hours,
            adjustments,
            target_hours: contract_on(self.employee, first).monthly_target_hours,
            ..MonthTotals::default()
        };

        for date in days_between(first.max(first_work_day), through) {
            let scheduled = scheduled_hours(contract_on(self.employee, date), date);
            if scheduled <= Decimal::ZERO {
                continue;
            }
            let credit =
                classify_day(date, self.absences.iter().copied(), self.holidays).credit(scheduled);
            totals.holiday_credit += credit.holiday;
            totals.vacation_credit += credit.vacation;
            totals.sick_leave_credit += credit.sick_leave;
        }

        totals
    }
}

/// Returns the date-sorted records whose date lies in `[from, through]`;
/// a missing `from` means "since the beginning".
fn within<'s, T>(
    records: &'s [&'s T],
    date_of: impl Fn(&T) -> NaiveDate,
    from: Option<NaiveDate>,
    through: NaiveDate,
) -> &'s [&'s T] {
    let lower = from.map_or(0, |from| records.partition_point(|r| date_of(*r) < from));
    let upper = records.partition_point(|r| date_of(*r) <= through);
    &records[lower..upper.max(lower)]
}

/// Calculates the cumulative time balance as of `end_date` (inclusive).
///
/// Returns the starting balance unchanged if `end_date` precedes the first
/// work day. Otherwise every month touched by `[first_work_day, end_date]`
/// is debited its full monthly target, while credits only count up to
/// `end_date`. The result depends on nothing but the context and the date.
///
/// # Example
///
/// ```
/// use time_balance_engine::calculation::{calculate_balance, BalanceContext};
/// use time_balance_engine::models::{
///     Contract, ContractHistory, Employee, EmploymentType, HolidayCalendar, LeavePreferences,
///     TargetHoursModel,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: String::new(),
///     first_work_day: start,
///     starting_time_balance_hours: Decimal::new(10, 0),
///     contract_history: ContractHistory::new(vec![Contract {
///         valid_from: start,
///         employment_type: EmploymentType::FullTime,
///         monthly_target_hours: Decimal::new(160, 0),
///         daily_target_hours: Decimal::new(8, 0),
///         vacation_days_per_year: Decimal::new(30, 0),
///         target_hours_model: TargetHoursModel::Monthly,
///         weekly_schedule: None,
///     }])
///     .unwrap(),
///     leave_preferences: LeavePreferences::default(),
/// };
///
/// let holidays = HolidayCalendar::new();
/// let context = BalanceContext::new(&employee, &[], &[], &[], &holidays);
///
/// // Before the first work day the starting balance is returned as is.
/// let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(calculate_balance(&context, before), Decimal::new(10, 0));
///
/// // Nothing worked in January: the full target is owed.
/// let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(calculate_balance(&context, end), Decimal::new(-150, 0));
/// ```
pub fn calculate_balance(context: &BalanceContext<'_>, end_date: NaiveDate) -> Decimal {
    let employee = context.employee();
    if end_date < employee.first_work_day {
        return employee.starting_time_balance_hours;
    }

    let balance = month_starts(employee.first_work_day, end_date).fold(
        employee.starting_time_balance_hours,
        |balance, first| {
            let through = month_end(first).min(end_date);
            balance + context.month_totals(first, through).monthly_balance()
        },
    );

    debug!(
        employee_id = %employee.id,
        %end_date,
        %balance,
        "Calculated time balance"
    );
    balance
}

/// Returns the balance at the end of the month preceding the month of `date`.
pub(crate) fn balance_before_month(context: &BalanceContext<'_>, date: NaiveDate) -> Decimal {
    calculate_balance(context, month_start(date).pred_opt().unwrap_or(NaiveDate::MIN))
}
