//! Daily schedule evaluation.
//!
//! Turns a contract into the target hours of one specific date.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Contract;

use super::calendar::is_weekday;

/// Returns the hours scheduled by `contract` on `date`.
///
/// Weekly-model contracts with a schedule return that weekday's configured
/// hours, which may be non-zero on weekends. Every other contract returns its
/// flat `daily_target_hours` on Monday to Friday and zero on weekends.
///
/// # Example
///
/// ```
/// use time_balance_engine::calculation::scheduled_hours;
/// use time_balance_engine::models::{Contract, EmploymentType, TargetHoursModel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = Contract {
///     valid_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employment_type: EmploymentType::FullTime,
///     monthly_target_hours: Decimal::new(160, 0),
///     daily_target_hours: Decimal::new(8, 0),
///     vacation_days_per_year: Decimal::new(30, 0),
///     target_hours_model: TargetHoursModel::Monthly,
///     weekly_schedule: None,
/// };
///
/// // 2024-01-15 is a Monday, 2024-01-13 a Saturday
/// assert_eq!(scheduled_hours(&contract, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), Decimal::new(8, 0));
/// assert_eq!(scheduled_hours(&contract, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()), Decimal::ZERO);
/// ```
pub fn scheduled_hours(contract: &Contract, date: NaiveDate) -> Decimal {
    if let Some(schedule) = contract.active_weekly_schedule() {
        return schedule.hours_for(date.weekday());
    }

    if is_weekday(date) {
        contract.daily_target_hours
    } else {
        Decimal::ZERO
    }
}
