//! Contract resolution.
//!
//! Finds the contract version that applies to an employee on a given date.

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{Contract, Employee};

/// Returns the contract in effect for `employee` on `date`.
///
/// The contract with the greatest `valid_from` not after `date` wins; dates
/// before the earliest contract use the earliest one. An employee without any
/// contract is a data-integrity defect: it is logged and the zero-valued
/// [`Contract::placeholder`] is returned, so calculations degrade to "no
/// target, no entitlement" instead of failing.
///
/// # Example
///
/// ```
/// use time_balance_engine::calculation::resolve_contract;
/// use time_balance_engine::models::{ContractHistory, Employee, LeavePreferences};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_404".to_string(),
///     name: String::new(),
///     first_work_day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     starting_time_balance_hours: Decimal::ZERO,
///     contract_history: ContractHistory::default(),
///     leave_preferences: LeavePreferences::default(),
/// };
///
/// let contract = resolve_contract(&employee, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
/// assert_eq!(contract.monthly_target_hours, Decimal::ZERO);
/// ```
pub fn resolve_contract(employee: &Employee, date: NaiveDate) -> &Contract {
    match employee.contract_history.effective_on(date) {
        Some(contract) => contract,
        None => {
            warn!(
                employee_id = %employee.id,
                %date,
                "Employee has no contract history; using zero-valued placeholder contract"
            );
            Contract::placeholder()
        }
    }
}

/// Same rule as [`resolve_contract`] without the diagnostic, for hot loops
/// that have already reported a missing history once.
pub(crate) fn contract_on(employee: &Employee, date: NaiveDate) -> &Contract {
    employee
        .contract_history
        .effective_on(date)
        .unwrap_or_else(|| Contract::placeholder())
}
