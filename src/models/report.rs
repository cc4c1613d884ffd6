//! Report records handed to renderers and exporters.
//!
//! Field names and units of [`MonthlyBreakdown`] and [`AnnualEntitlement`]
//! are the compatibility contract with downstream consumers: camelCase keys,
//! hours and day counts as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized time balance of one calendar month.
///
/// `end_of_month_balance` of one month always equals `previous_balance` of
/// the next.
///
/// # Example
///
/// ```
/// use time_balance_engine::models::MonthlyBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = MonthlyBreakdown {
///     employee_id: "emp_001".to_string(),
///     year: 2024,
///     month: 1,
///     previous_balance: Decimal::ZERO,
///     worked_hours: Decimal::new(152, 0),
///     adjustments: Decimal::ZERO,
///     vacation_credit_hours: Decimal::new(8, 0),
///     sick_leave_credit_hours: Decimal::ZERO,
///     holiday_credit_hours: Decimal::ZERO,
///     absence_holiday_credit: Decimal::new(8, 0),
///     total_credited: Decimal::new(160, 0),
///     target_hours: Decimal::new(160, 0),
///     monthly_balance: Decimal::ZERO,
///     end_of_month_balance: Decimal::ZERO,
/// };
/// let json = serde_json::to_value(&breakdown).unwrap();
/// assert_eq!(json["workedHours"], serde_json::json!(152.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// The employee the breakdown belongs to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Balance at the end of the previous month.
    #[serde(with = "rust_decimal::serde::float")]
    pub previous_balance: Decimal,
    /// Hours worked in the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub worked_hours: Decimal,
    /// Sum of manual adjustments in the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub adjustments: Decimal,
    /// Hours credited for approved vacation.
    #[serde(with = "rust_decimal::serde::float")]
    pub vacation_credit_hours: Decimal,
    /// Hours credited for approved sick leave.
    #[serde(with = "rust_decimal::serde::float")]
    pub sick_leave_credit_hours: Decimal,
    /// Hours credited for public holidays.
    #[serde(with = "rust_decimal::serde::float")]
    pub holiday_credit_hours: Decimal,
    /// Vacation, sick leave and holiday credit combined.
    #[serde(with = "rust_decimal::serde::float")]
    pub absence_holiday_credit: Decimal,
    /// Worked hours plus adjustments plus absence/holiday credit.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_credited: Decimal,
    /// The month's contractual target.
    #[serde(with = "rust_decimal::serde::float")]
    pub target_hours: Decimal,
    /// `total_credited - target_hours`.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_balance: Decimal,
    /// `previous_balance + monthly_balance`.
    #[serde(with = "rust_decimal::serde::float")]
    pub end_of_month_balance: Decimal,
}

/// Vacation and sick days consumed in one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualEntitlement {
    /// The employee the figures belong to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// Annual vacation allotment from the contract.
    #[serde(with = "rust_decimal::serde::float")]
    pub vacation_days_per_year: Decimal,
    /// Vacation days taken, in steps of 0.5.
    #[serde(with = "rust_decimal::serde::float")]
    pub taken_vacation_days: Decimal,
    /// Sick days taken.
    #[serde(with = "rust_decimal::serde::float")]
    pub taken_sick_days: Decimal,
    /// `vacation_days_per_year - taken_vacation_days`; may be negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_vacation_days: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entitlement_serializes_camel_case_numbers() {
        let entitlement = AnnualEntitlement {
            employee_id: "emp_001".to_string(),
            year: 2024,
            vacation_days_per_year: dec("30"),
            taken_vacation_days: dec("4.5"),
            taken_sick_days: dec("2"),
            remaining_vacation_days: dec("25.5"),
        };

        let value = serde_json::to_value(&entitlement).unwrap();
        assert_eq!(value["employeeId"], json!("emp_001"));
        assert_eq!(value["takenVacationDays"], json!(4.5));
        assert_eq!(value["takenSickDays"], json!(2.0));
        assert_eq!(value["remainingVacationDays"], json!(25.5));
    }

    #[test]
    fn test_breakdown_field_names() {
        let breakdown = MonthlyBreakdown {
            employee_id: "emp_001".to_string(),
            year: 2024,
            month: 2,
            previous_balance: dec("-3.5"),
            worked_hours: dec("150"),
            adjustments: dec("1"),
            vacation_credit_hours: dec("4"),
            sick_leave_credit_hours: dec("0"),
            holiday_credit_hours: dec("0"),
            absence_holiday_credit: dec("4"),
            total_credited: dec("155"),
            target_hours: dec("160"),
            monthly_balance: dec("-5"),
            end_of_month_balance: dec("-8.5"),
        };

        let value = serde_json::to_value(&breakdown).unwrap();
        for key in [
            "previousBalance",
            "workedHours",
            "adjustments",
            "vacationCreditHours",
            "sickLeaveCreditHours",
            "holidayCreditHours",
            "absenceHolidayCredit",
            "totalCredited",
            "targetHours",
            "monthlyBalance",
            "endOfMonthBalance",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(value["endOfMonthBalance"], json!(-8.5));
    }
}
