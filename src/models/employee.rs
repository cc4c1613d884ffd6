//! Employee model and leave preferences.
//!
//! This module defines the Employee struct that anchors every balance and
//! entitlement calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::contract::ContractHistory;
use super::{MAX_INPUT_MAGNITUDE, exceeds_input_limit};

/// Per-employee switches that govern which leave requests are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePreferences {
    /// Whether morning/afternoon vacation requests are allowed.
    pub allow_half_day_vacation: bool,
}

impl Default for LeavePreferences {
    fn default() -> Self {
        Self {
            allow_half_day_vacation: true,
        }
    }
}

/// Represents an employee whose working time is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The first day covered by the engine's records.
    pub first_work_day: NaiveDate,
    /// Balance carried in from before `first_work_day`, in hours.
    #[serde(default)]
    pub starting_time_balance_hours: Decimal,
    /// The employee's contracts.
    pub contract_history: ContractHistory,
    /// Leave preferences.
    #[serde(default)]
    pub leave_preferences: LeavePreferences,
}

impl Employee {
    /// Checks the employee record for values the engine cannot work with.
    ///
    /// An empty contract history is not rejected here; calculations degrade
    /// to a zero-valued contract for it instead.
    ///
    /// # Example
    ///
    /// ```
    /// use time_balance_engine::models::{ContractHistory, Employee, LeavePreferences};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: String::new(),
    ///     name: "Unnamed".to_string(),
    ///     first_work_day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     starting_time_balance_hours: Decimal::ZERO,
    ///     contract_history: ContractHistory::default(),
    ///     leave_preferences: LeavePreferences::default(),
    /// };
    /// assert!(employee.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if exceeds_input_limit(self.starting_time_balance_hours) {
            return Err(EngineError::InvalidEmployee {
                field: "starting_time_balance_hours".to_string(),
                message: format!("must lie within ±{}", MAX_INPUT_MAGNITUDE),
            });
        }
        for contract in self.contract_history.contracts() {
            contract.validate()?;
        }
        Ok(())
    }
}
