//! Contract model and effective-dated contract history.
//!
//! A [`Contract`] is a snapshot of an employee's working-hours terms that
//! becomes effective on its `valid_from` date. A [`ContractHistory`] holds
//! all snapshots of one employee sorted by that date.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{MAX_INPUT_MAGNITUDE, exceeds_input_limit};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Marginal employment with a small monthly hour budget.
    MiniJob,
}

/// How a contract expresses its target hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetHoursModel {
    /// A flat daily target on Monday to Friday.
    #[default]
    Monthly,
    /// A per-weekday schedule, see [`WeeklySchedule`].
    Weekly,
}

/// Scheduled hours for each day of the week.
///
/// Weekend days may carry hours too; missing days deserialize as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    /// Hours scheduled on Monday.
    pub monday: Decimal,
    /// Hours scheduled on Tuesday.
    pub tuesday: Decimal,
    /// Hours scheduled on Wednesday.
    pub wednesday: Decimal,
    /// Hours scheduled on Thursday.
    pub thursday: Decimal,
    /// Hours scheduled on Friday.
    pub friday: Decimal,
    /// Hours scheduled on Saturday.
    pub saturday: Decimal,
    /// Hours scheduled on Sunday.
    pub sunday: Decimal,
}

impl WeeklySchedule {
    /// Returns the scheduled hours for the given weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use time_balance_engine::models::WeeklySchedule;
    /// use chrono::Weekday;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = WeeklySchedule {
    ///     saturday: Decimal::new(4, 0),
    ///     ..WeeklySchedule::default()
    /// };
    /// assert_eq!(schedule.hours_for(Weekday::Sat), Decimal::new(4, 0));
    /// assert_eq!(schedule.hours_for(Weekday::Mon), Decimal::ZERO);
    /// ```
    pub fn hours_for(&self, weekday: Weekday) -> Decimal {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// An effective-dated snapshot of an employee's working-hours terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// The first day (inclusive) on which these terms apply.
    pub valid_from: NaiveDate,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Hours owed per calendar month; debited once per month.
    pub monthly_target_hours: Decimal,
    /// Hours owed per working day under the monthly model.
    pub daily_target_hours: Decimal,
    /// Annual vacation entitlement in days.
    pub vacation_days_per_year: Decimal,
    /// Whether daily targets come from the flat daily value or the weekly schedule.
    #[serde(default)]
    pub target_hours_model: TargetHoursModel,
    /// Per-weekday schedule, only meaningful under [`TargetHoursModel::Weekly`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_schedule: Option<WeeklySchedule>,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The zero-valued contract used when an employee has no contract history.
static PLACEHOLDER_CONTRACT: Contract = Contract {
    valid_from: NaiveDate::MIN,
    employment_type: EmploymentType::FullTime,
    monthly_target_hours: Decimal::ZERO,
    daily_target_hours: Decimal::ZERO,
    vacation_days_per_year: Decimal::ZERO,
    target_hours_model: TargetHoursModel::Monthly,
    weekly_schedule: None,
};

impl Contract {
    /// Returns the zero-valued fallback contract (full-time, no hours, no vacation).
    pub fn placeholder() -> &'static Contract {
        &PLACEHOLDER_CONTRACT
    }

    /// Returns the weekly schedule if this contract uses the weekly model and has one.
    pub fn active_weekly_schedule(&self) -> Option<&WeeklySchedule> {
        match self.target_hours_model {
            TargetHoursModel::Weekly => self.weekly_schedule.as_ref(),
            TargetHoursModel::Monthly => None,
        }
    }

    /// Rejects hour and day values beyond [`MAX_INPUT_MAGNITUDE`].
    pub fn validate(&self) -> EngineResult<()> {
        let schedule = self
            .weekly_schedule
            .iter()
            .flat_map(|schedule| WEEKDAYS.map(|day| schedule.hours_for(day)));
        let mut values = [
            self.monthly_target_hours,
            self.daily_target_hours,
            self.vacation_days_per_year,
        ]
        .into_iter()
        .chain(schedule);

        if values.any(exceeds_input_limit) {
            return Err(EngineError::InvalidEmployee {
                field: "contract_history".to_string(),
                message: format!(
                    "contract from {} has a value beyond ±{}",
                    self.valid_from, MAX_INPUT_MAGNITUDE
                ),
            });
        }
        Ok(())
    }
}

/// An employee's contracts, sorted oldest first, with distinct `valid_from` dates.
///
/// # Example
///
/// ```
/// use time_balance_engine::models::{Contract, ContractHistory, EmploymentType, TargetHoursModel};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let contract = |y, m, d, monthly: i64| Contract {
///     valid_from: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
///     employment_type: EmploymentType::FullTime,
///     monthly_target_hours: Decimal::new(monthly, 0),
///     daily_target_hours: Decimal::new(8, 0),
///     vacation_days_per_year: Decimal::new(30, 0),
///     target_hours_model: TargetHoursModel::Monthly,
///     weekly_schedule: None,
/// };
///
/// let history = ContractHistory::new(vec![contract(2024, 7, 1, 80), contract(2024, 1, 1, 160)]).unwrap();
/// let july = history.effective_on(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()).unwrap();
/// assert_eq!(july.monthly_target_hours, Decimal::new(80, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Contract>", into = "Vec<Contract>")]
pub struct ContractHistory {
    contracts: Vec<Contract>,
}

impl ContractHistory {
    /// Builds a history from contracts in any order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidContractHistory`] if two contracts share
    /// a `valid_from` date.
    pub fn new(contracts: Vec<Contract>) -> EngineResult<Self> {
        let mut sorted = contracts;
        sorted.sort_by(|a, b| a.valid_from.cmp(&b.valid_from));

        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[0].valid_from == pair[1].valid_from)
        {
            return Err(EngineError::InvalidContractHistory {
                valid_from: pair[0].valid_from,
            });
        }

        Ok(Self { contracts: sorted })
    }

    /// Returns true if the history holds no contracts.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Returns the number of contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns the contracts, oldest first.
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Returns the chronologically earliest contract.
    pub fn earliest(&self) -> Option<&Contract> {
        self.contracts.first()
    }

    /// Returns the contract in effect on `date`.
    ///
    /// This is the contract with the greatest `valid_from` not after `date`;
    /// dates before the earliest contract fall back to the earliest one.
    /// Returns `None` only for an empty history.
    pub fn effective_on(&self, date: NaiveDate) -> Option<&Contract> {
        self.contracts
            .iter()
            .rfind(|c| c.valid_from <= date)
            .or_else(|| self.earliest())
    }
}

impl TryFrom<Vec<Contract>> for ContractHistory {
    type Error = EngineError;

    fn try_from(contracts: Vec<Contract>) -> EngineResult<Self> {
        Self::new(contracts)
    }
}

impl From<ContractHistory> for Vec<Contract> {
    fn from(history: ContractHistory) -> Self {
        history.contracts
    }
}
