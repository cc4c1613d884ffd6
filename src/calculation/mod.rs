//! Calculation logic for the Time Balance Engine.
//!
//! This module contains the pure calculations over an employee snapshot:
//! contract resolution, the scheduled hours of a day, day classification for
//! holidays and absences, the cumulative hour balance, monthly breakdowns and
//! the annual vacation/sick day accounting.

mod annual_entitlement;
mod balance;
mod calendar;
mod contract_resolver;
mod daily_schedule;
mod day_classification;
mod monthly_breakdown;

pub use annual_entitlement::calculate_annual_entitlement;
pub use balance::{BalanceContext, calculate_balance};
pub use contract_resolver::resolve_contract;
pub use daily_schedule::scheduled_hours;
pub use day_classification::{DayClassification, DayCredit, classify_day};
pub use monthly_breakdown::{calculate_monthly_breakdown, calculate_year_breakdowns};
