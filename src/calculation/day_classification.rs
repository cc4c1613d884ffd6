//! Per-day absence and holiday classification.
//!
//! This module decides what, if anything, covers a single calendar date and
//! how much of the day's scheduled hours that earns. It is a pure function of
//! the date, the approved absences and the holiday calendar, so it can be
//! tested independently of the balance accumulation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AbsenceRequest, AbsenceType, DayPortion, HolidayCalendar};

/// What covers a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "portion")]
pub enum DayClassification {
    /// A public holiday; takes precedence over any absence.
    Holiday,
    /// Approved vacation for the full day or half of it.
    Vacation(DayPortion),
    /// Approved sick leave.
    SickLeave,
    /// Approved unpaid time off.
    TimeOff,
    /// Nothing covers the date.
    None,
}

/// Hours credited for one day, kept apart by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCredit {
    /// Credit from a public holiday.
    pub holiday: Decimal,
    /// Credit from vacation.
    pub vacation: Decimal,
    /// Credit from sick leave.
    pub sick_leave: Decimal,
}

impl DayCredit {
    /// Sum of all three sources.
    pub fn total(&self) -> Decimal {
        self.holiday + self.vacation + self.sick_leave
    }
}

impl DayClassification {
    /// Returns the credit this classification earns on a day with `scheduled` hours.
    ///
    /// Holidays, full-day vacation and sick leave earn the scheduled hours,
    /// half-day vacation earns half of them and time off earns nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use time_balance_engine::calculation::DayClassification;
    /// use time_balance_engine::models::DayPortion;
    /// use rust_decimal::Decimal;
    ///
    /// let credit = DayClassification::Vacation(DayPortion::Pm).credit(Decimal::new(8, 0));
    /// assert_eq!(credit.vacation, Decimal::new(4, 0));
    /// assert_eq!(DayClassification::TimeOff.credit(Decimal::new(8, 0)).total(), Decimal::ZERO);
    /// ```
    pub fn credit(self, scheduled: Decimal) -> DayCredit {
        match self {
            DayClassification::Holiday => DayCredit {
                holiday: scheduled,
                ..DayCredit::default()
            },
            DayClassification::Vacation(portion) => DayCredit {
                vacation: scheduled * portion.day_fraction(),
                ..DayCredit::default()
            },
            DayClassification::SickLeave => DayCredit {
                sick_leave: scheduled,
                ..DayCredit::default()
            },
            DayClassification::TimeOff | DayClassification::None => DayCredit::default(),
        }
    }
}

/// Classifies `date` against the holiday calendar and the given absences.
///
/// Only approved absences are considered. A holiday wins over any absence.
/// If several approved absences cover the date the first one in iteration
/// order is used and the conflict is logged.
pub fn classify_day<'a, I>(
    date: NaiveDate,
    absences: I,
    holidays: &HolidayCalendar,
) -> DayClassification
where
    I: IntoIterator<Item = &'a AbsenceRequest>,
{
    if holidays.is_holiday(date) {
        return DayClassification::Holiday;
    }

    let mut covering = absences
        .into_iter()
        .filter(|a| a.is_approved() && a.covers(date));

    let Some(first) = covering.next() else {
        return DayClassification::None;
    };

    let others: Vec<&str> = covering.map(|a| a.id.as_str()).collect();
    if !others.is_empty() {
        warn!(
            %date,
            employee_id = %first.employee_id,
            used = %first.id,
            ignored = ?others,
            "Overlapping approved absences; using the first match"
        );
    }

    match first.absence_type {
        AbsenceType::Vacation => DayClassification::Vacation(if first.is_half_day() {
            first.day_portion.unwrap_or_default()
        } else {
            DayPortion::Full
        }),
        AbsenceType::SickLeave => DayClassification::SickLeave,
        AbsenceType::TimeOff => DayClassification::TimeOff,
    }
}
