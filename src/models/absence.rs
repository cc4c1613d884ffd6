//! Absence request model and its approval lifecycle.
//!
//! Requests are created as pending and move to approved or rejected exactly
//! once. Only a pending request may be retracted by its owner. Only approved
//! requests take part in balance and entitlement calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::employee::LeavePreferences;

/// The kind of absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    /// Paid vacation, counted against the annual entitlement.
    Vacation,
    /// Sick leave.
    SickLeave,
    /// Unpaid time off; recorded for reporting but never credited.
    TimeOff,
}

impl std::fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbsenceType::Vacation => write!(f, "vacation"),
            AbsenceType::SickLeave => write!(f, "sick_leave"),
            AbsenceType::TimeOff => write!(f, "time_off"),
        }
    }
}

/// Approval state of an absence request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    /// Awaiting a decision.
    #[default]
    Pending,
    /// Approved; terminal.
    Approved,
    /// Rejected; terminal.
    Rejected,
}

/// Which part of a single day an absence covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPortion {
    /// The whole day.
    #[default]
    Full,
    /// Morning only.
    Am,
    /// Afternoon only.
    Pm,
}

impl DayPortion {
    /// Returns true for morning or afternoon portions.
    pub fn is_half(self) -> bool {
        matches!(self, DayPortion::Am | DayPortion::Pm)
    }

    /// The share of a day this portion covers: 0.5 for a half, otherwise 1.
    ///
    /// # Example
    ///
    /// ```
    /// use time_balance_engine::models::DayPortion;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DayPortion::Am.day_fraction(), Decimal::new(5, 1));
    /// assert_eq!(DayPortion::Full.day_fraction(), Decimal::ONE);
    /// ```
    pub fn day_fraction(self) -> Decimal {
        if self.is_half() {
            Decimal::new(5, 1)
        } else {
            Decimal::ONE
        }
    }
}

/// A request to be absent over an inclusive range of calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRequest {
    /// Unique identifier for the request.
    #[serde(default)]
    pub id: String,
    /// The requesting employee.
    pub employee_id: String,
    /// The kind of absence.
    #[serde(rename = "type")]
    pub absence_type: AbsenceType,
    /// Current approval state.
    #[serde(default)]
    pub status: AbsenceStatus,
    /// First absent day (inclusive).
    pub start_date: NaiveDate,
    /// Last absent day (inclusive).
    pub end_date: NaiveDate,
    /// Portion of the day, only meaningful for single-day vacation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_portion: Option<DayPortion>,
}

impl AbsenceRequest {
    /// Returns true if the request is approved.
    pub fn is_approved(&self) -> bool {
        self.status == AbsenceStatus::Approved
    }

    /// Returns true if `date` lies within the request's inclusive range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this is a morning or afternoon vacation request.
    pub fn is_half_day(&self) -> bool {
        self.absence_type == AbsenceType::Vacation
            && self.day_portion.is_some_and(DayPortion::is_half)
    }

    /// Checks the request's own consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAbsence`] if the range is inverted, or a
    /// half-day portion is set on a multi-day or non-vacation request.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(self.invalid("end date before start date"));
        }
        if self.day_portion.is_some_and(DayPortion::is_half) {
            if self.absence_type != AbsenceType::Vacation {
                return Err(self.invalid("half-day portion is only allowed for vacation"));
            }
            if self.start_date != self.end_date {
                return Err(self.invalid("half-day absence must cover a single day"));
            }
        }
        Ok(())
    }

    /// Validates the request and checks it against the employee's leave preferences.
    pub fn validate_for(&self, preferences: &LeavePreferences) -> EngineResult<()> {
        self.validate()?;
        if self.is_half_day() && !preferences.allow_half_day_vacation {
            return Err(self.invalid("half-day vacation is disabled for this employee"));
        }
        Ok(())
    }

    /// Approves a pending request.
    pub fn approve(&mut self) -> EngineResult<()> {
        self.decide(AbsenceStatus::Approved)
    }

    /// Rejects a pending request.
    pub fn reject(&mut self) -> EngineResult<()> {
        self.decide(AbsenceStatus::Rejected)
    }

    /// Removes the pending request `absence_id` from `requests` and returns it.
    ///
    /// # Errors
    ///
    /// Fails if no such request exists or if it has already been decided.
    pub fn retract(
        requests: &mut Vec<AbsenceRequest>,
        absence_id: &str,
    ) -> EngineResult<AbsenceRequest> {
        let index = requests
            .iter()
            .position(|r| r.id == absence_id)
            .ok_or_else(|| EngineError::InvalidAbsence {
                absence_id: absence_id.to_string(),
                message: "not found".to_string(),
            })?;

        if requests[index].status != AbsenceStatus::Pending {
            return Err(requests[index].invalid("only pending requests can be retracted"));
        }
        Ok(requests.remove(index))
    }

    fn decide(&mut self, outcome: AbsenceStatus) -> EngineResult<()> {
        if self.status != AbsenceStatus::Pending {
            return Err(self.invalid(&format!(
                "cannot move from {:?} to {:?}",
                self.status, outcome
            )));
        }
        self.status = outcome;
        Ok(())
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidAbsence {
            absence_id: self.id.clone(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_request(
        id: &str,
        absence_type: AbsenceType,
        start: &str,
        end: &str,
        day_portion: Option<DayPortion>,
    ) -> AbsenceRequest {
        AbsenceRequest {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            absence_type,
            status: AbsenceStatus::Pending,
            start_date: make_date(start),
            end_date: make_date(end),
            day_portion,
        }
    }

    #[test]
    fn test_covers_is_inclusive() {
        let request = create_request(
            "abs_001",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-17",
            None,
        );
        assert!(request.covers(make_date("2024-01-15")));
        assert!(request.covers(make_date("2024-01-17")));
        assert!(!request.covers(make_date("2024-01-14")));
        assert!(!request.covers(make_date("2024-01-18")));
    }

    #[test]
    fn test_half_day_only_for_vacation_with_am_or_pm() {
        let am = create_request(
            "a",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-15",
            Some(DayPortion::Am),
        );
        let full = create_request(
            "b",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-15",
            Some(DayPortion::Full),
        );
        let sick_pm = create_request(
            "c",
            AbsenceType::SickLeave,
            "2024-01-15",
            "2024-01-15",
            Some(DayPortion::Pm),
        );

        assert!(am.is_half_day());
        assert!(!full.is_half_day());
        assert!(!sick_pm.is_half_day());
    }

    #[test]
    fn test_validate_rejects_multi_day_half_day() {
        let request = create_request(
            "abs_002",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-16",
            Some(DayPortion::Pm),
        );
        match request.validate() {
            Err(EngineError::InvalidAbsence { absence_id, message }) => {
                assert_eq!(absence_id, "abs_002");
                assert_eq!(message, "half-day absence must cover a single day");
            }
            other => panic!("Expected InvalidAbsence, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let request = create_request(
            "abs_003",
            AbsenceType::SickLeave,
            "2024-01-16",
            "2024-01-15",
            None,
        );
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_for_respects_half_day_preference() {
        let request = create_request(
            "abs_004",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-15",
            Some(DayPortion::Am),
        );
        let disabled = LeavePreferences {
            allow_half_day_vacation: false,
        };
        assert!(request.validate_for(&LeavePreferences::default()).is_ok());
        assert!(request.validate_for(&disabled).is_err());
    }

    #[test]
    fn test_approve_then_reject_fails() {
        let mut request = create_request(
            "abs_005",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-19",
            None,
        );
        request.approve().unwrap();
        assert!(request.is_approved());
        assert!(request.reject().is_err());
        assert_eq!(request.status, AbsenceStatus::Approved);
    }

    #[test]
    fn test_retract_removes_pending_request() {
        let mut requests = vec![
            create_request("a", AbsenceType::Vacation, "2024-01-15", "2024-01-15", None),
            create_request("b", AbsenceType::TimeOff, "2024-02-01", "2024-02-01", None),
        ];

        let removed = AbsenceRequest::retract(&mut requests, "a").unwrap();
        assert_eq!(removed.id, "a");
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_retract_refuses_decided_request() {
        let mut requests = vec![create_request(
            "a",
            AbsenceType::Vacation,
            "2024-01-15",
            "2024-01-15",
            None,
        )];
        requests[0].reject().unwrap();

        assert!(AbsenceRequest::retract(&mut requests, "a").is_err());
        assert!(AbsenceRequest::retract(&mut requests, "missing").is_err());
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn test_deserialize_uses_type_key() {
        let json = r#"{
            "id": "abs_006",
            "employee_id": "emp_001",
            "type": "sick_leave",
            "status": "approved",
            "start_date": "2024-03-04",
            "end_date": "2024-03-06"
        }"#;
        let request: AbsenceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.absence_type, AbsenceType::SickLeave);
        assert!(request.is_approved());
        assert_eq!(request.day_portion, None);
    }
}
