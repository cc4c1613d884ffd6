//! Error types for the Time Balance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine reports to its callers. The balance
//! calculation itself is total and never fails; errors come from
//! construction, validation, period checks, configuration loading and
//! holiday lookup.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Time Balance Engine.
///
/// # Example
///
/// ```
/// use time_balance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two contracts in one history share the same `valid_from` date.
    #[error("Invalid contract history: duplicate valid_from date {valid_from}")]
    InvalidContractHistory {
        /// The duplicated effective date.
        valid_from: NaiveDate,
    },

    /// An absence request was malformed or an illegal status transition was attempted.
    #[error("Invalid absence request '{absence_id}': {message}")]
    InvalidAbsence {
        /// The ID of the offending absence request.
        absence_id: String,
        /// A description of what made the request invalid.
        message: String,
    },

    /// A time entry was invalid or contained inconsistent data.
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidTimeEntry {
        /// The ID of the invalid time entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A balance adjustment was outside the accepted range.
    #[error("Invalid adjustment '{adjustment_id}': {message}")]
    InvalidAdjustment {
        /// The ID of the offending adjustment.
        adjustment_id: String,
        /// A description of what made the adjustment invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A reporting period (year/month) was out of range.
    #[error("Invalid period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u32,
    },

    /// A request would walk more years of history than the engine allows.
    #[error("Period {first_year}..={last_year} spans more than {max_years} years")]
    PeriodTooLong {
        /// The first year the calculation would cover.
        first_year: i32,
        /// The last year the calculation would cover.
        last_year: i32,
        /// The configured maximum.
        max_years: u32,
    },

    /// The holiday provider has no data for a region and year.
    #[error("No holidays available for region '{region}' in {year}")]
    HolidaysUnavailable {
        /// The requested region code.
        region: String,
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_contract_history_displays_date() {
        let error = EngineError::InvalidContractHistory {
            valid_from: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid contract history: duplicate valid_from date 2024-07-01"
        );
    }

    #[test]
    fn test_invalid_absence_displays_id_and_message() {
        let error = EngineError::InvalidAbsence {
            absence_id: "abs_001".to_string(),
            message: "half-day absence must cover a single day".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid absence request 'abs_001': half-day absence must cover a single day"
        );
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = EngineError::InvalidPeriod {
            year: 2024,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid period 2024-13");

        let error = EngineError::InvalidPeriod { year: 2024, month: 0 };
        assert_eq!(error.to_string(), "Invalid period 2024-00");
    }

    #[test]
    fn test_period_too_long_displays_range_and_limit() {
        let error = EngineError::PeriodTooLong {
            first_year: 1900,
            last_year: 2024,
            max_years: 100,
        };
        assert_eq!(
            error.to_string(),
            "Period 1900..=2024 spans more than 100 years"
        );
    }

    #[test]
    fn test_holidays_unavailable_displays_region_and_year() {
        let error = EngineError::HolidaysUnavailable {
            region: "DE-BY".to_string(),
            year: 2030,
        };
        assert_eq!(
            error.to_string(),
            "No holidays available for region 'DE-BY' in 2030"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_employee() -> EngineResult<()> {
            Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_employee()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
