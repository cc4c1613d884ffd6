//! Manual time balance adjustments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{MAX_INPUT_MAGNITUDE, exceeds_input_limit};

/// A signed manual correction to an employee's balance.
///
/// Counted in full on its date regardless of weekday or schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBalanceAdjustment {
    /// Unique identifier for the adjustment.
    #[serde(default)]
    pub id: String,
    /// The employee whose balance is corrected.
    pub employee_id: String,
    /// The date the correction is booked on.
    pub date: NaiveDate,
    /// Hours added (positive) or removed (negative).
    pub hours: Decimal,
    /// Free-text reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl TimeBalanceAdjustment {
    /// Rejects adjustments whose hours exceed [`MAX_INPUT_MAGNITUDE`] in either direction.
    pub fn validate(&self) -> EngineResult<()> {
        if exceeds_input_limit(self.hours) {
            return Err(EngineError::InvalidAdjustment {
                adjustment_id: self.id.clone(),
                message: format!("hours must lie within ±{}", MAX_INPUT_MAGNITUDE),
            });
        }
        Ok(())
    }
}
