//! Public holiday lookup.
//!
//! Holidays are external data: the engine only reads them through a
//! [`HolidayProvider`], one region and year at a time, and caches what it
//! fetched in a [`HolidayCalendar`].

use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar};

/// A source of public holidays by region and year.
pub trait HolidayProvider: Send + Sync {
    /// Returns the holidays of `region` in `year`.
    ///
    /// An empty list means the year is known to have no holidays.
    /// [`EngineError::HolidaysUnavailable`] means the provider has no data.
    fn holidays_for_year(&self, region: &str, year: i32) -> EngineResult<Vec<Holiday>>;
}

/// An in-memory provider, mostly useful for tests and fixed deployments.
///
/// # Example
///
/// ```
/// use time_balance_engine::holidays::{HolidayProvider, StaticHolidayProvider};
/// use time_balance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let mut provider = StaticHolidayProvider::new();
/// provider.add_year(
///     "DE-BY",
///     2024,
///     vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
///         name: "Heilige Drei Könige".to_string(),
///         region: "DE-BY".to_string(),
///     }],
/// );
///
/// assert_eq!(provider.holidays_for_year("DE-BY", 2024).unwrap().len(), 1);
/// assert!(provider.holidays_for_year("DE-BY", 2030).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticHolidayProvider {
    years: HashMap<(String, i32), Vec<Holiday>>,
}

impl StaticHolidayProvider {
    /// Creates a provider without any data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the holidays of `region` in `year`, replacing earlier data.
    pub fn add_year(&mut self, region: &str, year: i32, holidays: Vec<Holiday>) {
        self.years.insert((region.to_string(), year), holidays);
    }
}

impl HolidayProvider for StaticHolidayProvider {
    fn holidays_for_year(&self, region: &str, year: i32) -> EngineResult<Vec<Holiday>> {
        self.years
            .get(&(region.to_string(), year))
            .cloned()
            .ok_or_else(|| EngineError::HolidaysUnavailable {
                region: region.to_string(),
                year,
            })
    }
}

impl HolidayCalendar {
    /// Fetches every year in `years` that is not loaded yet from `provider`.
    ///
    /// Years already present are left untouched, so holidays supplied by the
    /// caller win over the provider. Stops at the first provider error.
    pub fn ensure_years(
        &mut self,
        provider: &impl HolidayProvider,
        region: &str,
        years: RangeInclusive<i32>,
    ) -> EngineResult<()> {
        for year in self.missing_years(years) {
            let holidays = provider.holidays_for_year(region, year)?;
            debug!(region, year, count = holidays.len(), "Fetched holidays");
            self.insert_year(year, holidays);
        }
        Ok(())
    }
}
