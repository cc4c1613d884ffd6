//! Public holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] type and the [`HolidayCalendar`], the
//! year-keyed holiday map the calculations consult.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A public holiday in one region.
///
/// # Example
///
/// ```
/// use time_balance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 10, 3).unwrap(),
///     name: "Tag der Deutschen Einheit".to_string(),
///     region: "DE-BY".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// The region the holiday applies to.
    #[serde(default)]
    pub region: String,
}

/// Holidays grouped by calendar year.
///
/// A year that is present with an empty list means "no holidays"; a year that
/// is absent has not been fetched yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    years: BTreeMap<i32, Vec<Holiday>>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from loose holidays, grouping them by year.
    pub fn from_holidays(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar
                .years
                .entry(holiday.date.year())
                .or_default()
                .push(holiday);
        }
        calendar
    }

    /// Stores the holidays of `year`, replacing any previous list.
    pub fn insert_year(&mut self, year: i32, holidays: Vec<Holiday>) {
        self.years.insert(year, holidays);
    }

    /// Returns true if `year` has been loaded.
    pub fn has_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Returns the holidays of `year`, empty if the year is not loaded.
    pub fn holidays_in(&self, year: i32) -> &[Holiday] {
        self.years.get(&year).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the holiday falling on `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays_in(date.year()).iter().find(|h| h.date == date)
    }

    /// Returns true if `date` is a holiday.
    ///
    /// # Example
    ///
    /// ```
    /// use time_balance_engine::models::{Holiday, HolidayCalendar};
    /// use chrono::NaiveDate;
    ///
    /// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    /// let calendar = HolidayCalendar::from_holidays(vec![Holiday {
    ///     date: christmas,
    ///     name: "1. Weihnachtstag".to_string(),
    ///     region: "DE-BY".to_string(),
    /// }]);
    ///
    /// assert!(calendar.is_holiday(christmas));
    /// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()));
    /// ```
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }

    /// Returns the years in `years` that have not been loaded.
    pub fn missing_years(&self, years: RangeInclusive<i32>) -> Vec<i32> {
        years.filter(|year| !self.has_year(*year)).collect()
    }
}
