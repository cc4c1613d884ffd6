//! Configuration types for the time balance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Holiday;

/// Engine settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Human-readable name of the deployment.
    pub name: String,
    /// Holiday region used when a request does not name one (e.g. "DE-BY").
    pub default_region: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Most calendar years a single request may cover, counted from the
    /// employee's first work year.
    #[serde(default = "default_max_span_years")]
    pub max_span_years: u32,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_span_years() -> u32 {
    100
}

/// One holiday line in a holiday file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// A holiday file: the holidays of one region in one year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The region the file belongs to.
    pub region: String,
    /// The calendar year the file covers.
    pub year: i32,
    /// The holidays; may be empty.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

impl HolidayFile {
    /// Converts the entries into [`Holiday`] records tagged with the file's region.
    pub fn into_holidays(self) -> Vec<Holiday> {
        let region = self.region;
        self.holidays
            .into_iter()
            .map(|entry| Holiday {
                date: entry.date,
                name: entry.name,
                region: region.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let yaml = "name: Test\ndefault_region: DE-BY\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_region, "DE-BY");
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.max_span_years, 100);
    }

    #[test]
    fn test_holiday_file_tags_region() {
        let yaml = r#"
region: DE-BY
year: 2024
holidays:
  - date: 2024-08-15
    name: Mariä Himmelfahrt
"#;
        let file: HolidayFile = serde_yaml::from_str(yaml).unwrap();
        let holidays = file.into_holidays();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].region, "DE-BY");
        assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap());
    }
}
