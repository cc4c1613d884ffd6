//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! settings and the regional holiday files from YAML.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::holidays::{HolidayProvider, StaticHolidayProvider};
use crate::models::Holiday;

use super::types::{EngineConfig, HolidayFile};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml          # Engine settings
/// └── holidays/
///     └── DE-BY-2024.yaml  # Holidays of one region in one year
/// ```
///
/// The file names under `holidays/` are free; region and year are read from
/// the file contents.
///
/// # Example
///
/// ```no_run
/// use time_balance_engine::config::ConfigLoader;
/// use time_balance_engine::holidays::HolidayProvider;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let region = &loader.engine().default_region;
/// let holidays = loader.holidays_for_year(region, 2024).unwrap();
/// println!("{} holidays in {}", holidays.len(), region);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    holidays: StaticHolidayProvider,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - Two holiday files cover the same region and year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        let holidays = Self::load_holidays(&path.join("holidays"))?;

        info!(name = %engine.name, region = %engine.default_region, "Loaded configuration");
        Ok(Self { engine, holidays })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<StaticHolidayProvider> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut provider = StaticHolidayProvider::new();
        let mut seen = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let file = Self::load_yaml::<HolidayFile>(&path)?;
                let key = (file.region.clone(), file.year);
                if seen.contains(&key) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!("duplicate holidays for {} {}", key.0, key.1),
                    });
                }
                provider.add_year(&key.0, key.1, file.into_holidays());
                seen.push(key);
            }
        }

        Ok(provider)
    }

    /// Returns the engine settings.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }
}

impl HolidayProvider for ConfigLoader {
    fn holidays_for_year(&self, region: &str, year: i32) -> EngineResult<Vec<Holiday>> {
        self.holidays.holidays_for_year(region, year)
    }
}
