//! Configuration loading and management for the time balance engine.
//!
//! This module loads the engine settings and the regional public holiday
//! files from a YAML configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use time_balance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, HolidayEntry, HolidayFile};
