//! Configuration loading and management for the hours engine.
//!
//! This module loads the labor rules (workday length, night window,
//! Saturday cutoff, rounding policy, time zone) from YAML files and
//! validates them into an immutable [`EngineConfig`].
//!
//! # Example
//!
//! ```no_run
//! use hours_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/argentina").unwrap().into_config();
//! println!("Full workday: {}h", config.rules().full_workday_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_TIMEZONE, EngineConfig, HolidaysConfig, NightWindow, RulesConfig};
