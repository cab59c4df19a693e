//! Tax schedule configuration.
//!
//! This module provides the statutory PAYE schedule (deduction rates, relief
//! rules and the progressive bracket table) and a loader for schedules kept
//! in YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payee_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ng_pita").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CONTRIBUTABLE_BASE, MIN_RELIEF_RATE, NHF_RATE, NHIS_RATE, PENSION_RATE, RELIEF_FLOOR,
    ReliefRules, STATUTORY_BRACKETS, ScheduleMetadata, StatutoryRates, TaxBracket, TaxSchedule,
    VARIABLE_RELIEF_RATE,
};
