//! Configuration loader for tax schedules.
//!
//! This module provides the [`ConfigLoader`] struct which loads a schedule
//! from a directory of YAML files and validates it before use.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{BracketsFile, ScheduleFile, ScheduleMetadata, TaxSchedule};

/// Loads and provides access to a tax schedule.
///
/// A schedule directory contains two files:
/// - `schedule.yaml`: metadata, statutory deduction rates and relief rules
/// - `brackets.yaml`: the progressive bands, lowest first
///
/// # Example
///
/// ```no_run
/// use payee_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ng_pita")?;
/// println!("Loaded schedule: {}", loader.metadata().name);
/// # Ok::<(), payee_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: TaxSchedule,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule directory (e.g., "./config/ng_pita")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - The values do not form a usable schedule
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule_file = Self::load_yaml::<ScheduleFile>(&schedule_path)?;

        let brackets_path = path.join("brackets.yaml");
        let brackets_file = Self::load_yaml::<BracketsFile>(&brackets_path)?;

        let schedule = TaxSchedule::new(
            schedule_file.schedule,
            schedule_file.statutory,
            schedule_file.relief,
            brackets_file.brackets,
        )?;

        info!(
            code = %schedule.metadata().code,
            brackets = schedule.brackets().len(),
            path = %path.display(),
            "Loaded tax schedule"
        );

        Ok(Self { schedule })
    }

    /// Wraps the built-in statutory schedule.
    pub fn statutory() -> Self {
        Self {
            schedule: TaxSchedule::statutory(),
        }
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

    /// Returns the loaded schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::statutory()
    }
}
