//! Configuration types for PAYE computation.
//!
//! This module contains the strongly-typed schedule structures that are
//! deserialized from YAML configuration files, together with the built-in
//! statutory schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Share of annual salary on which statutory deductions are computed (60%).
pub const CONTRIBUTABLE_BASE: Decimal = Decimal::from_parts(60, 0, 0, false, 2);
/// Employee pension contribution rate (8%).
pub const PENSION_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
/// National Housing Fund contribution rate (2.5%).
pub const NHF_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);
/// National Health Insurance Scheme contribution rate (5%).
pub const NHIS_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// Fixed floor of the consolidated relief allowance.
pub const RELIEF_FLOOR: Decimal = Decimal::from_parts(200_000, 0, 0, false, 0);
/// Percentage of post-deduction pay compared against the floor (1%).
pub const MIN_RELIEF_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Percentage of post-deduction pay granted on top of the floor (20%).
pub const VARIABLE_RELIEF_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Metadata about the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Short code identifying the schedule (e.g., "NG-PITA").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// ISO 4217 currency the amounts are expressed in.
    pub currency: String,
    /// Reference to the enabling legislation.
    pub source: String,
}

/// Statutory deduction rates.
///
/// Every rate is applied to `annual_salary * contributable_base`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Share of annual salary that deductions are computed on.
    pub contributable_base: Decimal,
    /// Pension contribution rate.
    pub pension: Decimal,
    /// National Housing Fund rate.
    pub nhf: Decimal,
    /// National Health Insurance Scheme rate.
    pub nhis: Decimal,
}

/// Consolidated relief allowance parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefRules {
    /// Fixed amount the minimum relief never falls below.
    pub fixed_floor: Decimal,
    /// Rate of post-deduction pay compared against the floor.
    pub min_rate: Decimal,
    /// Rate of post-deduction pay always granted.
    pub variable_rate: Decimal,
}

/// A single band of the progressive rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// How much income this band covers.
    pub width: Decimal,
    /// Marginal rate applied to income in this band.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket from a width and a rate.
    pub const fn new(width: Decimal, rate: Decimal) -> Self {
        Self { width, rate }
    }
}

/// The statutory progressive table, lowest band first.
pub const STATUTORY_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::new(
        Decimal::from_parts(300_000, 0, 0, false, 0),
        Decimal::from_parts(7, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(300_000, 0, 0, false, 0),
        Decimal::from_parts(11, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(500_000, 0, 0, false, 0),
        Decimal::from_parts(15, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(500_000, 0, 0, false, 0),
        Decimal::from_parts(19, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(1_600_000, 0, 0, false, 0),
        Decimal::from_parts(21, 0, 0, false, 2),
    ),
    TaxBracket::new(
        Decimal::from_parts(3_200_000, 0, 0, false, 0),
        Decimal::from_parts(24, 0, 0, false, 2),
    ),
];

/// Schedule configuration file structure (schedule.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFile {
    /// Schedule metadata.
    pub schedule: ScheduleMetadata,
    /// Statutory deduction rates.
    pub statutory: StatutoryRates,
    /// Relief parameters.
    pub relief: ReliefRules,
}

/// Bracket configuration file structure (brackets.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsFile {
    /// Bands in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// The complete tax schedule used by the calculation engines.
///
/// Loaded once and never mutated. The last bracket's rate also applies to
/// any income beyond the sum of all widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    metadata: ScheduleMetadata,
    statutory: StatutoryRates,
    relief: ReliefRules,
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Creates a schedule from its component parts, rejecting tables the
    /// bracket engine cannot apply.
    pub fn new(
        metadata: ScheduleMetadata,
        statutory: StatutoryRates,
        relief: ReliefRules,
        brackets: Vec<TaxBracket>,
    ) -> EngineResult<Self> {
        let schedule = Self {
            metadata,
            statutory,
            relief,
            brackets,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// The Nigerian statutory schedule, built without any I/O.
    pub fn statutory() -> Self {
        Self {
            metadata: ScheduleMetadata {
                code: "NG-PITA".to_string(),
                name: "Personal Income Tax Act (PAYE)".to_string(),
                currency: "NGN".to_string(),
                source: "Personal Income Tax (Amendment) Act 2011, Sixth Schedule".to_string(),
            },
            statutory: StatutoryRates {
                contributable_base: CONTRIBUTABLE_BASE,
                pension: PENSION_RATE,
                nhf: NHF_RATE,
                nhis: NHIS_RATE,
            },
            relief: ReliefRules {
                fixed_floor: RELIEF_FLOOR,
                min_rate: MIN_RELIEF_RATE,
                variable_rate: VARIABLE_RELIEF_RATE,
            },
            brackets: STATUTORY_BRACKETS.to_vec(),
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the statutory deduction rates.
    pub fn statutory_rates(&self) -> &StatutoryRates {
        &self.statutory
    }

    /// Returns the relief parameters.
    pub fn relief(&self) -> &ReliefRules {
        &self.relief
    }

    /// Returns the bracket table, lowest band first.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Sum of all bracket widths; income above this falls in the open top band.
    pub fn bounded_income(&self) -> Decimal {
        self.brackets.iter().map(|b| b.width).sum()
    }

    fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidSchedule {
                message: "at least one bracket is required".to_string(),
            });
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.width <= Decimal::ZERO {
                return Err(EngineError::InvalidSchedule {
                    message: format!("bracket {} has a non-positive width", index + 1),
                });
            }
            check_rate(&format!("bracket {} rate", index + 1), bracket.rate)?;
        }

        let statutory = &self.statutory;
        check_rate("contributable_base", statutory.contributable_base)?;
        check_rate("pension", statutory.pension)?;
        check_rate("nhf", statutory.nhf)?;
        check_rate("nhis", statutory.nhis)?;

        let relief = &self.relief;
        if relief.fixed_floor < Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: "relief fixed_floor must not be negative".to_string(),
            });
        }
        check_rate("relief min_rate", relief.min_rate)?;
        check_rate("relief variable_rate", relief.variable_rate)?;

        Ok(())
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::statutory()
    }
}

fn check_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::InvalidSchedule {
            message: format!("{} must be between 0 and 1, got {}", name, rate),
        });
    }
    Ok(())
}
