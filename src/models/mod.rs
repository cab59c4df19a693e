//! Core data models for the PAYE engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod salary_input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BracketAllocation, DeductionSet, PayeeCalculation,
    ReliefBreakdown, TaxResult,
};
pub use salary_input::{DeductionToggles, MONTHS_PER_YEAR, SalaryInput};
