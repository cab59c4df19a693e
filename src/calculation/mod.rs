//! Calculation logic for the PAYE engine.
//!
//! This module contains the statutory deduction, consolidated relief and
//! progressive bracket calculations, and the orchestrator that composes them
//! into a single tax result.

mod bracket_tax;
mod deductions;
mod payee;
mod relief;

pub use bracket_tax::{BracketTaxResult, calculate_bracket_tax};
pub use deductions::{DeductionResult, calculate_deductions};
pub use payee::{NEGATIVE_NET_SALARY, calculate_payee, compute_payee, compute_payee_f64};
pub use relief::{RELIEF_EXCEEDS_INCOME, ReliefResult, calculate_relief};
