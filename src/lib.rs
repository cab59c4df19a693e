//! PAYE Engine for Nigerian payroll
//!
//! This crate computes Pay-As-You-Earn income tax from a gross monthly salary:
//! statutory deductions (pension, NHF, NHIS), the consolidated relief
//! allowance, and tax over the progressive bracket table. It also exposes the
//! calculation over HTTP.
//!
//! # Example
//!
//! ```
//! use payee_engine::calculation::compute_payee;
//! use payee_engine::models::DeductionToggles;
//! use rust_decimal::Decimal;
//!
//! let result = compute_payee(Decimal::from(500_000), DeductionToggles::default()).unwrap();
//! assert_eq!(result.annual_tax, Decimal::from(840_704));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
