//! Salary input model.
//!
//! This module contains the [`SalaryInput`] type consumed by the PAYE
//! orchestrator, and the [`DeductionToggles`] that select which statutory
//! deductions apply.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of pay months in a tax year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Which statutory deductions the employee contributes to.
///
/// Pension is on by default; NHF and NHIS are opt-in.
///
/// # Example
///
/// ```
/// use payee_engine::models::DeductionToggles;
///
/// let toggles = DeductionToggles::default();
/// assert!(toggles.pension);
/// assert!(!toggles.nhf);
/// assert!(!toggles.nhis);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeductionToggles {
    /// Contributory pension scheme.
    pub pension: bool,
    /// National Housing Fund.
    pub nhf: bool,
    /// National Health Insurance Scheme.
    pub nhis: bool,
}

impl DeductionToggles {
    /// All deductions disabled.
    pub const NONE: Self = Self {
        pension: false,
        nhf: false,
        nhis: false,
    };

    /// All deductions enabled.
    pub const ALL: Self = Self {
        pension: true,
        nhf: true,
        nhis: true,
    };
}

impl Default for DeductionToggles {
    fn default() -> Self {
        Self {
            pension: true,
            nhf: false,
            nhis: false,
        }
    }
}

/// A validated gross monthly salary plus deduction toggles.
///
/// Construction rejects negative salaries, so every `SalaryInput` in
/// circulation is safe to hand to the engines.
///
/// # Example
///
/// ```
/// use payee_engine::models::{DeductionToggles, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(500_000), DeductionToggles::default()).unwrap();
/// assert_eq!(input.annual_salary().unwrap(), Decimal::from(6_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryInput {
    monthly_salary: Decimal,
    toggles: DeductionToggles,
}

impl SalaryInput {
    /// Creates an input, failing with `InvalidInput` for a negative salary.
    pub fn new(monthly_salary: Decimal, toggles: DeductionToggles) -> EngineResult<Self> {
        if monthly_salary < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "monthly_salary",
                format!("must not be negative, got {}", monthly_salary),
            ));
        }

        Ok(Self {
            monthly_salary,
            toggles,
        })
    }

    /// Creates an input from a floating-point salary.
    ///
    /// NaN, infinities, negatives and values outside the decimal range are
    /// all rejected with `InvalidInput`.
    pub fn from_f64(monthly_salary: f64, toggles: DeductionToggles) -> EngineResult<Self> {
        if !monthly_salary.is_finite() {
            return Err(EngineError::invalid_input(
                "monthly_salary",
                format!("must be a finite number, got {}", monthly_salary),
            ));
        }

        let monthly_salary = Decimal::try_from(monthly_salary).map_err(|e| {
            EngineError::invalid_input("monthly_salary", format!("out of range: {}", e))
        })?;

        Self::new(monthly_salary, toggles)
    }

    /// The gross monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    /// The deduction toggles.
    pub fn toggles(&self) -> DeductionToggles {
        self.toggles
    }

    /// Gross annual salary (`monthly_salary * 12`).
    ///
    /// Fails with `InvalidInput` if the product overflows the decimal range.
    pub fn annual_salary(&self) -> EngineResult<Decimal> {
        self.monthly_salary
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| EngineError::invalid_input("monthly_salary", "too large to annualise"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_toggles_enable_pension_only() {
        assert_eq!(
            DeductionToggles::default(),
            DeductionToggles {
                pension: true,
                nhf: false,
                nhis: false,
            }
        );
    }

    #[test]
    fn test_new_accepts_zero_salary() {
        let input = SalaryInput::new(Decimal::ZERO, DeductionToggles::default()).unwrap();
        assert_eq!(input.monthly_salary(), Decimal::ZERO);
        assert_eq!(input.annual_salary().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_new_accepts_negative_zero() {
        let negative_zero = dec("-0.00");
        assert!(SalaryInput::new(negative_zero, DeductionToggles::NONE).is_ok());
    }

    #[test]
    fn test_new_rejects_negative_salary() {
        let result = SalaryInput::new(dec("-1"), DeductionToggles::default());

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "monthly_salary");
                assert!(message.contains("-1"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_from_f64_rejects_nan_and_infinities() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = SalaryInput::from_f64(value, DeductionToggles::default());
            assert!(
                matches!(result, Err(EngineError::InvalidInput { .. })),
                "{} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_from_f64_rejects_negative() {
        let result = SalaryInput::from_f64(-1.0, DeductionToggles::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_from_f64_rejects_values_beyond_decimal_range() {
        let result = SalaryInput::from_f64(1e30, DeductionToggles::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_from_f64_converts_plain_salary() {
        let input = SalaryInput::from_f64(500000.0, DeductionToggles::default()).unwrap();
        assert_eq!(input.monthly_salary(), dec("500000"));
    }

    #[test]
    fn test_annual_salary_is_twelve_months() {
        let input = SalaryInput::new(dec("123456.78"), DeductionToggles::NONE).unwrap();
        assert_eq!(input.annual_salary().unwrap(), dec("1481481.36"));
    }

    #[test]
    fn test_annual_salary_overflow_is_invalid_input() {
        let input = SalaryInput::new(Decimal::MAX, DeductionToggles::NONE).unwrap();
        assert!(matches!(
            input.annual_salary(),
            Err(EngineError::InvalidInput { .. })
        ));
    }
}
