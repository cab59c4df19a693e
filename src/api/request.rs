//! Request types for the PAYE engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{DeductionToggles, SalaryInput};

/// Request body for the `/calculate` endpoint.
///
/// The toggles are optional and default to pension on, NHF and NHIS off.
///
/// # Example
///
/// ```
/// use payee_engine::api::CalculationRequest;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{ "monthly_salary": 500000 }"#).unwrap();
/// assert!(request.pension);
/// assert!(!request.nhf);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross monthly salary, as a JSON number or string.
    pub monthly_salary: Decimal,
    /// Contribute to the pension scheme.
    #[serde(default = "default_pension")]
    pub pension: bool,
    /// Contribute to the National Housing Fund.
    #[serde(default)]
    pub nhf: bool,
    /// Contribute to the National Health Insurance Scheme.
    #[serde(default)]
    pub nhis: bool,
}

fn default_pension() -> bool {
    DeductionToggles::default().pension
}

impl CalculationRequest {
    /// The toggles carried by this request.
    pub fn toggles(&self) -> DeductionToggles {
        DeductionToggles {
            pension: self.pension,
            nhf: self.nhf,
            nhis: self.nhis,
        }
    }

    /// Validates the request into an engine input.
    pub fn to_input(&self) -> EngineResult<SalaryInput> {
        SalaryInput::new(self.monthly_salary, self.toggles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    #[test]
    fn test_defaults_applied_when_toggles_missing() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "monthly_salary": 500000 }"#).unwrap();

        assert_eq!(request.toggles(), DeductionToggles::default());
    }

    #[test]
    fn test_explicit_toggles_are_kept() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{ "monthly_salary": "250000.50", "pension": false, "nhf": true, "nhis": true }"#,
        )
        .unwrap();

        assert_eq!(
            request.monthly_salary,
            Decimal::from_str("250000.50").unwrap()
        );
        assert_eq!(
            request.toggles(),
            DeductionToggles {
                pension: false,
                nhf: true,
                nhis: true,
            }
        );
    }

    #[test]
    fn test_missing_salary_fails_to_parse() {
        let result = serde_json::from_str::<CalculationRequest>(r#"{ "pension": true }"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field"));
    }

    #[test]
    fn test_negative_salary_fails_validation() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "monthly_salary": -1 }"#).unwrap();

        assert!(matches!(
            request.to_input(),
            Err(EngineError::InvalidInput { .. })
        ));
    }
}
