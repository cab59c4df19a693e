//! Statutory deduction calculation.
//!
//! Pension, National Housing Fund and National Health Insurance Scheme
//! contributions are each computed on the contributable base (60% of annual
//! salary) at their own rate. A disabled toggle contributes nothing.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DeductionSet, DeductionToggles};

/// The result of deriving statutory deductions, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// The derived deductions.
    pub deductions: DeductionSet,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the annual statutory deductions for a salary.
///
/// # Arguments
///
/// * `annual_salary` - Gross annual salary; must not be negative
/// * `toggles` - Which deductions apply
/// * `rates` - The statutory rates and contributable base
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidInput` for a negative salary. No partial result is built.
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::calculate_deductions;
/// use payee_engine::config::TaxSchedule;
/// use payee_engine::models::DeductionToggles;
/// use rust_decimal::Decimal;
///
/// let schedule = TaxSchedule::statutory();
/// let result = calculate_deductions(
///     Decimal::from(6_000_000),
///     DeductionToggles::default(),
///     schedule.statutory_rates(),
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(result.deductions.pension, Decimal::from(288_000));
/// assert_eq!(result.deductions.total, Decimal::from(288_000));
/// ```
pub fn calculate_deductions(
    annual_salary: Decimal,
    toggles: DeductionToggles,
    rates: &StatutoryRates,
    step_number: u32,
) -> EngineResult<DeductionResult> {
    if annual_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "annual_salary",
            format!("must not be negative, got {}", annual_salary),
        ));
    }

    let base = annual_salary * rates.contributable_base;
    let contribution = |enabled: bool, rate: Decimal| {
        if enabled { base * rate } else { Decimal::ZERO }
    };

    let deductions = DeductionSet::new(
        contribution(toggles.pension, rates.pension),
        contribution(toggles.nhf, rates.nhf),
        contribution(toggles.nhis, rates.nhis),
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        clause_ref: "PITA s.20; Pension Reform Act 2014; NHF Act; NHIS Act".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.normalize().to_string(),
            "contributable_base": rates.contributable_base.normalize().to_string(),
            "pension": toggles.pension,
            "nhf": toggles.nhf,
            "nhis": toggles.nhis
        }),
        output: serde_json::json!({
            "pension": deductions.pension.normalize().to_string(),
            "nhf": deductions.nhf.normalize().to_string(),
            "nhis": deductions.nhis.normalize().to_string(),
            "total": deductions.total.normalize().to_string()
        }),
        reasoning: format!(
            "Contributable base {} x {} = {}; pension {}, NHF {}, NHIS {}; total {}",
            annual_salary.normalize(),
            rates.contributable_base.normalize(),
            base.normalize(),
            deductions.pension.normalize(),
            deductions.nhf.normalize(),
            deductions.nhis.normalize(),
            deductions.total.normalize()
        ),
    };

    Ok(DeductionResult {
        deductions,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxSchedule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn deduct(annual_salary: &str, toggles: DeductionToggles) -> DeductionResult {
        let schedule = TaxSchedule::statutory();
        calculate_deductions(dec(annual_salary), toggles, schedule.statutory_rates(), 1).unwrap()
    }

    #[test]
    fn test_pension_only_is_eight_percent_of_sixty_percent() {
        let result = deduct("6000000", DeductionToggles::default());

        assert_eq!(result.deductions.pension, dec("288000"));
        assert_eq!(result.deductions.nhf, Decimal::ZERO);
        assert_eq!(result.deductions.nhis, Decimal::ZERO);
        assert_eq!(result.deductions.total, dec("288000"));
    }

    #[test]
    fn test_all_toggles_enabled() {
        let result = deduct("6000000", DeductionToggles::ALL);

        // base 3,600,000: 8% = 288,000; 2.5% = 90,000; 5% = 180,000
        assert_eq!(result.deductions.pension, dec("288000"));
        assert_eq!(result.deductions.nhf, dec("90000"));
        assert_eq!(result.deductions.nhis, dec("180000"));
        assert_eq!(result.deductions.total, dec("558000"));
    }

    #[test]
    fn test_all_toggles_disabled_yield_zero() {
        let result = deduct("6000000", DeductionToggles::NONE);

        assert_eq!(result.deductions.total, Decimal::ZERO);
        assert_eq!(result.deductions.pension, Decimal::ZERO);
    }

    #[test]
    fn test_zero_salary_yields_zero_deductions() {
        let result = deduct("0", DeductionToggles::ALL);
        assert_eq!(result.deductions.total, Decimal::ZERO);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let schedule = TaxSchedule::statutory();
        let result = calculate_deductions(
            dec("-12"),
            DeductionToggles::default(),
            schedule.statutory_rates(),
            1,
        );

        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "annual_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_records_inputs_and_total() {
        let result = deduct("6000000", DeductionToggles::default());

        assert_eq!(result.audit_step.step_number, 1);
        assert_eq!(result.audit_step.rule_id, "statutory_deductions");
        assert_eq!(result.audit_step.input["pension"].as_bool().unwrap(), true);
        assert_eq!(result.audit_step.input["nhf"].as_bool().unwrap(), false);
        assert_eq!(
            result.audit_step.output["total"].as_str().unwrap(),
            "288000"
        );
        assert!(result.audit_step.reasoning.contains("3600000"));
    }
}
