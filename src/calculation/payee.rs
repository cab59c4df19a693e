//! PAYE orchestration.
//!
//! Runs the deduction, relief and bracket engines in order and assembles the
//! headline [`TaxResult`] together with the full [`PayeeCalculation`]
//! breakdown.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TaxSchedule;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DeductionToggles, MONTHS_PER_YEAR, PayeeCalculation,
    SalaryInput, TaxResult,
};

use super::bracket_tax::calculate_bracket_tax;
use super::deductions::calculate_deductions;
use super::relief::calculate_relief;

/// Warning code recorded when tax and deductions exceed gross salary.
pub const NEGATIVE_NET_SALARY: &str = "NEGATIVE_NET_SALARY";

/// Computes PAYE for a monthly salary under the statutory schedule.
///
/// # Errors
///
/// Returns `InvalidInput` if `monthly_salary` is negative or too large to
/// annualise. No partial result is produced.
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::compute_payee;
/// use payee_engine::models::DeductionToggles;
/// use rust_decimal::Decimal;
///
/// let result = compute_payee(Decimal::from(500_000), DeductionToggles::default()).unwrap();
///
/// assert_eq!(result.annual_tax, Decimal::from(840_704));
/// assert_eq!(result.monthly_pension_deduction, Decimal::from(24_000));
/// assert_eq!(result.monthly_tax.round_dp(2).to_string(), "70058.67");
/// assert_eq!(result.net_monthly_salary.round_dp(2).to_string(), "405941.33");
/// ```
pub fn compute_payee(monthly_salary: Decimal, toggles: DeductionToggles) -> EngineResult<TaxResult> {
    let input = SalaryInput::new(monthly_salary, toggles)?;
    calculate_payee(&input, &TaxSchedule::statutory()).map(|calculation| calculation.result)
}

/// Computes PAYE for a floating-point monthly salary.
///
/// NaN, infinities and negative values fail with `InvalidInput`.
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::compute_payee_f64;
/// use payee_engine::error::EngineError;
/// use payee_engine::models::DeductionToggles;
///
/// let result = compute_payee_f64(f64::NAN, DeductionToggles::default());
/// assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
/// ```
pub fn compute_payee_f64(monthly_salary: f64, toggles: DeductionToggles) -> EngineResult<TaxResult> {
    let input = SalaryInput::from_f64(monthly_salary, toggles)?;
    calculate_payee(&input, &TaxSchedule::statutory()).map(|calculation| calculation.result)
}

/// Runs the full pipeline and returns every intermediate figure.
///
/// The steps are:
/// 1. `annual_salary = monthly_salary * 12`
/// 2. statutory deductions on the contributable base
/// 3. consolidated relief and taxable income
/// 4. progressive bracket tax
/// 5. monthly figures and net salary
///
/// # Errors
///
/// Returns `InvalidInput` if the annual salary cannot be represented.
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::calculate_payee;
/// use payee_engine::config::TaxSchedule;
/// use payee_engine::models::{DeductionToggles, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(Decimal::from(500_000), DeductionToggles::default()).unwrap();
/// let calculation = calculate_payee(&input, &TaxSchedule::statutory()).unwrap();
///
/// assert_eq!(calculation.relief.taxable_income, Decimal::from(4_369_600));
/// assert_eq!(calculation.allocated_income(), calculation.relief.taxable_income);
/// ```
pub fn calculate_payee(
    input: &SalaryInput,
    schedule: &TaxSchedule,
) -> EngineResult<PayeeCalculation> {
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let annual_salary = input.annual_salary()?;

    let deduction_result = calculate_deductions(
        annual_salary,
        input.toggles(),
        schedule.statutory_rates(),
        step_number,
    )?;
    let deductions = deduction_result.deductions;
    steps.push(deduction_result.audit_step);
    step_number += 1;

    let relief_result = calculate_relief(
        annual_salary,
        deductions.total,
        schedule.relief(),
        step_number,
    );
    let relief = relief_result.relief;
    steps.push(relief_result.audit_step);
    warnings.extend(relief_result.warning);
    step_number += 1;

    let bracket_result = calculate_bracket_tax(relief.taxable_income, schedule, step_number);
    let annual_tax = bracket_result.annual_tax.normalize();
    step_number += bracket_result.audit_steps.len() as u32;
    steps.extend(bracket_result.audit_steps);

    // Trailing zeros from rate multiplication are dropped; the value is unchanged.
    let result = TaxResult {
        annual_tax,
        monthly_tax: (annual_tax / MONTHS_PER_YEAR).normalize(),
        monthly_pension_deduction: (deductions.pension / MONTHS_PER_YEAR).normalize(),
        net_monthly_salary: ((annual_salary - (annual_tax + deductions.total)) / MONTHS_PER_YEAR)
            .normalize(),
    };

    if result.net_monthly_salary < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_SALARY.to_string(),
            message: format!(
                "Tax {} plus deductions {} exceed annual salary {}",
                annual_tax,
                deductions.total.normalize(),
                annual_salary.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "monthly_summary".to_string(),
        rule_name: "Monthly Summary".to_string(),
        clause_ref: "PITA s.81".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.normalize().to_string(),
            "annual_tax": annual_tax.to_string(),
            "total_deductions": deductions.total.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_tax": result.monthly_tax.to_string(),
            "monthly_pension_deduction": result.monthly_pension_deduction.to_string(),
            "net_monthly_salary": result.net_monthly_salary.to_string()
        }),
        reasoning: format!(
            "({} - ({} + {})) / 12 = {} net per month; tax {} / 12 = {}",
            annual_salary.normalize(),
            annual_tax,
            deductions.total.normalize(),
            result.net_monthly_salary.round_dp(2),
            annual_tax,
            result.monthly_tax.round_dp(2)
        ),
    });

    debug!(
        monthly_salary = %input.monthly_salary(),
        taxable_income = %relief.taxable_income,
        annual_tax = %annual_tax,
        bands = bracket_result.allocations.len(),
        "PAYE calculated"
    );

    Ok(PayeeCalculation {
        input: *input,
        annual_salary,
        deductions,
        relief,
        brackets: bracket_result.allocations,
        result,
        audit_trace: AuditTrace { steps, warnings },
    })
}
