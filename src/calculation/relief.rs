//! Consolidated relief allowance calculation.
//!
//! Relief is the greater of 1% of post-deduction pay and a fixed floor, plus
//! 20% of post-deduction pay, plus the statutory deductions themselves.
//! Whatever is left of annual salary is taxable, never less than zero.

use rust_decimal::Decimal;

use crate::config::ReliefRules;
use crate::models::{AuditStep, AuditWarning, ReliefBreakdown};

/// Warning code recorded when relief exceeds salary and taxable income is clamped.
pub const RELIEF_EXCEEDS_INCOME: &str = "RELIEF_EXCEEDS_INCOME";

/// The result of the relief calculation.
#[derive(Debug, Clone)]
pub struct ReliefResult {
    /// The relief figures and taxable income.
    pub relief: ReliefBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when relief exceeded salary.
    pub warning: Option<AuditWarning>,
}

/// Computes the consolidated relief allowance and resulting taxable income.
///
/// # Arguments
///
/// * `annual_salary` - Gross annual salary
/// * `total_deductions` - Sum of statutory deductions for the year
/// * `rules` - The relief floor and rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::calculate_relief;
/// use payee_engine::config::TaxSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = TaxSchedule::statutory();
/// let result = calculate_relief(
///     Decimal::from(6_000_000),
///     Decimal::from(288_000),
///     schedule.relief(),
///     2,
/// );
///
/// assert_eq!(result.relief.min_relief, Decimal::from(200_000));
/// assert_eq!(result.relief.taxable_income, Decimal::from(4_369_600));
/// ```
pub fn calculate_relief(
    annual_salary: Decimal,
    total_deductions: Decimal,
    rules: &ReliefRules,
    step_number: u32,
) -> ReliefResult {
    let redefined_pay = annual_salary - total_deductions;
    let min_relief = (redefined_pay * rules.min_rate).max(rules.fixed_floor);
    let variable_relief = redefined_pay * rules.variable_rate;
    let total_relief = min_relief + variable_relief + total_deductions;

    let unclamped = annual_salary - total_relief;
    let taxable_income = unclamped.max(Decimal::ZERO);

    let relief = ReliefBreakdown {
        redefined_pay,
        min_relief,
        variable_relief,
        total_relief,
        taxable_income,
    };

    let warning = (unclamped < Decimal::ZERO).then(|| AuditWarning {
        code: RELIEF_EXCEEDS_INCOME.to_string(),
        message: format!(
            "Total relief {} exceeds annual salary {}; taxable income set to 0",
            total_relief.normalize(),
            annual_salary.normalize()
        ),
        severity: "low".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "consolidated_relief".to_string(),
        rule_name: "Consolidated Relief Allowance".to_string(),
        clause_ref: "PITA s.33(1)".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "fixed_floor": rules.fixed_floor.normalize().to_string()
        }),
        output: serde_json::json!({
            "redefined_pay": redefined_pay.normalize().to_string(),
            "min_relief": min_relief.normalize().to_string(),
            "variable_relief": variable_relief.normalize().to_string(),
            "total_relief": total_relief.normalize().to_string(),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        reasoning: format!(
            "max({} x {}, {}) + {} x {} + {} = {}; taxable {} - {} = {}",
            redefined_pay.normalize(),
            rules.min_rate.normalize(),
            rules.fixed_floor.normalize(),
            redefined_pay.normalize(),
            rules.variable_rate.normalize(),
            total_deductions.normalize(),
            total_relief.normalize(),
            annual_salary.normalize(),
            total_relief.normalize(),
            taxable_income.normalize()
        ),
    };

    ReliefResult {
        relief,
        audit_step,
        warning,
    }
}
