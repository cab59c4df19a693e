//! Calculation result models for the PAYE engine.
//!
//! This module contains the [`TaxResult`] returned by the engine's entry
//! point, and the [`PayeeCalculation`] breakdown that records every
//! intermediate figure plus an audit trace of the rules that produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryInput;

/// Statutory deductions derived from annual salary.
///
/// # Example
///
/// ```
/// use payee_engine::models::DeductionSet;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionSet::new(Decimal::from(288_000), Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(deductions.total, Decimal::from(288_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSet {
    /// Annual pension contribution.
    pub pension: Decimal,
    /// Annual National Housing Fund contribution.
    pub nhf: Decimal,
    /// Annual National Health Insurance Scheme contribution.
    pub nhis: Decimal,
    /// Sum of the three components.
    pub total: Decimal,
}

impl DeductionSet {
    /// Builds a set whose `total` is the sum of the components.
    pub fn new(pension: Decimal, nhf: Decimal, nhis: Decimal) -> Self {
        Self {
            pension,
            nhf,
            nhis,
            total: pension + nhf + nhis,
        }
    }
}

/// The consolidated relief allowance and the taxable income it leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefBreakdown {
    /// Annual salary less statutory deductions.
    pub redefined_pay: Decimal,
    /// Greater of 1% of redefined pay and the fixed floor.
    pub min_relief: Decimal,
    /// 20% of redefined pay.
    pub variable_relief: Decimal,
    /// Minimum relief + variable relief + statutory deductions.
    pub total_relief: Decimal,
    /// Annual salary less total relief, never below zero.
    pub taxable_income: Decimal,
}

/// The slice of taxable income that fell into one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketAllocation {
    /// 1-based band number. The open top slice reuses the last band's number.
    pub band: usize,
    /// Width of the band, or `None` for income above the whole table.
    pub width: Option<Decimal>,
    /// Marginal rate applied.
    pub rate: Decimal,
    /// Income taxed in this band.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`.
    pub tax: Decimal,
}

impl BracketAllocation {
    /// True for the slice above the sum of all band widths.
    pub fn is_unbounded(&self) -> bool {
        self.width.is_none()
    }
}

/// The four figures a payroll consumer needs.
///
/// Values carry full precision; rounding belongs to the display layer.
///
/// # Example
///
/// ```
/// use payee_engine::models::TaxResult;
/// use rust_decimal::Decimal;
///
/// let result = TaxResult {
///     annual_tax: Decimal::from(840_704),
///     monthly_tax: Decimal::from(840_704) / Decimal::from(12),
///     monthly_pension_deduction: Decimal::from(24_000),
///     net_monthly_salary: Decimal::from(4_871_296) / Decimal::from(12),
/// };
/// assert_eq!(result.monthly_tax.round_dp(2).to_string(), "70058.67");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// PAYE for the whole year.
    pub annual_tax: Decimal,
    /// `annual_tax / 12`.
    pub monthly_tax: Decimal,
    /// Annual pension contribution / 12.
    pub monthly_pension_deduction: Decimal,
    /// `(annual_salary - (annual_tax + deductions)) / 12`. Not clamped.
    pub net_monthly_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory provision for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag figures worth a second look; they never stop a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The full breakdown behind a [`TaxResult`].
///
/// Contains no timestamps or identifiers, so two calculations over the same
/// input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayeeCalculation {
    /// The validated input.
    pub input: SalaryInput,
    /// `monthly_salary * 12`.
    pub annual_salary: Decimal,
    /// Statutory deductions.
    pub deductions: DeductionSet,
    /// Relief figures and taxable income.
    pub relief: ReliefBreakdown,
    /// How taxable income was spread across the bands.
    pub brackets: Vec<BracketAllocation>,
    /// The headline figures.
    pub result: TaxResult,
    /// Rules applied, in order.
    pub audit_trace: AuditTrace,
}

impl PayeeCalculation {
    /// Sum of the per-band taxed amounts. Equals `relief.taxable_income`.
    pub fn allocated_income(&self) -> Decimal {
        self.brackets.iter().map(|b| b.taxed_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeductionToggles;
    use std::str::FromStr;

    /// Helper function to create Decimal values from strings
    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_allocation(taxed_amount: Decimal, width: Option<Decimal>) -> BracketAllocation {
        BracketAllocation {
            band: 1,
            width,
            rate: dec("0.07"),
            taxed_amount,
            tax: taxed_amount * dec("0.07"),
        }
    }

    #[test]
    fn test_deduction_set_total_is_sum() {
        let set = DeductionSet::new(dec("288000"), dec("90000"), dec("180000"));
        assert_eq!(set.total, dec("558000"));
    }

    #[test]
    fn test_allocation_unbounded_flag() {
        assert!(!create_sample_allocation(dec("100"), Some(dec("300000"))).is_unbounded());
        assert!(create_sample_allocation(dec("100"), None).is_unbounded());
    }

    #[test]
    fn test_allocated_income_sums_bands() {
        let calculation = PayeeCalculation {
            input: SalaryInput::new(dec("100000"), DeductionToggles::NONE).unwrap(),
            annual_salary: dec("1200000"),
            deductions: DeductionSet::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            relief: ReliefBreakdown {
                redefined_pay: dec("1200000"),
                min_relief: dec("200000"),
                variable_relief: dec("240000"),
                total_relief: dec("440000"),
                taxable_income: dec("760000"),
            },
            brackets: vec![
                create_sample_allocation(dec("300000"), Some(dec("300000"))),
                create_sample_allocation(dec("300000"), Some(dec("300000"))),
                create_sample_allocation(dec("160000"), Some(dec("500000"))),
            ],
            result: TaxResult {
                annual_tax: Decimal::ZERO,
                monthly_tax: Decimal::ZERO,
                monthly_pension_deduction: Decimal::ZERO,
                net_monthly_salary: Decimal::ZERO,
            },
            audit_trace: AuditTrace::default(),
        };

        assert_eq!(calculation.allocated_income(), dec("760000"));
    }

    #[test]
    fn test_tax_result_serializes_amounts_as_strings() {
        let result = TaxResult {
            annual_tax: dec("840704"),
            monthly_tax: dec("70058.67"),
            monthly_pension_deduction: dec("24000"),
            net_monthly_salary: dec("405941.33"),
        };

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["annual_tax"], "840704");
        assert_eq!(json["net_monthly_salary"], "405941.33");
    }

    #[test]
    fn test_unbounded_width_serializes_as_null() {
        let allocation = create_sample_allocation(dec("1"), None);
        let json = serde_json::to_value(allocation).unwrap();
        assert!(json["width"].is_null());
    }
}
