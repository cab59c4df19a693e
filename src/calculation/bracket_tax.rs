//! Progressive bracket tax calculation.
//!
//! Taxable income is poured through the bands in order: each band takes at
//! most its width and taxes that slice at its own rate. Income left over once
//! every band is full is taxed once more at the top band's rate, with no
//! further boundary.
//!
//! ## Statutory table
//!
//! | Band | Width     | Rate |
//! |------|-----------|------|
//! | 1    | 300,000   | 7%   |
//! | 2    | 300,000   | 11%  |
//! | 3    | 500,000   | 15%  |
//! | 4    | 500,000   | 19%  |
//! | 5    | 1,600,000 | 21%  |
//! | 6    | 3,200,000 | 24%  |
//! | 6+   | above     | 24%  |

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, BracketAllocation};

/// The result of applying the bracket table to taxable income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTaxResult {
    /// Total annual tax across all slices.
    pub annual_tax: Decimal,
    /// One entry per slice of income taxed, lowest band first.
    pub allocations: Vec<BracketAllocation>,
    /// One audit step per slice.
    pub audit_steps: Vec<AuditStep>,
}

/// Applies the schedule's progressive table to taxable income.
///
/// The taxed amounts of the returned allocations always sum to
/// `taxable_income`; no slice is skipped or taxed twice. A zero or negative
/// `taxable_income` produces no allocations and zero tax.
///
/// # Arguments
///
/// * `taxable_income` - Income after relief
/// * `schedule` - Supplies the bracket table
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payee_engine::calculation::calculate_bracket_tax;
/// use payee_engine::config::TaxSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = TaxSchedule::statutory();
/// let result = calculate_bracket_tax(Decimal::from(4_369_600), &schedule, 3);
///
/// assert_eq!(result.annual_tax, Decimal::from(840_704));
/// assert_eq!(result.allocations.len(), 6);
/// ```
pub fn calculate_bracket_tax(
    taxable_income: Decimal,
    schedule: &TaxSchedule,
    step_number_start: u32,
) -> BracketTaxResult {
    let brackets = schedule.brackets();
    let mut allocations = Vec::new();
    let mut remaining = taxable_income;
    let mut annual_tax = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxed_amount = remaining.min(bracket.width);
        let tax = taxed_amount * bracket.rate;
        annual_tax += tax;
        remaining -= taxed_amount;

        allocations.push(BracketAllocation {
            band: index + 1,
            width: Some(bracket.width),
            rate: bracket.rate,
            taxed_amount,
            tax,
        });
    }

    if remaining > Decimal::ZERO {
        if let Some(top) = brackets.last() {
            let tax = remaining * top.rate;
            annual_tax += tax;

            allocations.push(BracketAllocation {
                band: brackets.len(),
                width: None,
                rate: top.rate,
                taxed_amount: remaining,
                tax,
            });
        }
    }

    let audit_steps = allocations
        .iter()
        .zip(step_number_start..)
        .map(|(allocation, step_number)| allocation_audit_step(allocation, step_number))
        .collect();

    BracketTaxResult {
        annual_tax,
        allocations,
        audit_steps,
    }
}

fn allocation_audit_step(allocation: &BracketAllocation, step_number: u32) -> AuditStep {
    let percent = (allocation.rate * Decimal::ONE_HUNDRED).normalize();

    let (rule_id, rule_name, reasoning) = match allocation.width {
        Some(width) => (
            format!("bracket_{}", allocation.band),
            format!("Tax Band {}", allocation.band),
            format!(
                "{} of band width {} at {}% = {}",
                allocation.taxed_amount.normalize(),
                width.normalize(),
                percent,
                allocation.tax.normalize()
            ),
        ),
        None => (
            "bracket_above_table".to_string(),
            "Income Above Table".to_string(),
            format!(
                "{} above the table at top rate {}% = {}",
                allocation.taxed_amount.normalize(),
                percent,
                allocation.tax.normalize()
            ),
        ),
    };

    AuditStep {
        step_number,
        rule_id,
        rule_name,
        clause_ref: "PITA Sixth Schedule".to_string(),
        input: serde_json::json!({
            "band": allocation.band,
            "width": allocation.width.map(|w| w.normalize().to_string()),
            "rate": allocation.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxed_amount": allocation.taxed_amount.normalize().to_string(),
            "tax": allocation.tax.normalize().to_string()
        }),
        reasoning,
    }
}
