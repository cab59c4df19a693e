//! Presentation helpers for naira amounts.
//!
//! The calculation engines return full-precision figures. Rounding to kobo
//! and `en-NG` currency formatting happen only here, at the display boundary.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::TaxResult;

/// The naira sign.
pub const NAIRA_SIGN: char = '\u{20A6}';

/// Rounds to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use payee_engine::display::round_to_kobo;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_kobo(Decimal::from_str("70058.666").unwrap()).to_string(), "70058.67");
/// assert_eq!(round_to_kobo(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// ```
pub fn round_to_kobo(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `en-NG` naira with two fraction digits.
///
/// # Examples
///
/// ```
/// use payee_engine::display::format_naira;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_naira(Decimal::from(405_941)), "\u{20A6}405,941.00");
/// assert_eq!(format_naira(Decimal::from(-1_500)), "-\u{20A6}1,500.00");
/// ```
pub fn format_naira(value: Decimal) -> String {
    let mut rounded = round_to_kobo(value);
    rounded.rescale(2);

    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        NAIRA_SIGN,
        grouped,
        fraction
    )
}

/// The four result figures formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTaxResult {
    /// PAYE per annum.
    pub annual_tax: String,
    /// Monthly tax pay.
    pub monthly_tax: String,
    /// Monthly pension.
    pub monthly_pension_deduction: String,
    /// Net monthly salary.
    pub net_monthly_salary: String,
}

impl From<&TaxResult> for FormattedTaxResult {
    fn from(result: &TaxResult) -> Self {
        Self {
            annual_tax: format_naira(result.annual_tax),
            monthly_tax: format_naira(result.monthly_tax),
            monthly_pension_deduction: format_naira(result.monthly_pension_deduction),
            net_monthly_salary: format_naira(result.net_monthly_salary),
        }
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
    fn test_round_to_kobo_half_away_from_zero() {
        assert_eq!(round_to_kobo(dec("1.005")), dec("1.01"));
        assert_eq!(round_to_kobo(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_to_kobo(dec("1.004")), dec("1.00"));
    }

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(format_naira(Decimal::ZERO), "\u{20A6}0.00");
        assert_eq!(format_naira(dec("7")), "\u{20A6}7.00");
        assert_eq!(format_naira(dec("999.999")), "\u{20A6}1,000.00");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_naira(dec("1000")), "\u{20A6}1,000.00");
        assert_eq!(format_naira(dec("840704")), "\u{20A6}840,704.00");
        assert_eq!(format_naira(dec("6400000.5")), "\u{20A6}6,400,000.50");
        assert_eq!(format_naira(dec("123456789.01")), "\u{20A6}123,456,789.01");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_naira(dec("-1234.5")), "-\u{20A6}1,234.50");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_naira(dec("-0.001")), "\u{20A6}0.00");
    }

    #[test]
    fn test_formatted_tax_result() {
        let result = TaxResult {
            annual_tax: dec("840704"),
            monthly_tax: dec("840704") / dec("12"),
            monthly_pension_deduction: dec("24000"),
            net_monthly_salary: dec("4871296") / dec("12"),
        };

        let formatted = FormattedTaxResult::from(&result);

        assert_eq!(formatted.annual_tax, "\u{20A6}840,704.00");
        assert_eq!(formatted.monthly_tax, "\u{20A6}70,058.67");
        assert_eq!(formatted.monthly_pension_deduction, "\u{20A6}24,000.00");
        assert_eq!(formatted.net_monthly_salary, "\u{20A6}405,941.33");
    }
}
