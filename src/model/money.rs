//! Money arithmetic on `rust_decimal`.
//!
//! Amounts are rounded to 2 decimal places, half away from zero, at the points
//! where a bill fixes them: the subtotal and the tax. The total is the sum of
//! the two rounded figures, so it never needs rounding itself.

use crate::model::{CartError, OrderLine};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

const DECIMAL_PLACES: u32 = 2;

/// 5 %
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Rounds to cents, half away from zero (0.005 becomes 0.01).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// The three figures printed on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Computes the totals of `lines`. Pure; an empty slice gives all zeros.
    ///
    /// # Errors
    /// `AmountOverflow` if any intermediate amount does not fit in a `Decimal`.
    pub fn compute(lines: &[OrderLine], tax_rate: Decimal) -> Result<Self, CartError> {
        let subtotal = subtotal_of(lines)?;
        let tax = subtotal
            .checked_mul(tax_rate)
            .map(round_money)
            .ok_or(CartError::AmountOverflow)?;
        let total = subtotal.checked_add(tax).ok_or(CartError::AmountOverflow)?;
        Ok(Self {
            subtotal,
            tax,
            total,
        })
    }
}

/// Rounded sum of the line totals.
pub fn subtotal_of(lines: &[OrderLine]) -> Result<Decimal, CartError> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |acc, line| {
            line.line_total().and_then(|amount| acc.checked_add(amount))
        })
        .map(round_money)
        .ok_or(CartError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: Decimal, quantity: u32) -> OrderLine {
        OrderLine::new(name, price, quantity)
    }

    #[test]
    fn test_totals_for_table_four() {
        let lines = vec![
            line("Paneer Handi", Decimal::from(280), 1),
            line("Naan", Decimal::from(40), 2),
        ];
        let totals = Totals::compute(&lines, DEFAULT_TAX_RATE).unwrap();

        assert_eq!(totals.subtotal, Decimal::new(36000, 2));
        assert_eq!(totals.tax, Decimal::new(1800, 2));
        assert_eq!(totals.total, Decimal::new(37800, 2));
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(round_money(Decimal::new(5, 3)), Decimal::new(1, 2));
        assert_eq!(round_money(Decimal::new(-5, 3)), Decimal::new(-1, 2));
        assert_eq!(round_money(Decimal::new(1234, 4)), Decimal::new(12, 2));

        // 0.10 * 5 % = 0.005, which rounds up to a cent
        let totals = Totals::compute(&[line("Mint", Decimal::new(10, 2), 1)], DEFAULT_TAX_RATE).unwrap();
        assert_eq!(totals.tax, Decimal::new(1, 2));
        assert_eq!(totals.total, Decimal::new(11, 2));
    }

    #[test]
    fn test_subtotal_is_rounded_before_tax() {
        // 3 x 33.335 = 100.005 -> 100.01; tax 5.0005 -> 5.00
        let totals = Totals::compute(&[line("Thali", Decimal::new(33335, 3), 3)], DEFAULT_TAX_RATE).unwrap();
        assert_eq!(totals.subtotal, Decimal::new(10001, 2));
        assert_eq!(totals.tax, Decimal::new(500, 2));
        assert_eq!(totals.total, Decimal::new(10501, 2));
    }

    #[test]
    fn test_empty_lines_are_zero() {
        let totals = Totals::compute(&[], DEFAULT_TAX_RATE).unwrap();
        assert!(totals.total.is_zero());
    }

    #[test]
    fn test_oversized_amounts_are_reported() {
        assert_eq!(
            Totals::compute(&[line("Caviar", Decimal::MAX, 2)], DEFAULT_TAX_RATE),
            Err(CartError::AmountOverflow)
        );
        // each line fits, the sum does not
        let lines = [line("Caviar", Decimal::MAX, 1), line("Truffle", Decimal::MAX, 1)];
        assert_eq!(subtotal_of(&lines), Err(CartError::AmountOverflow));
        // the subtotal fits, subtotal plus tax does not
        assert_eq!(
            Totals::compute(&[line("Caviar", Decimal::MAX, 1)], DEFAULT_TAX_RATE),
            Err(CartError::AmountOverflow)
        );
    }
}
