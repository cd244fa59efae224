//! Whole-unit price representation.
//!
//! Menu prices carry no fractional part, so amounts are stored as whole
//! rupees and formatted with the ₹ glyph and no decimal places. Tax is the
//! only computation that leaves integer space, and it goes through
//! `rust_decimal` so the rounding is explicit.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// GST rate applied to the cart subtotal (5%).
const TAX_RATE_PERCENT: i64 = 5;

/// A monetary amount in whole rupees.
///
/// Serializes transparently as a plain integer, which is also the wire
/// representation the order backend expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount in whole rupees.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Line total for `quantity` units at this price.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }

    /// GST on this amount, rounded to the nearest whole rupee.
    ///
    /// Halves round away from zero, so a subtotal of 250 yields a tax of 13
    /// (12.5 rounds up), matching what the order backend bills.
    #[must_use]
    pub fn tax(self) -> Self {
        let rate = Decimal::new(TAX_RATE_PERCENT, 2);
        let tax = (Decimal::from(self.0) * rate)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // 5% of a u64 amount always fits back into a u64
        Self(tax.to_u64().unwrap_or(0))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_glyph_and_no_decimals() {
        assert_eq!(Price::new(250).to_string(), "₹250");
        assert_eq!(Price::ZERO.to_string(), "₹0");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::new(100).times(3), Price::new(300));
        assert_eq!(Price::new(100).times(0), Price::ZERO);
    }

    #[test]
    fn test_tax_rounds_halves_up() {
        // 5% of 250 is 12.5, which must round to 13
        assert_eq!(Price::new(250).tax(), Price::new(13));
    }

    #[test]
    fn test_tax_rounds_down_below_half() {
        // 5% of 240 is 12.0 exactly
        assert_eq!(Price::new(240).tax(), Price::new(12));
        // 5% of 248 is 12.4
        assert_eq!(Price::new(248).tax(), Price::new(12));
    }

    #[test]
    fn test_tax_of_zero() {
        assert_eq!(Price::ZERO.tax(), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::new(100), Price::new(50), Price::new(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(175));
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&Price::new(120)).unwrap();
        assert_eq!(json, "120");

        let parsed: Price = serde_json::from_str("120").unwrap();
        assert_eq!(parsed, Price::new(120));
    }
}
