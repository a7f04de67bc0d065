//! Smallest-unit to display-currency conversion.
//!
//! On-chain revenue is counted in the ledger's indivisible unit (octas);
//! the presentation layer works in whole coins. Uses `rust_decimal` so the
//! fixed 10^8 rescale stays exact, avoiding floating-point drift in
//! currency values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Indivisible units per whole display coin.
pub const OCTAS_PER_COIN: u64 = 100_000_000;

/// Display-currency amount with exact decimal precision.
///
/// Wraps `Decimal` to keep converted revenue from being mixed back up
/// with raw on-chain unit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Amount {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Rescale a raw integer revenue count into display currency.
///
/// Exact division by `OCTAS_PER_COIN`; display rounding is the
/// presentation layer's concern, not this conversion's.
#[inline]
pub fn to_display_amount(raw: u64) -> Amount {
    Amount(Decimal::from(raw) / Decimal::from(OCTAS_PER_COIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_division() {
        assert_eq!(to_display_amount(150_000_000).inner(), dec!(1.5));
        assert_eq!(to_display_amount(100_000_000).inner(), dec!(1));
        assert_eq!(to_display_amount(1).inner(), dec!(0.00000001));
    }

    #[test]
    fn test_zero() {
        let amount = to_display_amount(0);
        assert!(amount.is_zero());
        assert_eq!(amount, Amount::ZERO);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = to_display_amount(0);
        for raw in [1u64, 99, 100_000_000, 100_000_001, u64::MAX] {
            let next = to_display_amount(raw);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_sales_counts_untouched_by_conversion() {
        // Only revenue goes through the divisor; a count of 3 stays 3.
        assert_eq!(to_display_amount(3).inner(), dec!(0.00000003));
        assert_ne!(to_display_amount(3).inner(), dec!(3));
    }

    #[test]
    fn test_amount_add() {
        let total = to_display_amount(150_000_000) + to_display_amount(50_000_000);
        assert_eq!(total.inner(), dec!(2));
    }

    #[test]
    fn test_amount_parse_and_display() {
        let amount: Amount = "1.5".parse().unwrap();
        assert_eq!(amount.to_string(), "1.5");
    }
}
