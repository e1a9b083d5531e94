//! # Money
//!
//! Whole cents in an `i64`. Rates, grooming add-ons and booking totals are
//! all exact sums and products of cents, so no float ever enters a price.
//! Arithmetic is checked: an overflowing total is `None`, never a panic.
//!
//! ```rust
//! use kennel_core::money::Money;
//!
//! let stay = Money::from_dollars(45).checked_mul(3).unwrap();
//! let total = stay.checked_add(Money::from_cents(2500)).unwrap();
//! assert_eq!(total.to_string(), "$160.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// An amount in cents. Serializes as the bare integer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole-dollar amount, for rate tables.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Sum, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Nightly rate times nights, or `None` on overflow.
    #[inline]
    pub const fn checked_mul(self, nights: u32) -> Option<Money> {
        match self.0.checked_mul(nights as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

/// `$135.00`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(13500).to_string(), "$135.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::default().to_string(), "$0.00");
    }

    #[test]
    fn test_stay_arithmetic() {
        let total = Money::from_dollars(45)
            .checked_mul(3)
            .and_then(|stay| stay.checked_add(Money::from_dollars(25)));
        assert_eq!(total, Some(Money::from_cents(16000)));
    }

    #[test]
    fn test_overflow_is_none() {
        assert_eq!(Money::from_cents(i64::MAX).checked_mul(2), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_mul(1), Some(Money::from_cents(i64::MAX)));
    }

    #[test]
    fn test_serializes_as_integer_cents() {
        let json = serde_json::to_string(&Money::from_cents(4500)).unwrap();
        assert_eq!(json, "4500");
    }
}
