//! # Pricing
//!
//! A pluggable rate table: a nightly rate per species plus a grooming menu.
//! Prices are frozen onto the booking when it is created, so receipts stay
//! stable even if the table changes later.
//!
//! ```text
//! amount_due = nightly_rate(species) × days_stay + grooming_price(option)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{GroomingOption, Species};
use crate::validation::ValidationResult;

/// Nightly rates and grooming prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub dog_nightly: Money,
    pub cat_nightly: Money,
    pub bath: Money,
    pub full_groom: Money,
}

impl RateTable {
    /// Nightly rate for a species.
    pub const fn nightly(&self, species: Species) -> Money {
        match species {
            Species::Dog => self.dog_nightly,
            Species::Cat => self.cat_nightly,
        }
    }

    /// Price of a grooming add-on.
    pub const fn grooming(&self, option: GroomingOption) -> Money {
        match option {
            GroomingOption::Bath => self.bath,
            GroomingOption::Full => self.full_groom,
        }
    }

    /// Total for a stay, grooming included. A total that does not fit in
    /// `i64` cents is rejected as out of range.
    ///
    /// ## Example
    /// ```rust
    /// use kennel_core::pricing::RateTable;
    /// use kennel_core::{GroomingOption, Species};
    ///
    /// let rates = RateTable::default();
    /// let due = rates.quote(Species::Dog, 3, Some(GroomingOption::Bath)).unwrap();
    /// assert_eq!(due.cents(), 3 * 4500 + 2500);
    /// ```
    pub fn quote(
        &self,
        species: Species,
        days_stay: u32,
        grooming: Option<GroomingOption>,
    ) -> ValidationResult<Money> {
        let stay = self.nightly(species).checked_mul(days_stay);
        let total = match grooming {
            Some(option) => stay.and_then(|s| s.checked_add(self.grooming(option))),
            None => stay,
        };

        total.ok_or_else(|| ValidationError::OutOfRange {
            field: "amount due".to_string(),
            min: 0,
            max: i64::MAX,
        })
    }
}

impl Default for RateTable {
    /// $45 dogs, $35 cats, $25 bath, $55 full groom.
    fn default() -> Self {
        RateTable {
            dog_nightly: Money::from_dollars(45),
            cat_nightly: Money::from_dollars(35),
            bath: Money::from_dollars(25),
            full_groom: Money::from_dollars(55),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_without_grooming() {
        let rates = RateTable::default();
        assert_eq!(rates.quote(Species::Cat, 2, None), Ok(Money::from_cents(7000)));
    }

    #[test]
    fn test_quote_with_custom_table() {
        let rates = RateTable {
            dog_nightly: Money::from_cents(1000),
            cat_nightly: Money::from_cents(800),
            bath: Money::from_cents(300),
            full_groom: Money::from_cents(900),
        };
        assert_eq!(
            rates.quote(Species::Dog, 4, Some(GroomingOption::Full)),
            Ok(Money::from_cents(4900))
        );
    }

    #[test]
    fn test_quote_overflow_is_rejected() {
        let rates = RateTable {
            dog_nightly: Money::from_cents(i64::MAX),
            ..RateTable::default()
        };
        assert!(matches!(
            rates.quote(Species::Dog, 2, None),
            Err(ValidationError::OutOfRange { .. })
        ));

        let rates = RateTable {
            bath: Money::from_cents(i64::MAX),
            ..RateTable::default()
        };
        assert!(rates.quote(Species::Cat, 1, Some(GroomingOption::Bath)).is_err());
        assert!(rates.quote(Species::Cat, 1, None).is_ok());
    }
}
