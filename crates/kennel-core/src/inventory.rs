//! # Inventory
//!
//! Free spaces per species and the reserve/release pair that guards them.
//!
//! ## Capacity Invariant
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  available(species) never goes below zero                               │
//! │                                                                         │
//! │  reserve(dog)                         release(dog)                      │
//! │    available > 0 ? ── no ──► CapacityError (nothing changed)            │
//! │         │ yes                     available += 1                        │
//! │         ▼                         (no ceiling, see below)               │
//! │    available -= 1                                                       │
//! │    hand out D-<next>, next += 1                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `release` has no upper bound: repeated external releases can lift a
//! counter above the configured capacity. Hosts that need a ceiling enforce it
//! themselves.
//!
//! The check-then-decrement in `reserve` is not safe under interleaving; a
//! concurrent host must hold one lock around the whole engine
//! (see [`crate::shared::SharedEngine`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CapacityError;
use crate::types::{SpaceId, Species};

/// Snapshot of free spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryLevels {
    pub dog_spaces_available: u32,
    pub cat_spaces_available: u32,
}

/// Per-species capacity counters plus space-label counters.
#[derive(Debug, Clone)]
pub struct Inventory {
    dog_available: u32,
    cat_available: u32,
    next_dog_space: u64,
    next_cat_space: u64,
}

impl Inventory {
    /// Starts with the configured number of free spaces per species.
    pub const fn new(dog_spaces: u32, cat_spaces: u32) -> Self {
        Inventory {
            dog_available: dog_spaces,
            cat_available: cat_spaces,
            next_dog_space: 1,
            next_cat_space: 1,
        }
    }

    /// Free spaces for a species.
    pub const fn available(&self, species: Species) -> u32 {
        match species {
            Species::Dog => self.dog_available,
            Species::Cat => self.cat_available,
        }
    }

    /// Pure read used to fail fast before a reservation flow.
    pub const fn has_space_for(&self, species: Species) -> bool {
        self.available(species) > 0
    }

    /// Takes one space and returns its freshly minted label.
    ///
    /// ## Example
    /// ```rust
    /// use kennel_core::inventory::Inventory;
    /// use kennel_core::Species;
    ///
    /// let mut inventory = Inventory::new(1, 0);
    /// assert_eq!(inventory.reserve(Species::Dog).unwrap().to_string(), "D-1");
    /// assert!(inventory.reserve(Species::Dog).is_err());
    /// assert!(inventory.reserve(Species::Cat).is_err());
    /// ```
    pub fn reserve(&mut self, species: Species) -> Result<SpaceId, CapacityError> {
        let (available, next) = self.counters_mut(species);

        if *available == 0 {
            return Err(CapacityError { species });
        }

        *available -= 1;
        let space = SpaceId::new(species, *next);
        *next += 1;

        tracing::debug!(%species, space = %space, remaining = *available, "Space reserved");
        Ok(space)
    }

    /// Returns one space to the pool. Never fails.
    pub fn release(&mut self, species: Species) {
        let (available, _) = self.counters_mut(species);
        *available = available.saturating_add(1);

        tracing::debug!(%species, available = *available, "Space released");
    }

    /// Both counters at once.
    pub const fn levels(&self) -> InventoryLevels {
        InventoryLevels {
            dog_spaces_available: self.dog_available,
            cat_spaces_available: self.cat_available,
        }
    }

    fn counters_mut(&mut self, species: Species) -> (&mut u32, &mut u64) {
        match species {
            Species::Dog => (&mut self.dog_available, &mut self.next_dog_space),
            Species::Cat => (&mut self.cat_available, &mut self.next_cat_space),
        }
    }
}
