//! # Check-In Engine
//!
//! The in-memory check-in/reservation engine. One instance owns every piece
//! of state; nothing is global, so tests and hosts can run as many
//! independent engines as they like.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  add_or_find_customer ──► IdentityRegistry (customers)                  │
//! │                                                                         │
//! │  add_pet ──┬──► IdentityRegistry (pets)                                 │
//! │            ├──► NameIndex (sorted, binary search)                       │
//! │            ├──► IntakeQueue (FIFO)                                      │
//! │            └──► UndoLog ◄── AddPetEnqueue                               │
//! │                                                                         │
//! │  process_next / process_all ── dequeue ──┐                              │
//! │                                          ▼                              │
//! │  confirm_check_in(pet) ──► Inventory.reserve ──► BookingLedger          │
//! │                                                   │                     │
//! │                                UndoLog ◄── CheckInConfirmed             │
//! │                                                                         │
//! │  undo_recent ── pop ──► match record { reverse exactly that action }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! Expected failures (unknown pet, no capacity, empty queue, nothing to undo)
//! are returned as values. A batch keeps going after one pet fails.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use ts_rs::TS;

use crate::error::{CheckInFailure, UndoFailure, ValidationError};
use crate::intake::IntakeQueue;
use crate::inventory::{Inventory, InventoryLevels};
use crate::ledger::BookingLedger;
use crate::name_index::NameIndex;
use crate::pricing::RateTable;
use crate::registry::IdentityRegistry;
use crate::types::{
    Booking, BookingId, BookingStatus, CheckInOptions, Customer, CustomerId, Pet, PetId,
};
use crate::undo::{UndoLog, UndoRecord, UndoReport};
use crate::validation::{self, ValidationResult};
use crate::{DEFAULT_CAT_SPACES, DEFAULT_DOG_SPACES};

// =============================================================================
// Configuration & Snapshots
// =============================================================================

/// Construction parameters for an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Starting free dog spaces.
    pub dog_spaces: u32,
    /// Starting free cat spaces.
    pub cat_spaces: u32,
    /// Prices frozen onto each booking.
    pub rates: RateTable,
}

impl Default for EngineConfig {
    /// 30 dog spaces, 12 cat spaces, default rate table.
    fn default() -> Self {
        EngineConfig {
            dog_spaces: DEFAULT_DOG_SPACES,
            cat_spaces: DEFAULT_CAT_SPACES,
            rates: RateTable::default(),
        }
    }
}

/// Counts for debugging, logging and dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub customers: usize,
    pub pets: usize,
    pub queue_length: usize,
    pub undo_depth: usize,
    pub inventory: InventoryLevels,
    pub bookings_count: usize,
}

/// Outcome of one queue-driven check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInAttempt {
    /// The pet that was dequeued, or `None` if the queue was empty.
    pub pet_id: Option<PetId>,
    pub outcome: Result<Booking, CheckInFailure>,
}

impl CheckInAttempt {
    /// True when the attempt produced a booking.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

// =============================================================================
// Engine
// =============================================================================

/// In-memory check-in/reservation engine.
///
/// Single-threaded by contract: every method runs to completion before the
/// next starts. Wrap in [`crate::shared::SharedEngine`] for concurrent hosts.
#[derive(Debug, Clone)]
pub struct CheckInEngine {
    registry: IdentityRegistry,
    name_index: NameIndex,
    intake: IntakeQueue,
    inventory: Inventory,
    ledger: BookingLedger,
    undo_log: UndoLog,
    rates: RateTable,
}

impl CheckInEngine {
    pub fn new(config: EngineConfig) -> Self {
        info!(
            dog_spaces = config.dog_spaces,
            cat_spaces = config.cat_spaces,
            "Check-in engine created"
        );

        CheckInEngine {
            registry: IdentityRegistry::new(),
            name_index: NameIndex::new(),
            intake: IntakeQueue::new(),
            inventory: Inventory::new(config.dog_spaces, config.cat_spaces),
            ledger: BookingLedger::new(),
            undo_log: UndoLog::new(),
            rates: config.rates,
        }
    }

    /// Engine with the given capacity and the default rate table.
    pub fn with_capacity(dog_spaces: u32, cat_spaces: u32) -> Self {
        Self::new(EngineConfig {
            dog_spaces,
            cat_spaces,
            ..EngineConfig::default()
        })
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    /// Registers a customer, or returns the one already stored under that id.
    pub fn add_or_find_customer(&mut self, customer: Customer) -> Customer {
        self.registry.add_or_find_customer(customer).clone()
    }

    /// Registers a pet, indexes it by name and puts it in line.
    ///
    /// All checks run first; on error nothing has changed. On success the
    /// registry, name index, intake queue and undo log are all updated.
    pub fn add_pet(&mut self, mut pet: Pet) -> ValidationResult<Pet> {
        validation::validate_record_id("pet id", pet.id.as_str())?;
        pet.name = validation::validate_pet_name(&pet.name)?;

        if self.registry.contains_pet(&pet.id) {
            return Err(ValidationError::Duplicate {
                field: "pet id".to_string(),
                value: pet.id.to_string(),
            });
        }

        self.registry.insert_pet(pet.clone());
        self.name_index.insert(&pet.name, pet.id.clone());
        self.intake.enqueue(pet.id.clone());
        self.undo_log.push(UndoRecord::AddPetEnqueue {
            pet_id: pet.id.clone(),
        });

        debug!(
            pet_id = %pet.id,
            species = %pet.species,
            queue_length = self.intake.len(),
            "Pet added and queued"
        );
        Ok(pet)
    }

    /// Registers a pet the front desk is booking right away. The pet goes
    /// through `add_pet` (index, undo record) but gives up its place in line,
    /// so a later drain does not check it in a second time.
    pub(crate) fn admit_walk_in(&mut self, pet: Pet) -> ValidationResult<Pet> {
        let pet = self.add_pet(pet)?;
        self.intake.remove_once(&pet.id);
        debug!(pet_id = %pet.id, "Walk-in skips the intake queue");
        Ok(pet)
    }

    /// Case-insensitive exact name lookup through the sorted index.
    pub fn find_pet_by_name(&self, name: &str) -> Option<&Pet> {
        let pet_id = self.name_index.find(name)?;
        let pet = self.registry.pet(pet_id);

        if pet.is_none() {
            error!(%pet_id, name, "Name index points at a pet missing from the registry");
        }
        debug_assert!(pet.is_some(), "name index out of sync with registry");
        pet
    }

    // -------------------------------------------------------------------------
    // Reservation Workflow
    // -------------------------------------------------------------------------

    /// Reserves a space for `pet_id` and writes a confirmed booking.
    ///
    /// A pet may be checked in again on a later visit; every call that
    /// succeeds takes one more space and writes one more booking.
    ///
    /// ## Steps
    /// 1. Resolve the pet (`PetNotFound`)
    /// 2. Price the stay (`Pricing`, nothing mutated)
    /// 3. Fast capacity check (`NoCapacity`, nothing mutated)
    /// 4. Reserve the space, mint the booking id
    /// 5. Write the ledger, push `CheckInConfirmed`
    pub fn confirm_check_in(
        &mut self,
        pet_id: &PetId,
        options: CheckInOptions,
    ) -> Result<Booking, CheckInFailure> {
        let species = self
            .registry
            .pet(pet_id)
            .map(|pet| pet.species)
            .ok_or_else(|| CheckInFailure::PetNotFound(pet_id.clone()))?;

        let amount_due = self
            .rates
            .quote(species, options.days_stay(), options.grooming())
            .map_err(CheckInFailure::Pricing)?;

        if !self.inventory.has_space_for(species) {
            warn!(%pet_id, %species, "No spaces left, check-in refused");
            return Err(CheckInFailure::NoCapacity(species));
        }

        let space_id = self.inventory.reserve(species)?;
        let booking = Booking {
            id: self.ledger.mint_id(),
            pet_id: pet_id.clone(),
            space_id,
            days_stay: options.days_stay(),
            grooming: options.grooming(),
            amount_due,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        };

        self.ledger.insert(booking.clone());
        self.undo_log.push(UndoRecord::CheckInConfirmed {
            pet_id: pet_id.clone(),
            space_id,
            booking_id: booking.id,
        });

        info!(
            booking_id = %booking.id,
            %pet_id,
            space_id = %space_id,
            amount_due = %booking.amount_due,
            "Check-in confirmed"
        );
        Ok(booking)
    }

    /// Checks in the pet at the front of the line.
    pub fn process_next(&mut self, options: CheckInOptions) -> CheckInAttempt {
        let Some(pet_id) = self.intake.dequeue() else {
            return CheckInAttempt {
                pet_id: None,
                outcome: Err(CheckInFailure::QueueEmpty),
            };
        };

        let outcome = self.confirm_check_in(&pet_id, options);
        CheckInAttempt {
            pet_id: Some(pet_id),
            outcome,
        }
    }

    /// Drains the whole line, collecting every outcome in order.
    pub fn process_all(&mut self, options: CheckInOptions) -> Vec<CheckInAttempt> {
        let mut attempts = Vec::with_capacity(self.intake.len());
        while !self.intake.is_empty() {
            attempts.push(self.process_next(options));
        }

        let confirmed = attempts.iter().filter(|a| a.is_ok()).count();
        info!(
            processed = attempts.len(),
            confirmed,
            refused = attempts.len() - confirmed,
            "Intake queue drained"
        );
        attempts
    }

    // -------------------------------------------------------------------------
    // Undo
    // -------------------------------------------------------------------------

    /// Reverses the most recent action still on the undo log.
    pub fn undo_recent(&mut self) -> Result<UndoReport, UndoFailure> {
        let record = self.undo_log.pop().ok_or(UndoFailure::NothingToUndo)?;

        match record {
            UndoRecord::AddPetEnqueue { pet_id } => {
                if !self.intake.remove_once(&pet_id) {
                    info!(%pet_id, "Undo add: pet already left the queue");
                    return Ok(UndoReport::EnqueueAlreadyProcessed { pet_id });
                }

                self.forget_pet(&pet_id);
                info!(%pet_id, "Undo add: pet removed from queue");
                Ok(UndoReport::EnqueueReverted { pet_id })
            }
            UndoRecord::CheckInConfirmed {
                pet_id,
                space_id,
                booking_id,
            } => {
                // Booking goes first; the release below only runs if it was still here.
                let Some(booking) = self.ledger.remove(booking_id) else {
                    warn!(%booking_id, "Undo check-in: booking already gone");
                    return Err(UndoFailure::BookingNotFound(booking_id));
                };
                self.inventory.release(booking.species());

                info!(%booking_id, %pet_id, space_id = %space_id, "Undo check-in: space released");
                Ok(UndoReport::CheckInReverted {
                    pet_id,
                    space_id,
                    booking_id,
                })
            }
        }
    }

    /// Drops a pet whose add was undone from the registry and name index, so
    /// every registered pet keeps exactly one index entry. Any booking for
    /// the pet was pushed after its add and has already been undone.
    fn forget_pet(&mut self, pet_id: &PetId) {
        match self.registry.remove_pet(pet_id) {
            Some(pet) => {
                if !self.name_index.remove(&pet.name, pet_id) {
                    error!(%pet_id, name = %pet.name, "Pet had no name index entry");
                }
            }
            None => error!(%pet_id, "Undo referenced a pet missing from the registry"),
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn state(&self) -> EngineSnapshot {
        EngineSnapshot {
            customers: self.registry.customer_count(),
            pets: self.registry.pet_count(),
            queue_length: self.intake.len(),
            undo_depth: self.undo_log.depth(),
            inventory: self.inventory.levels(),
            bookings_count: self.ledger.len(),
        }
    }

    pub fn pet(&self, id: &PetId) -> Option<&Pet> {
        self.registry.pet(id)
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.registry.customer(id)
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.ledger.get(id)
    }

    /// Bookings in id order.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.ledger.iter()
    }

    /// Pets waiting in line, front first.
    pub fn queued(&self) -> impl Iterator<Item = &PetId> {
        self.intake.iter()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub(crate) fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }
}

impl Default for CheckInEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
