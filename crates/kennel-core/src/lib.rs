//! # kennel-core: In-Memory Check-In Engine for Kennel
//!
//! This crate is the **heart** of Kennel, a pet boarding facility's check-in
//! system. It holds the line of pets waiting for intake, indexes pets by
//! name, tracks free spaces per species, writes bookings, and can undo the
//! most recent action. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kennel Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              kennel-cli (host binary)                           │   │
//! │  │    env config ──► tracing setup ──► JSON requests ──► responses │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ SharedEngine                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kennel-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │name_index │  │  intake   │  │ inventory │  │   │
//! │  │   │ customers │  │  sorted + │  │   FIFO    │  │ dog / cat │  │   │
//! │  │   │   pets    │  │  bsearch  │  │   queue   │  │ counters  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  engine   │  │   undo    │  │  ledger   │  │   desk    │  │   │
//! │  │   │ workflow  │  │   LIFO    │  │ bookings  │  │ requests  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO GLOBAL STATE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `CheckInEngine`: reservation workflow and undo dispatch
//! - [`desk`] - Front-desk request translation
//! - [`inventory`] - Capacity counters and space labels
//! - [`registry`] - Customers and pets by id
//! - [`name_index`] - Sorted name index with binary search
//! - [`intake`] - FIFO intake queue
//! - [`undo`] - Undo records and log
//! - [`ledger`] - Booking ledger
//! - [`pricing`] - Pluggable rate table
//! - [`money`] - Integer-cents money
//! - [`shared`] - One engine behind one lock
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use kennel_core::{CheckInEngine, CheckInOptions, Pet, PetId};
//!
//! let mut engine = CheckInEngine::with_capacity(1, 0);
//! engine.add_pet(Pet::new(PetId::new("a"), "Rex", "dog", 3, None).unwrap()).unwrap();
//! engine.add_pet(Pet::new(PetId::new("b"), "Max", "dog", 5, None).unwrap()).unwrap();
//!
//! let attempts = engine.process_all(CheckInOptions::default());
//! assert!(attempts[0].is_ok());
//! assert!(!attempts[1].is_ok()); // only one dog space
//!
//! engine.undo_recent().unwrap();  // give Rex's space back
//! assert_eq!(engine.state().inventory.dog_spaces_available, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod desk;
pub mod engine;
pub mod error;
pub mod intake;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod name_index;
pub mod pricing;
pub mod registry;
pub mod shared;
pub mod types;
pub mod undo;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use desk::{CheckInConfirmation, CheckInRequest, CustomerInput, PetInput};
pub use engine::{CheckInAttempt, CheckInEngine, EngineConfig, EngineSnapshot};
pub use error::{CapacityError, CheckInFailure, CoreError, CoreResult, UndoFailure, ValidationError};
pub use inventory::InventoryLevels;
pub use money::Money;
pub use pricing::RateTable;
pub use shared::SharedEngine;
pub use types::*;
pub use undo::{UndoRecord, UndoReport};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Dog spaces in the reference deployment.
pub const DEFAULT_DOG_SPACES: u32 = 30;

/// Cat spaces in the reference deployment.
pub const DEFAULT_CAT_SPACES: u32 = 12;

/// Longest stay the desk accepts, in nights.
pub const MAX_DAYS_STAY: u32 = 365;

/// Oldest age accepted, in years.
pub const MAX_AGE_YEARS: u32 = 40;

/// Maximum length of customer and pet names, in characters.
pub const MAX_NAME_LEN: usize = 100;
