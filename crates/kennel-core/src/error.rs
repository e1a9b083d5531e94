//! # Error Types
//!
//! Domain-specific error types for kennel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kennel-core errors (this file)                                        │
//! │  ├── ValidationError  - Malformed input, nothing was mutated           │
//! │  ├── CapacityError    - Inventory::reserve found no free space         │
//! │  ├── CheckInFailure   - Expected reservation outcomes (values!)        │
//! │  ├── UndoFailure      - Nothing to undo / booking already gone         │
//! │  └── CoreError        - Umbrella used by the check-in desk             │
//! │                                                                         │
//! │  kennel-cli errors (host binary)                                       │
//! │  └── ApiError         - What the caller sees (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError / CheckInFailure → CoreError → ApiError         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Refusals the front desk expects (full house, empty line, nothing to undo)
//! are ordinary `Err` values; nothing here panics.

use thiserror::Error;

use crate::types::{BookingId, PetId, Species};

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for operations that span validation and reservation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input was rejected before any state changed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The reservation workflow refused the check-in.
    #[error("{0}")]
    CheckIn(#[from] CheckInFailure),

    /// The undo log could not reverse an action.
    #[error("{0}")]
    Undo(#[from] UndoFailure),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected input. Every check runs before the engine is touched, so a
/// `ValidationError` always means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },

    /// Age or days of stay outside the accepted window.
    #[error("{field} must be from {min} to {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Unparsable label, e.g. a space id that is not `D-<n>` / `C-<n>`.
    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Unknown species or grooming option.
    #[error("{field} must be one of {}", .allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A pet id that is already registered.
    #[error("{field} {value} is already registered")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Capacity Error
// =============================================================================

/// No free space left for a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {species} spaces available")]
pub struct CapacityError {
    pub species: Species,
}

// =============================================================================
// Check-In Failure
// =============================================================================

/// Expected, recoverable outcomes of the reservation workflow.
///
/// ## User Workflow
/// ```text
/// confirm_check_in(pet)
///      │
///      ├── pet unknown?        → PetNotFound
///      ├── total overflows?    → Pricing      (nothing reserved)
///      ├── species full?       → NoCapacity   ("no more spots")
///      └── OK → Booking
///
/// process_next() on an empty line → QueueEmpty
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckInFailure {
    /// The pet id is not registered.
    #[error("Pet not found: {0}")]
    PetNotFound(PetId),

    /// The rate table could not price the stay.
    #[error("{0}")]
    Pricing(ValidationError),

    /// Every space for the species is taken.
    #[error("Sorry, we have no more spots available.")]
    NoCapacity(Species),

    /// The intake queue had nothing to process.
    #[error("Queue empty.")]
    QueueEmpty,
}

impl From<CapacityError> for CheckInFailure {
    fn from(err: CapacityError) -> Self {
        CheckInFailure::NoCapacity(err.species)
    }
}

// =============================================================================
// Undo Failure
// =============================================================================

/// Reasons `undo_recent` could not reverse anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UndoFailure {
    /// The undo log is exhausted.
    #[error("Nothing to undo.")]
    NothingToUndo,

    /// The booking referenced by the record is no longer in the ledger.
    #[error("Booking not found to undo: {0}")]
    BookingNotFound(BookingId),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_failure_messages() {
        let err = CheckInFailure::NoCapacity(Species::Dog);
        assert_eq!(err.to_string(), "Sorry, we have no more spots available.");

        let err = CheckInFailure::PetNotFound(PetId::new("p-9"));
        assert_eq!(err.to_string(), "Pet not found: p-9");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "days_stay".to_string(),
            min: 1,
            max: 365,
        };
        assert_eq!(err.to_string(), "days_stay must be from 1 to 365");
    }

    #[test]
    fn test_capacity_error_converts_to_no_capacity() {
        let failure: CheckInFailure = CapacityError {
            species: Species::Cat,
        }
        .into();
        assert_eq!(failure, CheckInFailure::NoCapacity(Species::Cat));
    }

    #[test]
    fn test_pricing_failure_shows_the_range() {
        let failure = CheckInFailure::Pricing(ValidationError::OutOfRange {
            field: "amount due".to_string(),
            min: 0,
            max: 10,
        });
        assert_eq!(failure.to_string(), "amount due must be from 0 to 10");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "species".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
