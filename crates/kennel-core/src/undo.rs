//! # Undo Log
//!
//! A stack of reversible actions. The engine pushes one record per mutating
//! action and `undo_recent` pops exactly one, newest first. Popping is
//! destructive: there is no redo.
//!
//! ```text
//!   push ─► [ AddPetEnqueue(p-1) | AddPetEnqueue(p-2) | CheckInConfirmed(p-1, D-1, #1) ]
//!                                                          ▲
//!                                              undo_recent pops this first
//! ```

use serde::Serialize;

use crate::types::{BookingId, PetId, SpaceId};

/// One reversible action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoRecord {
    /// A pet was registered, indexed and queued.
    AddPetEnqueue { pet_id: PetId },
    /// A space was reserved and a booking written.
    CheckInConfirmed {
        pet_id: PetId,
        space_id: SpaceId,
        booking_id: BookingId,
    },
}

/// LIFO of undo records.
#[derive(Debug, Default, Clone)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    pub fn depth(&self) -> usize {
        self.records.len()
    }
}

/// What a successful undo reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UndoReport {
    /// The pet was still waiting; its add was reversed.
    EnqueueReverted { pet_id: PetId },
    /// The pet had already left the queue, so there was nothing to remove.
    EnqueueAlreadyProcessed { pet_id: PetId },
    /// The booking is gone and its space is free again.
    CheckInReverted {
        pet_id: PetId,
        space_id: SpaceId,
        booking_id: BookingId,
    },
}

impl UndoReport {
    /// Message suitable for a CLI line or an HTTP body.
    pub fn message(&self) -> &'static str {
        match self {
            UndoReport::EnqueueReverted { .. } => "Undid add + enqueue.",
            UndoReport::EnqueueAlreadyProcessed { .. } => "Nothing to remove from queue.",
            UndoReport::CheckInReverted { .. } => "Undid confirmed check-in.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Species;

    #[test]
    fn test_lifo_order() {
        let mut log = UndoLog::new();
        log.push(UndoRecord::AddPetEnqueue {
            pet_id: PetId::new("p-1"),
        });
        log.push(UndoRecord::CheckInConfirmed {
            pet_id: PetId::new("p-1"),
            space_id: SpaceId::new(Species::Dog, 1),
            booking_id: BookingId::new(1),
        });

        assert_eq!(log.depth(), 2);
        assert!(matches!(log.pop(), Some(UndoRecord::CheckInConfirmed { .. })));
        assert!(matches!(log.pop(), Some(UndoRecord::AddPetEnqueue { .. })));
        assert_eq!(log.pop(), None);
    }

    #[test]
    fn test_report_messages() {
        let report = UndoReport::EnqueueAlreadyProcessed {
            pet_id: PetId::new("p-1"),
        };
        assert_eq!(report.message(), "Nothing to remove from queue.");
    }
}
