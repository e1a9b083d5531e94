//! # Intake Queue
//!
//! Pets waiting to be checked in, first come first served.

use std::collections::VecDeque;

use crate::types::PetId;

/// FIFO of pending pet ids.
#[derive(Debug, Default, Clone)]
pub struct IntakeQueue {
    pending: VecDeque<PetId>,
}

impl IntakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, pet_id: PetId) {
        self.pending.push_back(pet_id);
    }

    pub fn dequeue(&mut self) -> Option<PetId> {
        self.pending.pop_front()
    }

    /// Removes the first occurrence of `pet_id`, keeping everyone else in
    /// their place. Used by undo and by front-desk walk-ins.
    pub fn remove_once(&mut self, pet_id: &PetId) -> bool {
        match self.pending.iter().position(|queued| queued == pet_id) {
            Some(idx) => self.pending.remove(idx).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending ids, front of the line first.
    pub fn iter(&self) -> impl Iterator<Item = &PetId> {
        self.pending.iter()
    }
}
