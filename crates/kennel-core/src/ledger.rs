//! # Booking Ledger
//!
//! Every booking the engine has confirmed and not undone, keyed by id.

use std::collections::BTreeMap;

use crate::types::{Booking, BookingId};

/// Id → booking, plus the counter that mints booking ids.
#[derive(Debug, Clone)]
pub struct BookingLedger {
    bookings: BTreeMap<BookingId, Booking>,
    next_id: u64,
}

impl BookingLedger {
    pub fn new() -> Self {
        BookingLedger {
            bookings: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Next booking id. Ids are never reused, even after an undo.
    pub fn mint_id(&mut self) -> BookingId {
        let id = BookingId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    pub fn remove(&mut self, id: BookingId) -> Option<Booking> {
        self.bookings.remove(&id)
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    /// Bookings in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
