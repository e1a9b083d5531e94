//! # Name Index
//!
//! Pets by lowercased name, kept in a sorted `Vec` and searched with binary
//! search.
//!
//! ```text
//! entries (always sorted by name_lower, ordinal byte order):
//!
//!   [ ("biscuit", p-4) ("max", p-2) ("rex", p-1) ("rex", p-7) ("zoe", p-3) ]
//!                                     ▲
//!   find("REX") ── lowercase ── binary search ── some exact match
//! ```
//!
//! Lookup is O(log n); insertion is O(n) because of the shift. Duplicate names
//! are allowed, and `find` returns *an* exact match, not necessarily the one
//! inserted first.

use crate::types::PetId;

/// One projection of a pet into the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndexEntry {
    pub name_lower: String,
    pub pet_id: PetId,
}

/// Sorted sequence of name entries.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    entries: Vec<NameIndexEntry>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Ok(idx)` of some exact match, or `Err(idx)` where the key would go.
    fn search(&self, name_lower: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.name_lower.as_str().cmp(name_lower))
    }

    /// Inserts at the binary-search insertion point so the order holds.
    pub fn insert(&mut self, name: &str, pet_id: PetId) {
        let name_lower = name.to_lowercase();
        let idx = match self.search(&name_lower) {
            Ok(idx) | Err(idx) => idx,
        };

        tracing::debug!(name = %name_lower, pet_id = %pet_id, idx, "Name indexed");
        self.entries.insert(idx, NameIndexEntry { name_lower, pet_id });
    }

    /// Case-insensitive exact lookup.
    pub fn find(&self, name: &str) -> Option<&PetId> {
        let name_lower = name.to_lowercase();
        self.search(&name_lower)
            .ok()
            .map(|idx| &self.entries[idx].pet_id)
    }

    /// Removes the entry for `pet_id` under `name`. Returns whether one was found.
    pub fn remove(&mut self, name: &str, pet_id: &PetId) -> bool {
        let name_lower = name.to_lowercase();
        let start = self
            .entries
            .partition_point(|entry| entry.name_lower < name_lower);

        let position = self.entries[start..]
            .iter()
            .take_while(|entry| entry.name_lower == name_lower)
            .position(|entry| &entry.pet_id == pet_id);

        match position {
            Some(offset) => {
                self.entries.remove(start + offset);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted order.
    pub fn entries(&self) -> &[NameIndexEntry] {
        &self.entries
    }
}
