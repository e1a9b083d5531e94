//! # Identity Registry
//!
//! Customers and pets keyed by id. The engine owns one registry per instance;
//! there is no process-wide store.

use std::collections::HashMap;

use crate::types::{Customer, CustomerId, Pet, PetId};

/// Owned maps of every customer and pet the engine knows about.
#[derive(Debug, Default, Clone)]
pub struct IdentityRegistry {
    customers: HashMap<CustomerId, Customer>,
    pets: HashMap<PetId, Pet>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent by id: an existing record is returned unchanged, otherwise
    /// the input is stored and returned.
    pub fn add_or_find_customer(&mut self, customer: Customer) -> &Customer {
        self.customers
            .entry(customer.id.clone())
            .or_insert(customer)
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// First customer whose phone or email matches. Email is compared
    /// lowercased, as stored.
    pub fn find_customer_by_contact(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Option<&Customer> {
        if phone.is_none() && email.is_none() {
            return None;
        }

        self.customers.values().find(|c| {
            let phone_match = phone.is_some() && c.phone.as_deref() == phone;
            let email_match = email.is_some() && c.email.as_deref() == email;
            phone_match || email_match
        })
    }

    pub fn contains_pet(&self, id: &PetId) -> bool {
        self.pets.contains_key(id)
    }

    pub fn pet(&self, id: &PetId) -> Option<&Pet> {
        self.pets.get(id)
    }

    /// A pet registered under `owner_id` with exactly this (trimmed) name.
    pub fn find_pet_for_owner(&self, owner_id: &CustomerId, name: &str) -> Option<&Pet> {
        let name = name.trim();
        self.pets
            .values()
            .find(|p| p.owner_id.as_ref() == Some(owner_id) && p.name == name)
    }

    /// Stores a pet. Callers check for duplicates first.
    pub(crate) fn insert_pet(&mut self, pet: Pet) {
        self.pets.insert(pet.id.clone(), pet);
    }

    pub(crate) fn remove_pet(&mut self, id: &PetId) -> Option<Pet> {
        self.pets.remove(id)
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, name: &str, email: Option<&str>) -> Customer {
        Customer::new(CustomerId::new(id), name, None, email).unwrap()
    }

    #[test]
    fn test_add_or_find_customer_keeps_first_record() {
        let mut registry = IdentityRegistry::new();

        registry.add_or_find_customer(customer("c-1", "Dana", None));
        let again = registry.add_or_find_customer(customer("c-1", "Somebody Else", None));

        assert_eq!(again.name, "Dana");
        assert_eq!(registry.customer_count(), 1);
    }

    #[test]
    fn test_find_customer_by_contact() {
        let mut registry = IdentityRegistry::new();
        registry.add_or_find_customer(customer("c-1", "Dana", Some("dana@example.com")));

        let found = registry.find_customer_by_contact(None, Some("dana@example.com"));
        assert_eq!(found.map(|c| c.id.as_str()), Some("c-1"));
        assert!(registry.find_customer_by_contact(None, None).is_none());
        assert!(registry
            .find_customer_by_contact(Some("555-0199"), None)
            .is_none());
    }

    #[test]
    fn test_find_pet_for_owner() {
        let mut registry = IdentityRegistry::new();
        let owner = CustomerId::new("c-1");
        let pet = Pet::new(PetId::new("p-1"), "Biscuit", "dog", 4, Some(owner.clone())).unwrap();
        registry.insert_pet(pet);

        assert!(registry.find_pet_for_owner(&owner, " Biscuit ").is_some());
        assert!(registry
            .find_pet_for_owner(&CustomerId::new("c-2"), "Biscuit")
            .is_none());
    }
}
