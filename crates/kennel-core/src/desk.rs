//! # Check-In Desk
//!
//! Translates a front-desk request into registry and workflow calls.
//!
//! ## Check-In Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckInRequest { customerInput, petInput, daysStay, groomingOption }   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. validate every field          ── ValidationError, nothing mutated   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. customer by phone/email, else register (UUID v4)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. pet by (owner, name), else admit as a walk-in (UUID v4)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. confirm_check_in              ── CheckInFailure (e.g. no spots)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. CheckInConfirmation (receipt-safe view)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A walk-in pet registered here gives up its intake-queue entry, so a later
//! drain never books it a second time. A returning pet books again on every
//! visit. When step 4 refuses, the customer and pet from steps 2-3 stay
//! registered so a retry finds them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine::CheckInEngine;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{BookingId, CheckInOptions, Customer, CustomerId, Pet, PetId};
use crate::validation;

/// Who is checking in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerInput {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The pet being boarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PetInput {
    pub name: String,
    /// `dog` or `cat`, any casing.
    #[serde(alias = "type")]
    pub species: String,
    pub age: i64,
}

/// A front-desk check-in request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub customer_input: CustomerInput,
    pub pet_input: PetInput,
    pub days_stay: i64,
    /// `bath`, `full`, `none` or absent.
    #[serde(default)]
    pub grooming_option: Option<String>,
}

/// What the desk hands back on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckInConfirmation {
    pub booking_id: BookingId,
    pub customer: String,
    /// `Name (species)`.
    pub pet: String,
    pub space_id: String,
    pub days_stay: u32,
    /// Grooming choice, or `none`.
    pub grooming: String,
    pub amount_due: Money,
}

impl CheckInEngine {
    /// Full front-desk check-in: find-or-create the customer and pet, then
    /// reserve a space.
    pub fn check_in(&mut self, request: &CheckInRequest) -> CoreResult<CheckInConfirmation> {
        let customer_input = &request.customer_input;
        let pet_input = &request.pet_input;

        let customer_name = validation::validate_person_name(&customer_input.name)?;
        let phone = validation::normalize_phone(customer_input.phone.as_deref());
        let email = validation::normalize_email(customer_input.email.as_deref());
        let pet_name = validation::validate_pet_name(&pet_input.name)?;
        let species = validation::parse_species(&pet_input.species)?;
        let age = validation::validate_age(pet_input.age)?;
        let grooming =
            validation::parse_grooming_option(request.grooming_option.as_deref())?;
        let options = CheckInOptions::new(request.days_stay, grooming)?;

        let existing_customer = self
            .registry()
            .find_customer_by_contact(phone.as_deref(), email.as_deref())
            .cloned();
        let customer = match existing_customer {
            Some(customer) => customer,
            None => self.add_or_find_customer(Customer {
                id: CustomerId::generate(),
                name: customer_name,
                phone,
                email,
            }),
        };

        let existing_pet = self
            .registry()
            .find_pet_for_owner(&customer.id, &pet_name)
            .cloned();
        let pet = match existing_pet {
            Some(pet) => pet,
            None => self.admit_walk_in(Pet {
                id: PetId::generate(),
                name: pet_name,
                species,
                age,
                owner_id: Some(customer.id.clone()),
            })?,
        };

        let booking = self.confirm_check_in(&pet.id, options)?;

        Ok(CheckInConfirmation {
            booking_id: booking.id,
            customer: customer.name,
            pet: format!("{} ({})", pet.name, pet.species),
            space_id: booking.space_id.to_string(),
            days_stay: booking.days_stay,
            grooming: booking
                .grooming
                .map_or_else(|| "none".to_string(), |g| g.to_string()),
            amount_due: booking.amount_due,
        })
    }
}
