//! # Domain Types
//!
//! Core domain types used throughout Kennel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │       Pet       │   │     Booking     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  owner_id       │   │  id (counter)   │       │
//! │  │  name           │   │  id             │◄──│  pet_id         │       │
//! │  │  phone / email  │   │  name, age      │   │  space_id D-1   │       │
//! │  └─────────────────┘   │  species        │   │  amount_due     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Species      │   │    SpaceId      │   │ GroomingOption  │       │
//! │  │  Dog | Cat      │   │  D-<n> / C-<n>  │   │  Bath | Full    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Customers and pets are keyed by caller-supplied string ids (the desk mints
//! UUID v4 ids for walk-ins). Bookings use a per-engine counter.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Identifiers
// =============================================================================

/// Customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        CustomerId(id.into())
    }

    /// Mints a fresh UUID v4 id.
    pub fn generate() -> Self {
        CustomerId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pet identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PetId(String);

impl PetId {
    pub fn new(id: impl Into<String>) -> Self {
        PetId(id.into())
    }

    /// Mints a fresh UUID v4 id.
    pub fn generate() -> Self {
        PetId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Booking identifier, minted from a monotonic counter that starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingId(u64);

impl BookingId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        BookingId(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Species
// =============================================================================

/// The two species the facility boards. Drives all capacity logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    /// Every species, in display order.
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    /// Lowercase tag used in requests and receipts.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    /// Prefix of this species' space labels.
    pub const fn space_prefix(&self) -> char {
        match self {
            Species::Dog => 'D',
            Species::Cat => 'C',
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::parse_species(s)
    }
}

// =============================================================================
// Space Id
// =============================================================================

/// A reserved space, e.g. `D-3` (third dog space handed out).
///
/// The label carries its species so a release never needs to look the pet up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceId {
    species: Species,
    ordinal: u64,
}

impl SpaceId {
    pub const fn new(species: Species, ordinal: u64) -> Self {
        SpaceId { species, ordinal }
    }

    pub const fn species(&self) -> Species {
        self.species
    }

    pub const fn ordinal(&self) -> u64 {
        self.ordinal
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.species.space_prefix(), self.ordinal)
    }
}

impl FromStr for SpaceId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "space_id".to_string(),
            reason: "expected D-<n> or C-<n>".to_string(),
        };

        let (prefix, ordinal) = s.trim().split_once('-').ok_or_else(invalid)?;
        let species = match prefix {
            "D" => Species::Dog,
            "C" => Species::Cat,
            _ => return Err(invalid()),
        };
        let ordinal = ordinal.parse::<u64>().map_err(|_| invalid())?;
        Ok(SpaceId::new(species, ordinal))
    }
}

impl Serialize for SpaceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A pet owner. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: CustomerId,
    /// Trimmed display name.
    pub name: String,
    /// Trimmed phone number.
    pub phone: Option<String>,
    /// Trimmed, lowercased email.
    pub email: Option<String>,
}

impl Customer {
    /// Builds a validated customer with normalized contact fields.
    pub fn new(
        id: CustomerId,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> ValidationResult<Self> {
        validation::validate_record_id("customer id", id.as_str())?;
        let name = validation::validate_person_name(name)?;

        Ok(Customer {
            id,
            name,
            phone: validation::normalize_phone(phone),
            email: validation::normalize_email(email),
        })
    }
}

// =============================================================================
// Pet
// =============================================================================

/// A pet enrolled with the facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pet {
    pub id: PetId,
    /// Trimmed, non-empty name.
    pub name: String,
    /// Fixed at creation.
    pub species: Species,
    /// Whole years; 0 for puppies and kittens.
    pub age: u32,
    pub owner_id: Option<CustomerId>,
}

impl Pet {
    /// Builds a validated pet from raw host input.
    ///
    /// ## Example
    /// ```rust
    /// use kennel_core::types::{Pet, PetId, Species};
    ///
    /// let pet = Pet::new(PetId::new("p-1"), " Rex ", "DOG", 3, None).unwrap();
    /// assert_eq!(pet.name, "Rex");
    /// assert_eq!(pet.species, Species::Dog);
    ///
    /// assert!(Pet::new(PetId::new("p-2"), "Tom", "hamster", 1, None).is_err());
    /// ```
    pub fn new(
        id: PetId,
        name: &str,
        species: &str,
        age: i64,
        owner_id: Option<CustomerId>,
    ) -> ValidationResult<Self> {
        validation::validate_record_id("pet id", id.as_str())?;
        let name = validation::validate_pet_name(name)?;
        let species = validation::parse_species(species)?;
        let age = validation::validate_age(age)?;

        Ok(Pet {
            id,
            name,
            species,
            age,
            owner_id,
        })
    }
}

// =============================================================================
// Grooming
// =============================================================================

/// Grooming add-ons on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum GroomingOption {
    Bath,
    Full,
}

impl GroomingOption {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GroomingOption::Bath => "bath",
            GroomingOption::Full => "full",
        }
    }
}

impl fmt::Display for GroomingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Booking
// =============================================================================

/// Booking status. Every booking the engine creates is confirmed and stays so;
/// closing a stay belongs to whatever persists the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

/// Options for a single check-in. Built through [`CheckInOptions::new`] so the
/// stay length is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInOptions {
    days_stay: u32,
    grooming: Option<GroomingOption>,
}

impl CheckInOptions {
    pub fn new(days_stay: i64, grooming: Option<GroomingOption>) -> ValidationResult<Self> {
        Ok(CheckInOptions {
            days_stay: validation::validate_days_stay(days_stay)?,
            grooming,
        })
    }

    /// Nights of stay.
    #[inline]
    pub const fn days_stay(&self) -> u32 {
        self.days_stay
    }

    #[inline]
    pub const fn grooming(&self) -> Option<GroomingOption> {
        self.grooming
    }
}

impl Default for CheckInOptions {
    /// One night, no grooming.
    fn default() -> Self {
        CheckInOptions {
            days_stay: 1,
            grooming: None,
        }
    }
}

/// A confirmed reservation of one space for one pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Booking {
    pub id: BookingId,
    pub pet_id: PetId,
    #[ts(type = "string")]
    pub space_id: SpaceId,
    pub days_stay: u32,
    pub grooming: Option<GroomingOption>,
    /// Stay plus grooming, frozen at booking time.
    pub amount_due: Money,
    pub status: BookingStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Species of the space this booking holds.
    #[inline]
    pub fn species(&self) -> Species {
        self.space_id.species()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_id_display_and_parse() {
        let space = SpaceId::new(Species::Dog, 7);
        assert_eq!(space.to_string(), "D-7");
        assert_eq!("C-12".parse::<SpaceId>().unwrap(), SpaceId::new(Species::Cat, 12));
        assert!("X-1".parse::<SpaceId>().is_err());
        assert!("D-".parse::<SpaceId>().is_err());
    }

    #[test]
    fn test_space_id_serializes_as_label() {
        let json = serde_json::to_string(&SpaceId::new(Species::Cat, 2)).unwrap();
        assert_eq!(json, "\"C-2\"");
        let back: SpaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.species(), Species::Cat);
    }

    #[test]
    fn test_species_from_str() {
        assert_eq!(" Cat ".parse::<Species>().unwrap(), Species::Cat);
        assert!("".parse::<Species>().is_err());
    }

    #[test]
    fn test_customer_normalizes_contact() {
        let customer = Customer::new(
            CustomerId::new("c-1"),
            "  Dana Reyes ",
            Some(" 555-0100 "),
            Some(" Dana@Example.COM "),
        )
        .unwrap();
        assert_eq!(customer.name, "Dana Reyes");
        assert_eq!(customer.phone.as_deref(), Some("555-0100"));
        assert_eq!(customer.email.as_deref(), Some("dana@example.com"));
    }

    #[test]
    fn test_pet_rejects_negative_age_and_blank_name() {
        assert!(Pet::new(PetId::new("p-1"), "Rex", "dog", -1, None).is_err());
        assert!(Pet::new(PetId::new("p-1"), "   ", "dog", 2, None).is_err());
        assert!(Pet::new(PetId::new(""), "Rex", "dog", 2, None).is_err());
    }

    #[test]
    fn test_booking_status_wire_format() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"CONFIRMED\"");
    }
}
