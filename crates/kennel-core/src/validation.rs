//! # Validation Module
//!
//! Input validation utilities for Kennel.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (kennel-cli)                                            │
//! │  └── Type validation (JSON deserialization)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, trimming, lowercasing                            │
//! │  └── Ranges (age, days of stay) and closed sets (species, grooming)    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Duplicate ids, capacity                                           │
//! │                                                                         │
//! │  Every check here runs BEFORE the engine mutates anything.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{GroomingOption, Species};
use crate::{MAX_AGE_YEARS, MAX_DAYS_STAY, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a record id (customer or pet). Ids are opaque but never blank.
pub fn validate_record_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a pet name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use kennel_core::validation::validate_pet_name;
///
/// assert_eq!(validate_pet_name("  Biscuit ").unwrap(), "Biscuit");
/// assert!(validate_pet_name("   ").is_err());
/// ```
pub fn validate_pet_name(name: &str) -> ValidationResult<String> {
    validate_name("pet name", name)
}

/// Validates a customer name and returns it trimmed.
pub fn validate_person_name(name: &str) -> ValidationResult<String> {
    validate_name("customer name", name)
}

/// Trims a phone number; blank becomes `None`.
pub fn normalize_phone(phone: Option<&str>) -> Option<String> {
    phone
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

/// Trims and lowercases an email so lookups are consistent; blank becomes `None`.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

// =============================================================================
// Closed-Set Parsers
// =============================================================================

/// Parses a species tag. Input is trimmed and lowercased first.
///
/// ## Example
/// ```rust
/// use kennel_core::validation::parse_species;
/// use kennel_core::Species;
///
/// assert_eq!(parse_species(" DOG ").unwrap(), Species::Dog);
/// assert!(parse_species("ferret").is_err());
/// ```
pub fn parse_species(raw: &str) -> ValidationResult<Species> {
    match raw.trim().to_lowercase().as_str() {
        "" => Err(ValidationError::Required {
            field: "species".to_string(),
        }),
        "dog" => Ok(Species::Dog),
        "cat" => Ok(Species::Cat),
        _ => Err(ValidationError::NotAllowed {
            field: "species".to_string(),
            allowed: Species::ALL.iter().map(|s| s.to_string()).collect(),
        }),
    }
}

/// Parses an optional grooming choice. Blank or `none` means no grooming.
pub fn parse_grooming_option(raw: Option<&str>) -> ValidationResult<Option<GroomingOption>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match raw.trim().to_lowercase().as_str() {
        "" | "none" => Ok(None),
        "bath" => Ok(Some(GroomingOption::Bath)),
        "full" => Ok(Some(GroomingOption::Full)),
        _ => Err(ValidationError::NotAllowed {
            field: "grooming".to_string(),
            allowed: vec!["none".to_string(), "bath".to_string(), "full".to_string()],
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a pet age in whole years (0 allowed for puppies and kittens).
pub fn validate_age(age: i64) -> ValidationResult<u32> {
    if !(0..=i64::from(MAX_AGE_YEARS)).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: i64::from(MAX_AGE_YEARS),
        });
    }

    Ok(age as u32)
}

/// Validates nights of stay.
///
/// ## Rules
/// - At least one night
/// - At most MAX_DAYS_STAY (365)
pub fn validate_days_stay(days: i64) -> ValidationResult<u32> {
    if !(1..=i64::from(MAX_DAYS_STAY)).contains(&days) {
        return Err(ValidationError::OutOfRange {
            field: "days_stay".to_string(),
            min: 1,
            max: i64::from(MAX_DAYS_STAY),
        });
    }

    Ok(days as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pet_name() {
        assert_eq!(validate_pet_name("Rex").unwrap(), "Rex");
        assert!(validate_pet_name("").is_err());
        assert!(validate_pet_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_species() {
        assert_eq!(parse_species("cat").unwrap(), Species::Cat);
        assert_eq!(parse_species("  Dog").unwrap(), Species::Dog);
        assert!(matches!(
            parse_species(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_species("parrot"),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_parse_grooming_option() {
        assert_eq!(parse_grooming_option(None).unwrap(), None);
        assert_eq!(parse_grooming_option(Some("none")).unwrap(), None);
        assert_eq!(
            parse_grooming_option(Some("BATH")).unwrap(),
            Some(GroomingOption::Bath)
        );
        assert!(parse_grooming_option(Some("pedicure")).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age(0).unwrap(), 0);
        assert_eq!(validate_age(14).unwrap(), 14);
        assert!(validate_age(-1).is_err());
        assert!(validate_age(i64::from(MAX_AGE_YEARS) + 1).is_err());
    }

    #[test]
    fn test_validate_days_stay() {
        assert_eq!(validate_days_stay(1).unwrap(), 1);
        assert_eq!(validate_days_stay(365).unwrap(), 365);
        assert!(validate_days_stay(0).is_err());
        assert!(validate_days_stay(-3).is_err());
        assert!(validate_days_stay(366).is_err());
    }

    #[test]
    fn test_normalize_contact() {
        assert_eq!(normalize_phone(Some("  ")), None);
        assert_eq!(normalize_email(Some(" A@B.io ")).as_deref(), Some("a@b.io"));
        assert_eq!(normalize_email(None), None);
    }
}
