//! # Validation Module
//!
//! Input validation for data arriving from outside the domain (console
//! input, configuration). Runs before any domain logic.
//!
//! ## Usage
//! ```rust
//! use fleet_core::validation::{validate_vehicle_id, validate_rate_cents};
//!
//! validate_vehicle_id("car-7").unwrap();
//! validate_rate_cents(50).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a vehicle id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - Alphanumeric, hyphens, and underscores only
pub fn validate_vehicle_id(id: &str) -> ValidationResult<()> {
    validate_id("vehicle id", id)
}

/// Validates a user id. Same rules as vehicle ids.
pub fn validate_user_id(id: &str) -> ValidationResult<()> {
    validate_id("user id", id)
}

fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > 50 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 50,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Name Validators
// =============================================================================

/// Validates a vehicle model or user display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
pub fn validate_display_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a per-unit rate in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional free rides)
pub fn validate_rate_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a kilometer reading from external input.
///
/// ## Rules
/// - Must be finite (rejects NaN and infinities)
/// - Must be non-negative
pub fn validate_distance_km(km: f64) -> ValidationResult<()> {
    if !km.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "distance".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if km < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "distance".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
