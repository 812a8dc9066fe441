//! # Error Types
//!
//! Domain-specific error types for fleet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fleet-core errors (this file)                                         │
//! │  ├── CoreError        - Lifecycle and pricing rule violations          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  fleet-store errors (separate crate)                                   │
//! │  └── StoreError       - Store lookup failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller boundary (console/tests)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (trip id, vehicle state, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every failure is recoverable: the coordinator stays usable after any
//!    of these, and no partial entity mutation is left behind

use thiserror::Error;

use crate::money::Currency;
use crate::types::{TripState, VehicleState};

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
///
/// These errors represent lifecycle or pricing failures. They are reported
/// synchronously to the caller, never retried, and never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Arithmetic attempted between two different currencies.
    ///
    /// ## When This Occurs
    /// - Adding or subtracting amounts tagged with different currencies
    /// - A Hybrid pricing node whose children quote in different currencies
    ///
    /// There is no currency conversion anywhere in the system, so this is
    /// always a configuration mistake by the caller.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// Trip start attempted on a vehicle that is not available.
    ///
    /// ## User Workflow
    /// ```text
    /// Start Trip (vehicle: car-7)
    ///      │
    ///      ▼
    /// Check state: InUse
    ///      │
    ///      ▼
    /// VehicleUnavailable { vehicle_id: "car-7", state: InUse }
    ///      │
    ///      ▼
    /// UI shows: "car-7 is in use"
    /// ```
    #[error("Vehicle {vehicle_id} is {state:?}, not available")]
    VehicleUnavailable {
        vehicle_id: String,
        state: VehicleState,
    },

    /// Vehicle id missing from the fleet store.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// User id missing from the user store.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Trip id missing from the active-trip index.
    ///
    /// Also returned for trips that already finished: ending a trip removes
    /// it from the active index, so a second `end` or `cancel` on the same
    /// id reports the trip as not found rather than double-charging.
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    /// Operation illegal for the trip's current lifecycle state.
    ///
    /// ## When This Occurs
    /// - Ending a trip that is not InProgress
    /// - Starting a trip entity that is not Created
    #[error("Trip {trip_id} is {state:?}, cannot perform operation")]
    InvalidStateTransition { trip_id: String, state: TripState },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when external input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., malformed currency code, non-finite number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Membership tier text that names no known tier.
    #[error("Unknown membership tier: '{value}'")]
    UnknownMembershipTier { value: String },
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
    fn test_error_messages() {
        let err = CoreError::VehicleUnavailable {
            vehicle_id: "car-7".to_string(),
            state: VehicleState::InUse,
        };
        assert_eq!(err.to_string(), "Vehicle car-7 is InUse, not available");

        let err = CoreError::TripNotFound("t-404".to_string());
        assert_eq!(err.to_string(), "Trip not found: t-404");
    }

    #[test]
    fn test_currency_mismatch_message() {
        let err = CoreError::CurrencyMismatch {
            left: Currency::USD,
            right: Currency::new("EUR").unwrap(),
        };
        assert_eq!(err.to_string(), "Currency mismatch: USD vs EUR");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "vehicle id".to_string(),
        };
        assert_eq!(err.to_string(), "vehicle id is required");

        let err = ValidationError::UnknownMembershipTier {
            value: "gold".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown membership tier: 'gold'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "model".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
