//! # Distance Module
//!
//! A non-negative metric distance, stored as whole meters.
//!
//! Keeping distance in the same exact-integer family as [`crate::money::Money`]
//! means per-kilometer fares never touch binary floating point.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A traveled distance in whole meters.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: a distance cannot be negative
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Meter resolution**: finer than any odometer feed we consume
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Distance(u64);

impl Distance {
    /// The zero distance (a trip that never moved).
    pub const ZERO: Distance = Distance(0);

    /// Creates a distance from whole meters.
    #[inline]
    pub const fn from_meters(meters: u64) -> Self {
        Distance(meters)
    }

    /// Creates a distance from kilometers (for convenience).
    ///
    /// Rounded to the nearest meter; negative or non-finite input clamps
    /// to zero.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::distance::Distance;
    ///
    /// assert_eq!(Distance::from_km(1.5).meters(), 1500);
    /// assert_eq!(Distance::from_km(-3.0), Distance::ZERO);
    /// ```
    pub fn from_km(km: f64) -> Self {
        Distance((km * 1_000.0).round() as u64)
    }

    /// Returns the distance in whole meters.
    #[inline]
    pub const fn meters(&self) -> u64 {
        self.0
    }

    /// Returns the distance in kilometers (for display only).
    #[inline]
    pub fn km(&self) -> f64 {
        self.0 as f64 / 1_000.0
    }

    /// Checks if the distance is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Distance {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl AddAssign for Distance {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.km())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_km() {
        assert_eq!(Distance::from_km(10.0).meters(), 10_000);
        assert_eq!(Distance::from_km(0.0), Distance::ZERO);
        assert_eq!(Distance::from_km(2.5).meters(), 2_500);
        assert_eq!(Distance::from_km(0.001).meters(), 1);
    }

    #[test]
    fn test_bad_input_clamps_to_zero() {
        assert_eq!(Distance::from_km(-1.0), Distance::ZERO);
        assert_eq!(Distance::from_km(f64::NAN), Distance::ZERO);
    }

    #[test]
    fn test_addition() {
        let a = Distance::from_meters(1_200);
        let b = Distance::from_meters(800);
        assert_eq!((a + b).meters(), 2_000);

        let mut c = Distance::ZERO;
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Distance::from_km(10.5)), "10.50 km");
        assert_eq!(format!("{}", Distance::ZERO), "0.00 km");
    }
}
