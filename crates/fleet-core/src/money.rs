//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Trip prices are summed across the whole trip history for revenue       │
//! │  reporting. Float drift would silently corrupt those totals.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 count of the smallest currency unit.          │
//! │    Fractional scaling (surge, per-km fares) runs through i128           │
//! │    fixed-point math with explicit rounding.                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Currency Safety
//! Unlike a bare cent count, `Money` carries a [`Currency`] tag. Arithmetic
//! between two amounts demands equal tags and fails with
//! [`CoreError::CurrencyMismatch`] otherwise. There is no conversion: an EUR
//! amount never silently becomes USD.
//!
//! ## Usage
//! ```rust
//! use fleet_core::money::{Currency, Money, Multiplier};
//!
//! let fare = Money::usd(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = fare.multiply(2);                       // $21.98
//! let total = fare.add(Money::usd(500)).unwrap();       // $15.99
//! let surged = fare.scale(Multiplier::from_factor(1.5)); // $16.49 (rounded)
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::Distance;
use crate::error::{CoreError, CoreResult, ValidationError};

// =============================================================================
// Currency
// =============================================================================

/// A three-letter uppercase currency code, e.g. `USD`.
///
/// ## Design Decisions
/// - **`[u8; 3]` inline**: `Copy`, no allocation, comparable by value
/// - **Validated on construction**: a `Currency` in hand is always well-formed
/// - **Serialized as a string**: `"USD"` on the wire, not a byte array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// The default currency used when none is specified.
    pub const USD: Currency = Currency(*b"USD");

    /// Creates a currency from a three-letter uppercase ASCII code.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Currency;
    ///
    /// assert!(Currency::new("EUR").is_ok());
    /// assert!(Currency::new("usd").is_err());
    /// assert!(Currency::new("DOLLARS").is_err());
    /// ```
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidFormat {
                field: "currency".to_string(),
                reason: "must be exactly three uppercase ASCII letters".to_string(),
            });
        }
        Ok(Currency([bytes[0], bytes[1], bytes[2]]))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Currency::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.to_string()
    }
}

// =============================================================================
// Multiplier
// =============================================================================

/// A dimensionless scale factor in per-myriad fixed point.
///
/// ## Why Per-Myriad?
/// 1 per-myriad unit = 0.01% = 1/10000, the same resolution as a basis
/// point but allowed past 100%:
/// - `15000` = 1.5x (a typical surge)
/// - `10000` = 1.0x (identity)
/// - `8000`  = 0.8x (a discount; factors below identity are legal)
///
/// Keeping the factor in integer fixed point keeps every price exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The 1.0x factor. Scaling by it returns the amount unchanged.
    pub const IDENTITY: Multiplier = Multiplier(10_000);

    /// Creates a multiplier from per-myriad units (15000 = 1.5x).
    #[inline]
    pub const fn from_per_myriad(units: u32) -> Self {
        Multiplier(units)
    }

    /// Creates a multiplier from a plain factor (for convenience).
    ///
    /// The factor is rounded to the nearest 0.01%; negative or non-finite
    /// input clamps to zero.
    pub fn from_factor(factor: f64) -> Self {
        Multiplier((factor * 10_000.0).round() as u32)
    }

    /// Returns the factor in per-myriad units.
    #[inline]
    pub const fn per_myriad(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a plain f64 (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Checks if this is the identity factor.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 10_000
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::IDENTITY
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}x", self.factor())
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value: a count of the smallest currency unit plus its currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for adjustments and refunds
/// - **Immutable**: every operation returns a new value
/// - **Fallible cross-amount arithmetic**: `add`/`subtract` return `Result`
///   because the currencies may disagree; same-amount scaling never fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64, currency: Currency) -> Self {
        Money { cents, currency }
    }

    /// Creates a USD amount from cents.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let fare = Money::usd(1099); // $10.99
    /// assert_eq!(fare.cents(), 1099);
    /// ```
    #[inline]
    pub const fn usd(cents: i64) -> Self {
        Money::from_cents(cents, Currency::USD)
    }

    /// Returns the zero amount in the given currency.
    ///
    /// The neutral element for revenue folds: start from
    /// `Money::zero(currency)` and `add` each trip price.
    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Money::from_cents(0, currency)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the currency tag.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the major unit portion (dollars for USD).
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.cents % 100).abs()
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Adds another amount, requiring equal currencies.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let total = Money::usd(1000).add(Money::usd(500)).unwrap();
    /// assert_eq!(total.cents(), 1500);
    /// ```
    pub fn add(self, other: Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(Money::from_cents(self.cents + other.cents, self.currency))
    }

    /// Subtracts another amount, requiring equal currencies.
    pub fn subtract(self, other: Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(Money::from_cents(self.cents - other.cents, self.currency))
    }

    /// Multiplies by a whole quantity (e.g. billable minutes).
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let rate = Money::usd(50); // $0.50 per minute
    /// assert_eq!(rate.multiply(10).cents(), 500); // $5.00 for 10 minutes
    /// ```
    #[inline]
    pub const fn multiply(self, qty: i64) -> Money {
        Money::from_cents(self.cents * qty, self.currency)
    }

    /// Scales by a fixed-point factor, rounding half away from zero upward.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(cents * per_myriad + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::{Money, Multiplier};
    ///
    /// let base = Money::usd(500); // $5.00
    /// let surged = base.scale(Multiplier::from_factor(1.5));
    /// assert_eq!(surged.cents(), 750); // $7.50
    /// ```
    pub fn scale(self, multiplier: Multiplier) -> Money {
        let scaled =
            (self.cents as i128 * multiplier.per_myriad() as i128 + 5_000) / 10_000;
        Money::from_cents(scaled as i64, self.currency)
    }

    /// Treats this amount as a per-kilometer rate and prices a distance.
    ///
    /// ## Implementation
    /// The distance is whole meters, so the fare is
    /// `(cents * meters + 500) / 1000` in i128, rounded like [`Money::scale`].
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::distance::Distance;
    /// use fleet_core::money::Money;
    ///
    /// let rate = Money::usd(50); // $0.50 per km
    /// let fare = rate.multiply_distance(Distance::from_km(10.0));
    /// assert_eq!(fare.cents(), 500); // $5.00
    /// ```
    pub fn multiply_distance(self, distance: Distance) -> Money {
        let fare = (self.cents as i128 * distance.meters() as i128 + 500) / 1_000;
        Money::from_cents(fare as i64, self.currency)
    }

    fn ensure_same_currency(&self, other: Money) -> CoreResult<()> {
        if self.currency != other.currency {
            return Err(CoreError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

/// Default money is zero USD.
impl Default for Money {
    fn default() -> Self {
        Money::zero(Currency::USD)
    }
}

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and the console menu. `5.00 USD`, `-5.50 EUR`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02} {}",
            sign,
            self.major_units().abs(),
            self.minor_part(),
            self.currency
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn eur(cents: i64) -> Money {
        Money::from_cents(cents, Currency::new("EUR").unwrap())
    }

    #[test]
    fn test_currency_validation() {
        assert!(Currency::new("USD").is_ok());
        assert!(Currency::new("SAR").is_ok());
        assert!(Currency::new("usd").is_err());
        assert!(Currency::new("US").is_err());
        assert!(Currency::new("US1").is_err());
        assert!(Currency::new("").is_err());
    }

    #[test]
    fn test_currency_serde_round_trip() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Currency::USD);

        assert!(serde_json::from_str::<Currency>("\"dollars\"").is_err());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = Money::usd(1000);
        let b = Money::usd(500);

        assert_eq!(a.add(b).unwrap().cents(), 1500);
        assert_eq!(a.subtract(b).unwrap().cents(), 500);
    }

    #[test]
    fn test_add_subtract_round_trip() {
        // subtract(add(a, b), b) == a
        let a = Money::usd(1234);
        let b = Money::usd(991);
        assert_eq!(a.add(b).unwrap().subtract(b).unwrap(), a);
    }

    #[test]
    fn test_cross_currency_arithmetic_fails() {
        let usd = Money::usd(100);
        let eur = eur(100);

        assert!(matches!(
            usd.add(eur),
            Err(CoreError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            usd.subtract(eur),
            Err(CoreError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_quantity() {
        let rate = Money::usd(50);
        assert_eq!(rate.multiply(10).cents(), 500);
        assert_eq!(rate.multiply(0).cents(), 0);
    }

    #[test]
    fn test_scale_identity_is_exact() {
        for cents in [0, 1, 49, 50, 99, 1234, -550, i64::from(i32::MAX)] {
            let amount = Money::usd(cents);
            assert_eq!(amount.scale(Multiplier::IDENTITY), amount);
        }
    }

    #[test]
    fn test_scale_surge() {
        // $5.00 × 1.5 = $7.50
        let base = Money::usd(500);
        assert_eq!(base.scale(Multiplier::from_factor(1.5)).cents(), 750);

        // Factors below identity are legal: $10.00 × 0.8 = $8.00
        assert_eq!(
            Money::usd(1000).scale(Multiplier::from_factor(0.8)).cents(),
            800
        );

        // Zeroing factor
        assert_eq!(Money::usd(1000).scale(Multiplier::from_per_myriad(0)).cents(), 0);
    }

    #[test]
    fn test_scale_rounds_half_up() {
        // $0.25 × 1.5 = $0.375 → rounds to $0.38
        assert_eq!(Money::usd(25).scale(Multiplier::from_factor(1.5)).cents(), 38);
    }

    #[test]
    fn test_multiply_distance() {
        let rate = Money::usd(50); // $0.50/km
        assert_eq!(rate.multiply_distance(Distance::from_km(10.0)).cents(), 500);
        assert_eq!(rate.multiply_distance(Distance::from_km(0.0)).cents(), 0);
        // 1.5 km at $0.50/km = $0.75
        assert_eq!(rate.multiply_distance(Distance::from_km(1.5)).cents(), 75);
        // Sub-cent fares round: 10 m at $0.50/km = $0.005 → $0.01
        assert_eq!(rate.multiply_distance(Distance::from_meters(10)).cents(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::usd(1099)), "10.99 USD");
        assert_eq!(format!("{}", Money::usd(500)), "5.00 USD");
        assert_eq!(format!("{}", Money::usd(-550)), "-5.50 USD");
        assert_eq!(format!("{}", eur(0)), "0.00 EUR");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero(Currency::USD);
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::usd(100).is_positive());
        assert!(Money::usd(-100).is_negative());
    }

    #[test]
    fn test_multiplier_from_factor() {
        assert_eq!(Multiplier::from_factor(1.5).per_myriad(), 15_000);
        assert_eq!(Multiplier::from_factor(0.8).per_myriad(), 8_000);
        assert_eq!(Multiplier::from_factor(1.0), Multiplier::IDENTITY);
        assert!(Multiplier::IDENTITY.is_identity());
    }
}
