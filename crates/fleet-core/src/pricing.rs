//! # Pricing Strategies
//!
//! Composable fare calculation over trip snapshots.
//!
//! ## Strategy Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pricing Strategy Composition                         │
//! │                                                                         │
//! │  A strategy is a tree of nodes, evaluated bottom-up:                    │
//! │                                                                         │
//! │                     Surge (×1.5)                                        │
//! │                        │                                                │
//! │                     Hybrid (sum)                                        │
//! │                    ┌───┴────────────┐                                   │
//! │              TimeBased         DistanceBased                            │
//! │              $0.50/min           $0.20/km                               │
//! │                                                                         │
//! │  Every node maps the SAME trip snapshot to a Money amount.              │
//! │  Hybrid sums its children; Surge scales whatever it wraps.              │
//! │  Nodes nest to arbitrary depth: Surge over Surge over Hybrid is fine.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Contract
//! `quote` is pure and deterministic: no I/O, no hidden state, identical
//! results on repeated calls. Missing trip data (unset timestamps, zero
//! distance) yields a zero fare, never an error; the only failure mode is a
//! currency mismatch among composed children.
//!
//! ## Why a Tagged Tree?
//! The source modeled this as Strategy and Decorator object graphs behind an
//! interface. A data-driven enum keeps the composition serializable (a fare
//! schedule is configuration) and needs no dynamic dispatch.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::{Currency, Money, Multiplier};
use crate::types::TripSnapshot;

// =============================================================================
// Strategy Tree
// =============================================================================

/// A composable fare calculation: a tagged tree evaluated by [`quote`].
///
/// [`quote`]: PricingStrategy::quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    /// Bills whole minutes between start and end at a fixed rate.
    TimeBased { rate_per_minute: Money },

    /// Bills the recorded trip distance at a fixed per-kilometer rate.
    DistanceBased { rate_per_km: Money },

    /// Sums any number of child strategies over the same snapshot.
    Hybrid { parts: Vec<PricingStrategy> },

    /// Scales the wrapped strategy's fare by a fixed factor.
    Surge {
        inner: Box<PricingStrategy>,
        multiplier: Multiplier,
    },
}

impl PricingStrategy {
    /// A time-based strategy billing `rate_per_minute` per whole minute.
    pub const fn time_based(rate_per_minute: Money) -> Self {
        PricingStrategy::TimeBased { rate_per_minute }
    }

    /// A distance-based strategy billing `rate_per_km` per kilometer.
    pub const fn distance_based(rate_per_km: Money) -> Self {
        PricingStrategy::DistanceBased { rate_per_km }
    }

    /// An n-ary sum of child strategies.
    pub fn hybrid(parts: Vec<PricingStrategy>) -> Self {
        PricingStrategy::Hybrid { parts }
    }

    /// Wraps this strategy in a surge decorator.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::{Money, Multiplier};
    /// use fleet_core::pricing::PricingStrategy;
    ///
    /// let rush_hour = PricingStrategy::time_based(Money::usd(50))
    ///     .with_surge(Multiplier::from_factor(1.5));
    /// ```
    pub fn with_surge(self, multiplier: Multiplier) -> Self {
        PricingStrategy::Surge {
            inner: Box::new(self),
            multiplier,
        }
    }

    /// Computes the fare for a trip snapshot.
    ///
    /// Pure and deterministic. Fails only on a currency mismatch among
    /// composed children; missing trip data prices as zero.
    pub fn quote(&self, snapshot: &TripSnapshot) -> CoreResult<Money> {
        match self {
            PricingStrategy::TimeBased { rate_per_minute } => {
                let (start, end) = match (snapshot.start_time, snapshot.end_time) {
                    (Some(start), Some(end)) => (start, end),
                    // Zero fare while either timestamp is unset.
                    _ => return Ok(Money::zero(rate_per_minute.currency())),
                };
                // Whole minutes, truncated toward zero, never negative.
                let minutes = (end - start).num_minutes().max(0);
                Ok(rate_per_minute.multiply(minutes))
            }

            PricingStrategy::DistanceBased { rate_per_km } => {
                if snapshot.distance.is_zero() {
                    return Ok(Money::zero(rate_per_km.currency()));
                }
                Ok(rate_per_km.multiply_distance(snapshot.distance))
            }

            PricingStrategy::Hybrid { parts } => {
                let mut total: Option<Money> = None;
                for part in parts {
                    let fare = part.quote(snapshot)?;
                    total = Some(match total {
                        Some(sum) => sum.add(fare)?,
                        None => fare,
                    });
                }
                Ok(total.unwrap_or_else(|| Money::zero(Currency::default())))
            }

            PricingStrategy::Surge { inner, multiplier } => {
                Ok(inner.quote(snapshot)?.scale(*multiplier))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
