//! # fleet-core: Pure Domain Logic for FleetShare
//!
//! This crate is the **heart** of FleetShare. It contains the rental domain
//! as pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       FleetShare Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/console (menu front-end)                  │   │
//! │  │    add vehicle ──► start trip ──► end trip ──► revenue report   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            fleet-service (TripCoordinator, reports)             │   │
//! │  │    start / end / cancel, active index, one clock read per op    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fleet-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Vehicle  │  │   Money   │  │ TimeBased │  │   rules   │  │   │
//! │  │   │   Trip    │  │ Multiplier│  │   Surge   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOCKS • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, User, Trip, state enums)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`distance`] - Whole-meter distance value type
//! - [`pricing`] - Composable pricing strategy tree
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: a pricing quote is reproducible from its snapshot
//! 2. **No I/O**: clock reads, locks, and terminals live in outer crates
//! 3. **Integer Money**: all monetary values are currency-tagged cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fleet_core::money::{Money, Multiplier};
//! use fleet_core::pricing::PricingStrategy;
//!
//! // The default fare schedule: time + distance, surge-ready.
//! let schedule = PricingStrategy::hybrid(vec![
//!     PricingStrategy::time_based(Money::usd(50)),     // $0.50/min
//!     PricingStrategy::distance_based(Money::usd(20)), // $0.20/km
//! ]);
//!
//! // Rush hour? Wrap the whole schedule.
//! let rush_hour = schedule.with_surge(Multiplier::from_factor(1.5));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod distance;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fleet_core::Money` instead of
// `use fleet_core::money::Money`

pub use distance::Distance;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Currency, Money, Multiplier};
pub use pricing::PricingStrategy;
pub use types::*;
