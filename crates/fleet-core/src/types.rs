//! # Domain Types
//!
//! Core domain types used throughout FleetShare.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │      User       │   │      Trip       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (UUID)      │       │
//! │  │  model          │   │  name           │   │  user_id        │       │
//! │  │  kind (variant) │   │  tier           │   │  vehicle_id     │       │
//! │  │  state          │   └─────────────────┘   │  state          │       │
//! │  │  rate_per_min   │                         │  times, price   │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  VehicleState   │   │ MembershipTier  │   │   TripState     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Available      │   │  Standard 1.0x  │   │  Created        │       │
//! │  │  InUse          │   │  Premium  0.8x  │   │  InProgress     │       │
//! │  │  Maintenance    │   │  Vip      0.0x  │   │  Completed      │       │
//! │  │  Reserved       │   └─────────────────┘   │  Canceled       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Discipline
//! A `Trip` refers to its vehicle by id, never by pointer. All vehicle state
//! mutation goes through the coordinator against the canonical store, so
//! there is exactly one writable copy of each vehicle in the system.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::distance::Distance;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{Money, Multiplier};

// =============================================================================
// Vehicle State
// =============================================================================

/// The availability state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleState {
    /// Ready to be checked out.
    Available,
    /// Checked out by exactly one in-progress trip.
    InUse,
    /// Pulled from the fleet for service.
    Maintenance,
    /// Held for a future checkout, not yet in use.
    Reserved,
}

impl Default for VehicleState {
    fn default() -> Self {
        VehicleState::Available
    }
}

// =============================================================================
// Vehicle Kind
// =============================================================================

/// The kind of vehicle, with its one kind-specific attribute.
///
/// ## Design Decision
/// The source modeled Car/EBike/Scooter as subclasses of a Vehicle base, but
/// the subtypes carry no behavioral differences — only one extra field each.
/// A tagged variant keeps the distinction as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// A car with its fuel type ("diesel", "electric", ...).
    Car { fuel_type: String },
    /// An electric bike with its current charge.
    EBike { battery_percent: u8 },
    /// A kick scooter with its rider weight limit.
    Scooter { max_load_kg: u32 },
}

impl VehicleKind {
    /// Human-readable kind label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::EBike { .. } => "EBike",
            VehicleKind::Scooter { .. } => "Scooter",
        }
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rentable asset with availability state and a per-minute base rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier (fleet-assigned, e.g. "car-7").
    pub id: String,

    /// Display model name shown in listings.
    pub model: String,

    /// Kind tag with the kind-specific attribute.
    pub kind: VehicleKind,

    /// Availability state. After registration, only the trip coordinator
    /// writes this field.
    pub state: VehicleState,

    /// Base rental rate per minute.
    pub rate_per_minute: Money,

    /// When the vehicle joined the fleet.
    pub registered_at: DateTime<Utc>,
}

impl Vehicle {
    /// Registers a new vehicle. The initial state is Available.
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        kind: VehicleKind,
        rate_per_minute: Money,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Vehicle {
            id: id.into(),
            model: model.into(),
            kind,
            state: VehicleState::Available,
            rate_per_minute,
            registered_at,
        }
    }

    /// Fails with `VehicleUnavailable` unless the vehicle is Available.
    pub fn ensure_available(&self) -> CoreResult<()> {
        if self.state != VehicleState::Available {
            return Err(CoreError::VehicleUnavailable {
                vehicle_id: self.id.clone(),
                state: self.state,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Membership Tier
// =============================================================================

/// A user classification carrying a discount multiplier.
///
/// ## Note
/// No pricing strategy currently consumes the multiplier — it is carried as
/// an attribute of the user, not applied as a hidden pricing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    /// No discount (multiplier 1.0).
    Standard,
    /// 20% discount (multiplier 0.8).
    Premium,
    /// Rides free (multiplier 0.0).
    Vip,
}

impl MembershipTier {
    /// Returns the discount multiplier for this membership tier.
    pub const fn discount_multiplier(&self) -> Multiplier {
        match self {
            MembershipTier::Standard => Multiplier::from_per_myriad(10_000),
            MembershipTier::Premium => Multiplier::from_per_myriad(8_000),
            MembershipTier::Vip => Multiplier::from_per_myriad(0),
        }
    }
}

impl Default for MembershipTier {
    fn default() -> Self {
        MembershipTier::Standard
    }
}

/// Case-insensitive parsing for external text input (console, config).
impl FromStr for MembershipTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(MembershipTier::Standard),
            "premium" => Ok(MembershipTier::Premium),
            "vip" => Ok(MembershipTier::Vip),
            other => Err(ValidationError::UnknownMembershipTier {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered rider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Membership tier (discount multiplier currently unapplied).
    pub tier: MembershipTier,
}

impl User {
    /// Creates a new user.
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: MembershipTier) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            tier,
        }
    }
}

// =============================================================================
// Trip State
// =============================================================================

/// The lifecycle state of a trip.
///
/// ```text
/// Created ──► InProgress ──► Completed
///    │             │
///    │             └────────► Canceled
///    └──────────────────────► Canceled
/// ```
///
/// Completed and Canceled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripState {
    /// Built but not yet begun (transient within `start`).
    Created,
    /// Currently ongoing; the referenced vehicle is InUse.
    InProgress,
    /// Finished normally; `price` is authoritative.
    Completed,
    /// Abandoned; `price` keeps its default.
    Canceled,
}

impl TripState {
    /// Terminal states accept no further transitions.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, TripState::Completed | TripState::Canceled)
    }
}

impl Default for TripState {
    fn default() -> Self {
        TripState::Created
    }
}

// =============================================================================
// Trip
// =============================================================================

/// One rental session linking a user and a vehicle.
///
/// ## Rate Freezing
/// The vehicle's per-minute rate is copied onto the trip at creation. If the
/// fleet re-prices the vehicle mid-trip, this trip keeps the rate the rider
/// saw when they checked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The rider.
    pub user_id: String,

    /// The rented vehicle, by id (the fleet store holds the entity).
    pub vehicle_id: String,

    /// Per-minute rate at checkout time (frozen).
    pub rate_per_minute: Money,

    /// Lifecycle state.
    pub state: TripState,

    /// Set when the trip begins.
    pub start_time: Option<DateTime<Utc>>,

    /// Set when the trip completes or is canceled.
    pub end_time: Option<DateTime<Utc>>,

    /// Odometer reading for the trip. Zero until recorded.
    pub distance: Distance,

    /// Final fare. Zero until the trip completes; authoritative only once
    /// the state is Completed.
    pub price: Money,

    /// When the trip record was created.
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Creates a trip in the Created state with a fresh id.
    ///
    /// Distance and price start at zero; the vehicle's rate is frozen onto
    /// the record.
    pub fn new(user: &User, vehicle: &Vehicle, created_at: DateTime<Utc>) -> Self {
        Trip {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            vehicle_id: vehicle.id.clone(),
            rate_per_minute: vehicle.rate_per_minute,
            state: TripState::Created,
            start_time: None,
            end_time: None,
            distance: Distance::ZERO,
            price: Money::zero(vehicle.rate_per_minute.currency()),
            created_at,
        }
    }

    /// Begins the trip: Created → InProgress, recording the start time.
    pub fn begin(&mut self, at: DateTime<Utc>) -> CoreResult<()> {
        self.ensure_state(TripState::Created)?;
        self.start_time = Some(at);
        self.state = TripState::InProgress;
        Ok(())
    }

    /// Completes the trip: InProgress → Completed, recording the end time
    /// and the computed fare.
    pub fn complete(&mut self, at: DateTime<Utc>, price: Money) -> CoreResult<()> {
        self.ensure_state(TripState::InProgress)?;
        self.end_time = Some(at);
        self.price = price;
        self.state = TripState::Completed;
        Ok(())
    }

    /// Cancels the trip from any state, recording the end time.
    ///
    /// ## Caveat
    /// This transition is deliberately unconditional, carried over from the
    /// source system: a trip that is already Completed or Canceled is moved
    /// to Canceled again without complaint. Callers that need strictness
    /// must check [`TripState::is_terminal`] first. The price keeps whatever
    /// value it had; no pricing evaluation happens on this path.
    pub fn cancel(&mut self, at: DateTime<Utc>) {
        self.state = TripState::Canceled;
        self.end_time = Some(at);
    }

    /// Fails with `InvalidStateTransition` unless the trip is in `expected`.
    pub fn ensure_state(&self, expected: TripState) -> CoreResult<()> {
        if self.state != expected {
            return Err(CoreError::InvalidStateTransition {
                trip_id: self.id.clone(),
                state: self.state,
            });
        }
        Ok(())
    }

    /// Elapsed time between start and end, zero while either is unset.
    pub fn duration(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// The pricing input as of the trip's recorded fields.
    pub fn snapshot(&self) -> TripSnapshot {
        TripSnapshot {
            start_time: self.start_time,
            end_time: self.end_time,
            distance: self.distance,
            rate_per_minute: self.rate_per_minute,
        }
    }

    /// The pricing input with a candidate end time, for quoting a fare
    /// before the trip record is mutated.
    pub fn snapshot_ending_at(&self, end: DateTime<Utc>) -> TripSnapshot {
        TripSnapshot {
            end_time: Some(end),
            ..self.snapshot()
        }
    }
}

// =============================================================================
// Trip Snapshot
// =============================================================================

/// The immutable pricing input: everything a strategy may look at.
///
/// Strategies never touch the `Trip` entity, so a quote is reproducible
/// from its snapshot alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSnapshot {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub distance: Distance,
    /// The vehicle's per-minute rate frozen at checkout.
    pub rate_per_minute: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
