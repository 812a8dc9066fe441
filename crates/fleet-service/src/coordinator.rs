//! # Trip Coordinator
//!
//! Drives the trip lifecycle and keeps trips and vehicles consistent.
//!
//! ## Lifecycle Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   TripCoordinator Operations                            │
//! │                                                                         │
//! │  Caller Action            Operation              State Change           │
//! │  ─────────────            ─────────              ────────────           │
//! │                                                                         │
//! │  Check out vehicle ─────► start() ─────────────► Trip: InProgress      │
//! │                                                  Vehicle: InUse         │
//! │                                                  index.insert(trip)     │
//! │                                                                         │
//! │  Odometer update ───────► record_distance() ───► trip.distance = d     │
//! │                                                                         │
//! │  Return vehicle ────────► end() ───────────────► price = quote(trip)   │
//! │                                                  Trip: Completed        │
//! │                                                  Vehicle: Available     │
//! │                                                  index → trip log       │
//! │                                                                         │
//! │  Abandon trip ──────────► cancel() ────────────► Trip: Canceled        │
//! │                                                  Vehicle: Available     │
//! │                                                  index → trip log       │
//! │                                                                         │
//! │  NOTE: every operation runs inside ONE critical section and reads       │
//! │        the clock exactly once, so stored timestamps and derived         │
//! │        prices are mutually consistent under concurrency.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Invariant
//! A vehicle is InUse if and only if exactly one trip referencing it is
//! InProgress. Both sides of that invariant are written inside the same
//! critical section; there is no window where a vehicle is InUse with no
//! active trip, or vice versa. Failed operations mutate nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use fleet_core::distance::Distance;
use fleet_core::error::{CoreError, CoreResult};
use fleet_core::money::Money;
use fleet_core::pricing::PricingStrategy;
use fleet_core::types::{Trip, TripState, VehicleState};
use fleet_store::{TripLog, UserStore, VehicleStore};

/// Orchestrates trip start/end/cancel against the canonical stores.
///
/// ## Thread Safety
/// The active-trip index sits behind a single `Mutex`; each vehicle's state
/// is only ever written while that mutex is held. One global lock is enough:
/// operations are microseconds of in-memory work and a fleet-scale index
/// sees little contention.
#[derive(Debug)]
pub struct TripCoordinator {
    vehicles: Arc<VehicleStore>,
    users: Arc<UserStore>,
    log: Arc<TripLog>,
    strategy: PricingStrategy,
    active: Mutex<HashMap<String, Trip>>,
}

impl TripCoordinator {
    /// Creates a coordinator over the given stores and fare schedule.
    pub fn new(
        vehicles: Arc<VehicleStore>,
        users: Arc<UserStore>,
        log: Arc<TripLog>,
        strategy: PricingStrategy,
    ) -> Self {
        TripCoordinator {
            vehicles,
            users,
            log,
            strategy,
            active: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a trip: checks the vehicle out and registers the trip as active.
    ///
    /// The Available → InUse transition is an atomic check-and-set under the
    /// coordinator lock: of N concurrent `start` calls against one available
    /// vehicle, exactly one succeeds and the rest observe
    /// [`CoreError::VehicleUnavailable`].
    ///
    /// ## Errors
    /// - `UserNotFound` / `VehicleNotFound` when a store lookup misses
    /// - `VehicleUnavailable` unless the vehicle is Available
    pub fn start(&self, user_id: &str, vehicle_id: &str) -> CoreResult<Trip> {
        let mut active = self.lock_active();

        // Resolve every collaborator before the first mutation.
        let user = self
            .users
            .get(user_id)
            .ok_or_else(|| CoreError::UserNotFound(user_id.to_string()))?;
        let vehicle = self
            .vehicles
            .get(vehicle_id)
            .ok_or_else(|| CoreError::VehicleNotFound(vehicle_id.to_string()))?;
        vehicle.ensure_available()?;

        // The one clock read for this operation.
        let now = Utc::now();
        let mut trip = Trip::new(&user, &vehicle, now);
        trip.begin(now)?;

        self.set_vehicle_state(vehicle_id, VehicleState::InUse)?;
        active.insert(trip.id.clone(), trip.clone());

        info!(trip_id = %trip.id, user_id, vehicle_id, "Trip started");
        Ok(trip)
    }

    /// Ends an active trip: prices it, frees the vehicle, archives the trip.
    ///
    /// The fare is computed exactly once, against the snapshot carrying the
    /// captured end time; the returned value and the price stored on the
    /// archived trip are the same amount. A pricing failure (a misconfigured
    /// schedule mixing currencies) leaves the trip active and every entity
    /// untouched.
    ///
    /// ## Errors
    /// - `TripNotFound` when the id is not in the active index (including
    ///   trips that already ended)
    /// - `InvalidStateTransition` when the trip is not InProgress
    pub fn end(&self, trip_id: &str) -> CoreResult<Money> {
        let mut active = self.lock_active();

        let trip = active
            .get_mut(trip_id)
            .ok_or_else(|| CoreError::TripNotFound(trip_id.to_string()))?;
        trip.ensure_state(TripState::InProgress)?;

        // The one clock read for this operation.
        let now = Utc::now();

        // Quote before any mutation.
        let price = self.strategy.quote(&trip.snapshot_ending_at(now))?;
        let vehicle_id = trip.vehicle_id.clone();
        self.set_vehicle_state(&vehicle_id, VehicleState::Available)?;

        trip.complete(now, price)?;
        let minutes = trip.duration().num_minutes();

        if let Some(finished) = active.remove(trip_id) {
            self.log.record(finished);
        }

        info!(trip_id, vehicle_id = %vehicle_id, minutes, price = %price, "Trip ended");
        Ok(price)
    }

    /// Cancels an active trip without pricing it.
    ///
    /// ## Caveat
    /// Cancellation is deliberately permissive, carried over from the source
    /// system: the trip is moved to Canceled whatever its current state, and
    /// the vehicle is set back to Available unconditionally. Because only
    /// the active index is consulted, trips that already finished report
    /// `TripNotFound` here rather than being re-canceled. The trip's price
    /// keeps its pre-cancel default.
    ///
    /// ## Errors
    /// - `TripNotFound` when the id is not in the active index
    pub fn cancel(&self, trip_id: &str) -> CoreResult<()> {
        let mut active = self.lock_active();

        let trip = active
            .get_mut(trip_id)
            .ok_or_else(|| CoreError::TripNotFound(trip_id.to_string()))?;

        // The one clock read for this operation.
        let now = Utc::now();

        let vehicle_id = trip.vehicle_id.clone();
        self.set_vehicle_state(&vehicle_id, VehicleState::Available)?;
        trip.cancel(now);

        if let Some(canceled) = active.remove(trip_id) {
            self.log.record(canceled);
        }

        info!(trip_id, vehicle_id = %vehicle_id, "Trip canceled");
        Ok(())
    }

    /// Records an odometer reading for an active trip, replacing the
    /// previous one.
    ///
    /// ## Errors
    /// - `TripNotFound` when the id is not in the active index
    pub fn record_distance(&self, trip_id: &str, distance: Distance) -> CoreResult<()> {
        let mut active = self.lock_active();

        let trip = active
            .get_mut(trip_id)
            .ok_or_else(|| CoreError::TripNotFound(trip_id.to_string()))?;
        trip.distance = distance;

        debug!(trip_id, distance = %distance, "Distance recorded");
        Ok(())
    }

    /// Read-only lookup into the active-trip index.
    pub fn lookup_active(&self, trip_id: &str) -> Option<Trip> {
        let active = self.lock_active();
        active.get(trip_id).cloned()
    }

    /// All currently active trips, for listings.
    pub fn active_trips(&self) -> Vec<Trip> {
        let active = self.lock_active();
        active.values().cloned().collect()
    }

    fn lock_active(&self) -> MutexGuard<'_, HashMap<String, Trip>> {
        self.active.lock().expect("active trip index poisoned")
    }

    fn set_vehicle_state(&self, vehicle_id: &str, state: VehicleState) -> CoreResult<()> {
        self.vehicles
            .set_state(vehicle_id, state)
            .map_err(|_| CoreError::VehicleNotFound(vehicle_id.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fleet_core::money::{Currency, Money, Multiplier};
    use fleet_core::types::{MembershipTier, User, Vehicle, VehicleKind};
    use std::thread;

    fn fixture(strategy: PricingStrategy) -> (Arc<TripCoordinator>, Arc<VehicleStore>, Arc<TripLog>) {
        let vehicles = Arc::new(VehicleStore::new());
        let users = Arc::new(UserStore::new());
        let log = Arc::new(TripLog::new());

        vehicles.save(Vehicle::new(
            "car-1",
            "Model 3",
            VehicleKind::Car {
                fuel_type: "electric".to_string(),
            },
            Money::usd(50),
            Utc::now(),
        ));
        users.save(User::new("u-1", "Ismail", MembershipTier::Standard));

        let coordinator = Arc::new(TripCoordinator::new(
            Arc::clone(&vehicles),
            users,
            Arc::clone(&log),
            strategy,
        ));
        (coordinator, vehicles, log)
    }

    fn distance_schedule() -> PricingStrategy {
        PricingStrategy::distance_based(Money::usd(50))
    }

    #[test]
    fn test_start_claims_vehicle() {
        let (coordinator, vehicles, _) = fixture(distance_schedule());

        let trip = coordinator.start("u-1", "car-1").unwrap();
        assert_eq!(trip.state, TripState::InProgress);
        assert!(trip.start_time.is_some());
        assert!(trip.end_time.is_none());
        assert_eq!(trip.rate_per_minute, Money::usd(50));

        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::InUse);
        assert!(coordinator.lookup_active(&trip.id).is_some());
    }

    #[test]
    fn test_start_unavailable_vehicle_changes_nothing() {
        let (coordinator, vehicles, _) = fixture(distance_schedule());
        vehicles.set_state("car-1", VehicleState::Maintenance).unwrap();

        let err = coordinator.start("u-1", "car-1").unwrap_err();
        assert_eq!(
            err,
            CoreError::VehicleUnavailable {
                vehicle_id: "car-1".to_string(),
                state: VehicleState::Maintenance,
            }
        );

        // Vehicle state unchanged, no trip registered.
        assert_eq!(
            vehicles.get("car-1").unwrap().state,
            VehicleState::Maintenance
        );
        assert!(coordinator.active_trips().is_empty());
    }

    #[test]
    fn test_start_on_in_use_vehicle_fails() {
        let (coordinator, vehicles, _) = fixture(distance_schedule());

        coordinator.start("u-1", "car-1").unwrap();
        let err = coordinator.start("u-1", "car-1").unwrap_err();
        assert!(matches!(err, CoreError::VehicleUnavailable { .. }));
        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::InUse);
    }

    #[test]
    fn test_start_unknown_collaborators() {
        let (coordinator, _, _) = fixture(distance_schedule());

        assert_eq!(
            coordinator.start("ghost", "car-1").unwrap_err(),
            CoreError::UserNotFound("ghost".to_string())
        );
        assert_eq!(
            coordinator.start("u-1", "car-404").unwrap_err(),
            CoreError::VehicleNotFound("car-404".to_string())
        );
    }

    #[test]
    fn test_end_prices_once_and_archives() {
        let (coordinator, vehicles, log) = fixture(distance_schedule());

        let trip = coordinator.start("u-1", "car-1").unwrap();
        coordinator
            .record_distance(&trip.id, Distance::from_km(10.0))
            .unwrap();

        let price = coordinator.end(&trip.id).unwrap();
        // $0.50/km × 10 km
        assert_eq!(price, Money::usd(500));

        // The vehicle is free again and the trip left the active index.
        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::Available);
        assert!(coordinator.lookup_active(&trip.id).is_none());

        // The archived record carries the same price that was returned.
        let archived = log.get(&trip.id).unwrap();
        assert_eq!(archived.state, TripState::Completed);
        assert_eq!(archived.price, price);
        assert!(archived.end_time.is_some());
        assert!(archived.end_time >= archived.start_time);
    }

    #[test]
    fn test_end_unknown_trip() {
        let (coordinator, _, _) = fixture(distance_schedule());
        assert_eq!(
            coordinator.end("t-404").unwrap_err(),
            CoreError::TripNotFound("t-404".to_string())
        );
    }

    #[test]
    fn test_end_twice_reports_not_found() {
        let (coordinator, _, _) = fixture(distance_schedule());
        let trip = coordinator.start("u-1", "car-1").unwrap();

        coordinator.end(&trip.id).unwrap();
        assert_eq!(
            coordinator.end(&trip.id).unwrap_err(),
            CoreError::TripNotFound(trip.id.clone())
        );
    }

    #[test]
    fn test_end_failure_leaves_trip_active() {
        // A schedule that mixes currencies fails at quote time.
        let eur = Currency::new("EUR").unwrap();
        let broken = PricingStrategy::hybrid(vec![
            PricingStrategy::time_based(Money::usd(50)),
            PricingStrategy::distance_based(Money::from_cents(20, eur)),
        ]);
        let (coordinator, vehicles, log) = fixture(broken);

        let trip = coordinator.start("u-1", "car-1").unwrap();
        coordinator
            .record_distance(&trip.id, Distance::from_km(3.0))
            .unwrap();

        let err = coordinator.end(&trip.id).unwrap_err();
        assert!(matches!(err, CoreError::CurrencyMismatch { .. }));

        // No partial mutation: trip still active, vehicle still claimed.
        let still_active = coordinator.lookup_active(&trip.id).unwrap();
        assert_eq!(still_active.state, TripState::InProgress);
        assert!(still_active.end_time.is_none());
        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::InUse);
        assert!(log.is_empty());
    }

    #[test]
    fn test_cancel_frees_vehicle_without_pricing() {
        let (coordinator, vehicles, log) = fixture(distance_schedule());

        let trip = coordinator.start("u-1", "car-1").unwrap();
        coordinator
            .record_distance(&trip.id, Distance::from_km(10.0))
            .unwrap();
        coordinator.cancel(&trip.id).unwrap();

        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::Available);
        assert!(coordinator.lookup_active(&trip.id).is_none());

        let archived = log.get(&trip.id).unwrap();
        assert_eq!(archived.state, TripState::Canceled);
        assert!(archived.end_time.is_some());
        // No pricing evaluation on the cancel path.
        assert!(archived.price.is_zero());
    }

    #[test]
    fn test_cancel_unknown_trip() {
        let (coordinator, _, _) = fixture(distance_schedule());
        assert_eq!(
            coordinator.cancel("t-404").unwrap_err(),
            CoreError::TripNotFound("t-404".to_string())
        );
    }

    #[test]
    fn test_cancel_then_end_reports_not_found() {
        let (coordinator, _, _) = fixture(distance_schedule());
        let trip = coordinator.start("u-1", "car-1").unwrap();

        coordinator.cancel(&trip.id).unwrap();
        assert_eq!(
            coordinator.end(&trip.id).unwrap_err(),
            CoreError::TripNotFound(trip.id.clone())
        );
    }

    #[test]
    fn test_record_distance_requires_active_trip() {
        let (coordinator, _, _) = fixture(distance_schedule());
        assert_eq!(
            coordinator
                .record_distance("t-404", Distance::from_km(1.0))
                .unwrap_err(),
            CoreError::TripNotFound("t-404".to_string())
        );
    }

    #[test]
    fn test_vehicle_reusable_after_end() {
        let (coordinator, _, log) = fixture(distance_schedule());

        let first = coordinator.start("u-1", "car-1").unwrap();
        coordinator.end(&first.id).unwrap();

        let second = coordinator.start("u-1", "car-1").unwrap();
        assert_ne!(first.id, second.id);
        coordinator.end(&second.id).unwrap();

        assert_eq!(log.all().len(), 2);
    }

    #[test]
    fn test_surge_schedule_applies_at_end() {
        let schedule = distance_schedule().with_surge(Multiplier::from_factor(1.5));
        let (coordinator, _, _) = fixture(schedule);

        let trip = coordinator.start("u-1", "car-1").unwrap();
        coordinator
            .record_distance(&trip.id, Distance::from_km(10.0))
            .unwrap();

        // $5.00 × 1.5
        assert_eq!(coordinator.end(&trip.id).unwrap(), Money::usd(750));
    }

    #[test]
    fn test_concurrent_starts_one_winner() {
        let (coordinator, vehicles, _) = fixture(distance_schedule());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                thread::spawn(move || coordinator.start("u-1", "car-1"))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let losers = results
            .iter()
            .filter(|r| matches!(r, Err(CoreError::VehicleUnavailable { .. })))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(losers, 7);
        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::InUse);
        assert_eq!(coordinator.active_trips().len(), 1);
    }

    #[test]
    fn test_concurrent_ends_single_settlement() {
        let (coordinator, vehicles, log) = fixture(distance_schedule());
        let trip = coordinator.start("u-1", "car-1").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                let trip_id = trip.id.clone();
                thread::spawn(move || coordinator.end(&trip_id))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let settled = results.iter().filter(|r| r.is_ok()).count();

        // Exactly one settlement; every other caller sees TripNotFound.
        assert_eq!(settled, 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(CoreError::TripNotFound(_)))));

        assert_eq!(log.all().len(), 1);
        assert_eq!(vehicles.get("car-1").unwrap().state, VehicleState::Available);
    }
}
