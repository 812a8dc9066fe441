//! # Trip Log
//!
//! Append-only history of finished trips.
//!
//! ## Lifecycle Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Where Trips Live                                  │
//! │                                                                         │
//! │  start ──► active index (TripCoordinator)                              │
//! │                  │                                                      │
//! │          end / cancel                                                   │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            TripLog (THIS TYPE)  ◄── ReportingService reads here        │
//! │                                                                         │
//! │  Trips are never deleted: a record entering the log stays forever.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::RwLock;

use tracing::debug;

use fleet_core::types::{Trip, TripState};

/// Thread-safe append-only log of finished trips, in arrival order.
#[derive(Debug, Default)]
pub struct TripLog {
    trips: RwLock<Vec<Trip>>,
}

impl TripLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        TripLog {
            trips: RwLock::new(Vec::new()),
        }
    }

    /// Appends a finished trip to the history.
    pub fn record(&self, trip: Trip) {
        debug!(trip_id = %trip.id, state = ?trip.state, price = %trip.price, "Recording trip");
        let mut trips = self.trips.write().expect("trip log lock poisoned");
        trips.push(trip);
    }

    /// Finds a recorded trip by id.
    pub fn get(&self, id: &str) -> Option<Trip> {
        let trips = self.trips.read().expect("trip log lock poisoned");
        trips.iter().find(|t| t.id == id).cloned()
    }

    /// Returns the full history, oldest first.
    pub fn all(&self) -> Vec<Trip> {
        let trips = self.trips.read().expect("trip log lock poisoned");
        trips.clone()
    }

    /// Returns only the trips that finished normally.
    pub fn completed(&self) -> Vec<Trip> {
        let trips = self.trips.read().expect("trip log lock poisoned");
        trips
            .iter()
            .filter(|t| t.state == TripState::Completed)
            .cloned()
            .collect()
    }

    /// Number of recorded trips.
    pub fn len(&self) -> usize {
        let trips = self.trips.read().expect("trip log lock poisoned");
        trips.len()
    }

    /// Checks if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use fleet_core::money::Money;
    use fleet_core::types::{MembershipTier, User, Vehicle, VehicleKind};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, minute, 0).unwrap()
    }

    fn finished_trip(state: TripState, price_cents: i64) -> Trip {
        let user = User::new("u-1", "Ismail", MembershipTier::Standard);
        let vehicle = Vehicle::new(
            "car-1",
            "Model 3",
            VehicleKind::Car {
                fuel_type: "electric".to_string(),
            },
            Money::usd(50),
            at(0),
        );
        let mut trip = Trip::new(&user, &vehicle, at(0));
        trip.begin(at(0)).unwrap();
        match state {
            TripState::Completed => trip.complete(at(10), Money::usd(price_cents)).unwrap(),
            TripState::Canceled => trip.cancel(at(10)),
            _ => {}
        }
        trip
    }

    #[test]
    fn test_record_and_get() {
        let log = TripLog::new();
        let trip = finished_trip(TripState::Completed, 500);
        let id = trip.id.clone();
        log.record(trip);

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(&id).unwrap().id, id);
        assert!(log.get("t-404").is_none());
    }

    #[test]
    fn test_completed_filters_out_canceled() {
        let log = TripLog::new();
        log.record(finished_trip(TripState::Completed, 500));
        log.record(finished_trip(TripState::Canceled, 0));
        log.record(finished_trip(TripState::Completed, 300));

        assert_eq!(log.all().len(), 3);
        let completed = log.completed();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|t| t.state == TripState::Completed));
    }

    #[test]
    fn test_history_preserves_order() {
        let log = TripLog::new();
        let first = finished_trip(TripState::Completed, 100);
        let second = finished_trip(TripState::Completed, 200);
        let (first_id, second_id) = (first.id.clone(), second.id.clone());

        log.record(first);
        log.record(second);

        let all = log.all();
        assert_eq!(all[0].id, first_id);
        assert_eq!(all[1].id, second_id);
    }
}
