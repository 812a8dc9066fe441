//! # Vehicle Store
//!
//! The canonical home of every fleet vehicle.
//!
//! ## Write Discipline
//! `save` is for registration and fleet administration. Once a vehicle is in
//! service, its `state` field is written exclusively by the trip coordinator
//! through [`VehicleStore::set_state`], inside the coordinator's critical
//! section. Readers may observe states concurrently; they never write.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use fleet_core::types::{Vehicle, VehicleState};

use crate::error::{StoreError, StoreResult};

/// Thread-safe in-memory store of vehicles, keyed by id.
#[derive(Debug, Default)]
pub struct VehicleStore {
    vehicles: RwLock<HashMap<String, Vehicle>>,
}

impl VehicleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        VehicleStore {
            vehicles: RwLock::new(HashMap::new()),
        }
    }

    /// Saves a vehicle, replacing any existing entry with the same id.
    pub fn save(&self, vehicle: Vehicle) {
        debug!(vehicle_id = %vehicle.id, state = ?vehicle.state, "Saving vehicle");
        let mut vehicles = self.vehicles.write().expect("vehicle store lock poisoned");
        vehicles.insert(vehicle.id.clone(), vehicle);
    }

    /// Finds a vehicle by its unique id.
    pub fn get(&self, id: &str) -> Option<Vehicle> {
        let vehicles = self.vehicles.read().expect("vehicle store lock poisoned");
        vehicles.get(id).cloned()
    }

    /// Returns all vehicles in the fleet.
    pub fn list(&self) -> Vec<Vehicle> {
        let vehicles = self.vehicles.read().expect("vehicle store lock poisoned");
        vehicles.values().cloned().collect()
    }

    /// Returns all vehicles currently available for checkout.
    pub fn list_available(&self) -> Vec<Vehicle> {
        let vehicles = self.vehicles.read().expect("vehicle store lock poisoned");
        vehicles
            .values()
            .filter(|v| v.state == VehicleState::Available)
            .cloned()
            .collect()
    }

    /// Updates a vehicle's availability state.
    ///
    /// ## Errors
    /// `StoreError::NotFound` when no vehicle has the given id.
    pub fn set_state(&self, id: &str, state: VehicleState) -> StoreResult<()> {
        let mut vehicles = self.vehicles.write().expect("vehicle store lock poisoned");
        let vehicle = vehicles
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Vehicle", id))?;

        debug!(vehicle_id = %id, from = ?vehicle.state, to = ?state, "Vehicle state change");
        vehicle.state = state;
        Ok(())
    }

    /// Number of vehicles in the fleet.
    pub fn len(&self) -> usize {
        let vehicles = self.vehicles.read().expect("vehicle store lock poisoned");
        vehicles.len()
    }

    /// Checks if the fleet is empty.
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
    use chrono::{TimeZone, Utc};
    use fleet_core::money::Money;
    use fleet_core::types::VehicleKind;

    fn test_vehicle(id: &str) -> Vehicle {
        Vehicle::new(
            id,
            "Model 3",
            VehicleKind::Car {
                fuel_type: "electric".to_string(),
            },
            Money::usd(100),
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_save_and_get() {
        let store = VehicleStore::new();
        store.save(test_vehicle("car-1"));

        let found = store.get("car-1").unwrap();
        assert_eq!(found.id, "car-1");
        assert!(store.get("car-404").is_none());
    }

    #[test]
    fn test_save_replaces_existing() {
        let store = VehicleStore::new();
        store.save(test_vehicle("car-1"));

        let mut updated = test_vehicle("car-1");
        updated.model = "Model Y".to_string();
        store.save(updated);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("car-1").unwrap().model, "Model Y");
    }

    #[test]
    fn test_list_available_filters_by_state() {
        let store = VehicleStore::new();
        store.save(test_vehicle("car-1"));
        store.save(test_vehicle("car-2"));

        store.set_state("car-1", VehicleState::InUse).unwrap();

        let available = store.list_available();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "car-2");
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_set_state_missing_vehicle() {
        let store = VehicleStore::new();
        assert_eq!(
            store.set_state("car-404", VehicleState::InUse),
            Err(StoreError::not_found("Vehicle", "car-404"))
        );
    }
}
