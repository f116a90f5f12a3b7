//! Fleet store - the static set of tracked vehicles
//!
//! Vehicles are loaded once at startup and never change for the lifetime of
//! the session. The store owns them exclusively; everything else reads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FleetError;

/// A geographic position (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from latitude/longitude degrees
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Operational status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Vehicle is in service and reporting
    Active,
    /// Vehicle is parked or out of service
    Inactive,
}

/// A tracked fleet asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Operational status
    pub status: VehicleStatus,
    /// Last known position
    pub location: GeoPoint,
}

impl Vehicle {
    /// Create a vehicle record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        status: VehicleStatus,
        location: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            location,
        }
    }
}

/// Immutable store of the known fleet.
///
/// Construction rejects duplicate ids, so `list()` is guaranteed to be
/// duplicate-free in the order the vehicles were supplied.
#[derive(Debug, Clone)]
pub struct FleetStore {
    vehicles: Vec<Vehicle>,
    /// id -> index into `vehicles`
    index: HashMap<String, usize>,
}

impl FleetStore {
    /// Build a store from a list of vehicles.
    ///
    /// Fails with [`FleetError::DuplicateVehicleId`] if two vehicles share
    /// an id; ordering of the input is preserved.
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, FleetError> {
        let mut index = HashMap::with_capacity(vehicles.len());
        for (i, vehicle) in vehicles.iter().enumerate() {
            if index.insert(vehicle.id.clone(), i).is_some() {
                return Err(FleetError::DuplicateVehicleId {
                    id: vehicle.id.clone(),
                });
            }
        }
        Ok(Self { vehicles, index })
    }

    /// An empty fleet
    pub fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// All vehicles in insertion order
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a vehicle by id
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.index.get(id).map(|&i| &self.vehicles[i])
    }

    /// Whether a vehicle with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of vehicles in the fleet
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the fleet has no vehicles
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Number of vehicles currently marked [`VehicleStatus::Active`]
    pub fn active_count(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count()
    }

    /// Case-insensitive substring search on vehicle names.
    ///
    /// An empty query returns the whole fleet in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Vehicle> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.vehicles.iter().collect();
        }
        self.vehicles
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::new("1", "Truck 001", VehicleStatus::Active, GeoPoint::new(51.505, -0.09)),
            Vehicle::new("2", "Van 002", VehicleStatus::Inactive, GeoPoint::new(51.51, -0.10)),
            Vehicle::new("3", "Car 003", VehicleStatus::Active, GeoPoint::new(51.515, -0.09)),
        ]
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = FleetStore::new(sample_fleet()).unwrap();
        let ids: Vec<&str> = store.list().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut vehicles = sample_fleet();
        vehicles.push(Vehicle::new(
            "2",
            "Van 002 again",
            VehicleStatus::Active,
            GeoPoint::new(0.0, 0.0),
        ));
        let err = FleetStore::new(vehicles).unwrap_err();
        assert_eq!(err, FleetError::DuplicateVehicleId { id: "2".into() });
    }

    #[test]
    fn test_get_and_contains() {
        let store = FleetStore::new(sample_fleet()).unwrap();
        assert_eq!(store.get("2").unwrap().name, "Van 002");
        assert!(store.contains("3"));
        assert!(store.get("9").is_none());
        assert!(!store.contains("9"));
    }

    #[test]
    fn test_active_count() {
        let store = FleetStore::new(sample_fleet()).unwrap();
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = FleetStore::new(sample_fleet()).unwrap();
        let hits = store.search("van");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let hits = store.search("00");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let store = FleetStore::new(sample_fleet()).unwrap();
        assert_eq!(store.search("").len(), 3);
        assert_eq!(store.search("   ").len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = FleetStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.active_count(), 0);
        assert!(store.search("truck").is_empty());
    }
}
