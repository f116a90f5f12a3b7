//! Viewport synchronization
//!
//! The map viewport is a pure function of (selection, fleet, config):
//! a selected vehicle centers the map on its location with a narrow extent,
//! no selection yields the configured fleet-wide overview. The core hands
//! the presentation layer a target viewport plus the transition duration;
//! animating between the two is not its business.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::fleet::{FleetStore, GeoPoint};

/// Default map center when nothing is selected (central London)
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 51.505,
    lng: -0.09,
};

/// Default coordinate extent for the fleet-wide overview
pub const DEFAULT_OVERVIEW_EXTENT: f64 = 0.05;

/// Default coordinate extent when zoomed in on one vehicle
pub const DEFAULT_FOCUS_EXTENT: f64 = 0.01;

/// Default viewport transition duration (ms)
pub const DEFAULT_TRANSITION_MS: u64 = 1000;

/// The map's visible region: center plus an extent magnitude.
///
/// `extent` is presentation-defined (a coordinate delta for region-based
/// maps, a zoom level for tile maps); the core only distinguishes the wide
/// overview value from the narrow focus value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center of the visible region
    pub center: GeoPoint,
    /// Size of the visible region (zoom/delta, presentation-defined)
    pub extent: f64,
}

/// Viewport policy: where the map looks when nothing is selected and how
/// tightly it frames a selected vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Overview center used when no vehicle is selected
    pub default_center: GeoPoint,
    /// Extent of the overview viewport
    pub overview_extent: f64,
    /// Extent when focused on a single vehicle
    pub focus_extent: f64,
    /// How long the presentation layer should animate viewport changes
    pub transition: Duration,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            overview_extent: DEFAULT_OVERVIEW_EXTENT,
            focus_extent: DEFAULT_FOCUS_EXTENT,
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
        }
    }
}

impl ViewportConfig {
    /// Config whose overview center is the midpoint of the fleet's bounding
    /// box. Falls back to [`DEFAULT_CENTER`] when the store is empty.
    pub fn centered_on_fleet(store: &FleetStore) -> Self {
        let default_center = fleet_midpoint(store).unwrap_or(DEFAULT_CENTER);
        Self {
            default_center,
            ..Self::default()
        }
    }

    /// The overview viewport this config produces
    pub fn overview(&self) -> Viewport {
        Viewport {
            center: self.default_center,
            extent: self.overview_extent,
        }
    }
}

/// Midpoint of the bounding box around all vehicle positions
fn fleet_midpoint(store: &FleetStore) -> Option<GeoPoint> {
    let first = store.list().first()?.location;
    let mut min = first;
    let mut max = first;
    for v in store.list() {
        min.lat = min.lat.min(v.location.lat);
        min.lng = min.lng.min(v.location.lng);
        max.lat = max.lat.max(v.location.lat);
        max.lng = max.lng.max(v.location.lng);
    }
    Some(GeoPoint::new(
        (min.lat + max.lat) / 2.0,
        (min.lng + max.lng) / 2.0,
    ))
}

impl Viewport {
    /// Compute the viewport for the given selection.
    ///
    /// Pure and total: a selected vehicle yields its exact location with the
    /// focus extent, no selection (or an empty store) yields the configured
    /// overview. Never fails.
    pub fn compute(selection: Option<&str>, store: &FleetStore, config: &ViewportConfig) -> Self {
        match selection.and_then(|id| store.get(id)) {
            Some(vehicle) => Viewport {
                center: vehicle.location,
                extent: config.focus_extent,
            },
            None => config.overview(),
        }
    }
}

/// A viewport change handed to the presentation layer.
///
/// Produced on every successful `select`/`clear`; the target value and the
/// configured duration are contract, the animation itself is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransition {
    /// Viewport before the change
    pub from: Viewport,
    /// Target viewport
    pub to: Viewport,
    /// Animation duration the presentation layer should use
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{Vehicle, VehicleStatus};
    use pretty_assertions::assert_eq;

    fn store() -> FleetStore {
        FleetStore::new(vec![
            Vehicle::new("1", "Truck 001", VehicleStatus::Active, GeoPoint::new(51.505, -0.09)),
            Vehicle::new("2", "Van 002", VehicleStatus::Inactive, GeoPoint::new(51.51, -0.10)),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_selection_yields_overview() {
        let config = ViewportConfig::default();
        let vp = Viewport::compute(None, &store(), &config);
        assert_eq!(vp, config.overview());
        assert_eq!(vp.center, DEFAULT_CENTER);
        assert_eq!(vp.extent, DEFAULT_OVERVIEW_EXTENT);
    }

    #[test]
    fn test_selection_centers_exactly_on_vehicle() {
        let config = ViewportConfig::default();
        let vp = Viewport::compute(Some("2"), &store(), &config);
        assert_eq!(vp.center, GeoPoint::new(51.51, -0.10));
        assert_eq!(vp.extent, DEFAULT_FOCUS_EXTENT);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let config = ViewportConfig::default();
        let store = store();
        let a = Viewport::compute(Some("1"), &store, &config);
        let b = Viewport::compute(Some("1"), &store, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_store_falls_back_to_overview() {
        let config = ViewportConfig::default();
        let vp = Viewport::compute(None, &FleetStore::empty(), &config);
        assert_eq!(vp, config.overview());
    }

    #[test]
    fn test_centered_on_fleet_uses_bounding_box_midpoint() {
        let config = ViewportConfig::centered_on_fleet(&store());
        assert!((config.default_center.lat - 51.5075).abs() < 1e-9);
        assert!((config.default_center.lng - -0.095).abs() < 1e-9);
    }

    #[test]
    fn test_centered_on_empty_fleet_uses_default() {
        let config = ViewportConfig::centered_on_fleet(&FleetStore::empty());
        assert_eq!(config.default_center, DEFAULT_CENTER);
    }
}
