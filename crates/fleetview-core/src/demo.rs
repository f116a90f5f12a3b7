//! Demo Mode - mock fleet data and a simulated connectivity source
//!
//! Lets the UI run without any backend: a small hard-coded fleet plus a
//! connectivity source that flaps online/offline at random intervals.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::connectivity::{ConnectivityEvent, ConnectivitySource};
use crate::fleet::{GeoPoint, Vehicle, VehicleStatus};

/// The mock fleet around central London
pub fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("1", "Truck 001", VehicleStatus::Active, GeoPoint::new(51.505, -0.09)),
        Vehicle::new("2", "Van 002", VehicleStatus::Inactive, GeoPoint::new(51.51, -0.10)),
        Vehicle::new("3", "Car 003", VehicleStatus::Active, GeoPoint::new(51.515, -0.09)),
    ]
}

/// The mock fleet around San Francisco
pub fn demo_fleet_sf() -> Vec<Vehicle> {
    vec![
        Vehicle::new("1", "Truck 001", VehicleStatus::Active, GeoPoint::new(37.78825, -122.4324)),
        Vehicle::new("2", "Van 002", VehicleStatus::Inactive, GeoPoint::new(37.78925, -122.4344)),
        Vehicle::new("3", "Car 003", VehicleStatus::Active, GeoPoint::new(37.78725, -122.4304)),
    ]
}

/// Simulated connectivity: toggles online/offline every 5-20 seconds.
///
/// The flapper runs on a spawned task that stops once every subscriber has
/// hung up; dropping the source aborts it outright.
#[derive(Debug)]
pub struct DemoConnectivity {
    senders: Arc<Mutex<Vec<UnboundedSender<ConnectivityEvent>>>>,
    task: Option<JoinHandle<()>>,
}

impl DemoConnectivity {
    /// Spawn the flapper. Requires a tokio runtime.
    pub fn start() -> Self {
        let senders: Arc<Mutex<Vec<UnboundedSender<ConnectivityEvent>>>> = Arc::default();
        let task_senders = Arc::clone(&senders);

        let task = tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut online = true;
            let mut had_subscriber = false;
            loop {
                let wait_ms = rng.gen_range(5_000..20_000);
                tokio::time::sleep(Duration::from_millis(wait_ms)).await;

                online = !online;
                let event = if online {
                    ConnectivityEvent::Online
                } else {
                    ConnectivityEvent::Offline
                };

                let mut senders = task_senders.lock().unwrap();
                senders.retain(|tx| tx.send(event).is_ok());
                if !senders.is_empty() {
                    had_subscriber = true;
                } else if had_subscriber {
                    // Everyone hung up, nothing left to notify.
                    break;
                }
            }
        });

        Self {
            senders,
            task: Some(task),
        }
    }
}

impl ConnectivitySource for DemoConnectivity {
    fn subscribe(&self) -> UnboundedReceiver<ConnectivityEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().unwrap().push(tx);
        rx
    }
}

impl Drop for DemoConnectivity {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::ConnectivityMonitor;
    use crate::fleet::FleetStore;

    #[test]
    fn test_demo_fleet_builds_a_store() {
        let store = FleetStore::new(demo_fleet()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.active_count(), 2);
        assert_eq!(store.get("2").unwrap().name, "Van 002");
    }

    #[test]
    fn test_sf_fleet_matches_london_fleet_shape() {
        let london = demo_fleet();
        let sf = demo_fleet_sf();
        assert_eq!(london.len(), sf.len());
        for (a, b) in london.iter().zip(&sf) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.status, b.status);
        }
        assert_eq!(sf[0].location, GeoPoint::new(37.78825, -122.4324));
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_connectivity_flaps() {
        let source = DemoConnectivity::start();
        let mut monitor = ConnectivityMonitor::new(&source);

        // First flap knocks the optimistic default offline, second restores it
        assert_eq!(monitor.next_transition().await, Some(false));
        assert_eq!(monitor.next_transition().await, Some(true));
    }
}
