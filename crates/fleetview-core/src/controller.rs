//! Fleet view controller - composition root
//!
//! Owns the store, the selection machine, the viewport policy, the
//! connectivity monitor, and the load gate. All writes to selection and
//! connectivity state flow through `&mut self`, so a multithreaded host
//! only has to wrap the controller in a mutex to get the single-owner
//! model the core assumes.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::connectivity::{ConnectivityMonitor, ConnectivitySource};
use crate::error::FleetError;
use crate::fleet::{FleetStore, Vehicle};
use crate::loader::{LoadGate, SIMULATED_FETCH_MS};
use crate::selection::Selection;
use crate::viewport::{Viewport, ViewportConfig, ViewportTransition};

/// Snapshot of the controller's entire observable surface.
///
/// This is everything the presentation layer renders: the resolved
/// selection, the derived viewport, the connectivity flag, and the
/// readiness flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetViewStatus {
    /// Currently selected vehicle, if any
    pub selected: Option<Vehicle>,
    /// Current map viewport
    pub viewport: Viewport,
    /// Host connectivity state
    pub online: bool,
    /// Whether the initial load has settled
    pub ready: bool,
}

/// The state-holding core of a fleet tracking view.
pub struct FleetViewController {
    fleet: FleetStore,
    selection: Selection,
    viewport_config: ViewportConfig,
    connectivity: ConnectivityMonitor,
    load_gate: LoadGate,
}

impl FleetViewController {
    /// Wire up a controller. Subscribes to the connectivity source but does
    /// not start loading; call [`init`](Self::init) for that.
    pub fn new(
        fleet: FleetStore,
        viewport_config: ViewportConfig,
        source: &dyn ConnectivitySource,
    ) -> Self {
        Self {
            fleet,
            selection: Selection::new(),
            viewport_config,
            connectivity: ConnectivityMonitor::new(source),
            load_gate: LoadGate::default(),
        }
    }

    /// Start the initial load (the simulated fetch).
    ///
    /// Idempotent: returns false if loading was already started.
    pub fn init(&mut self) -> bool {
        self.init_with_delay(Duration::from_millis(SIMULATED_FETCH_MS))
    }

    /// Start the initial load with an explicit simulated delay
    pub fn init_with_delay(&mut self, delay: Duration) -> bool {
        self.load_gate.begin_simulated(delay)
    }

    /// Select a vehicle by id.
    ///
    /// On success returns the viewport transition for the presentation
    /// layer to animate. Unknown ids fail with
    /// [`FleetError::InvalidSelection`] and change nothing.
    pub fn select(&mut self, id: &str) -> Result<ViewportTransition, FleetError> {
        let from = self.viewport();
        self.selection.select(&self.fleet, id)?;
        let to = self.viewport();
        tracing::debug!(id, "vehicle selected");
        Ok(ViewportTransition {
            from,
            to,
            duration: self.viewport_config.transition,
        })
    }

    /// Clear the selection, returning the transition back to the overview
    /// viewport, or `None` if nothing was selected.
    pub fn clear_selection(&mut self) -> Option<ViewportTransition> {
        let from = self.viewport();
        if !self.selection.clear() {
            return None;
        }
        Some(ViewportTransition {
            from,
            to: self.viewport(),
            duration: self.viewport_config.transition,
        })
    }

    /// The currently selected vehicle, if any
    pub fn selected(&self) -> Option<&Vehicle> {
        self.selection.current(&self.fleet)
    }

    /// The current viewport, derived from selection and fleet
    pub fn viewport(&self) -> Viewport {
        Viewport::compute(self.selection.id(), &self.fleet, &self.viewport_config)
    }

    /// Drain pending connectivity events; returns how many were applied
    pub fn poll_connectivity(&mut self) -> usize {
        self.connectivity.poll()
    }

    /// Current connectivity state
    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Whether the initial load has settled
    pub fn is_ready(&self) -> bool {
        self.load_gate.ready()
    }

    /// Wait until the initial load has settled
    pub async fn wait_ready(&self) {
        self.load_gate.wait_ready().await
    }

    /// The fleet store, for list rendering and search
    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    /// Snapshot the observable surface for the presentation layer
    pub fn status(&self) -> FleetViewStatus {
        FleetViewStatus {
            selected: self.selected().cloned(),
            viewport: self.viewport(),
            online: self.is_online(),
            ready: self.is_ready(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::{ConnectivityEvent, ManualConnectivity};
    use crate::demo::demo_fleet;

    fn controller(source: &ManualConnectivity) -> FleetViewController {
        let fleet = FleetStore::new(demo_fleet()).unwrap();
        FleetViewController::new(fleet, ViewportConfig::default(), source)
    }

    #[test]
    fn test_initial_state() {
        let source = ManualConnectivity::new();
        let ctl = controller(&source);
        assert!(ctl.selected().is_none());
        assert_eq!(ctl.viewport(), ViewportConfig::default().overview());
        assert!(ctl.is_online());
        assert!(!ctl.is_ready());
    }

    #[test]
    fn test_select_returns_transition_to_vehicle() {
        let source = ManualConnectivity::new();
        let mut ctl = controller(&source);

        let transition = ctl.select("2").unwrap();
        assert_eq!(transition.from, ViewportConfig::default().overview());
        assert_eq!(transition.to.center, ctl.selected().unwrap().location);
        assert_eq!(transition.duration, Duration::from_millis(1000));
        assert_eq!(ctl.viewport(), transition.to);
    }

    #[test]
    fn test_failed_select_changes_nothing() {
        let source = ManualConnectivity::new();
        let mut ctl = controller(&source);
        ctl.select("1").unwrap();
        let before = ctl.status();

        let err = ctl.select("9").unwrap_err();
        assert_eq!(err, FleetError::InvalidSelection { id: "9".into() });
        assert_eq!(ctl.status(), before);
    }

    #[test]
    fn test_clear_selection_transitions_back_to_overview() {
        let source = ManualConnectivity::new();
        let mut ctl = controller(&source);
        assert!(ctl.clear_selection().is_none());

        ctl.select("1").unwrap();
        let transition = ctl.clear_selection().unwrap();
        assert_eq!(transition.to, ViewportConfig::default().overview());
        assert!(ctl.selected().is_none());
    }

    #[test]
    fn test_connectivity_reaches_status() {
        let source = ManualConnectivity::new();
        let mut ctl = controller(&source);

        source.push(ConnectivityEvent::Offline);
        assert_eq!(ctl.poll_connectivity(), 1);
        assert!(!ctl.is_online());
        assert!(!ctl.status().online);
    }
}
