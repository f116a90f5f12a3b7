//! # FleetView Core Library
//!
//! State core for a fleet-tracking UI: a map view with vehicle markers and
//! a list/detail panel, independent of any particular rendering layer.

#![warn(missing_docs)]

//!
//! This library provides:
//! - The static vehicle store (fleet data, lookup, name search)
//! - The vehicle selection state machine
//! - Viewport synchronization (selection -> map center/extent)
//! - Connectivity monitoring from injected environment signals
//! - The one-shot load gate that gates initial rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use fleetview_core::prelude::*;
//!
//! let fleet = FleetStore::new(demo_fleet())?;
//! let source = ManualConnectivity::new();
//! let mut ctl = FleetViewController::new(fleet, ViewportConfig::default(), &source);
//! ctl.init();
//!
//! let transition = ctl.select("2")?;
//! assert_eq!(transition.to.center, ctl.selected().unwrap().location);
//! ```

pub mod connectivity;
pub mod controller;
pub mod demo;
pub mod error;
pub mod fleet;
pub mod loader;
pub mod selection;
pub mod viewport;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::connectivity::{
        ConnectivityEvent, ConnectivityMonitor, ConnectivitySource, ManualConnectivity,
    };
    pub use crate::controller::{FleetViewController, FleetViewStatus};
    pub use crate::demo::{demo_fleet, demo_fleet_sf, DemoConnectivity};
    pub use crate::error::{FleetError, LoadError};
    pub use crate::fleet::{FleetStore, GeoPoint, Vehicle, VehicleStatus};
    pub use crate::loader::LoadGate;
    pub use crate::selection::Selection;
    pub use crate::viewport::{Viewport, ViewportConfig, ViewportTransition};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
