//! Fleet View Demo
//!
//! Runs the fleet view controller against the built-in mock fleet and the
//! simulated connectivity flapper, printing the status snapshot the UI
//! layer would render.
//!
//! Usage:
//!   cargo run --example fleet_demo

use anyhow::Result;
use fleetview_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetview_core=debug".into()),
        )
        .init();

    let fleet = FleetStore::new(demo_fleet())?;
    let source = DemoConnectivity::start();
    let mut ctl = FleetViewController::new(fleet, ViewportConfig::default(), &source);

    println!("Fleet ({} vehicles, {} active):", ctl.fleet().len(), ctl.fleet().active_count());
    for v in ctl.fleet().list() {
        println!("  - {} {:?} at ({}, {})", v.name, v.status, v.location.lat, v.location.lng);
    }

    ctl.init();
    println!("\nLoading...");
    ctl.wait_ready().await;
    println!("Ready.");

    for id in ["1", "2", "3"] {
        let transition = ctl.select(id)?;
        let v = ctl.selected().unwrap();
        println!(
            "\nSelected {}: viewport -> ({}, {}) extent {} over {:?}",
            v.name, transition.to.center.lat, transition.to.center.lng,
            transition.to.extent, transition.duration
        );
        println!("{}", serde_json::to_string_pretty(&ctl.status())?);
    }

    ctl.clear_selection();
    ctl.poll_connectivity();
    println!("\nBack to overview; online = {}", ctl.is_online());
    println!("{}", serde_json::to_string_pretty(&ctl.status())?);

    Ok(())
}
