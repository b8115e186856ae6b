//! Example demonstrating wildcard ("any property changed") notifications.
//!
//! This example shows how to:
//! - Register a listener under the reserved wildcard classifier
//! - Fan a wildcard notification out to every registered bucket
//! - Observe which classifier each listener receives
//!
//! Run with: cargo run --example wildcard_fanout

use prop_notify::prelude::*;

classifiers! {
    pub enum SensorClassifiers {
        Temperature,
        Humidity,
        Pressure,
    }
}

fn main() {
    println!("=== Wildcard Fan-out Example ===\n");

    let registry: ChangeRegistry<SensorClassifiers> = ChangeRegistry::new();

    registry.add(
        SensorClassifiers::All,
        Listener::new(|classifier| {
            println!("[audit] notified with {classifier:?}");
        }),
    );
    registry.add(
        SensorClassifiers::Temperature,
        Listener::new(|classifier| {
            println!("[thermostat] notified with {classifier:?}");
        }),
    );
    registry.add(
        SensorClassifiers::Humidity,
        Listener::new(|classifier| {
            println!("[dehumidifier] notified with {classifier:?}");
        }),
    );

    println!("Specific notification (Temperature) -- wildcard stays quiet:");
    registry.notify_property_changed(SensorClassifiers::Temperature);

    println!("\nWildcard notification -- wildcard bucket first, then the rest:");
    registry.notify_property_changed(SensorClassifiers::All);

    registry.clear();
    println!("\nRegistry cleared; notifications are now no-ops.");
    registry.notify_property_changed(SensorClassifiers::All);
}
