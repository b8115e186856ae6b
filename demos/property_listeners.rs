//! Example demonstrating per-property listeners on an observable model.
//!
//! This example shows how to:
//! - Generate a classifier set for a model's properties
//! - Register listeners for individual properties
//! - Remove listeners one registration at a time
//!
//! Run with: cargo run --example property_listeners

use prop_notify::prelude::*;

classifiers! {
    /// Classifiers for the observable properties of [`Track`].
    pub enum TrackClassifiers {
        Title,
        Artist,
        Rating,
    }
}

#[derive(Default)]
struct Track {
    title: String,
    artist: String,
    rating: u8,
    changes: ChangeRegistry<TrackClassifiers>,
}

impl Observable<TrackClassifiers> for Track {
    fn registry(&self) -> &ChangeRegistry<TrackClassifiers> {
        &self.changes
    }
}

impl Track {
    fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self.notify_property_changed(TrackClassifiers::Title);
        self
    }

    fn set_artist(&mut self, artist: impl Into<String>) -> &mut Self {
        self.artist = artist.into();
        self.notify_property_changed(TrackClassifiers::Artist);
        self
    }

    fn set_rating(&mut self, rating: u8) -> &mut Self {
        self.rating = rating;
        self.notify_property_changed(TrackClassifiers::Rating);
        self
    }
}

fn main() {
    println!("=== Per-Property Listener Example ===\n");

    let mut track = Track::default();

    println!("Registering listeners for Title and Rating...\n");

    let title_listener = Listener::new(|classifier| {
        println!("[title listener] {classifier:?} changed");
    });
    let rating_listener = Listener::new(|classifier| {
        println!("[rating listener] {classifier:?} changed");
    });

    track
        .add(TrackClassifiers::Title, title_listener.clone())
        .add(TrackClassifiers::Rating, rating_listener);

    println!("Setting title (fires the title listener):");
    track.set_title("Everything in Its Right Place");

    println!("\nSetting artist (no listener registered, nothing fires):");
    track.set_artist("Radiohead");

    println!("\nSetting rating (fires the rating listener):");
    track.set_rating(5);

    println!("\nRemoving the title listener and setting the title again:");
    track.remove(TrackClassifiers::Title, title_listener);
    track.set_title("Idioteque");

    println!(
        "\nRemaining registrations: {}",
        track.registry().listener_count()
    );
}
