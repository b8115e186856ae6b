//! # prop-notify
//!
//! Classifier-keyed property-change notifications with wildcard fan-out.
//!
//! ## Overview
//!
//! `prop-notify` lets an object broadcast "one of my named properties changed"
//! events to interested listeners:
//! - Each observable property gets a stable **classifier** identifier
//! - A reserved **wildcard** classifier (ordinal 0) means "any property changed"
//! - Listener registries are allocated lazily and torn down when the last
//!   listener leaves
//! - All operations are safe under concurrent access from multiple threads
//!
//! ## Quick Start
//!
//! ```rust
//! use prop_notify::prelude::*;
//!
//! classifiers! {
//!     /// Classifiers for the observable properties of `Photo`.
//!     pub enum PhotoClassifiers {
//!         Url,
//!         Caption,
//!     }
//! }
//!
//! struct Photo {
//!     url: String,
//!     changes: ChangeRegistry<PhotoClassifiers>,
//! }
//!
//! impl Observable<PhotoClassifiers> for Photo {
//!     fn registry(&self) -> &ChangeRegistry<PhotoClassifiers> {
//!         &self.changes
//!     }
//! }
//!
//! impl Photo {
//!     fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
//!         self.url = url.into();
//!         self.notify_property_changed(PhotoClassifiers::Url);
//!         self
//!     }
//! }
//!
//! let mut photo = Photo {
//!     url: String::new(),
//!     changes: ChangeRegistry::new(),
//! };
//!
//! let listener = Listener::new(|classifier| {
//!     println!("changed: {classifier:?}");
//! });
//!
//! photo.add(PhotoClassifiers::Url, listener.clone());
//! photo.set_url("https://example.com/cat.jpg");
//! photo.remove(PhotoClassifiers::Url, listener);
//! ```
//!
//! ## Semantics
//!
//! - **Lazy state**: nothing is allocated until the first listener is added,
//!   and the registry returns to that unallocated state when the last listener
//!   is removed. Adding an absent ([`None`]) listener allocates nothing.
//! - **Wildcard fan-out**: notifying the wildcard invokes wildcard listeners
//!   first, then every other classifier's listeners in classifier order. Each
//!   listener receives the classifier it was registered under.
//! - **Specific notifications**: notifying a specific classifier invokes only
//!   that classifier's listeners, in the order they were added. Wildcard
//!   registrations do not fire for specific notifications.
//! - **No error surface**: removing a listener that was never added, clearing
//!   an empty registry, and notifying with no listeners are all documented
//!   no-ops, keeping the API forgiving for optional call sites.
//!
//! ## Feature Flags
//!
//! Enable optional features in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! prop-notify = { version = "0.1", features = ["serde", "tracing"] }
//! ```
//!
//! - `serde`: `Serialize`/`Deserialize` on enums generated by
//!   [`classifiers!`](crate::classifiers)
//! - `tracing`: trace-level events on registry transitions and dispatch

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod notify;
pub mod observe;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::classifiers;
    pub use crate::error::{ClassifierError, Result};
    pub use crate::notify::{ChangeRegistry, Listener};
    pub use crate::observe::Observable;
}
