//! Property-change notification primitives.
//!
//! Provides the classifier-keyed listener registry and the listener handles
//! registered with it.

pub mod listener;
pub mod registry;

pub use listener::Listener;
pub use registry::ChangeRegistry;
