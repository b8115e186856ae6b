//! Listener handles invoked on property-change notifications.

use std::fmt;
use std::sync::Arc;

/// A cloneable handle to a property-change callback.
///
/// The callback receives the classifier it was registered under. The handle
/// is the listener's only identity: clones of one `Listener` count as "the
/// same listener" for removal, while two handles built from identical
/// closures do not. The registry holds plain clones of the handle and never
/// keeps a listener alive beyond its registrations.
///
/// # Examples
///
/// ```rust
/// use prop_notify::notify::Listener;
///
/// let listener: Listener<u8> = Listener::new(|classifier| {
///     println!("property {classifier} changed");
/// });
///
/// assert!(listener.same(&listener.clone()));
/// ```
pub struct Listener<C> {
    callback: Arc<dyn Fn(C) + Send + Sync>,
}

impl<C> Listener<C> {
    /// Wrap a callback in a listener handle.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(C) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback with the classifier that changed.
    pub fn call(&self, classifier: C) {
        (self.callback)(classifier);
    }

    /// Whether `other` is a clone of this handle.
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<C> Clone for Listener<C> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<C> fmt::Debug for Listener<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback))
            .finish()
    }
}
