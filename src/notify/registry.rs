//! The classifier-keyed notification registry.

use crate::classifier::Classifier;
use crate::notify::Listener;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;

/// Listener buckets keyed by classifier.
///
/// A key may be present with an absent bucket (`None`) when the bucket was
/// cleared out from under it; dispatch and removal skip such slots.
type Buckets<C> = BTreeMap<C, Option<Vec<Listener<C>>>>;

/// A thread-safe registry of property-change listeners, keyed by classifier.
///
/// The registry is meant to be embedded in the object whose property changes
/// it announces (see [`Observable`](crate::observe::Observable)). Its state
/// is lazy in both directions: nothing is allocated until the first listener
/// is added, and the whole map is deallocated when the last listener for the
/// last classifier is removed. Within one classifier, listeners keep their
/// insertion order and may be registered more than once.
///
/// All operations serialize on one internal mutex per registry. Dispatch
/// snapshots the relevant buckets and invokes listeners after releasing the
/// lock, so a listener may re-enter the registry without deadlocking.
///
/// # Panics
///
/// The registry never panics, but a listener may. A panicking listener
/// aborts the entire dispatch: remaining listeners in the current bucket and
/// any remaining wildcard fan-out are not invoked, and the panic unwinds to
/// the [`notify_property_changed`](ChangeRegistry::notify_property_changed)
/// caller. The registry itself stays usable.
///
/// # Examples
///
/// ```rust
/// use prop_notify::prelude::*;
///
/// classifiers! {
///     pub enum DocClassifiers {
///         Title,
///         Body,
///     }
/// }
///
/// let registry = ChangeRegistry::new();
/// let listener = Listener::new(|classifier: DocClassifiers| {
///     println!("{classifier:?} changed");
/// });
///
/// registry
///     .add(DocClassifiers::Title, listener.clone())
///     .notify_property_changed(DocClassifiers::Title)
///     .remove(DocClassifiers::Title, listener);
///
/// assert!(!registry.has_listeners());
/// ```
pub struct ChangeRegistry<C: Classifier> {
    /// `None` until the first successful `add`; back to `None` whenever the
    /// map empties. The distinction is observable through the lifecycle
    /// tests below.
    buckets: Mutex<Option<Buckets<C>>>,
}

impl<C: Classifier> ChangeRegistry<C> {
    /// Create a registry with no listeners and no allocated state.
    pub fn new() -> Self {
        Self {
            buckets: Mutex::new(None),
        }
    }

    /// Register `listener` under `classifier`.
    ///
    /// Listeners are appended, so later [`notify_property_changed`] calls
    /// invoke them in registration order. Registering the same handle twice
    /// is allowed; it will then be invoked twice and must be removed one
    /// occurrence at a time.
    ///
    /// Passing [`None`] is a no-op: no state is touched and, in particular,
    /// an unallocated registry stays unallocated.
    ///
    /// [`notify_property_changed`]: ChangeRegistry::notify_property_changed
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use prop_notify::prelude::*;
    /// # classifiers! { pub enum DocClassifiers { Title } }
    /// let registry = ChangeRegistry::new();
    ///
    /// registry.add(DocClassifiers::Title, Listener::new(|_| {}));
    /// assert_eq!(registry.listener_count(), 1);
    ///
    /// // An absent listener registers nothing.
    /// registry.add(DocClassifiers::Title, None);
    /// assert_eq!(registry.listener_count(), 1);
    /// ```
    pub fn add(&self, classifier: C, listener: impl Into<Option<Listener<C>>>) -> &Self {
        let Some(listener) = listener.into() else {
            return self;
        };

        let mut guard = self.buckets.lock();
        guard
            .get_or_insert_with(BTreeMap::new)
            .entry(classifier)
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
            .push(listener);

        #[cfg(feature = "tracing")]
        tracing::trace!(classifier = ?classifier, "listener added");

        self
    }

    /// Remove one occurrence of `listener` from `classifier`'s bucket.
    ///
    /// Matching is by handle identity ([`Listener::same`]), not by callback
    /// contents. A no-op if the registry is unallocated, `listener` is
    /// [`None`], or the bucket does not contain the handle. When the bucket
    /// empties it is deleted, and when the map empties the registry returns
    /// to its unallocated state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use prop_notify::prelude::*;
    /// # classifiers! { pub enum DocClassifiers { Title } }
    /// let registry = ChangeRegistry::new();
    /// let listener = Listener::new(|_: DocClassifiers| {});
    ///
    /// registry.add(DocClassifiers::Title, listener.clone());
    /// registry.remove(DocClassifiers::Title, listener);
    /// assert!(!registry.has_listeners());
    /// ```
    pub fn remove(&self, classifier: C, listener: impl Into<Option<Listener<C>>>) -> &Self {
        let Some(listener) = listener.into() else {
            return self;
        };

        let mut guard = self.buckets.lock();
        let Some(map) = guard.as_mut() else {
            return self;
        };
        let Some(bucket) = map.get_mut(&classifier).and_then(Option::as_mut) else {
            return self;
        };

        if let Some(index) = bucket.iter().position(|entry| entry.same(&listener)) {
            bucket.remove(index);

            #[cfg(feature = "tracing")]
            tracing::trace!(classifier = ?classifier, "listener removed");

            if bucket.is_empty() {
                map.remove(&classifier);
                if map.is_empty() {
                    *guard = None;
                }
            }
        }

        self
    }

    /// Discard every listener for every classifier.
    ///
    /// Returns the registry to its unallocated state; a no-op if it already
    /// is. A cleared registry is reusable.
    pub fn clear(&self) -> &Self {
        let mut guard = self.buckets.lock();
        if guard.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("registry cleared");
        }

        self
    }

    /// Discard every listener registered under `classifier`.
    ///
    /// A no-op if the registry is unallocated or has no entry for
    /// `classifier`. Deallocates the map if this removes its last entry.
    pub fn clear_classifier(&self, classifier: C) -> &Self {
        let mut guard = self.buckets.lock();
        let Some(map) = guard.as_mut() else {
            return self;
        };

        if map.remove(&classifier).is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(classifier = ?classifier, "classifier cleared");

            if map.is_empty() {
                *guard = None;
            }
        }

        self
    }

    /// Announce that the property identified by `classifier` changed.
    ///
    /// A no-op if the registry is unallocated. Otherwise:
    ///
    /// - **Specific classifier**: invokes only the listeners registered under
    ///   that exact classifier, in registration order. Wildcard registrations
    ///   do not fire.
    /// - **Wildcard**: invokes the wildcard's own listeners first, then every
    ///   other classifier's listeners in classifier order. Each listener
    ///   receives the classifier it was registered under, so wildcard
    ///   listeners see [`Classifier::WILDCARD`] as the argument.
    ///
    /// Listeners run synchronously on the calling thread, after the internal
    /// lock has been released: the set of listeners to invoke is decided
    /// atomically at the start of the call, and re-entrant calls from inside
    /// a listener are safe. A listener added or removed concurrently with a
    /// notification either is or is not part of that snapshot, never half of
    /// both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use prop_notify::prelude::*;
    /// # classifiers! { pub enum DocClassifiers { Title, Body } }
    /// let registry = ChangeRegistry::new();
    ///
    /// registry.add(
    ///     DocClassifiers::All,
    ///     Listener::new(|classifier| assert_eq!(classifier, DocClassifiers::All)),
    /// );
    /// registry.add(
    ///     DocClassifiers::Body,
    ///     Listener::new(|classifier| assert_eq!(classifier, DocClassifiers::Body)),
    /// );
    ///
    /// // Fires both listeners, each with its own registration classifier.
    /// registry.notify_property_changed(DocClassifiers::All);
    ///
    /// // Fires only the Body listener.
    /// registry.notify_property_changed(DocClassifiers::Body);
    /// ```
    pub fn notify_property_changed(&self, classifier: C) -> &Self {
        let batches = {
            let guard = self.buckets.lock();
            let Some(map) = guard.as_ref() else {
                return self;
            };

            if classifier.is_wildcard() {
                // The wildcard is the least classifier, so ordered iteration
                // yields its bucket before every specific one. Slots whose
                // bucket is absent are skipped, even though the key exists.
                map.iter()
                    .filter_map(|(registered_under, slot)| {
                        slot.as_ref().map(|bucket| (*registered_under, bucket.clone()))
                    })
                    .collect::<Vec<_>>()
            } else {
                match map.get(&classifier).and_then(Option::clone) {
                    Some(bucket) => vec![(classifier, bucket)],
                    None => Vec::new(),
                }
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            classifier = ?classifier,
            listeners = batches.iter().map(|(_, bucket)| bucket.len()).sum::<usize>(),
            "dispatching property change"
        );

        for (registered_under, bucket) in batches {
            for listener in bucket {
                listener.call(registered_under);
            }
        }

        self
    }

    /// Whether any listener is currently registered.
    pub fn has_listeners(&self) -> bool {
        self.listener_count() != 0
    }

    /// Total number of registrations across all classifiers.
    ///
    /// Duplicate registrations of one handle count once per registration.
    pub fn listener_count(&self) -> usize {
        let guard = self.buckets.lock();
        guard
            .as_ref()
            .map(|map| {
                map.values()
                    .map(|slot| slot.as_ref().map_or(0, Vec::len))
                    .sum()
            })
            .unwrap_or(0)
    }
}

impl<C: Classifier> Default for ChangeRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Classifier> fmt::Debug for ChangeRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
