//! The observable owner surface.
//!
//! Types that announce their own property changes embed a
//! [`ChangeRegistry`] and implement [`Observable`]; the provided methods
//! forward the full registry API so observers can subscribe directly on the
//! owner.

use crate::classifier::Classifier;
use crate::notify::{ChangeRegistry, Listener};

/// A stateful object whose property changes can be observed.
///
/// Implementors supply [`registry`](Observable::registry); everything else
/// is provided. Setters call
/// [`notify_property_changed`](Observable::notify_property_changed) after
/// mutating, passing the classifier of the property they changed.
///
/// # Examples
///
/// ```rust
/// use prop_notify::prelude::*;
///
/// classifiers! {
///     pub enum TrackClassifiers {
///         Title,
///         Artist,
///     }
/// }
///
/// #[derive(Default)]
/// struct Track {
///     title: String,
///     changes: ChangeRegistry<TrackClassifiers>,
/// }
///
/// impl Observable<TrackClassifiers> for Track {
///     fn registry(&self) -> &ChangeRegistry<TrackClassifiers> {
///         &self.changes
///     }
/// }
///
/// impl Track {
///     fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
///         self.title = title.into();
///         self.notify_property_changed(TrackClassifiers::Title);
///         self
///     }
/// }
///
/// let mut track = Track::default();
/// track.add(
///     TrackClassifiers::Title,
///     Listener::new(|classifier| assert_eq!(classifier, TrackClassifiers::Title)),
/// );
/// track.set_title("Paranoid Android");
/// ```
pub trait Observable<C: Classifier> {
    /// The embedded change registry.
    fn registry(&self) -> &ChangeRegistry<C>;

    /// Register `listener` for changes to the property identified by
    /// `classifier`. See [`ChangeRegistry::add`].
    fn add(&self, classifier: C, listener: impl Into<Option<Listener<C>>>) -> &Self
    where
        Self: Sized,
    {
        self.registry().add(classifier, listener);
        self
    }

    /// Remove one occurrence of `listener` from `classifier`. See
    /// [`ChangeRegistry::remove`].
    fn remove(&self, classifier: C, listener: impl Into<Option<Listener<C>>>) -> &Self
    where
        Self: Sized,
    {
        self.registry().remove(classifier, listener);
        self
    }

    /// Drop every registered listener. See [`ChangeRegistry::clear`].
    fn clear(&self) -> &Self
    where
        Self: Sized,
    {
        self.registry().clear();
        self
    }

    /// Drop every listener registered under `classifier`. See
    /// [`ChangeRegistry::clear_classifier`].
    fn clear_classifier(&self, classifier: C) -> &Self
    where
        Self: Sized,
    {
        self.registry().clear_classifier(classifier);
        self
    }

    /// Announce that the property identified by `classifier` changed. See
    /// [`ChangeRegistry::notify_property_changed`].
    fn notify_property_changed(&self, classifier: C) -> &Self
    where
        Self: Sized,
    {
        self.registry().notify_property_changed(classifier);
        self
    }
}
