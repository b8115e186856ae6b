//! Classifier identifiers for observable properties.
//!
//! A classifier is an opaque, totally-ordered identifier drawn from a closed
//! set known at compile time: one reserved wildcard at ordinal 0 plus one
//! identifier per observable property. The [`classifiers!`](crate::classifiers)
//! macro generates such a set as an enum; the registry only depends on the
//! [`Classifier`] trait, so hand-written impls work just as well.

mod macros;

use crate::error::{ClassifierError, Result};
use std::fmt;
use std::hash::Hash;

/// A member of a closed, ordered set of property identifiers.
///
/// Implementations must uphold two invariants the registry relies on:
/// - [`Classifier::WILDCARD`] is the least value of the set (ordinal 0), so
///   ordered iteration visits it first
/// - [`Classifier::VARIANTS`] lists every member exactly once, in ordinal
///   order, starting with the wildcard
///
/// Enums produced by [`classifiers!`](crate::classifiers) satisfy both by
/// construction.
///
/// # Examples
///
/// ```rust
/// use prop_notify::prelude::*;
///
/// classifiers! {
///     pub enum ModelClassifiers {
///         Foo,
///         Bar,
///     }
/// }
///
/// assert_eq!(ModelClassifiers::WILDCARD, ModelClassifiers::All);
/// assert_eq!(ModelClassifiers::Foo.ordinal(), 1);
/// assert!(ModelClassifiers::All < ModelClassifiers::Bar);
/// ```
pub trait Classifier:
    Copy + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// The reserved "any property changed" classifier, at ordinal 0.
    const WILDCARD: Self;

    /// Every classifier in the set, in ordinal order, wildcard first.
    const VARIANTS: &'static [Self];

    /// Position of this classifier within [`Classifier::VARIANTS`].
    fn ordinal(self) -> usize;

    /// The classifier's declared name.
    fn name(self) -> &'static str;

    /// Whether this classifier is the reserved wildcard.
    fn is_wildcard(self) -> bool {
        self == Self::WILDCARD
    }

    /// Look a classifier up by ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::UnknownOrdinal`] if `ordinal` is outside
    /// the set.
    fn from_ordinal(ordinal: usize) -> Result<Self> {
        Self::VARIANTS
            .get(ordinal)
            .copied()
            .ok_or(ClassifierError::UnknownOrdinal {
                ordinal,
                len: Self::VARIANTS.len(),
            })
    }

    /// Look a classifier up by declared name.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::UnknownName`] if no member of the set has
    /// that name.
    fn from_name(name: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| ClassifierError::UnknownName {
                name: name.to_string(),
            })
    }
}
