//! Error types for prop-notify.
//!
//! The notification registry itself never errors: absent registries, unknown
//! listeners, and empty buckets are all documented no-ops. The only fallible
//! surface is classifier conversion (ordinal and name lookup on generated
//! enums).

/// Result type alias for prop-notify operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors that can occur when converting to a classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    /// The ordinal is outside the classifier set.
    #[error("No classifier with ordinal {ordinal} (set has {len} members)")]
    UnknownOrdinal {
        /// The ordinal that was looked up
        ordinal: usize,
        /// Number of classifiers in the set, wildcard included
        len: usize,
    },

    /// No classifier in the set has the given name.
    #[error("No classifier named '{name}'")]
    UnknownName {
        /// The name that was looked up
        name: String,
    },
}
