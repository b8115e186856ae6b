//! The [`classifiers!`](crate::classifiers) enum generator.
//!
//! Stand-in for an external code generator: given the names of a type's
//! observable properties, it emits the closed classifier set with the
//! reserved wildcard fixed at ordinal 0.

/// Generates a classifier enum for a set of observable properties.
///
/// The generated enum carries a leading `All` variant (the wildcard, ordinal
/// 0) followed by one variant per listed property, in declaration order, and
/// implements [`Classifier`](crate::classifier::Classifier), [`FromStr`]
/// (by declared name), and [`Display`].
///
/// With the `serde` feature enabled the enum also derives `Serialize` and
/// `Deserialize`; this requires a `serde` dependency in the calling crate.
///
/// [`FromStr`]: std::str::FromStr
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```rust
/// use prop_notify::prelude::*;
///
/// classifiers! {
///     /// Observable properties of `Account`.
///     pub enum AccountClassifiers {
///         Email,
///         DisplayName,
///     }
/// }
///
/// assert_eq!(AccountClassifiers::VARIANTS.len(), 3);
/// assert_eq!(AccountClassifiers::All.ordinal(), 0);
/// assert_eq!(AccountClassifiers::DisplayName.name(), "DisplayName");
/// ```
#[macro_export]
macro_rules! classifiers {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $crate::__classifiers_enum! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$vmeta])* $variant),+
            }
        }

        $crate::__classifiers_impls! { $name { $($variant),+ } }
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __classifiers_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            /// Reserved wildcard meaning "any property changed".
            All,
            $($(#[$vmeta])* $variant,)+
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __classifiers_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            /// Reserved wildcard meaning "any property changed".
            All,
            $($(#[$vmeta])* $variant,)+
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __classifiers_impls {
    ($name:ident { $($variant:ident),+ }) => {
        impl $crate::classifier::Classifier for $name {
            const WILDCARD: Self = Self::All;

            const VARIANTS: &'static [Self] = &[Self::All, $(Self::$variant,)+];

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    Self::All => "All",
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ClassifierError;

            fn from_str(name: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::classifier::Classifier>::from_name(name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::classifier::Classifier::name(*self))
            }
        }
    };
}
