//! Semantic traits of synthesized argument values.
//!
//! A characteristic describes a property a concrete argument value will have
//! once the value synthesizer produces it (zero, negative, maximal for its
//! representation, ...). The legality model never sees literal values; the
//! set of characteristics attached to an argument is its semantic
//! fingerprint.
//!
//! The vocabulary is closed: legality rules match exhaustively, so adding a
//! variant forces every rule site through the compiler. All membership
//! checks are set-intersection based, which keeps existing catalog entries
//! valid when a new characteristic is introduced.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic trait attached to a synthesized test argument.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    /// SQL NULL.
    Null,
    /// Exactly zero.
    Zero,
    /// Exactly one.
    One,
    /// Strictly below zero.
    Negative,
    /// The largest value the chosen representation can hold.
    MaxValue,
    /// Large in magnitude, but below the representation's maximum.
    LargeValue,
    /// Close to zero without being zero.
    TinyValue,
    /// Floating-point infinity.
    Infinity,
    /// Floating-point NaN.
    Nan,
}

impl Characteristic {
    /// All characteristics in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Null,
        Self::Zero,
        Self::One,
        Self::Negative,
        Self::MaxValue,
        Self::LargeValue,
        Self::TinyValue,
        Self::Infinity,
        Self::Nan,
    ];

    /// Stable lowercase name used in serialized catalogs and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Zero => "zero",
            Self::One => "one",
            Self::Negative => "negative",
            Self::MaxValue => "max_value",
            Self::LargeValue => "large_value",
            Self::TinyValue => "tiny_value",
            Self::Infinity => "infinity",
            Self::Nan => "nan",
        }
    }

    /// Whether a value with this trait makes arithmetic results overflow
    /// their representation. Sums and products of such operands diverge by
    /// evaluation order rather than by engine behaviour, so the growth
    /// rules treat them as radioactive.
    #[must_use]
    pub const fn grows_without_bound(self) -> bool {
        matches!(self, Self::MaxValue | Self::LargeValue)
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn all_is_complete_and_unique() {
        let set: BTreeSet<Characteristic> = Characteristic::ALL.into_iter().collect();
        assert_eq!(set.len(), Characteristic::ALL.len());
    }

    #[test]
    fn display_matches_as_str() {
        for c in Characteristic::ALL {
            assert_eq!(c.to_string(), c.as_str());
        }
    }

    #[test]
    fn as_str_is_unique() {
        let names: BTreeSet<&str> = Characteristic::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), Characteristic::ALL.len());
    }

    #[test]
    fn growth_set() {
        assert!(Characteristic::MaxValue.grows_without_bound());
        assert!(Characteristic::LargeValue.grows_without_bound());
        assert!(!Characteristic::Zero.grows_without_bound());
        assert!(!Characteristic::Negative.grows_without_bound());
        assert!(!Characteristic::TinyValue.grows_without_bound());
    }

    #[test]
    fn serde_wire_names() {
        let json = serde_json::to_string(&Characteristic::MaxValue).unwrap();
        assert_eq!(json, "\"max_value\"");
        let back: Characteristic = serde_json::from_str("\"large_value\"").unwrap();
        assert_eq!(back, Characteristic::LargeValue);
    }
}
