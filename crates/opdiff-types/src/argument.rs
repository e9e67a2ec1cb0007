//! Fully specified candidate arguments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::characteristic::Characteristic;
use crate::numeric_type::NumericType;

/// One candidate argument the generator proposes for a parameter slot: the
/// representation it will synthesize the value in, whether the literal will
/// carry an explicit type annotation, and the semantic traits the value
/// will exhibit.
///
/// A bare literal's type is resolved by the engine's overload machinery,
/// which is version-sensitive; `explicitly_typed` records whether the
/// generator pins the type with a cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentProfile {
    /// The storage representation chosen for this argument.
    pub ty: NumericType,
    /// Whether the generated literal is annotated with an explicit type.
    pub explicitly_typed: bool,
    /// Semantic traits the synthesized value will exhibit.
    pub characteristics: BTreeSet<Characteristic>,
}

impl ArgumentProfile {
    /// A candidate whose literal carries an explicit type annotation.
    #[must_use]
    pub fn typed(ty: NumericType) -> Self {
        Self {
            ty,
            explicitly_typed: true,
            characteristics: BTreeSet::new(),
        }
    }

    /// A bare literal whose type the engine infers.
    #[must_use]
    pub fn untyped_literal(ty: NumericType) -> Self {
        Self {
            ty,
            explicitly_typed: false,
            characteristics: BTreeSet::new(),
        }
    }

    /// Attach one characteristic.
    #[must_use]
    pub fn with_characteristic(mut self, c: Characteristic) -> Self {
        self.characteristics.insert(c);
        self
    }

    /// Attach several characteristics.
    #[must_use]
    pub fn with_characteristics<I>(mut self, cs: I) -> Self
    where
        I: IntoIterator<Item = Characteristic>,
    {
        self.characteristics.extend(cs);
        self
    }

    /// Whether the synthesized value will exhibit `c`.
    #[must_use]
    pub fn has(&self, c: Characteristic) -> bool {
        self.characteristics.contains(&c)
    }

    /// Whether any attached trait makes arithmetic on this value overflow
    /// its representation.
    #[must_use]
    pub fn grows_without_bound(&self) -> bool {
        self.characteristics
            .iter()
            .any(|c| c.grows_without_bound())
    }
}
