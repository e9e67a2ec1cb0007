//! Per-slot parameter constraints.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use opdiff_types::{ArgumentProfile, Characteristic};

/// Constraints on one formal argument slot of an operation.
///
/// A parameter expresses *local* legality only: its checks are evaluated
/// against a single candidate argument, independently of every other slot.
/// Relational rules across slots live in
/// [`CrossParamRule`](crate::rule::CrossParamRule).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericParam {
    optional: bool,
    only_integer: bool,
    no_floating_point: bool,
    no_integer_wider_than_four_bytes: bool,
    incompatible: BTreeSet<Characteristic>,
}

impl NumericParam {
    /// An unconstrained required slot.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Mark the slot as omittable by the generator.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Restrict the slot to integer representations.
    #[must_use]
    pub fn integer_only(mut self) -> Self {
        self.only_integer = true;
        self
    }

    /// Forbid binary floating-point representations. Decimal stays legal.
    #[must_use]
    pub fn no_floating_point(mut self) -> Self {
        self.no_floating_point = true;
        self
    }

    /// Forbid integer representations wider than four bytes.
    #[must_use]
    pub fn max_four_byte_integer(mut self) -> Self {
        self.no_integer_wider_than_four_bytes = true;
        self
    }

    /// Forbid candidates whose value exhibits any of `cs`.
    #[must_use]
    pub fn incompatible_with<I>(mut self, cs: I) -> Self
    where
        I: IntoIterator<Item = Characteristic>,
    {
        self.incompatible.extend(cs);
        self
    }

    /// Whether the generator may omit this slot.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Characteristics this slot rejects outright.
    #[must_use]
    pub fn incompatible(&self) -> &BTreeSet<Characteristic> {
        &self.incompatible
    }

    /// Whether `candidate` is legal for this slot.
    ///
    /// `None` means the generator omitted the argument, which is legal
    /// exactly when the slot is optional. The five checks are an
    /// order-independent conjunction: representation kind, representation
    /// width, and characteristic compatibility are each evaluated against
    /// this slot alone.
    #[must_use]
    pub fn accepts(&self, candidate: Option<&ArgumentProfile>) -> bool {
        let Some(arg) = candidate else {
            return self.optional;
        };
        if self.only_integer && !arg.ty.is_integral() {
            return false;
        }
        if self.no_floating_point && arg.ty.is_floating_point() {
            return false;
        }
        if self.no_integer_wider_than_four_bytes
            && arg.ty.is_integral()
            && arg.ty.width_bytes() > 4
        {
            return false;
        }
        if arg.characteristics.iter().any(|c| self.incompatible.contains(c)) {
            return false;
        }
        true
    }
}
