//! Cross-parameter legality rules.
//!
//! A rule examines the *entire* ordered argument vector of one operation
//! invocation and rejects relational illegalities no single slot can
//! express: both operands of an addition simultaneously maximal, a
//! subtraction of a maximum from its own negation, and so on. Rules are
//! stateless values shared across descriptors and are evaluated only after
//! every individual slot has accepted its candidate.

use std::fmt;

use serde::{Deserialize, Serialize};

use opdiff_types::{ArgumentProfile, Characteristic};

/// A stateless predicate over an operation's full argument assignment.
///
/// Rejections encode overflow/ambiguity avoidance, not engine bugs: a
/// combination a rule rejects would diverge between execution strategies
/// for legitimate reasons and only manufacture false-positive mismatches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CrossParamRule {
    /// Two or more operands of a binary arithmetic operation carry a
    /// grows-without-bound trait. The sum/product silently overflows the
    /// result representation and differs by evaluation order.
    MultiParamGrowth,
    /// Subtraction where operand 0 is maximal and operand 1 is the
    /// negation of the maximum: `max - (-max)` overflows.
    MaxMinusNegMax,
    /// A unary growth function (e.g. exponential) applied to an operand
    /// that already grows without bound.
    SingleParamGrowth,
    /// A bitwise operation mixing an untyped literal with an explicitly
    /// eight-byte-typed operand. Overload resolution for the implicit type
    /// is engine-version-sensitive and not a consistency signal.
    MixedWidthBitwise,
}

impl CrossParamRule {
    /// All rules in canonical order.
    pub const ALL: [Self; 4] = [
        Self::MultiParamGrowth,
        Self::MaxMinusNegMax,
        Self::SingleParamGrowth,
        Self::MixedWidthBitwise,
    ];

    /// Stable lowercase name used in serialized catalogs and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiParamGrowth => "multi_param_growth",
            Self::MaxMinusNegMax => "max_minus_neg_max",
            Self::SingleParamGrowth => "single_param_growth",
            Self::MixedWidthBitwise => "mixed_width_bitwise",
        }
    }

    /// Whether the assignment is legal under this rule.
    ///
    /// `args` is the ordered argument vector; `None` entries are omitted
    /// optional slots and never trigger a rule. Pure and total: any arity
    /// is examined, and slices shorter than the operation's parameter list
    /// behave as if the missing suffix were omitted.
    #[must_use]
    pub fn permits(self, args: &[Option<ArgumentProfile>]) -> bool {
        match self {
            Self::MultiParamGrowth => {
                let growing = args
                    .iter()
                    .flatten()
                    .filter(|arg| arg.grows_without_bound())
                    .count();
                growing < 2
            }
            Self::MaxMinusNegMax => {
                let minuend_is_max = args
                    .first()
                    .and_then(Option::as_ref)
                    .is_some_and(|arg| arg.has(Characteristic::MaxValue));
                let subtrahend_is_neg_max = args
                    .get(1)
                    .and_then(Option::as_ref)
                    .is_some_and(|arg| {
                        arg.has(Characteristic::MaxValue) && arg.has(Characteristic::Negative)
                    });
                !(minuend_is_max && subtrahend_is_neg_max)
            }
            Self::SingleParamGrowth => !args
                .iter()
                .flatten()
                .next()
                .is_some_and(ArgumentProfile::grows_without_bound),
            Self::MixedWidthBitwise => {
                let has_untyped = args.iter().flatten().any(|arg| !arg.explicitly_typed);
                let has_wide_typed = args
                    .iter()
                    .flatten()
                    .any(|arg| arg.explicitly_typed && arg.ty.width_bytes() == 8);
                !(has_untyped && has_wide_typed)
            }
        }
    }
}

impl fmt::Display for CrossParamRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use opdiff_types::NumericType;

    use super::*;

    fn typed(ty: NumericType) -> ArgumentProfile {
        ArgumentProfile::typed(ty)
    }

    fn maxed() -> ArgumentProfile {
        typed(NumericType::Int8).with_characteristic(Characteristic::MaxValue)
    }

    #[test]
    fn multi_param_growth_needs_two_growing_operands() {
        let rule = CrossParamRule::MultiParamGrowth;
        assert!(!rule.permits(&[Some(maxed()), Some(maxed())]));
        assert!(rule.permits(&[Some(maxed()), Some(typed(NumericType::Int8))]));
        assert!(rule.permits(&[Some(typed(NumericType::Int8)), Some(maxed())]));
        assert!(rule.permits(&[Some(typed(NumericType::Int8)), None]));
    }

    #[test]
    fn multi_param_growth_counts_large_values_too() {
        let rule = CrossParamRule::MultiParamGrowth;
        let large = typed(NumericType::Float8).with_characteristic(Characteristic::LargeValue);
        assert!(!rule.permits(&[Some(large.clone()), Some(maxed())]));
        assert!(!rule.permits(&[Some(large.clone()), Some(large.clone())]));
        assert!(rule.permits(&[Some(large), None]));
    }

    #[test]
    fn max_minus_neg_max_is_positional() {
        let rule = CrossParamRule::MaxMinusNegMax;
        let neg_max = maxed().with_characteristic(Characteristic::Negative);
        assert!(!rule.permits(&[Some(maxed()), Some(neg_max.clone())]));
        // Swapped positions do not overflow via max - (-max).
        assert!(rule.permits(&[Some(neg_max.clone()), Some(maxed())]));
        // A merely negative subtrahend is fine.
        let negative = typed(NumericType::Int8).with_characteristic(Characteristic::Negative);
        assert!(rule.permits(&[Some(maxed()), Some(negative)]));
        // A missing operand cannot complete the pattern.
        assert!(rule.permits(&[Some(maxed()), None]));
        assert!(rule.permits(&[None, Some(neg_max)]));
    }

    #[test]
    fn single_param_growth_rejects_growing_sole_operand() {
        let rule = CrossParamRule::SingleParamGrowth;
        assert!(!rule.permits(&[Some(maxed())]));
        let large = typed(NumericType::Float8).with_characteristic(Characteristic::LargeValue);
        assert!(!rule.permits(&[Some(large)]));
        assert!(rule.permits(&[Some(typed(NumericType::Float8))]));
        assert!(rule.permits(&[None]));
        assert!(rule.permits(&[]));
    }

    #[test]
    fn mixed_width_bitwise_rejects_untyped_against_wide() {
        let rule = CrossParamRule::MixedWidthBitwise;
        let bare = ArgumentProfile::untyped_literal(NumericType::Int4);
        let wide = typed(NumericType::Int8);
        assert!(!rule.permits(&[Some(bare.clone()), Some(wide.clone())]));
        assert!(!rule.permits(&[Some(wide), Some(bare.clone())]));
        // Two equally-typed operands are fine, wide or narrow.
        assert!(rule.permits(&[Some(typed(NumericType::Int8)), Some(typed(NumericType::Int8))]));
        assert!(rule.permits(&[Some(typed(NumericType::Int4)), Some(typed(NumericType::Int4))]));
        // Untyped against a narrow typed operand is fine.
        assert!(rule.permits(&[Some(bare.clone()), Some(typed(NumericType::Int4))]));
        // Two untyped literals are fine.
        assert!(rule.permits(&[Some(bare.clone()), Some(bare)]));
    }

    #[test]
    fn rules_are_pure() {
        let args = [Some(maxed()), Some(maxed())];
        for rule in CrossParamRule::ALL {
            assert_eq!(rule.permits(&args), rule.permits(&args));
        }
    }

    #[test]
    fn display_matches_as_str() {
        for rule in CrossParamRule::ALL {
            assert_eq!(rule.to_string(), rule.as_str());
        }
    }
}
