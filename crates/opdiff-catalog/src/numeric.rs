//! The numeric operation catalog.
//!
//! Every numeric operator and function the generator may combine, with the
//! per-slot constraints and cross-parameter rules that keep the search
//! space free of meaningless (division by zero), guaranteed-erroring
//! (logarithm of a negative), and false-positive-producing (silent
//! overflow) combinations.

use opdiff_error::Result;
use opdiff_types::{Characteristic, TypeCategory};

use crate::operation::{OperationDescriptor, Relevance};
use crate::param::NumericParam;
use crate::registry::{Catalog, CatalogBuilder};
use crate::rule::CrossParamRule;

/// All numeric operator and function descriptors, in registration order.
///
/// The order is part of the contract: it determines generation order and
/// therefore the determinism of reproducible test runs.
pub fn numeric_operations() -> Result<Vec<OperationDescriptor>> {
    let mut ops = Vec::with_capacity(24);

    ops.push(
        OperationDescriptor::operator(
            "$ + $",
            vec![NumericParam::any(), NumericParam::any()],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MultiParamGrowth),
    );
    ops.push(
        OperationDescriptor::operator(
            "$ - $",
            vec![NumericParam::any(), NumericParam::any()],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MaxMinusNegMax),
    );
    ops.push(
        OperationDescriptor::operator(
            "$ * $",
            vec![NumericParam::any(), NumericParam::any()],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MultiParamGrowth),
    );
    ops.push(OperationDescriptor::operator(
        "$ / $",
        vec![
            NumericParam::any(),
            NumericParam::any().incompatible_with([Characteristic::Zero]),
        ],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::operator(
        "$ % $",
        vec![
            NumericParam::any(),
            NumericParam::any().incompatible_with([Characteristic::Zero]),
        ],
        TypeCategory::Numeric,
    )?);

    // Bitwise AND
    ops.push(
        OperationDescriptor::operator(
            "$ & $",
            vec![
                NumericParam::any().integer_only(),
                NumericParam::any().integer_only(),
            ],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MixedWidthBitwise)
        .with_relevance(Relevance::Low),
    );
    // Bitwise OR
    ops.push(
        OperationDescriptor::operator(
            "$ | $",
            vec![
                NumericParam::any().integer_only(),
                NumericParam::any().integer_only(),
            ],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MixedWidthBitwise)
        .with_relevance(Relevance::Low),
    );
    // Bitwise XOR
    ops.push(
        OperationDescriptor::operator(
            "$ # $",
            vec![
                NumericParam::any().integer_only(),
                NumericParam::any().integer_only(),
            ],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MixedWidthBitwise)
        .with_relevance(Relevance::Low),
    );
    // Bitwise NOT
    ops.push(
        OperationDescriptor::operator(
            "~$",
            vec![NumericParam::any().integer_only()],
            TypeCategory::Numeric,
        )?
        .with_relevance(Relevance::Low),
    );
    // Shift amounts above int4 width are rejected by the engine.
    ops.push(
        OperationDescriptor::operator(
            "$ << $",
            vec![
                NumericParam::any().integer_only(),
                NumericParam::any().integer_only().max_four_byte_integer(),
            ],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MixedWidthBitwise)
        .with_relevance(Relevance::Low),
    );
    ops.push(
        OperationDescriptor::operator(
            "$ >> $",
            vec![
                NumericParam::any().integer_only(),
                NumericParam::any().integer_only().max_four_byte_integer(),
            ],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::MixedWidthBitwise)
        .with_relevance(Relevance::Low),
    );

    ops.push(OperationDescriptor::function(
        "ABS",
        vec![NumericParam::any()],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "CBRT",
        vec![NumericParam::any()],
        TypeCategory::Numeric,
    )?);
    // CEILING is an engine alias of CEIL; one entry covers both.
    ops.push(OperationDescriptor::function(
        "CEIL",
        vec![NumericParam::any()],
        TypeCategory::Numeric,
    )?);
    ops.push(
        OperationDescriptor::function(
            "EXP",
            vec![NumericParam::any()],
            TypeCategory::Numeric,
        )?
        .with_rule(CrossParamRule::SingleParamGrowth),
    );
    ops.push(OperationDescriptor::function(
        "FLOOR",
        vec![NumericParam::any()],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "LN",
        vec![NumericParam::any()
            .incompatible_with([Characteristic::Negative, Characteristic::Zero])],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "LOG10",
        vec![NumericParam::any()
            .incompatible_with([Characteristic::Negative, Characteristic::Zero])],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "LOG",
        vec![
            // First parameter is the base; floats would only work in the
            // one-parameter form.
            NumericParam::any()
                .integer_only()
                .no_floating_point()
                .incompatible_with([
                    Characteristic::Negative,
                    Characteristic::Zero,
                    Characteristic::One,
                ]),
            // Not optional: the one-argument form is LOG10, catalogued
            // separately.
            NumericParam::any()
                .integer_only()
                .no_floating_point()
                .incompatible_with([Characteristic::Negative, Characteristic::Zero]),
        ],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "MOD",
        vec![
            NumericParam::any(),
            NumericParam::any().incompatible_with([Characteristic::Zero]),
        ],
        TypeCategory::Numeric,
    )?);
    // POWER is an engine alias of POW; one entry covers both.
    ops.push(OperationDescriptor::function(
        "POW",
        vec![
            NumericParam::any(),
            NumericParam::any().incompatible_with([Characteristic::MaxValue]),
        ],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "ROUND",
        vec![
            NumericParam::any(),
            // Scale may be negative; a large scale errors in the engine.
            NumericParam::any()
                .optional()
                .integer_only()
                .max_four_byte_integer()
                .incompatible_with([Characteristic::LargeValue]),
        ],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "SQRT",
        vec![NumericParam::any().incompatible_with([Characteristic::Negative])],
        TypeCategory::Numeric,
    )?);
    ops.push(OperationDescriptor::function(
        "TRUNC",
        vec![NumericParam::any()],
        TypeCategory::Numeric,
    )?);

    Ok(ops)
}

/// Build the frozen numeric catalog.
pub fn numeric_catalog() -> Result<Catalog> {
    let mut builder = CatalogBuilder::new();
    for op in numeric_operations()? {
        builder.register(op);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds() {
        let catalog = numeric_catalog().expect("built-in catalog is well-formed");
        assert_eq!(catalog.len(), 24);
        assert_eq!(catalog.operations_for(TypeCategory::Numeric).len(), 24);
    }

    #[test]
    fn registration_order_matches_reference() {
        let ops = numeric_operations().expect("built-in catalog is well-formed");
        let names: Vec<&str> = ops.iter().map(OperationDescriptor::name).collect();
        assert_eq!(
            names,
            [
                "$ + $", "$ - $", "$ * $", "$ / $", "$ % $", "$ & $", "$ | $", "$ # $", "~$",
                "$ << $", "$ >> $", "ABS", "CBRT", "CEIL", "EXP", "FLOOR", "LN", "LOG10", "LOG",
                "MOD", "POW", "ROUND", "SQRT", "TRUNC",
            ]
        );
    }

    #[test]
    fn bitwise_operations_are_low_relevance() {
        let ops = numeric_operations().expect("built-in catalog is well-formed");
        for op in &ops {
            let expected_low = matches!(
                op.name(),
                "$ & $" | "$ | $" | "$ # $" | "~$" | "$ << $" | "$ >> $"
            );
            assert_eq!(
                op.relevance() == Relevance::Low,
                expected_low,
                "unexpected relevance for {}",
                op.name()
            );
        }
    }

    #[test]
    fn round_scale_is_the_only_optional_slot() {
        let ops = numeric_operations().expect("built-in catalog is well-formed");
        for op in &ops {
            for (idx, param) in op.params().iter().enumerate() {
                let expected = op.name() == "ROUND" && idx == 1;
                assert_eq!(
                    param.is_optional(),
                    expected,
                    "unexpected optionality at {} slot {idx}",
                    op.name()
                );
            }
        }
    }

    #[test]
    fn growth_rules_guard_the_expected_operations() {
        let ops = numeric_operations().expect("built-in catalog is well-formed");
        for op in &ops {
            let has_multi = op.rules().contains(&CrossParamRule::MultiParamGrowth);
            assert_eq!(has_multi, matches!(op.name(), "$ + $" | "$ * $"));
            let has_single = op.rules().contains(&CrossParamRule::SingleParamGrowth);
            assert_eq!(has_single, op.name() == "EXP");
            let has_max_minus = op.rules().contains(&CrossParamRule::MaxMinusNegMax);
            assert_eq!(has_max_minus, op.name() == "$ - $");
        }
    }

    #[test]
    fn mixed_width_rule_guards_binary_bitwise() {
        let ops = numeric_operations().expect("built-in catalog is well-formed");
        for op in &ops {
            let has_rule = op.rules().contains(&CrossParamRule::MixedWidthBitwise);
            assert_eq!(
                has_rule,
                matches!(op.name(), "$ & $" | "$ | $" | "$ # $" | "$ << $" | "$ >> $"),
                "unexpected rule set for {}",
                op.name()
            );
        }
    }
}
