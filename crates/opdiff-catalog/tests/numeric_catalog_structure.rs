//! Structural invariants of the built-in numeric catalog.

use opdiff_catalog::{
    numeric_catalog, numeric_operations, OperationDescriptor, OperationForm, Relevance,
};
use opdiff_types::TypeCategory;

#[test]
fn every_operator_pattern_matches_its_required_slots() {
    for op in numeric_operations().expect("catalog is well-formed") {
        if let OperationForm::Operator { pattern } = op.form() {
            let placeholders = pattern.matches('$').count();
            assert_eq!(
                placeholders,
                op.required_params(),
                "placeholder/arity mismatch in '{pattern}'"
            );
        }
    }
}

#[test]
fn every_entry_produces_numeric() {
    for op in numeric_operations().expect("catalog is well-formed") {
        assert_eq!(op.returns(), TypeCategory::Numeric, "{}", op.name());
    }
}

#[test]
fn every_entry_declares_at_least_one_parameter() {
    for op in numeric_operations().expect("catalog is well-formed") {
        assert!(!op.params().is_empty(), "{}", op.name());
    }
}

#[test]
fn optional_slots_are_trailing() {
    for op in numeric_operations().expect("catalog is well-formed") {
        let mut seen_optional = false;
        for param in op.params() {
            if param.is_optional() {
                seen_optional = true;
            } else {
                assert!(!seen_optional, "required slot after optional in {}", op.name());
            }
        }
    }
}

#[test]
fn catalog_order_is_stable_across_queries() {
    let catalog = numeric_catalog().expect("catalog is well-formed");
    let names = |catalog: &opdiff_catalog::Catalog| -> Vec<String> {
        catalog
            .operations_for(TypeCategory::Numeric)
            .iter()
            .map(|op| op.name().to_owned())
            .collect()
    };
    assert_eq!(names(&catalog), names(&catalog));
}

#[test]
fn independently_built_catalogs_agree() {
    let a = numeric_catalog().expect("catalog is well-formed");
    let b = numeric_catalog().expect("catalog is well-formed");
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn stats_reflect_the_reference_catalog() {
    let stats = numeric_catalog().expect("catalog is well-formed").stats();
    assert_eq!(stats.operations, 24);
    assert_eq!(stats.operators, 11);
    assert_eq!(stats.functions, 13);
    assert_eq!(stats.low_relevance, 6);
    assert_eq!(stats.high_relevance, 18);
    assert_eq!(stats.by_category.get(&TypeCategory::Numeric), Some(&24));
}

#[test]
fn fingerprint_is_a_sha256_hex_digest() {
    let fingerprint = numeric_catalog().expect("catalog is well-formed").fingerprint();
    assert_eq!(fingerprint.len(), 64);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn descriptors_render_their_reference_display_forms() {
    let ops = numeric_operations().expect("catalog is well-formed");
    let add = ops.iter().find(|op| op.name() == "$ + $").unwrap();
    assert_eq!(add.render(&["1".to_owned(), "2".to_owned()]), "1 + 2");

    let shift = ops.iter().find(|op| op.name() == "$ << $").unwrap();
    assert_eq!(shift.render(&["8".to_owned(), "2".to_owned()]), "8 << 2");

    let round = ops.iter().find(|op| op.name() == "ROUND").unwrap();
    assert_eq!(round.render(&["2.71".to_owned()]), "ROUND(2.71)");
}

#[test]
fn descriptor_accessors_are_consistent() {
    for op in numeric_operations().expect("catalog is well-formed") {
        assert_eq!(op.name(), op.form().display_name());
        assert!(op.required_params() <= op.params().len());
        let from_params = op.params().iter().filter(|p| !p.is_optional()).count();
        assert_eq!(op.required_params(), from_params, "{}", op.name());
    }
}

#[test]
fn display_uses_the_display_form() {
    let ops = numeric_operations().expect("catalog is well-formed");
    let sqrt: &OperationDescriptor = ops.iter().find(|op| op.name() == "SQRT").unwrap();
    assert_eq!(sqrt.to_string(), "SQRT");
}

#[test]
fn relevance_partition_is_exact() {
    let low: Vec<String> = numeric_operations()
        .expect("catalog is well-formed")
        .iter()
        .filter(|op| op.relevance() == Relevance::Low)
        .map(|op| op.name().to_owned())
        .collect();
    assert_eq!(low, ["$ & $", "$ | $", "$ # $", "~$", "$ << $", "$ >> $"]);
}
