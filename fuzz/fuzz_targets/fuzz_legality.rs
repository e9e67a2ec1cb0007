#![no_main]

//! Fuzz the legality surface with arbitrary argument assignments.
//!
//! Legality checks are total functions: whatever operation, arity,
//! representation, typedness, and characteristic set the bytes decode to,
//! `accepts_combination` and `render` must return without panicking, and
//! repeated evaluation must agree.

use libfuzzer_sys::fuzz_target;

use opdiff_catalog::numeric_operations;
use opdiff_types::{ArgumentProfile, Characteristic, NumericType};

fn decode_profile(bytes: &[u8]) -> Option<ArgumentProfile> {
    let [ty_byte, typed_byte, traits_byte] = *bytes else {
        return None;
    };
    // 0xFF in the type byte encodes an omitted optional argument.
    if ty_byte == 0xFF {
        return None;
    }
    let ty = NumericType::ALL[ty_byte as usize % NumericType::ALL.len()];
    let mut profile = if typed_byte & 1 == 0 {
        ArgumentProfile::untyped_literal(ty)
    } else {
        ArgumentProfile::typed(ty)
    };
    for (bit, characteristic) in Characteristic::ALL.iter().enumerate() {
        if traits_byte & (1 << (bit % 8)) != 0 {
            profile = profile.with_characteristic(*characteristic);
        }
    }
    Some(profile)
}

fuzz_target!(|data: &[u8]| {
    let Some((&op_byte, rest)) = data.split_first() else {
        return;
    };

    let ops = numeric_operations().expect("built-in catalog is well-formed");
    let op = &ops[op_byte as usize % ops.len()];

    let args: Vec<Option<ArgumentProfile>> = rest
        .chunks(3)
        .take(4)
        .map(decode_profile)
        .collect();

    let first = op.accepts_combination(&args);
    let second = op.accepts_combination(&args);
    assert_eq!(first, second);

    let rendered = op.render(&["0".to_owned(), "1".to_owned()]);
    assert!(!rendered.is_empty());
});
