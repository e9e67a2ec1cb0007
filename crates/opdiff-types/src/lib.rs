//! Shared vocabulary for the opdiff operation catalog.
//!
//! Everything in this crate is pure, immutable data: the semantic traits a
//! synthesized argument value may exhibit ([`Characteristic`]), the coarse
//! scalar type families operations produce and consume ([`TypeCategory`]),
//! the concrete numeric storage representations a generated argument may be
//! given ([`NumericType`]), and the fully specified candidate argument the
//! generator proposes to the legality model ([`ArgumentProfile`]).
//!
//! All collections are BTree-backed so that iteration order, serialized
//! form, and therefore generated test runs are deterministic.

pub mod argument;
pub mod category;
pub mod characteristic;
pub mod numeric_type;

pub use argument::ArgumentProfile;
pub use category::TypeCategory;
pub use characteristic::Characteristic;
pub use numeric_type::NumericType;
