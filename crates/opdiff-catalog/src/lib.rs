//! Operation catalog and argument-compatibility model for differential
//! ("output consistency") testing of a SQL engine's numeric expressions.
//!
//! Differential testing evaluates the same expression through two
//! independent execution strategies of one engine and flags discrepancies.
//! Enumerating every (operation × representation × value-characteristic)
//! combination is explosive, and many combinations are either meaningless
//! (division by zero), guaranteed to error (logarithm of a negative), or
//! manufacture false positives (overflow that legitimately differs by
//! evaluation order). This crate is the single source of truth the
//! expression generator queries before synthesizing a candidate: a
//! declarative catalog of operations with per-slot constraints
//! ([`param::NumericParam`]), cross-parameter legality rules
//! ([`rule::CrossParamRule`]), and a sampling-priority tier
//! ([`operation::Relevance`]).
//!
//! # Architecture
//!
//! ```text
//!   numeric_operations()        one descriptor per operator/function
//!        │
//!        ▼
//!   CatalogBuilder::register    append-only, insertion order preserved
//!        │
//!        ▼  build()
//!   Catalog                     frozen, Send + Sync, queried read-only
//!        │
//!        ├── operations_for(category) → &[OperationDescriptor]
//!        ├── stats()                  → CatalogStats
//!        └── fingerprint()            → SHA-256 over canonical JSON
//! ```
//!
//! # Purity
//!
//! Every legality check is a total, pure function: no I/O, no hidden
//! state, no errors. Malformed catalog entries are construction-time
//! defects and fail fast with a [`opdiff_error::CatalogError`].
//!
//! # Determinism
//!
//! The catalog preserves registration order per category, all sets are
//! BTree-backed, and [`registry::Catalog::fingerprint`] pins the exact
//! catalog a test run generated against.

pub mod numeric;
pub mod operation;
pub mod param;
pub mod registry;
pub mod rule;

pub use numeric::{numeric_catalog, numeric_operations};
pub use operation::{OperationDescriptor, OperationForm, Relevance};
pub use param::NumericParam;
pub use registry::{Catalog, CatalogBuilder, CatalogStats};
pub use rule::CrossParamRule;
