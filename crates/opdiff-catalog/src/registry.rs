//! Append-then-freeze catalog registry.
//!
//! The catalog is assembled single-threaded at process start and frozen
//! before any generation worker sees it. There is no removal or in-place
//! edit: [`CatalogBuilder::register`] appends, [`CatalogBuilder::build`]
//! freezes. The frozen [`Catalog`] holds no interior mutability, so any
//! number of workers can query it concurrently without synchronization.
//!
//! The catalog is a value passed explicitly to its consumers, not ambient
//! global state; several catalogs (one per type family) can coexist in one
//! process.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use opdiff_types::TypeCategory;

use crate::operation::{OperationDescriptor, OperationForm, Relevance};

/// Accumulates descriptors during catalog assembly.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<TypeCategory, Vec<OperationDescriptor>>,
}

impl CatalogBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor under its produced category. Registration order
    /// is preserved per category; it determines generation order and
    /// therefore test-run determinism.
    pub fn register(&mut self, descriptor: OperationDescriptor) -> &mut Self {
        debug!(
            operation = descriptor.name(),
            category = %descriptor.returns(),
            relevance = %descriptor.relevance(),
            "registering operation"
        );
        self.entries
            .entry(descriptor.returns())
            .or_default()
            .push(descriptor);
        self
    }

    /// Freeze the accumulated entries into an immutable catalog.
    #[must_use]
    pub fn build(self) -> Catalog {
        let catalog = Catalog {
            entries: self.entries,
        };
        info!(
            operations = catalog.len(),
            fingerprint = %catalog.fingerprint(),
            "catalog frozen"
        );
        catalog
    }
}

/// An immutable, ordered collection of operation descriptors, keyed by
/// produced type category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<TypeCategory, Vec<OperationDescriptor>>,
}

impl Catalog {
    /// All operations producing `category`, in registration order. The
    /// order is stable across repeated calls within one process lifetime.
    #[must_use]
    pub fn operations_for(&self, category: TypeCategory) -> &[OperationDescriptor] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Total number of registered operations across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether no operation was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Categories with at least one registered operation, in canonical
    /// order.
    pub fn categories(&self) -> impl Iterator<Item = TypeCategory> + '_ {
        self.entries
            .iter()
            .filter(|(_, ops)| !ops.is_empty())
            .map(|(category, _)| *category)
    }

    /// Aggregate counts over the registered descriptors.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for (category, ops) in &self.entries {
            if !ops.is_empty() {
                stats.by_category.insert(*category, ops.len());
            }
            for op in ops {
                stats.operations += 1;
                match op.form() {
                    OperationForm::Operator { .. } => stats.operators += 1,
                    OperationForm::Function { .. } => stats.functions += 1,
                }
                match op.relevance() {
                    Relevance::High => stats.high_relevance += 1,
                    Relevance::Low => stats.low_relevance += 1,
                }
            }
        }
        stats
    }

    /// Deterministic identity of this catalog: the SHA-256 of its
    /// canonical JSON encoding. Two processes that built byte-identical
    /// catalogs report the same fingerprint, so a test run can pin exactly
    /// what it generated against.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let json =
            serde_json::to_string(self).expect("catalog serialization must not fail");
        sha256_hex(json.as_bytes())
    }
}

/// Aggregate counts for one frozen catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total registered operations.
    pub operations: usize,
    /// Operator-form entries.
    pub operators: usize,
    /// Function-form entries.
    pub functions: usize,
    /// Entries at the default tier.
    pub high_relevance: usize,
    /// Entries explicitly lowered.
    pub low_relevance: usize,
    /// Operations per populated category.
    pub by_category: BTreeMap<TypeCategory, usize>,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
