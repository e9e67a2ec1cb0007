//! Coarse scalar type families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The scalar type family an operation produces or a parameter consumes.
///
/// The catalog registry is keyed by category, so catalogs for further
/// families can coexist in one process. Only [`TypeCategory::Numeric`] is
/// populated by this crate's built-in catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Integral, floating-point, and arbitrary-precision numbers.
    Numeric,
    /// Booleans.
    Boolean,
    /// Character data.
    Text,
}

impl TypeCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 3] = [Self::Numeric, Self::Boolean, Self::Text];

    /// Stable lowercase name used in serialized catalogs and log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Boolean => "boolean",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
