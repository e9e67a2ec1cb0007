//! Concrete numeric storage representations.
//!
//! Parameter constraints in the catalog are expressed against the
//! representation the generator picks for an argument: whether it is
//! integral, whether it is binary floating point, and how wide it is.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete numeric storage type of the engine under test.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NumericType {
    /// Two-byte signed integer.
    Int2,
    /// Four-byte signed integer.
    Int4,
    /// Eight-byte signed integer.
    Int8,
    /// Two-byte unsigned integer.
    UInt2,
    /// Four-byte unsigned integer.
    UInt4,
    /// Eight-byte unsigned integer.
    UInt8,
    /// Four-byte binary floating point.
    Float4,
    /// Eight-byte binary floating point.
    Float8,
    /// Arbitrary-precision decimal.
    Decimal,
}

impl NumericType {
    /// All representations in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Int2,
        Self::Int4,
        Self::Int8,
        Self::UInt2,
        Self::UInt4,
        Self::UInt8,
        Self::Float4,
        Self::Float8,
        Self::Decimal,
    ];

    /// Whether this is an integer representation (signed or unsigned).
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Int2 | Self::Int4 | Self::Int8 | Self::UInt2 | Self::UInt4 | Self::UInt8
        )
    }

    /// Whether this is a binary floating-point representation. `Decimal` is
    /// neither integral nor floating point.
    #[must_use]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float4 | Self::Float8)
    }

    /// Whether this representation can hold values below zero.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::UInt2 | Self::UInt4 | Self::UInt8)
    }

    /// Storage width in bytes. `Decimal` reports its maximum on-disk width.
    #[must_use]
    pub const fn width_bytes(self) -> u8 {
        match self {
            Self::Int2 | Self::UInt2 => 2,
            Self::Int4 | Self::UInt4 | Self::Float4 => 4,
            Self::Int8 | Self::UInt8 | Self::Float8 => 8,
            Self::Decimal => 16,
        }
    }

    /// The SQL spelling used when the generator annotates a literal with an
    /// explicit type.
    #[must_use]
    pub const fn sql_name(self) -> &'static str {
        match self {
            Self::Int2 => "INT2",
            Self::Int4 => "INT4",
            Self::Int8 => "INT8",
            Self::UInt2 => "UINT2",
            Self::UInt4 => "UINT4",
            Self::UInt8 => "UINT8",
            Self::Float4 => "FLOAT4",
            Self::Float8 => "FLOAT8",
            Self::Decimal => "NUMERIC",
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
