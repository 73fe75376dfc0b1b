//! Cache geometry configuration.
//!
//! This module defines the immutable shape of the simulated cache:
//! 1. **Fields:** Set index bits, block offset bits, and associativity.
//! 2. **Validation:** The tag field must be non-degenerate and every set must hold at least one line.
//! 3. **Derived quantities:** Set count and block size in bytes.
//!
//! Geometry is supplied by the CLI flags (`-s`, `-b`, `-E`) or deserialized
//! from JSON; either way it is validated once, before the cache is built,
//! and read-only thereafter.

use serde::{Deserialize, Serialize};

use crate::common::error::GeometryError;

/// Default geometry constants, used when a JSON configuration omits a field.
mod defaults {
    /// Default set index bit count (16 sets).
    pub const INDEX_BITS: u32 = 4;

    /// Default block offset bit count (32-byte blocks).
    pub const OFFSET_BITS: u32 = 5;

    /// Default associativity (direct-mapped).
    pub const ASSOCIATIVITY: usize = 1;
}

/// Immutable cache shape.
///
/// Invariant: `index_bits + offset_bits < 64` (the tag field must exist) and
/// `associativity > 0`. [`CacheGeometry::new`] enforces this; a geometry
/// built any other way is re-checked by [`CacheGeometry::validate`] before an
/// engine is constructed from it.
///
/// # Examples
///
/// Deserializing from JSON, with omitted fields taking their defaults:
///
/// ```
/// use cachesim_core::config::CacheGeometry;
///
/// let json = r#"{ "index_bits": 2, "associativity": 4 }"#;
/// let geometry: CacheGeometry = serde_json::from_str(json)?;
///
/// assert_eq!(geometry.set_count(), 4);
/// assert_eq!(geometry.associativity, 4);
/// assert_eq!(geometry.block_bytes(), 32); // default offset_bits = 5
/// geometry.validate()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheGeometry {
    /// Number of set index bits; the cache has `2^index_bits` sets.
    #[serde(default = "CacheGeometry::default_index_bits")]
    pub index_bits: u32,

    /// Number of block offset bits; blocks are `2^offset_bits` bytes.
    #[serde(default = "CacheGeometry::default_offset_bits")]
    pub offset_bits: u32,

    /// Number of lines per set.
    #[serde(default = "CacheGeometry::default_associativity")]
    pub associativity: usize,
}

impl CacheGeometry {
    /// Builds a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the bit fields leave no room for a tag
    /// or the associativity is zero.
    pub fn new(
        index_bits: u32,
        offset_bits: u32,
        associativity: usize,
    ) -> Result<Self, GeometryError> {
        let geometry = Self {
            index_bits,
            offset_bits,
            associativity,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the geometry invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when `index_bits + offset_bits >= 64` or
    /// `associativity == 0`.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.index_bits.saturating_add(self.offset_bits) >= 64 {
            return Err(GeometryError::NoTagField {
                index_bits: self.index_bits,
                offset_bits: self.offset_bits,
            });
        }
        if self.associativity == 0 {
            return Err(GeometryError::ZeroAssociativity);
        }
        Ok(())
    }

    /// Number of sets: `2^index_bits`.
    #[inline]
    pub fn set_count(&self) -> usize {
        1usize << self.index_bits
    }

    /// Block size in bytes: `2^offset_bits`.
    #[inline]
    pub fn block_bytes(&self) -> u64 {
        1u64 << self.offset_bits
    }

    /// Mask selecting the set-index field after the offset shift.
    #[inline]
    pub(crate) fn index_mask(&self) -> u64 {
        (1u64 << self.index_bits) - 1
    }

    /// Returns the default set index bit count.
    fn default_index_bits() -> u32 {
        defaults::INDEX_BITS
    }

    /// Returns the default block offset bit count.
    fn default_offset_bits() -> u32 {
        defaults::OFFSET_BITS
    }

    /// Returns the default associativity.
    fn default_associativity() -> usize {
        defaults::ASSOCIATIVITY
    }
}

impl Default for CacheGeometry {
    /// Creates a small direct-mapped default geometry (16 sets, 32-byte blocks).
    fn default() -> Self {
        Self {
            index_bits: defaults::INDEX_BITS,
            offset_bits: defaults::OFFSET_BITS,
            associativity: defaults::ASSOCIATIVITY,
        }
    }
}
