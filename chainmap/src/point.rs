//! Immutable two-coordinate point, usable as a map key.

use crate::key::MapKey;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Multiplier from the 64-bit golden ratio, used to spread the first coordinate.
const MIX_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// A point with two `f64` coordinates.
///
/// Equality is exact, component-wise IEEE comparison. `0.0` and `-0.0` are
/// equal, so they hash the same. A point with a NaN coordinate is never equal
/// to itself; it is treated as the absence sentinel and a map refuses it.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// First coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Second coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Combines both coordinates into one deterministic 64-bit value.
    ///
    /// Equal points always produce the same value.
    pub fn combined_hash(&self) -> u64 {
        let x = canonical_bits(self.x);
        let y = canonical_bits(self.y);
        let mut h = x.wrapping_mul(MIX_SEED).rotate_left(31);
        h ^= y.wrapping_add(MIX_SEED).wrapping_add(h << 6).wrapping_add(h >> 2);
        // Final avalanche (splitmix64 finalizer)
        h = (h ^ (h >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h = (h ^ (h >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^ (h >> 31)
    }
}

/// Bit pattern of `v` with both zeroes folded together.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN points are rejected as absent, so every stored point is reflexive.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}

impl MapKey for Point {
    #[inline]
    fn is_absent(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
