//! Fixed-point positions on the belt axis.
//!
//! # Design
//!
//! Positions are canonically stored as an integer count of 10⁻⁵ length units.
//! The original model rounded every computed float position to 5 decimal
//! digits so that collision and ordering comparisons were deterministic;
//! snapping to an integer grid achieves the same thing exactly, with no
//! platform-dependent float rounding left anywhere in the comparison path:
//!
//!   stored = round(position * 100_000)
//!
//! Speeds and simulated times stay `f64` — they are continuous caller-supplied
//! quantities — and every position computed from them is snapped back to the
//! grid immediately.  Grid arithmetic (`+`, `-`) is exact integer arithmetic,
//! so ordering and equality are O(1) and identical on every platform.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A position (or displacement) on the belt axis, in grid units of 10⁻⁵.
///
/// `Pos` is signed: displacements are negative when the belt runs backward,
/// and a position may transiently leave `[0, length]` during a time skip
/// before the clean-ends sweep removes the escaped object.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos(pub i64);

impl Pos {
    pub const ZERO: Pos = Pos(0);

    /// Grid units per 1.0 of belt length — 5 decimal digits of precision.
    pub const SCALE: i64 = 100_000;

    /// Snap a float position to the grid (nearest unit, ties away from zero).
    #[inline]
    pub fn from_f64(v: f64) -> Pos {
        Pos((v * Self::SCALE as f64).round() as i64)
    }

    /// The float projection of this grid position, for the API boundary and
    /// for time arithmetic (`eta = distance / speed`).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Absolute distance to `other`, in grid units.
    #[inline]
    pub fn distance_to(self, other: Pos) -> i64 {
        (self.0 - other.0).abs()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Pos {
    type Output = Pos;
    #[inline]
    fn add(self, rhs: Pos) -> Pos {
        Pos(self.0 + rhs.0)
    }
}

impl Sub for Pos {
    type Output = Pos;
    #[inline]
    fn sub(self, rhs: Pos) -> Pos {
        Pos(self.0 - rhs.0)
    }
}

impl Neg for Pos {
    type Output = Pos;
    #[inline]
    fn neg(self) -> Pos {
        Pos(-self.0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
