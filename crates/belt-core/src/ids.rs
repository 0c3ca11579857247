//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`: the
//! model never allocates IDs itself, the driving scheduler mints them.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of an object riding the belt.  Minted by the scheduler;
    /// unique per conveyor at any instant.
    pub struct ObjectId(u64);
}

typed_id! {
    /// Identity of a fixed checkpoint along the segment.  The synthetic
    /// end-of-segment point is *not* a `CheckpointId` — see
    /// `belt_model::EventPoint` — so caller-supplied IDs can never clash
    /// with it.
    pub struct CheckpointId(u32);
}

typed_id! {
    /// Identity of a conveyor model instance, carried in collision errors so
    /// a multi-conveyor scheduler can tell which segment failed.
    pub struct ModelId(u32);
}
