//! `PositionStore` — object positions kept sorted along the belt axis.
//!
//! # Layout
//!
//! A sorted `Vec<(ObjectId, Pos)>` carries the axis order; a side
//! `FxHashMap<ObjectId, Pos>` gives O(1) identity lookup.  Removal uses the
//! index to recover the position and a binary search to find the vec slot —
//! no linear scan by identity anywhere.  The vec shift on insert/remove is an
//! O(n) memmove, which is fine at conveyor scale (tens of objects).
//!
//! Positions are unique: placement rejects an exact grid collision, and a
//! uniform shift cannot create one.

use belt_core::{ObjectId, Pos};
use rustc_hash::FxHashMap;

/// Ordered positions of every object currently on one conveyor.
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    /// `(id, position)` sorted ascending by position.
    entries: Vec<(ObjectId, Pos)>,
    /// Identity index; always mirrors `entries`.
    index: FxHashMap<ObjectId, Pos>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id` at `pos`, keeping the axis order.
    ///
    /// On an exact grid collision the store is untouched and the occupant's
    /// id is returned as the error.
    pub fn insert(&mut self, id: ObjectId, pos: Pos) -> Result<(), ObjectId> {
        let idx = self.entries.partition_point(|&(_, p)| p < pos);
        if let Some(&(occupant, occ_pos)) = self.entries.get(idx)
            && occ_pos == pos
        {
            return Err(occupant);
        }
        self.entries.insert(idx, (id, pos));
        self.index.insert(id, pos);
        Ok(())
    }

    /// Remove `id`, returning the position it occupied, or `None` if absent.
    pub fn remove(&mut self, id: ObjectId) -> Option<Pos> {
        let pos = self.index.remove(&id)?;
        let idx = self.entries.partition_point(|&(_, p)| p < pos);
        debug_assert_eq!(self.entries[idx].0, id);
        self.entries.remove(idx);
        Some(pos)
    }

    /// Current position of `id`, O(1).
    #[inline]
    pub fn position_of(&self, id: ObjectId) -> Option<Pos> {
        self.index.get(&id).copied()
    }

    /// The object whose position is closest to `pos`.  On an exact distance
    /// tie the lower-position neighbor wins, so the answer is deterministic.
    pub fn nearest(&self, pos: Pos) -> Option<(ObjectId, Pos)> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self.entries.partition_point(|&(_, p)| p < pos);
        match (idx.checked_sub(1).map(|i| self.entries[i]), self.entries.get(idx).copied()) {
            (Some(below), Some(above)) => {
                if below.1.distance_to(pos) <= above.1.distance_to(pos) {
                    Some(below)
                } else {
                    Some(above)
                }
            }
            (Some(below), None) => Some(below),
            (None, above) => above,
        }
    }

    /// Shift every position by `delta`.  Exact grid arithmetic; the axis
    /// order and position uniqueness are preserved.
    pub fn shift_all(&mut self, delta: Pos) {
        for (_, pos) in &mut self.entries {
            *pos = *pos + delta;
        }
        for pos in self.index.values_mut() {
            *pos = *pos + delta;
        }
    }

    /// Remove and return the ids of all objects strictly below `bound`
    /// (they form a prefix of the sorted vec).
    pub fn pop_while_below(&mut self, bound: Pos) -> Vec<ObjectId> {
        let cut = self.entries.partition_point(|&(_, p)| p < bound);
        let removed: Vec<ObjectId> = self.entries.drain(..cut).map(|(id, _)| id).collect();
        for id in &removed {
            self.index.remove(id);
        }
        removed
    }

    /// Remove and return the ids of all objects strictly above `bound`
    /// (they form a suffix of the sorted vec).
    pub fn pop_while_above(&mut self, bound: Pos) -> Vec<ObjectId> {
        let cut = self.entries.partition_point(|&(_, p)| p <= bound);
        let removed: Vec<ObjectId> = self.entries.drain(cut..).map(|(id, _)| id).collect();
        for id in &removed {
            self.index.remove(id);
        }
        removed
    }

    /// Entries in ascending-position order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, Pos)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
