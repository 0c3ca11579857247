//! `CheckpointRegistry` — immutable sorted table of named belt positions.
//!
//! Built once at model construction and never modified afterwards.  Lookups
//! by position are binary searches over the sorted vec; lookups by id go
//! through a side map built at construction.

use belt_core::{CheckpointId, Pos};
use rustc_hash::FxHashMap;

use crate::{ModelError, ModelResult};

/// The checkpoint table of one conveyor segment.
///
/// Positions are stored on the fixed-point grid, strictly increasing, with
/// the first `≥ 0` and the last `< length`.  The synthetic end-of-segment
/// point (`position == length`) is never stored here — it is represented by
/// [`EventPoint::SegmentEnd`][crate::EventPoint].
#[derive(Debug, Clone)]
pub struct CheckpointRegistry {
    /// `(id, position)` sorted ascending by position.
    entries: Vec<(CheckpointId, Pos)>,
    /// Side index for `pos_of`.
    by_id: FxHashMap<CheckpointId, Pos>,
}

impl CheckpointRegistry {
    /// Build the registry from caller-supplied pairs, snapping each position
    /// to the grid and sorting.
    ///
    /// # Errors
    ///
    /// `ModelError::Geometry` if any position is negative, any position
    /// reaches `length`, two checkpoints share a grid position, or an id
    /// appears twice.  Construction failures are fatal — the geometry of a
    /// segment is wrong, not a runtime condition.
    pub fn new(
        checkpoints: impl IntoIterator<Item = (CheckpointId, f64)>,
        length: Pos,
    ) -> ModelResult<Self> {
        let mut entries: Vec<(CheckpointId, Pos)> = checkpoints
            .into_iter()
            .map(|(id, pos)| (id, Pos::from_f64(pos)))
            .collect();
        entries.sort_by_key(|&(_, pos)| pos);

        let mut by_id = FxHashMap::default();
        for window in entries.windows(2) {
            let (a, b) = (window[0], window[1]);
            if a.1 == b.1 {
                return Err(ModelError::Geometry(format!(
                    "checkpoints {} and {} share position {}",
                    a.0, b.0, a.1
                )));
            }
        }
        for &(id, pos) in &entries {
            if pos.is_negative() {
                return Err(ModelError::Geometry(format!(
                    "checkpoint {id} at negative position {pos}"
                )));
            }
            if pos >= length {
                return Err(ModelError::Geometry(format!(
                    "checkpoint {id} at position {pos} beyond segment length {length}"
                )));
            }
            if by_id.insert(id, pos).is_some() {
                return Err(ModelError::Geometry(format!("duplicate checkpoint id {id}")));
            }
        }

        Ok(Self { entries, by_id })
    }

    /// Stored position of `id`, or `None` for an unknown checkpoint.
    #[inline]
    pub fn pos_of(&self, id: CheckpointId) -> Option<Pos> {
        self.by_id.get(&id).copied()
    }

    /// The checkpoint with the smallest position `≥ pos`, or `None` when
    /// `pos` is past the last checkpoint (or the table is empty).
    pub fn next_after(&self, pos: Pos) -> Option<(CheckpointId, Pos)> {
        let idx = self.entries.partition_point(|&(_, p)| p < pos);
        self.entries.get(idx).copied()
    }

    /// Checkpoints in ascending-position order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CheckpointId, Pos)> + '_ {
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
