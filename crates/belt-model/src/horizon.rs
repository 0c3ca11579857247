//! Event-horizon calculator: time until each object reaches its next
//! checkpoint or the segment end, at the current speed.
//!
//! # Algorithm
//!
//! Both the (filtered) object list and the (filtered) checkpoint list are
//! sorted ascending by position, so one forward merge pass with a single
//! monotonic checkpoint cursor covers every object: for each object, advance
//! the cursor past every checkpoint at or behind it, then the object's next
//! event is the first remaining checkpoint, or the segment end if none
//! remain.  The shared cursor is correct *only* because both lists are
//! sorted — this is not a per-object independent search.
//!
//! The result lets an external scheduler jump simulated time straight to the
//! earliest `eta` instead of ticking.

use belt_core::{CheckpointId, ObjectId, Pos};
use rustc_hash::FxHashSet;

use crate::model::ConveyorModel;

/// A point of interest on the belt axis: a stored checkpoint, or the
/// synthetic end of the segment.  `SegmentEnd` is a reserved sentinel — it
/// can never collide with a caller-supplied [`CheckpointId`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventPoint {
    Checkpoint(CheckpointId),
    SegmentEnd,
}

/// Optional restriction of a horizon query.  `None` selects everything, so
/// `EventFilter::ALL` queries the whole belt.
#[derive(Copy, Clone, Debug, Default)]
pub struct EventFilter<'a> {
    /// Only consider these objects (`None` = all objects on the belt).
    pub objects: Option<&'a [ObjectId]>,
    /// Only consider these checkpoints (`None` = the full registry).  The
    /// segment end is always in play.
    pub checkpoints: Option<&'a [CheckpointId]>,
}

impl EventFilter<'static> {
    pub const ALL: EventFilter<'static> = EventFilter { objects: None, checkpoints: None };
}

/// One computed event: `object` (carrying `payload`) reaches `point` after
/// `eta` units of simulated time at the current speed.
#[derive(Debug)]
pub struct HorizonEvent<'a, P> {
    pub object:  ObjectId,
    pub payload: &'a P,
    pub point:   EventPoint,
    pub eta:     f64,
}

impl<P> ConveyorModel<P> {
    /// Upcoming events for the selected objects, sorted ascending by `eta`
    /// (ties keep ascending object position — the sort is stable over the
    /// merge order).
    ///
    /// Returns an empty vec whenever the speed is 0: nothing is ever reached
    /// on a stopped belt.  With `skip_immediate` a checkpoint exactly at an
    /// object's position is passed over (and an object sitting exactly at
    /// the segment end yields no event at all); without it such an event is
    /// reported with `eta == 0`.
    ///
    /// Positions must be settled: in debug builds a query against positions
    /// outside `[0, length]` panics.
    pub fn next_events(
        &self,
        filter: EventFilter<'_>,
        skip_immediate: bool,
    ) -> Vec<HorizonEvent<'_, P>> {
        if self.speed() == 0.0 {
            return Vec::new();
        }

        let object_sel: Option<FxHashSet<ObjectId>> =
            filter.objects.map(|ids| ids.iter().copied().collect());
        let point_sel: Option<FxHashSet<CheckpointId>> =
            filter.checkpoints.map(|ids| ids.iter().copied().collect());
        let points: Vec<(CheckpointId, Pos)> = self
            .registry()
            .iter()
            .filter(|(id, _)| point_sel.as_ref().is_none_or(|sel| sel.contains(id)))
            .collect();
        let length = self.length();

        let mut cursor = 0;
        let mut events = Vec::new();
        for (id, pos) in self.store.iter() {
            if let Some(sel) = &object_sel
                && !sel.contains(&id)
            {
                continue;
            }
            debug_assert!(
                pos >= Pos::ZERO && pos <= length,
                "horizon query against unsettled object positions"
            );

            while cursor < points.len() && {
                let cp_pos = points[cursor].1;
                if skip_immediate { cp_pos <= pos } else { cp_pos < pos }
            } {
                cursor += 1;
            }

            let (point, target) = if let Some(&(cp, cp_pos)) = points.get(cursor) {
                (EventPoint::Checkpoint(cp), cp_pos)
            } else if !skip_immediate || pos < length {
                (EventPoint::SegmentEnd, length)
            } else {
                // Exactly at the end with nothing left to reach.
                continue;
            };

            events.push(HorizonEvent {
                object: id,
                payload: &self.objects[&id],
                point,
                eta: (target.to_f64() - pos.to_f64()) / self.speed(),
            });
        }

        events.sort_by(|a, b| a.eta.total_cmp(&b.eta));
        events
    }

    /// The events due *right now*: objects sitting exactly on a selected
    /// checkpoint or the segment end.  Equivalent to the `eta == 0` entries
    /// of `next_events(filter, false)`.
    pub fn immediate_events(&self, filter: EventFilter<'_>) -> Vec<HorizonEvent<'_, P>> {
        let mut events = self.next_events(filter, false);
        events.retain(|ev| ev.eta == 0.0);
        events
    }
}
