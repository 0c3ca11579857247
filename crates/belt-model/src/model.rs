//! `ConveyorModel<P>` — the aggregate root and its mutation operations.

use belt_core::{CheckpointId, ModelId, ObjectId, Pos};
use rustc_hash::FxHashMap;

use crate::automaton::{Action, ModelState};
use crate::registry::CheckpointRegistry;
use crate::store::PositionStore;
use crate::{EventPoint, ModelError, ModelResult};

/// The state of one conveyor segment.
///
/// `P` is the caller's opaque payload type: the model owns each payload while
/// its object rides the belt, hands back references from queries, and returns
/// it by value on removal.  The model never inspects payload contents.
///
/// Every mutation validates first and either fully succeeds or leaves the
/// model unmodified; all mutations except a same-value `set_speed` and a
/// zero-length `skip_time` fire the automaton's `Change` action, which the
/// lifecycle table rejects while the belt is `Moving`.
pub struct ConveyorModel<P> {
    model_id: ModelId,
    length: Pos,
    max_speed: f64,
    speed: f64,
    registry: CheckpointRegistry,
    pub(crate) objects: FxHashMap<ObjectId, P>,
    pub(crate) store: PositionStore,
    state: ModelState,
    resume_time: f64,
    clean_ends: bool,
}

impl<P> ConveyorModel<P> {
    /// Build a segment with its static geometry.  The belt starts with speed
    /// 0, no objects, state `Pristine`.
    ///
    /// # Errors
    ///
    /// `ModelError::Geometry` for a non-positive (or non-finite) length or
    /// max speed, and for every checkpoint defect
    /// (see [`CheckpointRegistry::new`]).
    pub fn new(
        length: f64,
        max_speed: f64,
        checkpoints: impl IntoIterator<Item = (CheckpointId, f64)>,
        model_id: ModelId,
    ) -> ModelResult<Self> {
        if !(length > 0.0) || !length.is_finite() {
            return Err(ModelError::Geometry(format!("segment length {length} must be > 0")));
        }
        if !(max_speed > 0.0) || !max_speed.is_finite() {
            return Err(ModelError::Geometry(format!("max speed {max_speed} must be > 0")));
        }
        let length = Pos::from_f64(length);
        let registry = CheckpointRegistry::new(checkpoints, length)?;

        Ok(Self {
            model_id,
            length,
            max_speed,
            speed: 0.0,
            registry,
            objects: FxHashMap::default(),
            store: PositionStore::new(),
            state: ModelState::Pristine,
            resume_time: 0.0,
            clean_ends: true,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Fire `action` against the automaton, committing the new state.
    fn transition(&mut self, action: Action) -> ModelResult<()> {
        self.state = self.target_of(action)?;
        Ok(())
    }

    /// The state `action` would reach, without committing — used by mutations
    /// that must validate everything before touching the stores.
    fn target_of(&self, action: Action) -> ModelResult<ModelState> {
        self.state
            .apply(action)
            .ok_or(ModelError::IllegalAction { action, state: self.state })
    }

    /// Motion begins conceptually at simulated time `t`.  No position is
    /// touched until the matching [`pause`][Self::pause].
    pub fn resume(&mut self, t: f64) -> ModelResult<()> {
        self.transition(Action::Resume)?;
        self.resume_time = t;
        Ok(())
    }

    /// Stop conceptual motion at simulated time `t` and materialize the
    /// positions objects reached while `Moving`.  Returns the applied
    /// displacement.
    ///
    /// A pause with elapsed motion ends in `Dirty` (the internal time skip
    /// fires `Change`); a zero-elapsed pause ends in `Pristine`.
    ///
    /// # Errors
    ///
    /// `IllegalAction` unless the belt is `Moving`; `PauseBeforeResume` if
    /// `t` precedes the recorded resume time.
    pub fn pause(&mut self, t: f64) -> ModelResult<f64> {
        self.transition(Action::Pause)?;
        let elapsed = t - self.resume_time;
        if elapsed < 0.0 {
            return Err(ModelError::PauseBeforeResume {
                resume_time: self.resume_time,
                pause_time:  t,
            });
        }
        self.skip_time(elapsed)
    }

    /// Mark the start of an external reconciliation pass.  Advisory only —
    /// nothing blocks; entering twice is rejected by the automaton.
    pub fn start_resolving(&mut self) -> ModelResult<()> {
        self.transition(Action::StartResolving)
    }

    /// Mark the end of an external reconciliation pass.
    pub fn end_resolving(&mut self) -> ModelResult<()> {
        self.transition(Action::EndResolving)
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Change the belt speed.  A same-value call is a silent no-op and does
    /// not fire `Change`.
    pub fn set_speed(&mut self, speed: f64) -> ModelResult<()> {
        if !(speed >= 0.0 && speed <= self.max_speed) {
            return Err(ModelError::SpeedOutOfRange { speed, max_speed: self.max_speed });
        }
        if speed == self.speed {
            return Ok(());
        }
        self.transition(Action::Change)?;
        self.speed = speed;
        Ok(())
    }

    /// Place `id` with `payload` at `pos` (snapped to the grid).
    ///
    /// # Errors
    ///
    /// `DuplicateObject` if `id` is already on the belt, `IllegalAction` if
    /// mutations are currently illegal, `Collision` (recoverable) if the grid
    /// position is occupied.  On any failure the model is unmodified.
    pub fn put_object(&mut self, id: ObjectId, payload: P, pos: f64) -> ModelResult<()> {
        if self.objects.contains_key(&id) {
            return Err(ModelError::DuplicateObject(id));
        }
        let next = self.target_of(Action::Change)?;
        let pos = Pos::from_f64(pos);
        self.store.insert(id, pos).map_err(|occupant| ModelError::Collision {
            first:  id,
            second: occupant,
            pos,
            model:  self.model_id,
        })?;
        self.objects.insert(id, payload);
        self.state = next;
        Ok(())
    }

    /// Take `id` off the belt, returning its payload.
    ///
    /// An absent id is a caller bug (`ObjectNotFound`), not a silent no-op.
    pub fn remove_object(&mut self, id: ObjectId) -> ModelResult<P> {
        let next = self.target_of(Action::Change)?;
        self.store.remove(id).ok_or(ModelError::ObjectNotFound(id))?;
        let payload = self.objects.remove(&id).ok_or(ModelError::ObjectNotFound(id))?;
        self.state = next;
        Ok(payload)
    }

    /// Advance every object by `speed × t` (`t` may be negative).  Returns
    /// the applied displacement, snapped to the grid.
    ///
    /// `t == 0` returns `0.0` immediately without firing `Change`.  With the
    /// clean-ends policy on (the default), objects displaced below 0 or past
    /// the segment length are dropped from the belt, payloads included.
    pub fn skip_time(&mut self, t: f64) -> ModelResult<f64> {
        if t == 0.0 {
            return Ok(0.0);
        }
        let next = self.target_of(Action::Change)?;
        let delta = Pos::from_f64(self.speed * t);
        self.store.shift_all(delta);
        if self.clean_ends {
            for id in self.store.pop_while_below(Pos::ZERO) {
                self.objects.remove(&id);
            }
            for id in self.store.pop_while_above(self.length) {
                self.objects.remove(&id);
            }
        }
        self.state = next;
        Ok(delta.to_f64())
    }

    /// Toggle the clean-ends policy applied by [`skip_time`][Self::skip_time].
    pub fn set_clean_ends(&mut self, on: bool) {
        self.clean_ends = on;
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Payload and position of the object closest to `pos` (lower position
    /// wins an exact tie), or `None` on an empty belt.
    pub fn nearest_object(&self, pos: f64) -> Option<(&P, Pos)> {
        let (id, obj_pos) = self.store.nearest(Pos::from_f64(pos))?;
        Some((&self.objects[&id], obj_pos))
    }

    /// The checkpoint with the smallest position `≥ pos`, or `None` past the
    /// last one.
    #[inline]
    pub fn next_checkpoint(&self, pos: f64) -> Option<(CheckpointId, Pos)> {
        self.registry.next_after(Pos::from_f64(pos))
    }

    /// Resolve an event point to its axis position: the segment length for
    /// [`EventPoint::SegmentEnd`], the stored position for a checkpoint
    /// (`None` for an unknown id).
    pub fn checkpoint_pos(&self, point: EventPoint) -> Option<Pos> {
        match point {
            EventPoint::SegmentEnd => Some(self.length),
            EventPoint::Checkpoint(id) => self.registry.pos_of(id),
        }
    }

    /// Current position of `id`, or `None` if it is not on the belt.
    #[inline]
    pub fn position_of(&self, id: ObjectId) -> Option<Pos> {
        self.store.position_of(id)
    }

    /// Payload of `id`, or `None` if it is not on the belt.
    #[inline]
    pub fn payload(&self, id: ObjectId) -> Option<&P> {
        self.objects.get(&id)
    }

    /// Objects in ascending-position order, with their payloads.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, Pos, &P)> + '_ {
        self.store.iter().map(|(id, pos)| (id, pos, &self.objects[&id]))
    }

    /// `true` while the belt speed is non-zero.
    #[inline]
    pub fn working(&self) -> bool {
        self.speed > 0.0
    }

    #[inline]
    pub fn dirty(&self) -> bool {
        self.state == ModelState::Dirty
    }

    #[inline]
    pub fn resolving(&self) -> bool {
        self.state == ModelState::Resolving
    }

    #[inline]
    pub fn state(&self) -> ModelState {
        self.state
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    #[inline]
    pub fn length(&self) -> Pos {
        self.length
    }

    #[inline]
    pub fn model_id(&self) -> ModelId {
        self.model_id
    }

    #[inline]
    pub fn registry(&self) -> &CheckpointRegistry {
        &self.registry
    }

    /// Number of objects currently on the belt.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
