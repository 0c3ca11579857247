//! Model error type.
//!
//! Two classes of failure share one enum:
//!
//! - [`ModelError::Collision`] is **recoverable**: placement hit an occupied
//!   grid position, the model is untouched, and the caller may retry at a
//!   different position.
//! - Every other variant signals a bug in the driving scheduler (illegal
//!   lifecycle action, pausing before the recorded resume time, unknown
//!   object id, out-of-range speed, malformed geometry).  Callers should
//!   treat those as unrecoverable for the current simulation run.
//!
//! [`ModelError::is_recoverable`] lets the scheduler branch without matching
//! every variant.

use belt_core::{ModelId, ObjectId, Pos};
use thiserror::Error;

use crate::automaton::{Action, ModelState};

/// Errors produced by `belt-model`.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Placement landed on an already-occupied grid position.  `first` is the
    /// object being placed, `second` the occupant; the model is unmodified.
    #[error("[{model}] objects {first} and {second} collided at position {pos}")]
    Collision {
        first:  ObjectId,
        second: ObjectId,
        pos:    Pos,
        model:  ModelId,
    },

    #[error("illegal action `{action}` in state `{state}`")]
    IllegalAction { action: Action, state: ModelState },

    #[error("pause at t={pause_time} precedes resume at t={resume_time}")]
    PauseBeforeResume { resume_time: f64, pause_time: f64 },

    #[error("object {0} is already on the conveyor")]
    DuplicateObject(ObjectId),

    #[error("object {0} is not on the conveyor")]
    ObjectNotFound(ObjectId),

    #[error("speed {speed} outside [0, {max_speed}]")]
    SpeedOutOfRange { speed: f64, max_speed: f64 },

    #[error("invalid conveyor geometry: {0}")]
    Geometry(String),
}

impl ModelError {
    /// `true` only for [`ModelError::Collision`] — the one failure a caller
    /// may sensibly handle and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ModelError::Collision { .. })
    }
}

/// Shorthand result type for all model operations.
pub type ModelResult<T> = Result<T, ModelError>;
