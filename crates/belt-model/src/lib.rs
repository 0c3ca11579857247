//! `belt-model` — the conveyor-segment state model.
//!
//! A conveyor is a 1-D line of fixed length with named checkpoints placed
//! along it.  Objects ride the belt and all move at the conveyor's current
//! speed.  The model gives an external event-driven scheduler exactly what it
//! needs to advance simulated time event-by-event instead of tick-by-tick:
//!
//! - place / remove objects, change the speed, skip time forward or backward;
//! - a lifecycle automaton that rejects mutations against stale positions
//!   (everything is illegal while the belt is conceptually `Moving`);
//! - an event-horizon query answering "how long until each object reaches
//!   its next checkpoint or the segment end at the current speed?".
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`automaton`] | `ModelState`, `Action` — the lifecycle transition table    |
//! | [`registry`]  | `CheckpointRegistry` — immutable sorted checkpoint table   |
//! | [`store`]     | `PositionStore` — ordered object positions + identity index|
//! | [`model`]     | `ConveyorModel<P>` — the aggregate root and its mutations  |
//! | [`horizon`]   | `EventPoint`, `EventFilter`, `HorizonEvent`, horizon query |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                             |
//!
//! # Determinism
//!
//! All positions live on a fixed-point grid ([`belt_core::Pos`], 10⁻⁵ units),
//! so collision detection, ordering, and tie-breaks are exact integer
//! comparisons — identical on every platform.  The model is single-threaded
//! and synchronous: every call runs to completion, all time is simulated and
//! supplied by the caller.

pub mod automaton;
pub mod error;
pub mod horizon;
pub mod model;
pub mod registry;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use automaton::{Action, ModelState};
pub use error::{ModelError, ModelResult};
pub use horizon::{EventFilter, EventPoint, HorizonEvent};
pub use model::ConveyorModel;
pub use registry::CheckpointRegistry;
pub use store::PositionStore;
