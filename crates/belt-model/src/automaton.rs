//! Lifecycle automaton gating which mutations are currently legal.
//!
//! # Why this exists
//!
//! While the belt is conceptually `Moving`, object positions are *not*
//! re-materialized in the store — they are stale.  Every mutating operation
//! fires [`Action::Change`], which is illegal in `Moving`, so a caller must
//! `pause` (which first materializes the elapsed motion via a time skip)
//! before touching anything.  `Dirty` marks "state changed since the last
//! reconciliation by an external consumer"; `StartResolving`/`EndResolving`
//! bracket that reconciliation as a cooperative advisory lock recorded in the
//! state — misuse is rejected by the table, nothing blocks.
//!
//! The transition table, exactly:
//!
//! | State     | Resume | Pause    | Change    | StartResolving | EndResolving |
//! |-----------|--------|----------|-----------|----------------|--------------|
//! | Pristine  | Moving | —        | Dirty     | —              | —            |
//! | Moving    | —      | Pristine | —         | —              | —            |
//! | Dirty     | —      | —        | Dirty     | Resolving      | —            |
//! | Resolving | —      | —        | Resolving | —              | Resolved     |
//! | Resolved  | Moving | —        | —         | —              | —            |
//!
//! [`ModelState::apply`] returns `None` for every unlisted pair; the model
//! wraps that into [`ModelError::IllegalAction`][crate::ModelError].

use std::fmt;

/// Lifecycle state of a conveyor model.  Initial state: `Pristine`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelState {
    /// Settled positions, nothing changed since the last reconciliation.
    #[default]
    Pristine,
    /// Positions are conceptually advancing and stale in the store.
    Moving,
    /// Settled positions, but changed since the last reconciliation.
    Dirty,
    /// An external consumer is currently reconciling the dirty state.
    Resolving,
    /// Reconciliation finished; the belt may resume.
    Resolved,
}

/// An action fired against the lifecycle automaton.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Resume,
    Pause,
    Change,
    StartResolving,
    EndResolving,
}

impl ModelState {
    /// The state reached by firing `action`, or `None` if the pair is not in
    /// the transition table (a protocol violation).
    pub fn apply(self, action: Action) -> Option<ModelState> {
        use Action::*;
        use ModelState::*;
        match (self, action) {
            (Pristine, Resume) => Some(Moving),
            (Pristine, Change) => Some(Dirty),
            (Moving, Pause) => Some(Pristine),
            (Dirty, Change) => Some(Dirty),
            (Dirty, StartResolving) => Some(Resolving),
            (Resolving, Change) => Some(Resolving),
            (Resolving, EndResolving) => Some(Resolved),
            (Resolved, Resume) => Some(Moving),
            _ => None,
        }
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelState::Pristine => "pristine",
            ModelState::Moving => "moving",
            ModelState::Dirty => "dirty",
            ModelState::Resolving => "resolving",
            ModelState::Resolved => "resolved",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Resume => "resume",
            Action::Pause => "pause",
            Action::Change => "change",
            Action::StartResolving => "start_resolving",
            Action::EndResolving => "end_resolving",
        };
        f.write_str(name)
    }
}
