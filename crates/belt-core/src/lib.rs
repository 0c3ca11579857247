//! `belt-core` — foundational types for the `beltsim` conveyor model.
//!
//! This crate is a dependency of every other `belt-*` crate.  It intentionally
//! has no `belt-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`ids`]  | `ObjectId`, `CheckpointId`, `ModelId`             |
//! | [`pos`]  | `Pos` — fixed-point position on the belt axis     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod pos;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CheckpointId, ModelId, ObjectId};
pub use pos::Pos;
