//! `arena-core`: foundational types for the design-review arena.
//!
//! Every other `arena-*` crate depends on this one.  It has no `arena-*`
//! dependencies and only a handful of external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `PoiId`, `MessageId`, `InsightId`              |
//! | [`geo`]     | `Vec3` re-export, clamped interpolation, centroids        |
//! | [`time`]    | `SimTime` (wall-clock milliseconds), `SimClock`           |
//! | [`speed`]   | `SimSpeed`: the discrete simulation-speed multiplier     |
//! | [`rng`]     | `RandomSource` trait, `SimRng`, `ScriptedRng`             |
//! | [`config`]  | `ArenaConfig`: every tunable constant of the session     |
//! | [`error`]   | `ArenaError`, `ArenaResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod speed;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use geo::Vec3;
pub use ids::{AgentId, InsightId, MessageId, PoiId};
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use speed::SimSpeed;
pub use time::{SimClock, SimTime};
