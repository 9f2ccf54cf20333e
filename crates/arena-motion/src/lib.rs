//! `arena-motion`: the movement and orientation controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`params`]     | `MotionParams`: rates, offsets, threshold               |
//! | [`formation`]  | `FormationAnchor`: V-formation slots behind a viewer    |
//! | [`controller`] | `MotionController`, `MotionIntent`, `BehaviorChange`     |
//!
//! # Tick model
//!
//! Every frame runs two phases:
//!
//! 1. **Intent phase** (read-only, optionally parallel): for each agent,
//!    resolve the desired pose from a snapshot of the store, interpolate
//!    toward it, and decide the next behavior and dwell increment.
//! 2. **Apply phase** (sequential, ascending `AgentId`): write each intent
//!    through the store's named operations.
//!
//! Because the intent phase only reads, a follower tracks the pose its
//! leader had at the start of the frame regardless of agent order.

pub mod controller;
pub mod formation;
pub mod params;


pub use controller::{BehaviorChange, MotionController, MotionIntent};
pub use formation::FormationAnchor;
pub use params::MotionParams;
