//! `arena-sim`: the review session orchestrator.
//!
//! # Frame loop
//!
//! ```text
//! Session::frame(dt):
//!   ① Clock  : advance wall-clock time by dt.
//!   ② Events : pop every due event from the EventQueue, in time order:
//!                 Retarget(agent)     → pick next POI, set target, re-arm
//!                 DialoguePoll        → generate lines, record messages,
//!                                       queue insight extraction, re-arm
//!                 ExtractInsight(msg) → classify, record insight
//!   ③ Motion : intent/apply tick for every agent (formation behind the
//!               viewer while the leader mode is active).
//!   ④ Camera : compose the frame from the post-motion agent records.
//! ```
//!
//! Stopping clears the event queue, so nothing fires after `stop()`.
//! Motion and camera keep running every frame regardless.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arena_sim::SessionBuilder;
//!
//! let mut session = SessionBuilder::synthesizer()?.build()?;
//! session.start();
//! for _ in 0..600 {
//!     session.frame(1.0 / 60.0);
//! }
//! println!("{:?}", session.summary());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod session;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::{SessionBuilder, synthesizer_agents};
pub use error::{SessionError, SessionResult};
pub use observer::{NoopObserver, SessionObserver};
pub use session::{Session, SessionEvent};
pub use summary::{MeetingSummary, MinuteActivity};
