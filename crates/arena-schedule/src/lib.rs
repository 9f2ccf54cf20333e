//! `arena-schedule`: timers as data.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<E>` (`BTreeMap<SimTime, VecDeque<…>>`)        |
//! | [`retarget`]    | `RetargetPolicy`: interval draw + next-POI selection     |
//!
//! # Timer model (summary)
//!
//! The arena has no ambient timer handles.  Every recurring or delayed action
//! is an entry `(fire_time, event)` in one `EventQueue`, drained by the
//! session's clock each frame:
//!
//! ```text
//! while let Some((at, event)) = queue.pop_due(now) {
//!     handle(event);           // may push follow-up events (re-arm)
//! }
//! ```
//!
//! Entries pushed on behalf of an agent carry that agent as their owner.
//! `cancel_owner(agent)` drops exactly that agent's pending timers;
//! `clear()` drops everything; stopping a simulation is one call.

pub mod event_queue;
pub mod retarget;


pub use event_queue::EventQueue;
pub use retarget::RetargetPolicy;
