//! `arena-agent`: the Agent Record Store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`agent`]   | `Agent` record, `Behavior` state enum                    |
//! | [`store`]   | `AgentStore`: the only owner of mutable agent state     |
//! | [`builder`] | `AgentSpec`, `AgentStoreBuilder`                         |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                           |
//!
//! # Mutation discipline
//!
//! `Agent` fields are public for reading, but the store hands out only
//! shared references.  Every write goes through a named `AgentStore`
//! operation (`set_target`, `update_position`, `add_dwell`, …), each of which
//! is a single atomic replacement of the affected fields.  Unknown ids are
//! silently ignored.

pub mod agent;
pub mod builder;
pub mod error;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Behavior};
pub use builder::{AgentSpec, AgentStoreBuilder};
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
