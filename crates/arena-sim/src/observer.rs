//! Session observer trait for presentation and data collection.

use arena_agent::Behavior;
use arena_camera::{CameraFrame, ViewMode};
use arena_core::{AgentId, PoiId, SimTime};
use arena_dialogue::{ChatMessage, Insight};

/// Callbacks invoked by a [`Session`][crate::Session] as state changes.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: chat printer
///
/// ```rust,ignore
/// struct ChatPrinter;
///
/// impl SessionObserver for ChatPrinter {
///     fn on_message(&mut self, msg: &ChatMessage) {
///         println!("[{}] {}: {}", msg.at, msg.agent_name, msg.text);
///     }
/// }
/// ```
pub trait SessionObserver {
    fn on_start(&mut self, _now: SimTime) {}

    fn on_stop(&mut self, _now: SimTime) {}

    /// An agent changed behavior, either from motion or from a command.
    fn on_behavior_change(&mut self, _agent: AgentId, _from: Behavior, _to: Behavior) {}

    fn on_message(&mut self, _message: &ChatMessage) {}

    fn on_insight(&mut self, _insight: &Insight) {}

    fn on_view_mode(&mut self, _mode: ViewMode) {}

    fn on_select(&mut self, _poi: Option<PoiId>) {}

    fn on_hover(&mut self, _poi: Option<PoiId>) {}

    /// Called once per frame with the composed camera output.
    fn on_frame(&mut self, _now: SimTime, _frame: &CameraFrame) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
