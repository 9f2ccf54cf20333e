//! The `Session` struct, its frame loop, and its commands.

use tracing::{debug, info, trace};

use arena_agent::{Agent, AgentStore, Behavior};
use arena_camera::{CameraFrame, CameraRig, HeatCell, ViewMode, heat_cells};
use arena_core::{AgentId, ArenaConfig, InsightId, MessageId, PoiId, RandomSource, SimClock, SimSpeed, SimTime, Vec3};
use arena_dialogue::{DialogueBook, DialogueGenerator, InsightExtractor, InsightPatch, Transcript};
use arena_motion::{FormationAnchor, MotionController};
use arena_scene::Scene;
use arena_schedule::{EventQueue, RetargetPolicy};

use crate::{MeetingSummary, SessionObserver};

/// A pending timer in the session's event queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The agent's scheduler timer: pick its next POI.
    Retarget(AgentId),
    /// The fixed-period dialogue poll.
    DialoguePoll,
    /// Delayed insight extraction for an insight-bearing message.
    ExtractInsight(MessageId),
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One design-review session.
///
/// `Session<R, O>` owns every piece of mutable state: the agent store, the
/// transcript, the camera rig, the event queue and the clock.  `R` supplies
/// every random choice; `O` receives change notifications.
///
/// The host calls [`frame`](Self::frame) once per rendered frame and issues
/// commands (`start`, `set_speed`, `set_view_mode`, …) between frames.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<R: RandomSource, O: SessionObserver> {
    pub(crate) config:      ArenaConfig,
    pub(crate) scene:       Scene,
    pub(crate) agents:      AgentStore,
    pub(crate) book:        DialogueBook,
    pub(crate) extractor:   InsightExtractor,
    pub(crate) transcript:  Transcript,
    pub(crate) generator:   DialogueGenerator,
    pub(crate) retarget:    RetargetPolicy,
    pub(crate) motion:      MotionController,
    pub(crate) camera:      CameraRig,
    pub(crate) queue:       EventQueue<SessionEvent>,
    pub(crate) clock:       SimClock,
    pub(crate) rng:         R,
    pub(crate) observer:    O,
    pub(crate) speed:       SimSpeed,
    pub(crate) running:     bool,
    pub(crate) split_agent: Option<AgentId>,
    pub(crate) selected:    Option<PoiId>,
    pub(crate) hovered:     Option<PoiId>,
}

impl<R: RandomSource, O: SessionObserver> Session<R, O> {
    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance the session by `dt_secs` of wall-clock time.
    ///
    /// Fires every timer due by the new time, then moves agents, then
    /// composes the camera from the moved agents.
    pub fn frame(&mut self, dt_secs: f32) -> CameraFrame {
        self.clock.advance(dt_secs);
        let now = self.clock.now();

        while let Some((at, event)) = self.queue.pop_due(now) {
            trace!(%at, ?event, "event fired");
            self.handle(at, event);
        }

        let formation = self
            .camera
            .formation_anchor()
            .map(|(eye, target)| FormationAnchor::new(eye, target));
        let changes = self.motion.tick(
            &mut self.agents,
            &self.scene.registry,
            formation.as_ref(),
            dt_secs,
            self.speed,
        );
        for c in changes {
            self.observer.on_behavior_change(c.agent, c.from, c.to);
        }

        let frame = self.camera.compose(self.agents.agents(), self.split_agent, dt_secs);
        self.observer.on_frame(now, &frame);
        frame
    }

    fn handle(&mut self, at: SimTime, event: SessionEvent) {
        match event {
            SessionEvent::Retarget(agent) => self.retarget_agent(at, agent),
            SessionEvent::DialoguePoll => self.poll_dialogue(at),
            SessionEvent::ExtractInsight(message) => self.extract_insight(at, message),
        }
    }

    fn retarget_agent(&mut self, at: SimTime, agent: AgentId) {
        let Some(a) = self.agents.get(agent) else {
            return;
        };
        if a.is_following() {
            return;
        }
        let (from, current) = (a.behavior, a.target_poi);
        if let Some(next) = self.retarget.next_target(current, &self.scene, &mut self.rng) {
            self.agents.set_target(agent, next);
            if from != Behavior::Moving {
                self.observer.on_behavior_change(agent, from, Behavior::Moving);
            }
        }
        self.arm_retarget(at, agent);
    }

    fn poll_dialogue(&mut self, at: SimTime) {
        let utterances =
            self.generator
                .poll(at, self.agents.agents(), &self.book, self.speed, &mut self.rng);

        for u in utterances {
            let (Some(agent), Some(line)) = (self.agents.get(u.agent), self.book.line(u.poi, u.line))
            else {
                continue;
            };
            let message = self.transcript.record_message(at, agent, u.poi, line);
            self.observer.on_message(message);
            if message.insight_bearing {
                let due = at + self.speed.scale_ms(self.config.insight_delay_ms as f64);
                self.queue.push(due, SessionEvent::ExtractInsight(message.id));
            }
        }

        self.queue.push(at + self.config.dialogue_poll_ms, SessionEvent::DialoguePoll);
    }

    fn extract_insight(&mut self, at: SimTime, id: MessageId) {
        let Some(message) = self.transcript.message(id) else {
            return;
        };
        let poi_key = self.scene.registry.key(message.poi);
        let agent_key = self.agents.get(message.agent).map_or("?", |a| a.key.as_str());
        let Some(draft) = self.extractor.extract(message, poi_key, agent_key) else {
            debug!(message = %id, "no insight rule matched");
            return;
        };
        let insight = self.transcript.record_insight(at, draft);
        if let Some(i) = self.transcript.insight(insight) {
            self.observer.on_insight(i);
        }
    }

    fn arm_retarget(&mut self, from: SimTime, agent: AgentId) {
        let due = from + self.retarget.next_interval(self.speed, &mut self.rng);
        self.queue.push_for(due, agent, SessionEvent::Retarget(agent));
    }

    fn arm_all_retargets(&mut self, from: SimTime) {
        let free: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|a| !a.is_following())
            .map(|a| a.id)
            .collect();
        for agent in free {
            self.arm_retarget(from, agent);
        }
    }

    // ── Lifecycle commands ────────────────────────────────────────────────

    /// Start (or restart) the simulation.  Clears dialogue usage and
    /// cooldowns and arms the scheduler and dialogue timers.  Returns `false`
    /// if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        let now = self.clock.now();
        self.running = true;
        self.generator.reset();
        self.arm_all_retargets(now);
        self.queue.push(now + self.config.dialogue_poll_ms, SessionEvent::DialoguePoll);
        info!(%now, speed = %self.speed, agents = self.agents.len(), "simulation started");
        self.observer.on_start(now);
        true
    }

    /// Stop the simulation, cancelling every pending timer.  Agents keep
    /// their current targets.  Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let now = self.clock.now();
        self.running = false;
        let dropped = self.queue.len();
        self.queue.clear();
        info!(%now, dropped, "simulation stopped");
        self.observer.on_stop(now);
        true
    }

    /// Change the simulation speed.  While running, scheduler timers are
    /// re-armed with intervals drawn at the new speed.
    pub fn set_speed(&mut self, speed: SimSpeed) {
        if speed == self.speed {
            return;
        }
        info!(from = %self.speed, to = %speed, "speed changed");
        self.speed = speed;
        if self.running {
            self.queue.cancel_where(|e| matches!(e, SessionEvent::Retarget(_)));
            self.arm_all_retargets(self.clock.now());
        }
    }

    // ── Agent commands ────────────────────────────────────────────────────

    /// Send `agent` to `poi`.  No-op (returns `false`) for an unknown agent
    /// or POI.
    pub fn set_agent_target(&mut self, agent: AgentId, poi: PoiId) -> bool {
        if self.scene.registry.get(poi).is_none() {
            return false;
        }
        let Some(from) = self.agents.get(agent).map(|a| a.behavior) else {
            return false;
        };
        self.agents.set_target(agent, poi);
        let to = self.agents.get(agent).map_or(from, |a| a.behavior);
        if to != from {
            self.observer.on_behavior_change(agent, from, to);
        }
        true
    }

    /// Make `follower` follow `leader`, or release it with `None`.
    ///
    /// Following cancels the follower's scheduler timer; release re-arms it
    /// while running.  Rejected relations return `false`.
    pub fn set_following(&mut self, follower: AgentId, leader: Option<AgentId>) -> bool {
        let Some(from) = self.agents.get(follower).map(|a| a.behavior) else {
            return false;
        };
        if !self.agents.set_following(follower, leader) {
            return false;
        }
        match leader {
            Some(_) => {
                self.queue.cancel_owner(follower);
            }
            None if self.running => {
                self.queue.cancel_owner(follower);
                self.arm_retarget(self.clock.now(), follower);
            }
            None => {}
        }
        let to = self.agents.get(follower).map_or(from, |a| a.behavior);
        if to != from {
            self.observer.on_behavior_change(follower, from, to);
        }
        true
    }

    // ── View commands ─────────────────────────────────────────────────────

    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if !self.camera.set_mode(mode) {
            return false;
        }
        self.observer.on_view_mode(mode);
        true
    }

    /// Externally driven viewer motion.  Ignored in AI-guided mode.
    pub fn orbit_viewer(&mut self, position: Vec3, look_at: Vec3) -> bool {
        self.camera.orbit(position, look_at)
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Choose the agent shown in the split-screen secondary view.
    pub fn select_split_agent(&mut self, agent: AgentId) -> bool {
        if self.agents.get(agent).is_none() {
            return false;
        }
        self.split_agent = Some(agent);
        true
    }

    pub fn select_component(&mut self, poi: Option<PoiId>) {
        self.selected = poi;
        self.observer.on_select(poi);
    }

    pub fn hover_component(&mut self, poi: Option<PoiId>) {
        self.hovered = poi;
        self.observer.on_hover(poi);
    }

    // ── Insight maintenance ───────────────────────────────────────────────

    pub fn update_insight(&mut self, id: InsightId, patch: InsightPatch) -> bool {
        self.transcript.update_insight(id, patch)
    }

    pub fn remove_insight(&mut self, id: InsightId) -> bool {
        self.transcript.remove_insight(id)
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn book(&self) -> &DialogueBook {
        &self.book
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn speed(&self) -> SimSpeed {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn split_agent(&self) -> Option<AgentId> {
        self.split_agent
    }

    pub fn selected_component(&self) -> Option<PoiId> {
        self.selected
    }

    pub fn hovered_component(&self) -> Option<PoiId> {
        self.hovered
    }

    /// Number of timers waiting to fire.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Pending timers in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (SimTime, &SessionEvent)> + '_ {
        self.queue.iter()
    }

    pub fn heat_cells(&self) -> Vec<HeatCell> {
        heat_cells(self.agents.agents(), &self.scene.registry, self.config.heat_threshold_secs)
    }

    pub fn summary(&self) -> MeetingSummary {
        MeetingSummary::compute(&self.transcript, self.agents.len())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
