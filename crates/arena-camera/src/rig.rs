//! `CameraRig`: the active view mode, the viewer pose, and the dispatch
//! table that maps each mode to its strategy.

use tracing::info;

use arena_agent::Agent;
use arena_core::{AgentId, Vec3};

use crate::strategy::{AiGuidedCamera, OrbitCamera, SplitCamera};
use crate::{CameraFrame, CameraInput, CameraPose, CameraStrategy, ViewMode};

const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 720;

pub struct CameraRig {
    /// Indexed by `ViewMode::index()`.
    strategies: [Box<dyn CameraStrategy>; 6],
    mode: ViewMode,
    /// The primary viewer's pose, shared with formation and renderers.
    viewer: CameraPose,
    leader: bool,
    width: u32,
    height: u32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    /// A rig in free mode at the free camera's home pose.
    pub fn new() -> Self {
        let free = OrbitCamera::free();
        let viewer = free.home();
        Self {
            strategies: [
                Box::new(free),
                Box::new(SplitCamera::default()),
                Box::new(AiGuidedCamera::default()),
                Box::new(OrbitCamera::sync_leader()),
                Box::new(OrbitCamera::overhead()),
                Box::new(OrbitCamera::heatmap()),
            ],
            mode: ViewMode::Free,
            viewer,
            leader: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Replace the strategy for `strategy.mode()`.  Takes effect on the next
    /// mode entry.
    pub fn with_strategy(mut self, strategy: Box<dyn CameraStrategy>) -> Self {
        let slot = strategy.mode().index();
        self.strategies[slot] = strategy;
        self
    }

    fn strategy(&self) -> &dyn CameraStrategy {
        self.strategies[self.mode.index()].as_ref()
    }

    // ── State ─────────────────────────────────────────────────────────────

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn viewer(&self) -> CameraPose {
        self.viewer
    }

    /// `true` while a formation leader is designated.
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    /// `(eye, target)` of the viewer when agents should hold formation
    /// behind it.
    pub fn formation_anchor(&self) -> Option<(Vec3, Vec3)> {
        (self.mode == ViewMode::SyncLeader && self.leader)
            .then_some((self.viewer.position, self.viewer.look_at))
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Switch modes.  Entering a mode resets the viewer to its home pose and
    /// sets the leader designation to whether the new mode designates one.
    /// Returns `false` if `mode` was already active.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.mode {
            return false;
        }
        let from = self.mode;
        self.mode = mode;
        let strategy = self.strategy();
        let (home, leader) = (strategy.home(), strategy.designates_leader());
        self.viewer = home;
        self.leader = leader;
        info!(%from, to = %mode, leader, "view mode changed");
        true
    }

    /// Apply externally driven camera motion, clamped to the mode's orbit
    /// limits.  Returns `false` when the active mode ignores external input.
    pub fn orbit(&mut self, position: Vec3, look_at: Vec3) -> bool {
        let Some(limits) = self.strategy().orbit_limits() else {
            return false;
        };
        self.viewer.position = limits.clamp(position, look_at);
        self.viewer.look_at = look_at;
        true
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    // ── Per-frame ─────────────────────────────────────────────────────────

    /// Compose this frame's camera output from post-motion agent records.
    pub fn compose(&mut self, agents: &[Agent], split_agent: Option<AgentId>, dt_secs: f32) -> CameraFrame {
        let input = CameraInput {
            agents,
            split_agent,
            dt_secs,
            width: self.width,
            height: self.height,
        };
        let strategy = &self.strategies[self.mode.index()];
        strategy.compose(&input, &mut self.viewer)
    }
}
