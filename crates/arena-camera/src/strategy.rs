//! The `CameraStrategy` trait and the built-in strategies.
//!
//! | Mode          | Strategy                        | Viewer input            |
//! |---------------|---------------------------------|-------------------------|
//! | Free          | `OrbitCamera::free()`           | orbit, distance 2..15   |
//! | Split-screen  | `SplitCamera`                   | orbit                   |
//! | AI-guided     | `AiGuidedCamera`                | ignored                 |
//! | Sync leader   | `OrbitCamera::sync_leader()`    | orbit                   |
//! | Overhead      | `OrbitCamera::overhead()`       | orbit, polar ≤ π/4      |
//! | Heatmap       | `OrbitCamera::heatmap()`        | orbit, distance 2..15   |

use std::f32::consts::FRAC_PI_4;

use arena_agent::Agent;
use arena_core::{AgentId, Vec3, geo::{approach, centroid}};

use crate::{CameraFrame, CameraPose, Layout, OrbitLimits, ViewMode};

const VIEWER_FOV: f32 = 50.0;
const WIDE_FOV: f32 = 60.0;

/// Per-frame inputs to [`CameraStrategy::compose`].
#[derive(Copy, Clone, Debug)]
pub struct CameraInput<'a> {
    /// Agent records after this frame's motion tick.
    pub agents: &'a [Agent],
    /// Agent shown in the secondary split-screen view.
    pub split_agent: Option<AgentId>,
    /// Wall-clock frame time, seconds.
    pub dt_secs: f32,
    pub width: u32,
    pub height: u32,
}

/// Camera behavior of one [`ViewMode`].
///
/// A strategy never stores per-frame state; the rig owns the viewer pose and
/// hands it to [`compose`](Self::compose) each frame.  Strategies that drive
/// the viewer themselves write the new pose back through that reference.
pub trait CameraStrategy: Send + Sync {
    fn mode(&self) -> ViewMode;

    /// Viewer pose applied on entering the mode.
    fn home(&self) -> CameraPose;

    /// Limits on externally driven orbiting, or `None` when the mode ignores
    /// external camera input.
    fn orbit_limits(&self) -> Option<OrbitLimits> {
        Some(OrbitLimits::UNCONSTRAINED)
    }

    /// Whether entering this mode designates a formation leader.
    fn designates_leader(&self) -> bool {
        false
    }

    fn compose(&self, input: &CameraInput<'_>, viewer: &mut CameraPose) -> CameraFrame;
}

// ── OrbitCamera ───────────────────────────────────────────────────────────────

/// A viewer under direct external control.  Composition reports the viewer
/// pose unchanged.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    mode:   ViewMode,
    home:   CameraPose,
    limits: OrbitLimits,
    leader: bool,
}

impl OrbitCamera {
    pub fn free() -> Self {
        Self {
            mode:   ViewMode::Free,
            home:   CameraPose::new(Vec3::new(4.0, 3.0, 4.0), Vec3::new(0.0, 0.5, 0.0), VIEWER_FOV),
            limits: OrbitLimits { min_distance: 2.0, max_distance: 15.0, ..OrbitLimits::UNCONSTRAINED },
            leader: false,
        }
    }

    /// Free-camera composition; the heat spheres are drawn by the renderer.
    pub fn heatmap() -> Self {
        Self { mode: ViewMode::Heatmap, ..Self::free() }
    }

    pub fn sync_leader() -> Self {
        Self {
            mode:   ViewMode::SyncLeader,
            home:   CameraPose::new(Vec3::new(0.0, 3.0, 6.0), Vec3::new(0.0, 0.5, 0.0), VIEWER_FOV),
            limits: OrbitLimits::UNCONSTRAINED,
            leader: true,
        }
    }

    pub fn overhead() -> Self {
        Self {
            mode:   ViewMode::Overhead,
            home:   CameraPose::new(Vec3::new(0.0, 8.0, 0.1), Vec3::ZERO, WIDE_FOV),
            limits: OrbitLimits { min_polar: 0.0, max_polar: FRAC_PI_4, ..OrbitLimits::UNCONSTRAINED },
            leader: false,
        }
    }
}

impl CameraStrategy for OrbitCamera {
    fn mode(&self) -> ViewMode {
        self.mode
    }

    fn home(&self) -> CameraPose {
        self.home
    }

    fn orbit_limits(&self) -> Option<OrbitLimits> {
        Some(self.limits)
    }

    fn designates_leader(&self) -> bool {
        self.leader
    }

    fn compose(&self, input: &CameraInput<'_>, viewer: &mut CameraPose) -> CameraFrame {
        CameraFrame {
            mode:      self.mode,
            primary:   *viewer,
            secondary: None,
            layout:    Layout::single(input.width, input.height),
        }
    }
}

// ── SplitCamera ───────────────────────────────────────────────────────────────

/// Viewer on the left half; the selected agent's eye on the right half.
///
/// With no (or an unknown) agent selected the viewer fills the viewport.
#[derive(Clone, Debug)]
pub struct SplitCamera {
    home: CameraPose,
}

impl Default for SplitCamera {
    fn default() -> Self {
        Self {
            home: CameraPose::new(Vec3::new(5.0, 4.0, 5.0), Vec3::new(0.0, 0.5, 0.0), VIEWER_FOV),
        }
    }
}

impl CameraStrategy for SplitCamera {
    fn mode(&self) -> ViewMode {
        ViewMode::SplitScreen
    }

    fn home(&self) -> CameraPose {
        self.home
    }

    fn compose(&self, input: &CameraInput<'_>, viewer: &mut CameraPose) -> CameraFrame {
        let agent = input
            .split_agent
            .and_then(|id| input.agents.get(id.index()));

        match agent {
            Some(agent) => CameraFrame {
                mode:      ViewMode::SplitScreen,
                primary:   *viewer,
                secondary: Some(CameraPose::new(agent.position, agent.look_at, WIDE_FOV)),
                layout:    Layout::side_by_side(input.width, input.height),
            },
            None => CameraFrame {
                mode:      ViewMode::SplitScreen,
                primary:   *viewer,
                secondary: None,
                layout:    Layout::single(input.width, input.height),
            },
        }
    }
}

// ── AiGuidedCamera ────────────────────────────────────────────────────────────

/// Computes the viewer pose from the agents' collective attention.
///
/// ```text
/// center = centroid(agent positions)
/// focus  = center.lerp(centroid(agent gaze targets), blend)
/// ideal  = center - normalize(focus - center) * standoff + (0, lift, 0)
/// ```
///
/// Each frame the look-at moves `1 - e^(-target_rate × dt)` of the way to
/// `focus` and the position `1 - e^(-position_rate × dt)` of the way to
/// `ideal`.  The fraction stays below 1 for any finite `dt`, so a long frame
/// closes most of the gap without landing on it.
#[derive(Clone, Debug)]
pub struct AiGuidedCamera {
    pub blend: f32,
    pub standoff: f32,
    pub lift: f32,
    pub target_rate: f32,
    pub position_rate: f32,
}

impl Default for AiGuidedCamera {
    fn default() -> Self {
        Self { blend: 0.6, standoff: 4.0, lift: 3.0, target_rate: 2.0, position_rate: 1.5 }
    }
}

impl AiGuidedCamera {
    /// The `(ideal position, focus)` pair for `agents`.
    pub fn ideal(&self, agents: &[Agent]) -> (Vec3, Vec3) {
        let center = centroid(agents.iter().map(|a| a.position));
        let gaze   = centroid(agents.iter().map(|a| a.look_at));
        let focus  = center.lerp(gaze, self.blend);
        let toward = (focus - center).normalize_or_zero();
        (center - toward * self.standoff + Vec3::new(0.0, self.lift, 0.0), focus)
    }
}

impl CameraStrategy for AiGuidedCamera {
    fn mode(&self) -> ViewMode {
        ViewMode::AiGuided
    }

    fn home(&self) -> CameraPose {
        CameraPose::new(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO, VIEWER_FOV)
    }

    fn orbit_limits(&self) -> Option<OrbitLimits> {
        None
    }

    fn compose(&self, input: &CameraInput<'_>, viewer: &mut CameraPose) -> CameraFrame {
        let dt = if input.dt_secs.is_finite() { input.dt_secs.max(0.0) } else { 0.0 };
        let (ideal, focus) = self.ideal(input.agents);
        viewer.look_at  = approach(viewer.look_at, focus, smoothing(self.target_rate, dt));
        viewer.position = approach(viewer.position, ideal, smoothing(self.position_rate, dt));
        CameraFrame {
            mode:      ViewMode::AiGuided,
            primary:   *viewer,
            secondary: None,
            layout:    Layout::single(input.width, input.height),
        }
    }
}

/// Frame-rate independent interpolation factor for an exponential approach.
#[inline]
fn smoothing(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}
