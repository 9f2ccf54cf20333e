//! The per-agent record and its behavior state.

use std::collections::BTreeMap;
use std::fmt;

use arena_core::{AgentId, PoiId, Vec3};

/// Behavior state machine of a review agent.
///
/// ```text
///            target changes                 distance ≤ threshold
///   IDLE ───────────────────▶ MOVING ───────────────────────────▶ INSPECTING
///                              ▲  ▲                                   │
///                              │  └──────── target changes ───────────┘
///                              │
///   any ── follow assigned ──▶ FOLLOWING ── follow released ──┘
/// ```
///
/// There is no terminal state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    #[default]
    Idle,
    Moving,
    Inspecting,
    Following,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Behavior::Idle       => "IDLE",
            Behavior::Moving     => "MOVING",
            Behavior::Inspecting => "INSPECTING",
            Behavior::Following  => "FOLLOWING",
        })
    }
}

/// One review agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    /// Stable external key, e.g. `"agent-alpha"`.
    pub key: String,
    pub name: String,
    /// Display color as a CSS hex string.
    pub color: String,

    pub position: Vec3,
    /// Current gaze target.
    pub look_at: Vec3,
    pub behavior: Behavior,
    /// POI the agent is heading to or inspecting.
    pub target_poi: Option<PoiId>,
    /// Accumulated inspection seconds per POI.
    pub dwell: BTreeMap<PoiId, f32>,
    /// Agent this one follows.  While set, the scheduler leaves it alone.
    pub following: Option<AgentId>,
    /// Names of agents currently following this one (display only).
    pub merged_with: Vec<String>,
}

impl Agent {
    #[inline]
    pub fn is_following(&self) -> bool {
        self.following.is_some()
    }

    /// Accumulated dwell at `poi`, zero if never inspected.
    #[inline]
    pub fn dwell_at(&self, poi: PoiId) -> f32 {
        self.dwell.get(&poi).copied().unwrap_or(0.0)
    }

    /// `"Alpha"` or `"Alpha + Beta, Gamma"` when others have merged in.
    pub fn display_name(&self) -> String {
        if self.merged_with.is_empty() {
            self.name.clone()
        } else {
            format!("{} + {}", self.name, self.merged_with.join(", "))
        }
    }
}
