//! Session configuration.
//!
//! `ArenaConfig::default()` reproduces the reference tuning of the review
//! arena.  Applications may load a modified copy from JSON/TOML (with the
//! `serde` feature) and must pass it through [`ArenaConfig::validate`].

use glam::Vec3;

use crate::{ArenaError, ArenaResult, SimSpeed};

/// Every tunable constant of the arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// RNG seed.  `None` draws from OS entropy (choices differ per run).
    pub seed: Option<u64>,

    /// Initial simulation speed.
    pub speed: SimSpeed,

    // ── Behavior scheduler ───────────────────────────────────────────────
    /// Lower bound of the randomized retarget interval at 1x, milliseconds.
    pub retarget_min_ms: u64,
    /// Upper bound (exclusive) of the retarget interval at 1x, milliseconds.
    pub retarget_max_ms: u64,
    /// Probability of staying within the current POI group.
    pub group_affinity: f64,

    // ── Dialogue ─────────────────────────────────────────────────────────
    /// Dialogue poll period.  Wall-clock; not scaled by speed.
    pub dialogue_poll_ms: u64,
    /// Lower bound of the per-agent dialogue cooldown at 1x, milliseconds.
    pub cooldown_min_ms: u64,
    /// Upper bound (exclusive) of the cooldown at 1x, milliseconds.
    pub cooldown_max_ms: u64,
    /// Delay between a flagged message and its insight extraction at 1x.
    pub insight_delay_ms: u64,

    // ── Movement ─────────────────────────────────────────────────────────
    /// Distance at or below which a moving agent counts as arrived.
    pub arrival_threshold: f32,
    /// Position interpolation rate (per second, per unit speed).
    pub move_rate: f32,
    /// Gaze interpolation rate (per second, per unit speed).
    pub gaze_rate: f32,
    /// Offset from a POI to the agent's inspection standpoint.
    pub poi_standoff: Vec3,
    /// Offset from a followed agent to its follower.
    pub follow_offset: Vec3,
    /// Lateral spacing per formation rank pair.
    pub formation_lateral: f32,
    /// Depth behind the viewer of the first formation rank.
    pub formation_depth: f32,
    /// Additional depth per formation rank pair.
    pub formation_depth_step: f32,

    // ── Heatmap ──────────────────────────────────────────────────────────
    /// Aggregate dwell below which a POI is not rendered, seconds.
    pub heat_threshold_secs: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed:                 None,
            speed:                SimSpeed::Normal,
            retarget_min_ms:      5_000,
            retarget_max_ms:      15_000,
            group_affinity:       0.7,
            dialogue_poll_ms:     500,
            cooldown_min_ms:      3_000,
            cooldown_max_ms:      7_000,
            insight_delay_ms:     1_000,
            arrival_threshold:    0.05,
            move_rate:            2.0,
            gaze_rate:            3.0,
            poi_standoff:         Vec3::new(0.0, 1.2, 1.5),
            follow_offset:        Vec3::new(-0.5, 0.0, 0.5),
            formation_lateral:    1.5,
            formation_depth:      2.0,
            formation_depth_step: 1.0,
            heat_threshold_secs:  0.1,
        }
    }
}

impl ArenaConfig {
    /// Check every range constraint.  Returns the first violation found.
    pub fn validate(&self) -> ArenaResult<()> {
        if self.retarget_min_ms > self.retarget_max_ms {
            return Err(ArenaError::Config(format!(
                "retarget interval min {} ms exceeds max {} ms",
                self.retarget_min_ms, self.retarget_max_ms
            )));
        }
        if self.cooldown_min_ms > self.cooldown_max_ms {
            return Err(ArenaError::Config(format!(
                "cooldown min {} ms exceeds max {} ms",
                self.cooldown_min_ms, self.cooldown_max_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.group_affinity) {
            return Err(ArenaError::Config(format!(
                "group affinity {} is outside [0, 1]",
                self.group_affinity
            )));
        }
        if self.dialogue_poll_ms == 0 {
            return Err(ArenaError::Config("dialogue poll period must be non-zero".into()));
        }
        if !(self.move_rate > 0.0 && self.gaze_rate > 0.0) {
            return Err(ArenaError::Config("movement and gaze rates must be positive".into()));
        }
        if !(self.arrival_threshold >= 0.0) {
            return Err(ArenaError::Config("arrival threshold must be non-negative".into()));
        }
        Ok(())
    }
}
