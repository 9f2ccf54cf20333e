//! Motion tuning.

use arena_core::{ArenaConfig, Vec3};

/// The movement constants of [`ArenaConfig`], copied out for the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub arrival_threshold: f32,
    pub move_rate: f32,
    pub gaze_rate: f32,
    pub poi_standoff: Vec3,
    pub follow_offset: Vec3,
    pub formation_lateral: f32,
    pub formation_depth: f32,
    pub formation_depth_step: f32,
}

impl MotionParams {
    pub fn from_config(config: &ArenaConfig) -> Self {
        Self {
            arrival_threshold:    config.arrival_threshold,
            move_rate:            config.move_rate,
            gaze_rate:            config.gaze_rate,
            poi_standoff:         config.poi_standoff,
            follow_offset:        config.follow_offset,
            formation_lateral:    config.formation_lateral,
            formation_depth:      config.formation_depth,
            formation_depth_step: config.formation_depth_step,
        }
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::from_config(&ArenaConfig::default())
    }
}
