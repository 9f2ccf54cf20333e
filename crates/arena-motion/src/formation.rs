//! V-formation behind the primary viewer.
//!
//! Rank 0 stands left of the viewer's line of sight, rank 1 right, rank 2
//! further left, and so on.  Each rank pair steps one `formation_lateral`
//! further out and one `formation_depth_step` further back:
//!
//! ```text
//!            target
//!              ▲
//!              │
//!            viewer
//!        0           1          depth = base
//!    2                   3      depth = base + step
//! ```
//!
//! Slots share the viewer's height.

use arena_core::Vec3;

use crate::MotionParams;

/// Pose of the viewer the formation is laid out behind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormationAnchor {
    pub eye: Vec3,
    pub target: Vec3,
}

impl FormationAnchor {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// World position of formation slot `rank`.
    ///
    /// A viewer looking straight up or down has no horizontal facing; the
    /// lateral axis then collapses and slots line up behind the eye.
    pub fn slot(&self, rank: usize, params: &MotionParams) -> Vec3 {
        let facing  = (self.target - self.eye).normalize_or_zero();
        let lateral = facing.cross(Vec3::Y).normalize_or_zero();

        let pair = (rank / 2) as f32;
        let side = if rank % 2 == 0 { -1.0 } else { 1.0 };
        let offset_lateral = side * (pair + 1.0) * params.formation_lateral;
        let offset_depth   = -params.formation_depth - pair * params.formation_depth_step;

        let mut p = self.eye + facing * offset_depth + lateral * offset_lateral;
        p.y = self.eye.y;
        p
    }
}
