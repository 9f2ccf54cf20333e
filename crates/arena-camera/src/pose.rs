//! Camera poses, orbit constraints, and per-frame output.

use arena_core::Vec3;

use crate::ViewMode;

// ── CameraPose ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Vertical field of view, degrees.
    pub fov: f32,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3, fov: f32) -> Self {
        Self { position, look_at, fov }
    }
}

// ── OrbitLimits ───────────────────────────────────────────────────────────────

/// Constraints on an orbiting viewer, measured from its look-at target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Angle from straight up, radians.
    pub min_polar: f32,
    pub max_polar: f32,
}

impl OrbitLimits {
    pub const UNCONSTRAINED: OrbitLimits = OrbitLimits {
        min_distance: 0.0,
        max_distance: f32::INFINITY,
        min_polar:    0.0,
        max_polar:    std::f32::consts::PI,
    };

    /// Move `position` onto the nearest point satisfying the limits around
    /// `target`, keeping its azimuth.  Positions already within the limits,
    /// or on the target itself, are returned unchanged.
    pub fn clamp(&self, position: Vec3, target: Vec3) -> Vec3 {
        let offset = position - target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return position;
        }
        let polar   = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let clamped_radius = radius.clamp(self.min_distance, self.max_distance);
        let clamped_polar  = polar.clamp(self.min_polar, self.max_polar);
        if clamped_radius == radius && clamped_polar == polar {
            return position;
        }
        let (radius, polar) = (clamped_radius, clamped_polar);

        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        target + Vec3::new(radius * sin_p * sin_a, radius * cos_p, radius * sin_p * cos_a)
    }
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self::UNCONSTRAINED
    }
}

// ── Frame output ──────────────────────────────────────────────────────────────

/// A pixel rectangle, origin bottom-left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// The primary camera fills the viewport.
    Single(Viewport),
    /// Primary camera left, secondary camera right.
    SideBySide { left: Viewport, right: Viewport },
}

impl Layout {
    /// Split `width × height` into a left half of `floor(width / 2)` pixels
    /// and a right half of the same width, starting at that offset.
    pub fn side_by_side(width: u32, height: u32) -> Self {
        let half = width / 2;
        Layout::SideBySide {
            left:  Viewport { x: 0, y: 0, width: half, height },
            right: Viewport { x: half, y: 0, width: half, height },
        }
    }

    pub fn single(width: u32, height: u32) -> Self {
        Layout::Single(Viewport { x: 0, y: 0, width, height })
    }
}

/// What to render this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraFrame {
    pub mode: ViewMode,
    pub primary: CameraPose,
    pub secondary: Option<CameraPose>,
    pub layout: Layout,
}
