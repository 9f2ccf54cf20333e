//! Vector helpers over [`glam::Vec3`].
//!
//! World coordinates are single-precision, matching what renderers consume.

pub use glam::Vec3;

/// Move `current` toward `target` by `factor` of the remaining distance.
///
/// `factor` is clamped to `[0, 1]` so a long frame never overshoots the
/// target.
#[inline]
pub fn approach(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current.lerp(target, factor.clamp(0.0, 1.0))
}

/// Arithmetic mean of `points`.  Returns `Vec3::ZERO` for an empty input.
pub fn centroid<I>(points: I) -> Vec3
where
    I: IntoIterator<Item = Vec3>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vec3::ZERO, 0usize), |(sum, n), p| (sum + p, n + 1));
    sum / count.max(1) as f32
}

/// Build a `Vec3` from an `[x, y, z]` triple.
#[inline]
pub fn vec3(xyz: [f32; 3]) -> Vec3 {
    Vec3::from_array(xyz)
}
