//! Autonomous target selection with group affinity.

use tracing::trace;

use arena_core::{ArenaConfig, PoiId, RandomSource, SimSpeed};
use arena_scene::Scene;

/// When and where a free agent wanders next.
///
/// Intervals are drawn uniformly from `[min_ms, max_ms)` and divided by the
/// simulation speed.  With probability `affinity` the next POI is another
/// member of the current POI's group; otherwise it is a POI outside that
/// group.
#[derive(Clone, Debug, PartialEq)]
pub struct RetargetPolicy {
    pub min_ms: u64,
    pub max_ms: u64,
    pub affinity: f64,
}

impl RetargetPolicy {
    pub fn from_config(config: &ArenaConfig) -> Self {
        Self {
            min_ms:   config.retarget_min_ms,
            max_ms:   config.retarget_max_ms,
            affinity: config.group_affinity,
        }
    }

    /// Milliseconds until the next retarget at `speed`.
    pub fn next_interval<R: RandomSource>(&self, speed: SimSpeed, rng: &mut R) -> u64 {
        speed.scale_ms(rng.range(self.min_ms as f64, self.max_ms as f64))
    }

    /// Pick the POI to visit after `current`.
    ///
    /// - Grouped `current`, affinity roll succeeds: uniform over the other
    ///   group members, or over every POI if the group has no other member.
    /// - Otherwise: uniform over POIs outside the current group (outside
    ///   `{current}` when ungrouped), or over every POI if that set is empty.
    ///
    /// Returns `None` only for an empty registry.
    pub fn next_target<R: RandomSource>(
        &self,
        current: Option<PoiId>,
        scene:   &Scene,
        rng:     &mut R,
    ) -> Option<PoiId> {
        let all: Vec<PoiId> = scene.registry.ids().collect();
        let group = current.and_then(|poi| scene.groups.group_of(poi));

        let candidates: Vec<PoiId> = match group {
            Some(group) if rng.chance(self.affinity) => group
                .members
                .iter()
                .copied()
                .filter(|&p| Some(p) != current)
                .collect(),
            Some(group) => all
                .iter()
                .copied()
                .filter(|p| !group.members.contains(p))
                .collect(),
            None => all.iter().copied().filter(|&p| Some(p) != current).collect(),
        };

        let pool = if candidates.is_empty() { &all } else { &candidates };
        let next = rng.choose(pool).copied();
        trace!(?current, ?next, pool = pool.len(), "next target");
        next
    }
}
