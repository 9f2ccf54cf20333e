//! Dwell aggregation for heatmap rendering.

use std::collections::BTreeMap;

use arena_agent::Agent;
use arena_core::{PoiId, Vec3};
use arena_scene::PoiRegistry;

/// Total inspection seconds per POI across `agents`.  POIs nobody inspected
/// are absent.
pub fn aggregate_dwell(agents: &[Agent]) -> BTreeMap<PoiId, f32> {
    let mut totals = BTreeMap::new();
    for agent in agents {
        for (&poi, &secs) in &agent.dwell {
            *totals.entry(poi).or_insert(0.0) += secs;
        }
    }
    totals
}

/// One renderable heat sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeatCell {
    pub poi: PoiId,
    pub position: Vec3,
    pub seconds: f32,
    /// `seconds / max(all totals)`, in `[0, 1]`.
    pub intensity: f32,
}

/// Heat cells for every registered POI whose total dwell reaches
/// `threshold_secs`, in registry order.
pub fn heat_cells(agents: &[Agent], registry: &PoiRegistry, threshold_secs: f32) -> Vec<HeatCell> {
    let totals = aggregate_dwell(agents);
    let max = totals.values().copied().fold(0.0_f32, f32::max);
    let denom = if max > 0.0 { max } else { 1.0 };

    registry
        .iter()
        .filter_map(|poi| {
            let seconds = totals.get(&poi.id).copied().unwrap_or(0.0);
            (seconds >= threshold_secs).then(|| HeatCell {
                poi: poi.id,
                position: poi.position,
                seconds,
                intensity: (seconds / denom).min(1.0),
            })
        })
        .collect()
}
