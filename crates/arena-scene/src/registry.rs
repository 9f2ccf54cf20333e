//! The POI registry: fixed inspectable locations on the reviewed object.

use rustc_hash::FxHashMap;

use arena_core::{PoiId, Vec3};

/// A point of interest.  Immutable for the lifetime of a session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    pub id: PoiId,
    /// Stable external key, e.g. `"osc-1-knob"`.
    pub key: String,
    pub position: Vec3,
    pub description: String,
}

/// Read-only mapping from [`PoiId`] (and external key) to [`Poi`].
///
/// `PoiId(n)` is the index of the n-th registered POI.  Do not construct
/// directly; use [`SceneBuilder`][crate::SceneBuilder].
#[derive(Clone, Debug, Default)]
pub struct PoiRegistry {
    pois:   Vec<Poi>,
    by_key: FxHashMap<String, PoiId>,
}

impl PoiRegistry {
    pub(crate) fn push(&mut self, poi: Poi) {
        self.by_key.insert(poi.key.clone(), poi.id);
        self.pois.push(poi);
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    #[inline]
    pub fn get(&self, id: PoiId) -> Option<&Poi> {
        self.pois.get(id.index())
    }

    /// World position of `id`, or `None` for an id outside the registry.
    #[inline]
    pub fn position(&self, id: PoiId) -> Option<Vec3> {
        self.get(id).map(|p| p.position)
    }

    /// Resolve an external key such as `"filter-env"`.
    pub fn lookup(&self, key: &str) -> Option<PoiId> {
        self.by_key.get(key).copied()
    }

    /// External key of `id`, or `"?"` when unknown.
    pub fn key(&self, id: PoiId) -> &str {
        self.get(id).map_or("?", |p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poi> + '_ {
        self.pois.iter()
    }

    /// All ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = PoiId> + '_ {
        self.pois.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}
